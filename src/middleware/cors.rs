use http::Method;

/// Cross-origin access policy for documentation endpoints
///
/// Installed by the publisher in external-UI mode so a hosted documentation
/// viewer on another origin can fetch the descriptor JSON. Credentials are
/// always disallowed; the policy only ever opens read/write access for the
/// configured documentation host.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allowed_headers: Vec<String>,
    allowed_methods: Vec<Method>,
    allow_credentials: bool,
}

impl CorsPolicy {
    pub fn new(
        allowed_origins: Vec<String>,
        allowed_headers: Vec<String>,
        allowed_methods: Vec<Method>,
    ) -> Self {
        Self {
            allowed_origins,
            allowed_headers,
            allowed_methods,
            allow_credentials: false,
        }
    }

    /// Policy restricting allowed origins to one documentation host.
    ///
    /// Headers are limited to `Content-Type` and `Accept`; methods to
    /// `GET, POST, PUT, DELETE, BATCH`.
    pub fn scoped_to_host(host: &str) -> Self {
        // BATCH is a nonstandard verb some API gateways use for bundled calls
        let batch = Method::from_bytes(b"BATCH").expect("valid method token");
        Self::new(
            vec![host.to_string()],
            vec!["Content-Type".into(), "Accept".into()],
            vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                batch,
            ],
        )
    }

    /// Whether the request is a CORS preflight that should be answered
    /// without invoking any handler.
    pub fn is_preflight(&self, method: &Method) -> bool {
        *method == Method::OPTIONS
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Response header lines implementing the policy.
    pub fn header_lines(&self) -> Vec<String> {
        let origins = self.allowed_origins.join(", ");
        let headers = self.allowed_headers.join(", ");
        let methods = self
            .allowed_methods
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            format!("Access-Control-Allow-Origin: {origins}"),
            format!("Access-Control-Allow-Headers: {headers}"),
            format!("Access-Control-Allow-Methods: {methods}"),
            format!("Access-Control-Allow-Credentials: {}", self.allow_credentials),
        ]
    }
}
