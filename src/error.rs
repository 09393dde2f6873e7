use std::fmt;

/// Startup-time configuration error
///
/// Every variant is fatal at the point it is detected: these are defects in
/// the declarative configuration, not transient runtime conditions, so there
/// is no retry policy and no degraded mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Server index outside `[1, servers.len()]`
    ///
    /// Servers are addressed by 1-based ordinal position. Position 0 and any
    /// position past the end of the `servers` list are configuration errors.
    OutOfRange {
        /// The requested 1-based index
        index: usize,
        /// Number of configured servers
        count: usize,
    },
    /// A documentation UI URL failed to parse
    ///
    /// Raised for `ui.external` or `ui.url` values that are not valid
    /// absolute URLs. The process refuses to start rather than serve a
    /// broken documentation link.
    MalformedUrl {
        /// Configuration field the value came from (e.g. `ui.external`)
        field: &'static str,
        /// The offending value
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange { index, count } => {
                write!(
                    f,
                    "server index {} out of range: configuration defines {} server(s), \
                    valid indices are 1..={}",
                    index, count, count
                )
            }
            ConfigError::MalformedUrl { field, value } => {
                write!(
                    f,
                    "malformed URL in {}: '{}'. Expected an absolute URL \
                    (e.g. https://petstore.swagger.io)",
                    field, value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = ConfigError::OutOfRange { index: 3, count: 2 };
        let msg = err.to_string();
        assert!(msg.contains("index 3"));
        assert!(msg.contains("1..=2"));
    }

    #[test]
    fn test_display_malformed_url() {
        let err = ConfigError::MalformedUrl {
            field: "ui.external",
            value: "not a url".into(),
        };
        assert!(err.to_string().contains("ui.external"));
    }
}
