use super::response::{header_line, write_bytes, write_json, write_no_content, write_redirect};
use crate::registry::{HandlerRequest, RouteRegistry};
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::collections::HashMap;
use std::io;
use std::io::Read;

/// HTTP service backing one published server
///
/// Serves, in order of precedence: CORS preflight responses, registered
/// fixed-path redirects, registered JSON documents (the descriptor), the
/// mounted UI bundle, and finally the business routes from the registry.
#[derive(Clone)]
pub struct DocService {
    registry: RouteRegistry,
    descriptor_path: String,
}

impl DocService {
    pub fn new(registry: RouteRegistry, descriptor_path: String) -> Self {
        Self {
            registry,
            descriptor_path,
        }
    }

    fn apply_cors(&self, res: &mut Response) {
        if let Some(cors) = self.registry.cors() {
            for line in cors.header_lines() {
                header_line(res, line);
            }
        }
    }
}

impl HttpService for DocService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let method_str = req.method().to_string();
        let raw_path = req.path().to_string();
        let path = raw_path.split('?').next().unwrap_or("/").to_string();

        let method: Method = match method_str.parse() {
            Ok(m) => m,
            Err(_) => {
                write_json(res, 400, &json!({ "error": "Bad Request" }));
                return Ok(());
            }
        };

        tracing::debug!(method = %method, path = %path, "request");

        // Preflight requests are answered by the policy, no handler runs
        if let Some(cors) = self.registry.cors() {
            if cors.is_preflight(&method) {
                write_no_content(res);
                self.apply_cors(res);
                return Ok(());
            }
        }

        if let Some(location) = self.registry.redirect(&path) {
            write_redirect(res, location);
            self.apply_cors(res);
            return Ok(());
        }

        if method == Method::GET {
            if let Some(doc) = self.registry.document(&path) {
                write_json(res, 200, doc);
                self.apply_cors(res);
                return Ok(());
            }

            for (prefix, files) in self.registry.static_mounts() {
                if let Some(rest) = path.strip_prefix(prefix.as_str()) {
                    let rel = rest.trim_start_matches('/');
                    let rel = if rel.is_empty() { "index.html" } else { rel };
                    let ctx = json!({ "descriptor_url": self.descriptor_path });
                    match files.load(rel, Some(&ctx)) {
                        Ok((bytes, ct)) => {
                            write_bytes(res, bytes, ct);
                        }
                        Err(_) => {
                            write_json(res, 404, &json!({ "error": "Not Found", "path": path }));
                        }
                    }
                    self.apply_cors(res);
                    return Ok(());
                }
            }
        }

        let query: HashMap<String, String> = match raw_path.find('?') {
            Some(pos) => url::form_urlencoded::parse(raw_path[pos + 1..].as_bytes())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            None => HashMap::new(),
        };
        let body = {
            let mut body_str = String::new();
            match req.body().read_to_string(&mut body_str) {
                Ok(size) if size > 0 => serde_json::from_str(&body_str).ok(),
                _ => None,
            }
        };

        if let Some(route) = self.registry.find_route(&method, &path) {
            let handler_req = HandlerRequest {
                method: method.clone(),
                path: path.clone(),
                query,
                body,
            };
            let handler_res = (route.handler)(&handler_req);
            write_json(res, handler_res.status, &handler_res.body);
            self.apply_cors(res);
            return Ok(());
        }

        write_json(
            res,
            404,
            &json!({ "error": "Not Found", "method": method_str, "path": path }),
        );
        self.apply_cors(res);
        Ok(())
    }
}
