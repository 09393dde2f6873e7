use may_minihttp::Response;
use serde_json::Value;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// may_minihttp headers are `&'static str` lines; dynamic values are leaked.
/// Only startup-time values (redirect targets, CORS policy) pass through
/// here, so the leak is bounded by configuration size.
pub fn header_line(res: &mut Response, line: String) {
    res.header(Box::leak(line.into_boxed_str()));
}

pub fn write_json(res: &mut Response, status: u16, body: &Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}

pub fn write_redirect(res: &mut Response, location: &str) {
    res.status_code(302, status_reason(302));
    header_line(res, format!("Location: {location}"));
}

pub fn write_no_content(res: &mut Response) {
    res.status_code(204, status_reason(204));
}

pub fn write_bytes(res: &mut Response, bytes: Vec<u8>, content_type: &str) {
    res.status_code(200, status_reason(200));
    header_line(res, format!("Content-Type: {content_type}"));
    res.body_vec(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(302), "Found");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(999), "OK");
    }
}
