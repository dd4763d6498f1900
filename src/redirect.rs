//! Permanent redirect responses.

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use tracing::warn;

/// Turns `res` into a `301 Moved Permanently` pointing at `url`.
///
/// The URL is passed through verbatim, except that control characters such
/// as `\r` and `\n`, which cannot appear in a header value, become spaces.
pub fn redirect_to(res: &mut Response<Body>, url: &str) {
    let sanitized: String = url
        .chars()
        .map(|c| if c.is_ascii_control() && c != '\t' { ' ' } else { c })
        .collect();
    match HeaderValue::from_bytes(sanitized.as_bytes()) {
        Ok(location) => {
            res.headers_mut().insert(header::LOCATION, location);
        }
        Err(_) => warn!(url, "redirect target is not a valid header value"),
    }
    *res.status_mut() = StatusCode::MOVED_PERMANENTLY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_status_and_location() {
        let mut res = Response::new(Body::empty());
        redirect_to(&mut res, "https://github.com");

        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://github.com");
    }

    #[test]
    fn test_passes_url_through_verbatim() {
        let mut res = Response::new(Body::empty());
        redirect_to(&mut res, "not a url/../?x=1");
        assert_eq!(res.headers()[header::LOCATION], "not a url/../?x=1");

        let mut res = Response::new(Body::empty());
        redirect_to(&mut res, "");
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "");
    }

    #[test]
    fn test_replaces_existing_location() {
        let mut res = Response::new(Body::empty());
        res.headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static("/old"));
        redirect_to(&mut res, "/new");

        assert_eq!(res.headers().get_all(header::LOCATION).iter().count(), 1);
        assert_eq!(res.headers()[header::LOCATION], "/new");
    }

    #[test]
    fn test_control_characters_become_spaces() {
        let mut res = Response::new(Body::empty());
        redirect_to(&mut res, "http://x\r\nSet-Cookie: a=b");

        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "http://x  Set-Cookie: a=b");
    }

    #[test]
    fn test_non_ascii_url_is_kept() {
        let mut res = Response::new(Body::empty());
        redirect_to(&mut res, "https://café.example/ü");

        assert_eq!(
            res.headers()[header::LOCATION].as_bytes(),
            "https://café.example/ü".as_bytes()
        );
    }
}
