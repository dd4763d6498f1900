//! Request handlers.
//!
//! A [`Handler`] receives a request together with a response to fill in.
//! Handlers compose by wrapping one another: [`MapHandler`] answers the paths
//! it knows with a redirect and hands everything else to its fallback.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode, header},
    middleware,
    response::Response,
};
use std::{borrow::Cow, collections::HashMap, fmt, sync::Arc};
use tracing::debug;

use crate::middleware::log_requests;
use crate::redirect::redirect_to;
use crate::state::AppState;

/// Lookup table from exact request path to redirect target.
pub type PathMapping = HashMap<String, String>;

/// Something that processes a request by writing to a response.
///
/// The response starts out as an empty `200 OK`.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Request<Body>, res: &mut Response<Body>);
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, req: &Request<Body>, res: &mut Response<Body>) {
        (**self).handle(req, res)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, req: &Request<Body>, res: &mut Response<Body>) {
        (**self).handle(req, res)
    }
}

/// Handler backed by a closure, see [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerFn").finish_non_exhaustive()
    }
}

/// Wraps a closure as a [`Handler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request<Body>, &mut Response<Body>) + Send + Sync,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request<Body>, &mut Response<Body>) + Send + Sync,
{
    fn handle(&self, req: &Request<Body>, res: &mut Response<Body>) {
        (self.0)(req, res)
    }
}

/// Redirects mapped paths, delegates the rest to a fallback handler.
#[derive(Debug, Clone)]
pub struct MapHandler<F> {
    paths: PathMapping,
    fallback: F,
}

/// Builds a handler redirecting each path in `paths` to its URL.
///
/// Paths are matched against the percent-decoded request URI path, with no
/// trailing-slash or case folding, and the query string is ignored. Requests
/// for any other path go to `fallback` untouched.
pub fn map_handler<F: Handler>(paths: PathMapping, fallback: F) -> MapHandler<F> {
    MapHandler { paths, fallback }
}

impl<F> MapHandler<F> {
    /// The redirect table this handler serves.
    pub fn paths(&self) -> &PathMapping {
        &self.paths
    }
}

impl<F: Handler> Handler for MapHandler<F> {
    fn handle(&self, req: &Request<Body>, res: &mut Response<Body>) {
        let raw = req.uri().path();
        // Paths that do not decode to UTF-8 are looked up as sent.
        let path = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
        match self.paths.get(&*path) {
            Some(url) => {
                debug!(path = &*path, url = url.as_str(), "redirect");
                redirect_to(res, url);
            }
            None => {
                debug!(path = &*path, "no redirect, using fallback");
                self.fallback.handle(req, res);
            }
        }
    }
}

/// Fallback answering every request with a plain-text greeting.
pub fn hello(_req: &Request<Body>, res: &mut Response<Body>) {
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    *res.body_mut() = Body::from("Hello, world!");
}

/// Fallback answering every request with `404 Not Found`.
pub fn not_found(_req: &Request<Body>, res: &mut Response<Body>) {
    *res.status_mut() = StatusCode::NOT_FOUND;
}

/// Runs the composed handler for an incoming axum request.
pub async fn dispatch(State(state): State<Arc<AppState>>, req: Request<Body>) -> Response {
    let mut res = Response::new(Body::empty());
    state.handler.handle(&req, &mut res);
    res
}

/// Routes every request through [`dispatch`] behind the logging middleware.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
