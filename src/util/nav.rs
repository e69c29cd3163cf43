//! Full-document navigation requests.
//!
//! Both pages leave by loading the destination from the server rather than
//! routing client-side, matching a logout/post-signup flow where the next
//! page should start from a fresh document. SSR paths safely no-op.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Entry route of the application; logout and signup success both land here.
pub const ROOT_PATH: &str = "/";

/// Request a full-document navigation to `path`.
///
/// Fire-and-forget: failures are ignored and non-browser builds no-op.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
