//! Redirect rule that keeps anonymous visitors on the login page and
//! signed-in visitors off it.
//!
//! Nothing in here knows about HTTP frameworks. The host reads the request
//! through [`GateRequest`] and acts on the returned [`GateDecision`].

pub mod decision;
pub mod matcher;
pub mod request;

pub use decision::{GateDecision, HOME_PATH, LOGIN_PATH, decide};
pub use matcher::{DEFAULT_EXCLUDED_PREFIXES, MatcherError, PathMatcher};
pub use request::{GateRequest, evaluate};

pub const DEFAULT_ACCESS_TOKEN_COOKIE: &str = "access_token";
