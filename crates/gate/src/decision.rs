pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// What the host should do with a request after the gate has looked at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    RedirectHome,
    RedirectLogin,
    Continue,
}

impl GateDecision {
    /// Location to redirect to, or `None` when the request goes through.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GateDecision::RedirectHome => Some(HOME_PATH),
            GateDecision::RedirectLogin => Some(LOGIN_PATH),
            GateDecision::Continue => None,
        }
    }
}

/// `path` must already be normalized (no query string).
pub fn decide(path: &str, has_access_token: bool) -> GateDecision {
    let on_login = path == LOGIN_PATH;

    match (on_login, has_access_token) {
        (true, true) => GateDecision::RedirectHome,
        (false, false) => GateDecision::RedirectLogin,
        _ => GateDecision::Continue,
    }
}
