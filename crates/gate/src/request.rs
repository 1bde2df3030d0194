use crate::decision::{GateDecision, decide};

/// Read access to the parts of a request the gate cares about.
pub trait GateRequest {
    fn path(&self) -> &str;
    fn cookie(&self, name: &str) -> Option<&str>;
}

/// Only presence matters here. An empty value still counts as a token and
/// the value itself is never inspected.
pub fn evaluate<R: GateRequest + ?Sized>(request: &R, cookie_name: &str) -> GateDecision {
    let has_access_token = request.cookie(cookie_name).is_some();
    decide(request.path(), has_access_token)
}
