use serde::Serialize;
use serde_json::Value;

/// Body of `POST /user/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account username
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Pull the access token out of a login response.
///
/// Returns `None` when the field is missing, not a string, or empty.
#[must_use]
pub fn access_token_from(response: &Value) -> Option<&str> {
    response
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

/// Returns true for a login body that carries nothing worth reporting
#[must_use]
pub fn is_empty_response(response: &Value) -> bool {
    match response {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Number(_) => false,
    }
}
