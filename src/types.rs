use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Username/password pair read from the login form. Built fresh on every submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `username=..&password=..`, encoded as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.username)
            .append_pair("password", &self.password)
            .finish()
    }
}

/// Body returned by `/api/users/login`, kept as raw JSON. Any shape is
/// accepted: a 401 answer (`{"detail": ...}`), an array or a bare scalar
/// simply carries no token.
#[derive(Debug, Clone)]
pub struct LoginResult {
    body: Value,
}

impl LoginResult {
    /// Wraps a decoded body. `null` has no fields to read and yields `None`.
    pub fn new(body: Value) -> Option<Self> {
        if body.is_null() {
            return None;
        }
        Some(Self { body })
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// The access token if its value is truthy: a non-empty string, a
    /// non-zero number or `true`. Numbers and booleans are stringified.
    pub fn token(&self) -> Option<String> {
        match self.field("access_token")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => number_token(n),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    pub fn token_type(&self) -> Option<&str> {
        self.field("token_type").and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

fn number_token(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 {
        return None;
    }
    // Integral floats print without the fraction, `1.0` becomes "1".
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some(format!("{}", f as i64))
    } else {
        Some(f.to_string())
    }
}

#[derive(Serialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct UserResponse {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// FastAPI error body.
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_exactly_two_fields() {
        let creds = Credentials::new("alice@example.com", "hunter2");
        assert_eq!(creds.encode(), "username=alice%40example.com&password=hunter2");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let creds = Credentials::new("a b", "p&ss=word+1");
        assert_eq!(creds.encode(), "username=a+b&password=p%26ss%3Dword%2B1");
    }

    #[test]
    fn test_encode_empty_fields() {
        let creds = Credentials::new("", "");
        assert_eq!(creds.encode(), "username=&password=");
    }

    fn result(body: &str) -> Option<LoginResult> {
        LoginResult::new(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_login_result_token() {
        let ok = result(r#"{"access_token":"abc123","token_type":"bearer"}"#).unwrap();
        assert_eq!(ok.token().as_deref(), Some("abc123"));
        assert_eq!(ok.token_type(), Some("bearer"));

        let empty = result(r#"{"access_token":""}"#).unwrap();
        assert_eq!(empty.token(), None);

        let rejected = result(r#"{"detail":"invalid email or password"}"#).unwrap();
        assert_eq!(rejected.token(), None);
        assert_eq!(rejected.field("detail").unwrap(), "invalid email or password");
    }

    #[test]
    fn test_login_result_truthy_values() {
        assert_eq!(result(r#"{"access_token":123}"#).unwrap().token().as_deref(), Some("123"));
        assert_eq!(result(r#"{"access_token":-7}"#).unwrap().token().as_deref(), Some("-7"));
        assert_eq!(result(r#"{"access_token":2.0}"#).unwrap().token().as_deref(), Some("2"));
        assert_eq!(result(r#"{"access_token":1.5}"#).unwrap().token().as_deref(), Some("1.5"));
        assert_eq!(result(r#"{"access_token":true}"#).unwrap().token().as_deref(), Some("true"));

        for falsy in ["0", "0.0", "false", "null", "[]", "{}"] {
            let body = format!(r#"{{"access_token":{}}}"#, falsy);
            assert_eq!(result(&body).unwrap().token(), None, "access_token {}", falsy);
        }
    }

    #[test]
    fn test_login_result_non_object_bodies() {
        for body in ["[]", "[1,2]", r#""oops""#, "42", "true"] {
            assert_eq!(result(body).unwrap().token(), None, "body {}", body);
        }
        assert!(result("null").is_none());
    }

    #[test]
    fn test_error_response_message() {
        let err: ErrorResponse = serde_json::from_str(r#"{"detail":"email exist"}"#).unwrap();
        assert_eq!(err.message(), "email exist");

        let err: ErrorResponse = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert!(err.message().contains("field required"));
    }
}
