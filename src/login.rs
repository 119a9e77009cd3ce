//! Login form submit handling.
//!
//! [`LoginFormController`] reads the form, hands the credentials to an
//! [`AuthService`], and on success writes the `user_access_token` cookie and
//! navigates to the landing route. Rejections only touch the error message
//! element; transport failures touch nothing and are returned to the caller.

use crate::types::{Credentials, LoginResult};
use crate::view::{ErrorMessage, LoginForm};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const TOKEN_COOKIE: &str = "user_access_token";
pub const COOKIE_PATH: &str = "/";
pub const DEFAULT_LANDING_ROUTE: &str = "todo/todo.html";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Failures of the login request itself. A well-formed answer without a
/// token is not an error, see [`SubmitOutcome::Rejected`].
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Login request failed: {0}")]
    Transport(String),

    #[error("Login response was not valid JSON: {0}")]
    Decode(String),
}

/// Decodes a login response body. Any JSON value except `null` is a result;
/// whether it carries a token is decided by [`LoginResult::token`].
pub fn decode_login_body(body: &str) -> Result<LoginResult, LoginError> {
    let value = serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
    LoginResult::new(value).ok_or_else(|| LoginError::Decode("response body is null".to_string()))
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sends the credentials and returns the decoded JSON body, whatever the
    /// HTTP status was.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, LoginError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: path.into(),
        }
    }
}

pub trait CookieStore {
    fn set(&mut self, cookie: Cookie);
}

pub trait Router {
    fn navigate(&mut self, route: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoggedIn { route: String },
    Rejected,
}

pub struct LoginFormController<A, C, R> {
    auth: A,
    cookies: C,
    router: R,
    form: LoginForm,
    error_message: ErrorMessage,
    landing_route: String,
}

impl<A, C, R> LoginFormController<A, C, R>
where
    A: AuthService,
    C: CookieStore,
    R: Router,
{
    pub fn new(auth: A, cookies: C, router: R, form: LoginForm, error_message: ErrorMessage) -> Self {
        Self {
            auth,
            cookies,
            router,
            form,
            error_message,
            landing_route: DEFAULT_LANDING_ROUTE.to_string(),
        }
    }

    pub fn with_landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    pub fn error_message(&self) -> &ErrorMessage {
        &self.error_message
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_cookies(self) -> C {
        self.cookies
    }

    /// Handles one form submission. Takes `&mut self`, so a second submit
    /// cannot start while this one is waiting on the server.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, LoginError> {
        let credentials = Credentials::new(self.form.username.as_str(), self.form.password.as_str());

        let result = match self.auth.login(&credentials).await {
            Ok(result) => result,
            Err(e) => {
                o_debug!("login request failed: {}", e);
                return Err(e);
            }
        };

        match result.token() {
            Some(token) => {
                o_debug!("token type: {}", result.token_type().unwrap_or("unknown"));
                self.cookies.set(Cookie::new(TOKEN_COOKIE, token, COOKIE_PATH));
                self.router.navigate(&self.landing_route);
                Ok(SubmitOutcome::LoggedIn {
                    route: self.landing_route.clone(),
                })
            }
            None => {
                o_debug!("login rejected: {}", result.body());
                self.error_message.set_text(INVALID_CREDENTIALS);
                Ok(SubmitOutcome::Rejected)
            }
        }
    }
}
