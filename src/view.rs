//! Login page elements.
//!
//! Plain values standing in for the page's nodes. They are built once and
//! handed to the controller and the toggle, so neither looks anything up.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Password,
    Text,
}

/// The login form's two fields.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Container for the message shown after a rejected login.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    text: String,
}

impl ErrorMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordInput {
    pub field_type: InputType,
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self {
            field_type: InputType::Password,
        }
    }
}

impl PasswordInput {
    pub fn is_masked(&self) -> bool {
        self.field_type == InputType::Password
    }
}

/// An icon that is either rendered or carries the `hidden` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub hidden: bool,
}

impl Icon {
    pub fn shown() -> Self {
        Self { hidden: false }
    }

    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// Button that flips password visibility. Counts activations.
#[derive(Debug, Default, Clone)]
pub struct ToggleButton {
    pub clicks: u32,
}
