use crate::view::{Icon, InputType, PasswordInput, ToggleButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Visible,
}

/// Shows or hides the password field and swaps the show/hide icons.
///
/// The state is read back from the input's type on every click, so the
/// toggle never drifts from what the field actually displays.
#[derive(Debug)]
pub struct PasswordVisibilityToggle {
    input: PasswordInput,
    button: ToggleButton,
    show_icon: Icon,
    hide_icon: Icon,
}

impl Default for PasswordVisibilityToggle {
    fn default() -> Self {
        Self::new(PasswordInput::default(), ToggleButton::default(), Icon::shown(), Icon::hidden())
    }
}

impl PasswordVisibilityToggle {
    pub fn new(input: PasswordInput, button: ToggleButton, show_icon: Icon, hide_icon: Icon) -> Self {
        Self {
            input,
            button,
            show_icon,
            hide_icon,
        }
    }

    pub fn state(&self) -> Visibility {
        if self.input.is_masked() {
            Visibility::Masked
        } else {
            Visibility::Visible
        }
    }

    pub fn click(&mut self) -> Visibility {
        self.button.clicks = self.button.clicks.wrapping_add(1);
        match self.state() {
            Visibility::Masked => {
                self.input.field_type = InputType::Text;
                self.hide_icon.hidden = false;
                self.show_icon.hidden = true;
            }
            Visibility::Visible => {
                self.input.field_type = InputType::Password;
                self.hide_icon.hidden = true;
                self.show_icon.hidden = false;
            }
        }
        self.state()
    }

    pub fn input(&self) -> &PasswordInput {
        &self.input
    }

    pub fn hide_icon(&self) -> &Icon {
        &self.hide_icon
    }

    pub fn clicks(&self) -> u32 {
        self.button.clicks
    }
}
