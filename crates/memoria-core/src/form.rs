use std::fmt;

use zeroize::Zeroize;

use crate::api::CredentialsRequest;
use crate::constants::{
    messages, LOGIN_PATH, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, REGISTER_PATH,
};
use crate::error::ValidationError;

/// Selects between signing in and creating an account within one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Account",
        }
    }

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Create Account",
        }
    }

    pub const fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Create one",
            Self::Register => "Already have an account? Login",
        }
    }

    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Logged in!",
            Self::Register => "Account created!",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Text shown by the form for its current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
    pub switch_prompt: &'static str,
}

impl From<AuthMode> for FormView {
    fn from(mode: AuthMode) -> Self {
        Self {
            title: mode.title(),
            subtitle: messages::SUBTITLE,
            button: mode.button_label(),
            switch_prompt: mode.switch_prompt(),
        }
    }
}

/// A username/password pair that passed the validation gate.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn as_request(&self) -> CredentialsRequest<'_> {
        CredentialsRequest {
            username: &self.username,
            password: &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.username.zeroize();
        self.password.zeroize();
    }
}

/// View-local form state. Values are kept as typed; no trimming or case
/// folding happens before validation.
#[derive(Default)]
pub struct CredentialForm {
    username: String,
    password: String,
    mode: AuthMode,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn view(&self) -> FormView {
        FormView::from(self.mode)
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username.zeroize();
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.zeroize();
        self.password = value.into();
    }

    pub fn toggle_mode(&mut self) -> AuthMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Lengths are counted in chars, not bytes.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let username_len = self.username.chars().count();
        if username_len < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort {
                min: MIN_USERNAME_LEN,
                actual: username_len,
            });
        }
        let password_len = self.password.chars().count();
        if password_len < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
                actual: password_len,
            });
        }
        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("mode", &self.mode)
            .finish()
    }
}

impl Drop for CredentialForm {
    fn drop(&mut self) {
        self.username.zeroize();
        self.password.zeroize();
    }
}
