use std::fmt;

use crate::constants::messages;
use crate::form::AuthMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Home,
}

impl Screen {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => "Auth",
            Self::Home => "Home",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Navigator {
    fn navigate(&mut self, screen: Screen);
}

/// A modal message with a title and a single line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn validation() -> Self {
        Self::new(messages::VALIDATION_TITLE, messages::VALIDATION_MESSAGE)
    }

    pub fn success(mode: AuthMode) -> Self {
        Self::new(messages::SUCCESS_TITLE, mode.success_message())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(messages::ERROR_TITLE, message)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

pub trait AlertPresenter {
    fn alert(&mut self, alert: &Alert);
}
