use tracing::debug;

use memoria_core::{messages, Alert, AlertPresenter, FormView, Navigator, Screen};

use super::types::{CliConfig, StoredIdentity};

/// Records the requested destination; the caller renders it once the auth
/// screen has released the config.
#[derive(Default)]
pub(crate) struct TerminalNavigator {
    requested: Option<Screen>,
}

impl TerminalNavigator {
    pub(crate) fn take(&mut self) -> Option<Screen> {
        self.requested.take()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, screen: Screen) {
        debug!(screen = %screen, "navigation requested");
        self.requested = Some(screen);
    }
}

pub(crate) struct TerminalAlerts;

impl AlertPresenter for TerminalAlerts {
    fn alert(&mut self, alert: &Alert) {
        if alert.title == messages::SUCCESS_TITLE {
            println!("{alert}");
        } else {
            eprintln!("{alert}");
        }
    }
}

pub(crate) fn render_form(view: &FormView) -> String {
    format!("\n{}\n{}\n", view.title, view.subtitle)
}

pub(crate) fn render_home(identity: Option<&StoredIdentity>) -> String {
    match identity {
        Some(stored) => format!(
            "Home\nSigned in as {} (id {})\nServer: {}\nSince: {}",
            stored.identity.username, stored.identity.id, stored.server, stored.signed_in_at
        ),
        None => "Not signed in. Run `memoria login` to sign in.".to_string(),
    }
}

pub(crate) fn render_screen(screen: Screen, config: &CliConfig) {
    match screen {
        Screen::Home => println!("{}", render_home(config.identity.as_ref())),
        Screen::Auth => {}
    }
}
