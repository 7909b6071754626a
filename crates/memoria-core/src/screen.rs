use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::form::{AuthMode, CredentialForm, FormView};
use crate::identity::{Identity, IdentityContext};
use crate::navigation::{Alert, AlertPresenter, Navigator, Screen};
use crate::services::AuthTransport;

/// The sign-in screen: one form parameterized by [`AuthMode`], wired to the
/// collaborators it hands the session off to.
///
/// `submit` borrows the screen mutably for the whole round trip, so at most
/// one request is in flight per screen.
pub struct AuthScreen<'a> {
    form: CredentialForm,
    transport: &'a dyn AuthTransport,
    identity: &'a mut dyn IdentityContext,
    navigator: &'a mut dyn Navigator,
    alerts: &'a mut dyn AlertPresenter,
}

impl<'a> AuthScreen<'a> {
    pub fn new(
        transport: &'a dyn AuthTransport,
        identity: &'a mut dyn IdentityContext,
        navigator: &'a mut dyn Navigator,
        alerts: &'a mut dyn AlertPresenter,
    ) -> Self {
        Self {
            form: CredentialForm::new(),
            transport,
            identity,
            navigator,
            alerts,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AuthMode) -> Self {
        if self.form.mode() != mode {
            self.form.toggle_mode();
        }
        self
    }

    pub fn form(&self) -> &CredentialForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CredentialForm {
        &mut self.form
    }

    pub fn mode(&self) -> AuthMode {
        self.form.mode()
    }

    pub fn toggle_mode(&mut self) -> AuthMode {
        self.form.toggle_mode()
    }

    pub fn view(&self) -> FormView {
        self.form.view()
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.current()
    }

    pub async fn submit(&mut self) -> Result<Identity, AuthError> {
        let credentials = match self.form.validate() {
            Ok(credentials) => credentials,
            Err(err) => {
                debug!(
                    username_len = self.form.username().chars().count(),
                    password_len = self.form.password().chars().count(),
                    "credential validation failed"
                );
                self.alerts.alert(&Alert::validation());
                return Err(err.into());
            }
        };

        let mode = self.form.mode();
        info!(mode = %mode, endpoint = mode.endpoint(), "submitting credentials");
        let response = match self.transport.authenticate(mode, &credentials).await {
            Ok(response) => response,
            Err(err) => {
                warn!(mode = %mode, status = ?err.status(), "authentication failed: {err}");
                self.alerts.alert(&Alert::error(err.user_message()));
                return Err(err.into());
            }
        };

        let identity = response.into_identity();
        info!(mode = %mode, user_id = %identity.id, "authenticated");
        self.identity.set_identity(identity.clone());
        self.alerts.alert(&Alert::success(mode));
        self.navigator.navigate(Screen::Home);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::api::AuthResponse;
    use crate::error::{RemoteError, ValidationError};
    use crate::form::Credentials;
    use crate::identity::SharedIdentity;

    struct ScriptedTransport {
        reply: Result<(String, String), RemoteError>,
        calls: Mutex<Vec<(AuthMode, String)>>,
    }

    impl ScriptedTransport {
        fn ok(id: &str, username: &str) -> Self {
            Self {
                reply: Ok((id.to_string(), username.to_string())),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn err(err: RemoteError) -> Self {
            Self {
                reply: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(AuthMode, String)> {
            self.calls.lock().expect("calls").clone()
        }
    }

    #[async_trait]
    impl AuthTransport for ScriptedTransport {
        async fn authenticate(
            &self,
            mode: AuthMode,
            credentials: &Credentials,
        ) -> Result<AuthResponse, RemoteError> {
            self.calls
                .lock()
                .expect("calls")
                .push((mode, mode.endpoint().to_string()));
            assert!(!credentials.password().is_empty());
            self.reply.clone().map(|(id, username)| AuthResponse { id, username })
        }
    }

    #[derive(Default)]
    struct Recorder {
        screens: Vec<Screen>,
        alerts: Vec<Alert>,
    }

    impl Navigator for Recorder {
        fn navigate(&mut self, screen: Screen) {
            self.screens.push(screen);
        }
    }

    #[derive(Default)]
    struct Alerts(Vec<Alert>);

    impl AlertPresenter for Alerts {
        fn alert(&mut self, alert: &Alert) {
            self.0.push(alert.clone());
        }
    }

    async fn run(
        transport: &ScriptedTransport,
        mode: AuthMode,
        username: &str,
        password: &str,
    ) -> (Result<Identity, AuthError>, SharedIdentity, Recorder) {
        let mut identity = SharedIdentity::new();
        let mut recorder = Recorder::default();
        let mut alerts = Alerts::default();
        let result = {
            let mut screen = AuthScreen::new(transport, &mut identity, &mut recorder, &mut alerts)
                .with_mode(mode);
            screen.form_mut().set_username(username);
            screen.form_mut().set_password(password);
            screen.submit().await
        };
        recorder.alerts = alerts.0;
        (result, identity, recorder)
    }

    #[tokio::test]
    async fn success_sets_identity_and_navigates_home_once() {
        let transport = ScriptedTransport::ok("42", "alice");
        let (result, identity, recorder) = run(&transport, AuthMode::Login, "alice", "pass").await;

        let expected = Identity {
            id: "42".to_string(),
            username: "alice".to_string(),
        };
        assert_eq!(result.expect("login"), expected);
        assert_eq!(identity.current(), Some(&expected));
        assert_eq!(recorder.screens, vec![Screen::Home]);
        assert_eq!(recorder.alerts, vec![Alert::new("Success", "Logged in!")]);
        assert_eq!(
            transport.calls(),
            vec![(AuthMode::Login, "/api/login".to_string())]
        );
    }

    #[tokio::test]
    async fn register_mode_targets_register_endpoint() {
        let transport = ScriptedTransport::ok("7", "bob");
        let (result, _, recorder) = run(&transport, AuthMode::Register, "bob", "hunter2").await;

        assert!(result.is_ok());
        assert_eq!(
            transport.calls(),
            vec![(AuthMode::Register, "/api/register".to_string())]
        );
        assert_eq!(recorder.alerts, vec![Alert::new("Success", "Account created!")]);
    }

    #[tokio::test]
    async fn validation_failure_skips_transport() {
        let transport = ScriptedTransport::ok("42", "alice");
        let (result, identity, recorder) = run(&transport, AuthMode::Login, "al", "pass").await;

        assert_eq!(
            result.expect_err("short username"),
            AuthError::Validation(ValidationError::UsernameTooShort { min: 3, actual: 2 })
        );
        assert!(transport.calls().is_empty());
        assert!(identity.current().is_none());
        assert!(recorder.screens.is_empty());
        assert_eq!(recorder.alerts, vec![Alert::validation()]);
    }

    #[tokio::test]
    async fn rejection_surfaces_server_message() {
        let transport =
            ScriptedTransport::err(RemoteError::rejected(401, Some("bad password".to_string())));
        let (result, identity, recorder) = run(&transport, AuthMode::Login, "alice", "wrong").await;

        assert!(matches!(result, Err(AuthError::Remote(_))));
        assert!(identity.current().is_none());
        assert!(recorder.screens.is_empty());
        assert_eq!(recorder.alerts, vec![Alert::error("bad password")]);
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn network_failure_shows_generic_error() {
        let transport =
            ScriptedTransport::err(RemoteError::Network("connection refused".to_string()));
        let (result, identity, recorder) = run(&transport, AuthMode::Login, "alice", "pass").await;

        assert!(result.is_err());
        assert!(identity.current().is_none());
        assert!(recorder.screens.is_empty());
        assert_eq!(recorder.alerts, vec![Alert::error("Network request failed")]);
    }

    #[tokio::test]
    async fn form_keeps_values_after_failure_and_can_resubmit() {
        let transport = ScriptedTransport::ok("42", "alice");
        let mut identity = SharedIdentity::new();
        let mut recorder = Recorder::default();
        let mut alerts = Alerts::default();
        let mut screen = AuthScreen::new(&transport, &mut identity, &mut recorder, &mut alerts);

        screen.form_mut().set_username("alice");
        screen.form_mut().set_password("abc");
        assert!(screen.submit().await.is_err());
        assert_eq!(screen.form().username(), "alice");
        assert_eq!(screen.form().password(), "abc");

        screen.form_mut().set_password("abcd");
        screen.toggle_mode();
        let identity_out = screen.submit().await.expect("second attempt");
        assert_eq!(identity_out.username, "alice");
        assert_eq!(screen.current_identity(), Some(&identity_out));
        assert_eq!(
            transport.calls(),
            vec![(AuthMode::Register, "/api/register".to_string())]
        );
    }
}
