use tracing::{info, warn};

use memoria_core::{
    Alert, AlertPresenter, AuthError, AuthMode, AuthScreen, Identity, IdentityContext,
    RemoteError,
};

use super::http::HttpTransport;
use super::prompt::{FormInput, TerminalInput};
use crate::cli_args::{AuthArgs, LoginArgs, RegisterArgs};
use crate::modules::system::{
    ensure_secure_addr, render_form, render_screen, resolve_addr, CliConfig, IdentityStore,
    TerminalAlerts, TerminalNavigator,
};
use crate::prompt_password;

pub(crate) async fn handle_login_command(
    args: LoginArgs,
    addr_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let mode = if args.register {
        AuthMode::Register
    } else {
        AuthMode::Login
    };
    match args.username {
        Some(username) => {
            submit_once(
                mode,
                username,
                args.password,
                addr_arg,
                allow_insecure,
                client,
                config,
            )
            .await
        }
        None => {
            run_interactive(
                mode,
                args.password,
                addr_arg,
                allow_insecure,
                client,
                config,
                &mut TerminalInput,
            )
            .await
        }
    }
}

pub(crate) async fn handle_register_command(
    args: RegisterArgs,
    addr_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    handle_login_command(
        LoginArgs {
            username: args.username,
            password: args.password,
            register: true,
        },
        addr_arg,
        allow_insecure,
        client,
        config,
    )
    .await
}

pub(crate) async fn handle_auth_command(
    args: AuthArgs,
    addr_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let mode = if args.register {
        AuthMode::Register
    } else {
        AuthMode::Login
    };
    run_interactive(
        mode,
        None,
        addr_arg,
        allow_insecure,
        client,
        config,
        &mut TerminalInput,
    )
    .await
}

pub(crate) fn handle_logout(config: &mut CliConfig) -> anyhow::Result<()> {
    let server = config
        .identity
        .as_ref()
        .map(|stored| stored.server.clone())
        .unwrap_or_default();
    let mut store = IdentityStore::new(config, &server);
    let Some(identity) = store.current().cloned() else {
        println!("Not signed in");
        return Ok(());
    };
    store.clear();
    info!(user_id = %identity.id, "cleared stored identity");
    println!("Logged out {}", identity.username);
    Ok(())
}

async fn submit_once(
    mode: AuthMode,
    username: String,
    password: Option<String>,
    addr_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let addr = resolve_addr(addr_arg, config);
    ensure_secure_addr(&addr, allow_insecure)?;
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password: ")?.unwrap_or_default(),
    };

    let transport = HttpTransport::new(client.clone(), &addr);
    let mut navigator = TerminalNavigator::default();
    let mut alerts = TerminalAlerts;
    let result = {
        let mut identity = IdentityStore::new(config, &addr);
        let mut screen =
            AuthScreen::new(&transport, &mut identity, &mut navigator, &mut alerts).with_mode(mode);
        screen.form_mut().set_username(username);
        screen.form_mut().set_password(password);
        submit_until_interrupted(&mut screen).await
    };

    match result {
        Ok(_) => {
            if let Some(screen) = navigator.take() {
                render_screen(screen, config);
            }
            Ok(())
        }
        Err(err) => {
            if matches!(err, AuthError::Remote(RemoteError::Cancelled)) {
                alerts.alert(&Alert::error(err.user_message()));
            }
            anyhow::bail!("{mode} failed")
        }
    }
}

/// Opens the form. A password given up front is prefilled, so the user
/// can accept it with an empty answer.
pub(crate) async fn run_interactive(
    mode: AuthMode,
    password: Option<String>,
    addr_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
    input: &mut dyn FormInput,
) -> anyhow::Result<()> {
    let addr = resolve_addr(addr_arg, config);
    ensure_secure_addr(&addr, allow_insecure)?;

    let transport = HttpTransport::new(client.clone(), &addr);
    let mut navigator = TerminalNavigator::default();
    let mut alerts = TerminalAlerts;
    let outcome = {
        let mut identity = IdentityStore::new(config, &addr);
        let mut screen =
            AuthScreen::new(&transport, &mut identity, &mut navigator, &mut alerts).with_mode(mode);
        if let Some(password) = password {
            screen.form_mut().set_password(password);
        }
        run_auth_form(&mut screen, input).await?
    };

    match outcome {
        FormOutcome::SignedIn(identity) => {
            info!(user_id = %identity.id, "signed in from form");
            if let Some(screen) = navigator.take() {
                render_screen(screen, config);
            }
        }
        FormOutcome::Cancelled => {
            alerts.alert(&Alert::error(RemoteError::Cancelled.user_message()));
        }
        FormOutcome::Closed => {}
    }
    Ok(())
}

#[derive(Debug)]
pub(crate) enum FormOutcome {
    SignedIn(Identity),
    /// Ctrl-C while a request was in flight.
    Cancelled,
    /// The user quit or input ended.
    Closed,
}

/// Drives the form until a submission succeeds or the user leaves. Typed
/// values survive failed attempts; an empty answer keeps the current value.
pub(crate) async fn run_auth_form(
    screen: &mut AuthScreen<'_>,
    input: &mut dyn FormInput,
) -> anyhow::Result<FormOutcome> {
    loop {
        let view = screen.view();
        print!("{}", render_form(&view));

        let username_prompt = if screen.form().username().is_empty() {
            "Username: ".to_string()
        } else {
            format!("Username [{}]: ", screen.form().username())
        };
        let Some(username) = input.read_line(&username_prompt)? else {
            return Ok(FormOutcome::Closed);
        };
        if !username.is_empty() {
            screen.form_mut().set_username(username);
        }

        let Some(password) = input.read_secret("Password: ")? else {
            return Ok(FormOutcome::Closed);
        };
        if !password.is_empty() {
            screen.form_mut().set_password(password);
        }

        let menu = format!(
            "[Enter] {}  [t] {}  [q] Quit: ",
            view.button, view.switch_prompt
        );
        let Some(choice) = input.read_line(&menu)? else {
            return Ok(FormOutcome::Closed);
        };
        match choice.trim() {
            "" => match submit_until_interrupted(screen).await {
                Ok(identity) => return Ok(FormOutcome::SignedIn(identity)),
                Err(AuthError::Remote(RemoteError::Cancelled)) => {
                    return Ok(FormOutcome::Cancelled)
                }
                Err(_) => {}
            },
            "t" | "T" => {
                screen.toggle_mode();
            }
            "q" | "Q" => return Ok(FormOutcome::Closed),
            other => eprintln!("Unknown choice: {other}"),
        }
    }
}

/// Races the submission against Ctrl-C. Losing the race drops the submit
/// future, which drops the transport's request handle and aborts the request.
async fn submit_until_interrupted(screen: &mut AuthScreen<'_>) -> Result<Identity, AuthError> {
    let mode = screen.mode();
    tokio::select! {
        result = screen.submit() => result,
        _ = tokio::signal::ctrl_c() => {
            warn!(mode = %mode, "submission interrupted; request aborted");
            Err(RemoteError::Cancelled.into())
        }
    }
}
