mod actions;
pub(crate) mod args;
mod http;
mod prompt;

pub(crate) use actions::{
    handle_auth_command, handle_login_command, handle_logout, handle_register_command,
};
#[cfg(test)]
pub(crate) use actions::{run_auth_form, run_interactive, FormOutcome};
#[cfg(test)]
pub(crate) use http::HttpTransport;
#[cfg(test)]
pub(crate) use prompt::ScriptedInput;
