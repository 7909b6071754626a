pub(crate) mod args;
pub(crate) mod config;
mod screens;
pub(crate) mod types;

pub(crate) use config::{
    ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config,
};
pub(crate) use screens::{render_form, render_screen, TerminalAlerts, TerminalNavigator};
#[cfg(test)]
pub(crate) use types::StoredIdentity;
pub(crate) use types::{CliConfig, IdentityStore};
