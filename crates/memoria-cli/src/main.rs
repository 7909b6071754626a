use clap::Parser;
use std::io::{self, IsTerminal, Write};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{
    handle_auth_command, handle_login_command, handle_register_command,
};
use crate::modules::system::{handle_config_command, load_config, save_config};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ADDR: &str = "https://127.0.0.1:8080";
pub(crate) const SERVER_URL_ENV: &str = "MEMORIA_SERVER_URL";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let mut config = load_config()?;
    let addr_arg = cli.addr.clone();

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        Command::Login(args) => {
            handle_login_command(args, addr_arg, cli.insecure, &client, &mut config).await?;
            save_config(&config)?;
        }
        Command::Register(args) => {
            handle_register_command(args, addr_arg, cli.insecure, &client, &mut config).await?;
            save_config(&config)?;
        }
        Command::Auth(args) => {
            handle_auth_command(args, addr_arg, cli.insecure, &client, &mut config).await?;
            save_config(&config)?;
        }
        command => {
            handle_command(command, &mut config)?;
            save_config(&config)?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Reads one line without its terminator. `None` on end of input.
pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<Option<String>> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<Option<String>> {
    if !io::stdin().is_terminal() {
        return prompt_line(prompt);
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    Ok(Some(password))
}
