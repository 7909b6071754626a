use memoria_core::Screen;

use crate::cli_args::*;
use crate::modules::auth::handle_logout;
use crate::modules::system::{render_screen, CliConfig};

pub(crate) fn handle_command(command: Command, config: &mut CliConfig) -> anyhow::Result<()> {
    match command {
        Command::Home => render_screen(Screen::Home, config),
        Command::Whoami => {
            let Some(stored) = config.identity.as_ref() else {
                anyhow::bail!("not signed in; run `memoria login`");
            };
            println!("{}", serde_json::to_string_pretty(stored)?);
        }
        Command::Logout => handle_logout(config)?,
        Command::Config(_) | Command::Login(_) | Command::Register(_) | Command::Auth(_) => {
            unreachable!()
        }
    }

    Ok(())
}
