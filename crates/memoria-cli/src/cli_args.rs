use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "memoria")]
#[command(about = "Memoria account CLI")]
pub struct Cli {
    #[arg(long, env = "MEMORIA_ADDR", help = "Server base URL")]
    pub addr: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Sign in (interactive form when --username is omitted)")]
    Login(LoginArgs),
    #[command(about = "Create an account")]
    Register(RegisterArgs),
    #[command(about = "Open the interactive sign-in form")]
    Auth(AuthArgs),
    #[command(about = "Show the home screen for the signed-in user")]
    Home,
    #[command(about = "Print the stored identity as JSON")]
    Whoami,
    #[command(about = "Forget the stored identity")]
    Logout,
    Config(ConfigArgs),
}
