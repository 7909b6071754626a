use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Store the default server base URL")]
    SetServer(SetServerArgs),
    #[command(about = "Forget the stored server base URL")]
    UnsetServer,
    #[command(about = "Print the config file contents")]
    Show,
    #[command(about = "Print the config file location")]
    Path,
}

#[derive(Args)]
pub struct SetServerArgs {
    #[arg(help = "Server base URL")]
    pub url: String,
}
