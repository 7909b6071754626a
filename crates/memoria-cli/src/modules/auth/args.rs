use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long, env = "MEMORIA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long, help = "Create the account instead of signing in")]
    pub register: bool,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long, env = "MEMORIA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct AuthArgs {
    #[arg(long, help = "Start in create-account mode")]
    pub register: bool,
}
