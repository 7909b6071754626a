use std::fs;
use std::path::{Path, PathBuf};

use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::{DEFAULT_ADDR, SERVER_URL_ENV};

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::SetServer(args) => {
            let url = reqwest::Url::parse(&args.url)
                .map_err(|err| anyhow::anyhow!("invalid server url '{}': {err}", args.url))?;
            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!("server url must use http:// or https://");
            }
            config.server_url = Some(normalize_server_key(&args.url));
        }
        ConfigCommand::UnsetServer => {
            config.server_url = None;
        }
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::Path => {
            println!("{}", config_path()?.display());
        }
    }
    Ok(())
}

pub(crate) fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".memoria").join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("failed to parse {}: {err}", path.display()))?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// `--addr` (or `MEMORIA_ADDR`), then `MEMORIA_SERVER_URL`, then the config
/// file, then the built-in default.
pub(crate) fn resolve_addr(addr_arg: Option<String>, config: &CliConfig) -> String {
    addr_arg
        .or_else(|| std::env::var(SERVER_URL_ENV).ok())
        .filter(|addr| !addr.trim().is_empty())
        .or_else(|| config.server_url.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    let url = reqwest::Url::parse(addr)
        .map_err(|err| anyhow::anyhow!("invalid server url '{addr}': {err}"))?;
    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_insecure => Ok(()),
        "http" => anyhow::bail!("refusing to use http:// without --insecure"),
        other => anyhow::bail!("unsupported scheme '{other}' in server url '{addr}'"),
    }
}

pub(crate) fn normalize_server_key(addr: &str) -> String {
    addr.trim_end_matches('/').to_string()
}
