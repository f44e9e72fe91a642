//! Config file commands

use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Print the effective configuration
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_at(opts.config_ref())?;
    let format = opts.resolve_format(&config);
    let host = config.api_host(opts.api_host_ref());

    if format == OutputFormat::Json {
        let value = json!({
            "config_file": path.display().to_string(),
            "api_host": host,
            "format": format.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Config file: {}", path.display().to_string().cyan());
    println!("API host:    {}", host);
    println!("Format:      {}", format.as_str());
    Ok(())
}

/// Store the API host in the config file
pub fn set_host(opts: &GlobalOptions, host: &str) -> Result<()> {
    let host = normalize_host(host)?;
    let mut config = Config::load_at(opts.config_ref())?;
    config.api_host = Some(host.clone());
    config.save_at(opts.config_ref())?;

    println!("{} API host set to {}", "✓".green(), host);
    Ok(())
}

/// Store the default output format in the config file
pub fn set_format(opts: &GlobalOptions, format: OutputFormat) -> Result<()> {
    let name = format.as_str();
    let mut config = Config::load_at(opts.config_ref())?;
    config.preferences.format = Some(name.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Default format set to {}", "✓".green(), name);
    Ok(())
}

fn normalize_host(host: &str) -> Result<String> {
    let host = host.trim().trim_end_matches('/');
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "API host must start with http:// or https://, got '{}'",
            host
        ))
        .into());
    }
    Ok(host.to_string())
}
