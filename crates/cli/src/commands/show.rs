//! Show command implementation.

use anyhow::{Context, Result};
use build_scan_config::ResolvedConfiguration;
use build_scan_config::constants::RECOGNIZED_VARS;

use crate::args::OutputFormat;

pub fn run(config: &ResolvedConfiguration, output: OutputFormat) -> Result<()> {
    print!("{}", render(config, output)?);
    Ok(())
}

fn render(config: &ResolvedConfiguration, output: OutputFormat) -> Result<String> {
    let rendered = match output {
        OutputFormat::Text => RECOGNIZED_VARS
            .iter()
            .map(|var| format!("{}={}\n", var, config.get(var).unwrap_or("<unset>")))
            .collect::<String>(),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)
                .context("Failed to serialize configuration")?;
            format!("{json}\n")
        }
    };
    Ok(rendered)
}
