//! Decide command implementation.

use anyhow::{Context, Result};
use build_scan_config::{CaptureDecision, ResolvedConfiguration};
use tracing::info;

use crate::args::OutputFormat;

pub fn run(config: &ResolvedConfiguration, build_failure: bool, output: OutputFormat) -> Result<()> {
    let decision = config
        .policy()
        .decide(build_failure)
        .context("Failed to evaluate build scan capture policy")?;

    info!(
        strategy = config.raw_capture_strategy(),
        build_failure,
        unpublished = decision.unpublished,
        link = decision.link,
        "Evaluated build scan capture policy"
    );

    print!("{}", render(&decision, output)?);
    Ok(())
}

fn render(decision: &CaptureDecision, output: OutputFormat) -> Result<String> {
    let rendered = match output {
        OutputFormat::Text => format!(
            "capture-unpublished={}\ncapture-link={}\n",
            decision.unpublished, decision.link
        ),
        OutputFormat::Json => {
            let json =
                serde_json::to_string(decision).context("Failed to serialize capture decision")?;
            format!("{json}\n")
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let decision = CaptureDecision {
            unpublished: true,
            link: false,
        };
        assert_eq!(
            render(&decision, OutputFormat::Text).unwrap(),
            "capture-unpublished=true\ncapture-link=false\n"
        );
    }

    #[test]
    fn test_render_json() {
        let decision = CaptureDecision {
            unpublished: false,
            link: true,
        };
        assert_eq!(
            render(&decision, OutputFormat::Json).unwrap(),
            "{\"unpublished\":false,\"link\":true}\n"
        );
    }
}
