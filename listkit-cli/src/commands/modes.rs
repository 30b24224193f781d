use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use listkit_core::ProgramMode;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ModesArgs {
    #[command(subcommand)]
    pub command: Option<ModesCommand>,

    /// Output format for the listing
    #[arg(long, short = 'f', value_enum, default_value_t = ModesFormat::Text)]
    pub format: ModesFormat,
}

#[derive(Subcommand, Debug)]
pub enum ModesCommand {
    /// Validate a program mode identifier (e.g. "1on1") and print its key
    Parse {
        /// Identifier to validate
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ModesFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ModeRow {
    key: &'static str,
    id: ProgramMode,
}

pub fn run_modes(args: ModesArgs) -> Result<()> {
    if let Some(ModesCommand::Parse { id }) = args.command {
        let mode: ProgramMode = id.parse()?;
        println!("{}", mode.key());
        return Ok(());
    }

    println!("{}", format_modes(args.format)?);
    Ok(())
}

fn format_modes(format: ModesFormat) -> Result<String> {
    match format {
        ModesFormat::Text => {
            let width = ProgramMode::ALL
                .iter()
                .map(|mode| mode.key().len())
                .max()
                .unwrap_or(0);
            Ok(ProgramMode::ALL
                .iter()
                .map(|mode| format!("{:width$}  {}", mode.key(), mode.as_str(), width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        ModesFormat::Json => {
            let rows: Vec<ModeRow> = ProgramMode::ALL
                .into_iter()
                .map(|mode| ModeRow {
                    key: mode.key(),
                    id: mode,
                })
                .collect();
            serde_json::to_string_pretty(&rows).context("Failed to serialize program modes")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_listing_aligns_columns() {
        let text = format_modes(ModesFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "GROUP                  group");
        assert!(lines[1].ends_with(" 1on1"));
    }

    #[test]
    fn test_json_listing_uses_identifiers() {
        let json: serde_json::Value =
            serde_json::from_str(&format_modes(ModesFormat::Json).unwrap()).unwrap();
        assert_eq!(json[1]["key"], "ONE_ON_ONE");
        assert_eq!(json[1]["id"], "1on1");
    }
}
