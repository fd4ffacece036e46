use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tiles::FormatVersion;
use tools::{format_level_pretty, inspect_code, LevelJson};

#[derive(Parser)]
#[command(
    name = "colorloop-tools",
    version,
    about = "Color Loop map-code conversion and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a level JSON file into a map code.
    Encode {
        /// Path to the level JSON.
        level_path: PathBuf,
        /// Format generation to export.
        #[arg(long, value_enum, default_value_t = ExportFormat::V3)]
        format: ExportFormat,
    },
    /// Decode a map code into level JSON or a text rendering.
    Decode {
        /// The code itself, or a path to a file holding it.
        code: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Summarize a map code without dumping the grid.
    Inspect {
        /// The code itself, or a path to a file holding it.
        code: String,
    },
    /// Fetch a remotely hosted map code and decode it.
    Fetch {
        /// URL serving the code as plain text.
        url: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Pretty)]
        format: DecodeFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    V1,
    V2,
    V3,
}

impl ExportFormat {
    const fn version(self) -> FormatVersion {
        match self {
            Self::V1 => FormatVersion::V1,
            Self::V2 => FormatVersion::V2,
            Self::V3 => FormatVersion::V3,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode { level_path, format } => {
            let json = fs::read_to_string(&level_path)
                .with_context(|| format!("read {}", level_path.display()))?;
            let parsed: LevelJson = serde_json::from_str(&json).context("parse level json")?;
            let level = parsed.into_level().context("validate level")?;
            let code = mapcode::encode_as(&level, format.version())
                .with_context(|| format!("encode as {:?}", format))?;
            println!("{code}");
        }
        Command::Decode { code, format } => {
            let code = read_code_arg(&code)?;
            let level = match mapcode::decode(&code) {
                Ok(level) => level,
                Err(err) => bail!("invalid code: {err}"),
            };
            print_level(&level, format)?;
        }
        Command::Inspect { code } => {
            let code = read_code_arg(&code)?;
            let report = match inspect_code(&code) {
                Ok(report) => report,
                Err(err) => bail!("invalid code: {err}"),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Fetch { url, format } => {
            let level = match store::fetch_map(&url).await {
                Ok(level) => level,
                Err(err) => bail!("invalid code: {err}"),
            };
            print_level(&level, format)?;
        }
    }
    Ok(())
}

fn print_level(level: &tiles::Level, format: DecodeFormat) -> Result<()> {
    match format {
        DecodeFormat::Json => {
            let json = serde_json::to_string_pretty(&LevelJson::from_level(level))?;
            println!("{json}");
        }
        DecodeFormat::Pretty => print!("{}", format_level_pretty(level)),
    }
    Ok(())
}

/// Accepts either a literal code or a path to a file holding one.
fn read_code_arg(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(text.trim().to_string())
    } else {
        Ok(arg.trim().to_string())
    }
}
