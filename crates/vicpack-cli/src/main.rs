use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use time::OffsetDateTime;
use vicpack_core::{Export, ExportError, Packet, PacketError, RenderError, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "vicpack")]
#[command(version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VICPACK_BUILD_COMMIT"),
    ")"
))]
#[command(
    about = "Decoder for hex-encoded Vicpack sensor telemetry packets.",
    long_about = None,
    after_help = "Examples:\n  vicpack packet decode fa0101000301100002012a000000002a00000000ced399 --stdout\n  vicpack packet decode --file packet.hex -o export.json\n  vicpack packet trace fa0101000301100002012a000000002a00000000ced399"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on hex-encoded telemetry packets.
    Packet {
        #[command(subcommand)]
        command: PacketCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PacketCommands {
    /// Decode a packet and emit the slot-grouped JSON export.
    #[command(alias = "export")]
    #[command(
        after_help = "Examples:\n  vicpack packet decode fa0101000301100002012a000000002a00000000ced399 --stdout\n  vicpack packet decode --file packet.hex -o export.json --pretty"
    )]
    Decode {
        /// Hex-encoded packet string
        #[arg(required_unless_present = "file")]
        hex: Option<String>,

        /// Read the hex string from a file instead
        #[arg(long, conflicts_with = "hex")]
        file: Option<PathBuf>,

        /// Output export path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        export: Option<PathBuf>,

        /// Write JSON export to stdout
        #[arg(long, conflicts_with = "export")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },

    /// Print a human-readable packet trace.
    #[command(alias = "print")]
    Trace {
        /// Hex-encoded packet string
        #[arg(required_unless_present = "file")]
        hex: Option<String>,

        /// Read the hex string from a file instead
        #[arg(long, conflicts_with = "hex")]
        file: Option<PathBuf>,

        /// One summary line instead of the measurement walk
        #[arg(long)]
        summary: bool,

        /// Disable SI prefixes on eligible measurements
        #[arg(long)]
        no_si_prefix: bool,

        /// Time format for the summary line
        #[arg(long, default_value = "[hour]:[minute]:[second]")]
        time_format: String,

        /// MAC address shown in the summary line
        #[arg(long, default_value = "n/a")]
        mac: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packet { command } => match command {
            PacketCommands::Decode {
                hex,
                file,
                export,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_packet_decode(hex, file, export, stdout, pretty, compact, quiet),
            PacketCommands::Trace {
                hex,
                file,
                summary,
                no_si_prefix,
                time_format,
                mac,
            } => cmd_packet_trace(hex, file, summary, no_si_prefix, time_format, mac),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

impl From<PacketError> for CliError {
    fn from(err: PacketError) -> Self {
        let hint = match err {
            PacketError::MalformedInput { .. } => {
                "expected an even-length string of hex digit pairs"
            }
            PacketError::OutOfRange { .. } => "the declared measurement count exceeds the payload",
        };
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Packet(err) => err.into(),
            ExportError::UnknownSensorIndex { .. } => CliError::new(
                err.to_string(),
                Some("the sensor-name table may be older than the device firmware".to_string()),
            ),
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Packet(err) => err.into(),
            RenderError::TimeFormat { .. } => CliError::new(
                err.to_string(),
                Some("see the time crate's format description syntax".to_string()),
            ),
        }
    }
}

fn cmd_packet_decode(
    hex: Option<String>,
    file: Option<PathBuf>,
    export: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let hex = load_hex(hex, file)?;
    let packet = Packet::from_hex(&hex)?;
    let decoded = vicpack_core::export(&packet)?;
    let json = serialize_export(&decoded, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let export = export.expect("export path required when not using stdout");
    if let Some(parent) = export.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&export, json)
        .with_context(|| format!("Failed to write export: {}", export.display()))?;

    if !quiet {
        eprintln!("OK: export written -> {}", export.display());
    }
    Ok(())
}

fn cmd_packet_trace(
    hex: Option<String>,
    file: Option<PathBuf>,
    summary: bool,
    no_si_prefix: bool,
    time_format: String,
    mac: String,
) -> Result<(), CliError> {
    let hex = load_hex(hex, file)?;
    let packet = Packet::from_hex(&hex)?;
    let options = RenderOptions {
        si_prefix: !no_si_prefix,
        time_format,
        mac,
    };

    let trace = if summary {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        vicpack_core::summary(&packet, &options, now)?
    } else {
        vicpack_core::detailed(&packet, &options)?
    };
    println!("{}", trace);
    Ok(())
}

fn serialize_export(export: &Export, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(export)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(export)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn load_hex(hex: Option<String>, file: Option<PathBuf>) -> Result<String, CliError> {
    if let Some(hex) = hex {
        return Ok(hex.trim().to_string());
    }
    let file = file.ok_or_else(|| {
        CliError::new(
            "missing packet input",
            Some("pass a hex string or --file".to_string()),
        )
    })?;
    let resolved = resolve_input_path(&file)?;
    if !resolved.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", resolved.display()),
            Some("use a file holding one hex-encoded packet".to_string()),
        ));
    }
    let raw = fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read input file: {}", resolved.display()))?;
    Ok(raw.trim().to_string())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single packet file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
