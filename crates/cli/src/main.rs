use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use parrot_core::services::scan::ScanSummary;
use parrotng::commands::{
    analyze_dump_command, init_config_command, list_disassemblers_command, scan_command,
    ScanOptions,
};

/// Exit status when at least one analyzed file is vulnerable.
const EXIT_VULNERABLE: u8 = 2;

/// Detects Flex applications (SWF) vulnerable to CVE-2011-2461.
///
/// This CLI is a thin wrapper around `parrot-core` (exposed in code as `parrot_core`).
/// All detection logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "parrotng",
    version,
    about = "Detect Flex applications vulnerable to CVE-2011-2461",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG also applies.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassemble SWF files and report whether they are vulnerable.
    ///
    /// Exits with status 2 when any file is vulnerable.
    Scan {
        /// SWF files or directories to scan.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Scan config (JSON or YAML). Defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disassembler backend to use (see `disassemblers`).
        #[arg(long)]
        backend: Option<String>,

        /// Path to the disassembler executable (overrides config and PARROTNG_SWFDUMP).
        #[arg(long)]
        disassembler: Option<String>,

        /// Descend into subdirectories.
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Number of worker threads.
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Only print paths of vulnerable files.
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Analyze disassembly text that was dumped ahead of time.
    ///
    /// Exits with status 2 when any dump is vulnerable.
    AnalyzeDump {
        /// Dump files, or directories of `.txt`/`.dump` files.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Descend into subdirectories.
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Only print paths of vulnerable dumps.
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// List available disassembler backends.
    Disassemblers {
        /// Scan config whose disassembler settings should be shown.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default scan config file.
    InitConfig {
        /// Output path. Defaults to `parrotng.json` (or `parrotng.yaml`).
        #[arg(long)]
        path: Option<PathBuf>,

        /// Config format: json or yaml.
        #[arg(long)]
        format: Option<String>,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Scan { paths, config, backend, disassembler, recursive, jobs, json, quiet } => {
            let opts = ScanOptions {
                inputs: paths,
                config,
                backend,
                disassembler,
                recursive,
                jobs,
                json,
                quiet,
            };
            Ok(exit_code(&scan_command(&opts)?))
        }
        Command::AnalyzeDump { paths, recursive, json, quiet } => {
            Ok(exit_code(&analyze_dump_command(&paths, recursive, json, quiet)?))
        }
        Command::Disassemblers { config, json } => {
            list_disassemblers_command(config.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::InitConfig { path, format, force } => {
            init_config_command(path.as_deref(), format.as_deref(), force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level).parse_default_env().format_timestamp(None).init();
}

fn exit_code(summary: &ScanSummary) -> ExitCode {
    if summary.any_vulnerable() {
        ExitCode::from(EXIT_VULNERABLE)
    } else {
        ExitCode::SUCCESS
    }
}
