mod commands;
mod logging;
mod output;

use arp_diff::ReportError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "arp-diff")]
#[command(about = "Compare the IPv4 addresses of two ARP dumps and write a color-coded workbook")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare a pre and a post ARP dump and write an .xlsx report")]
    Compare(CompareArgs),
    #[command(about = "List the addresses found in one ARP dump")]
    Extract {
        #[arg(help = "Path to the ARP dump")]
        path: PathBuf,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Args)]
pub struct CompareArgs {
    #[arg(help = "Path to the pre (before) ARP dump")]
    pub pre: PathBuf,
    #[arg(help = "Path to the post (after) ARP dump")]
    pub post: PathBuf,
    #[arg(
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the generated report"
    )]
    pub out_dir: PathBuf,
    #[arg(
        long,
        short,
        value_name = "FILE",
        conflicts_with = "out_dir",
        help = "Write the report to this exact path"
    )]
    pub output: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "JSON report configuration")]
    pub config: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value = "text", help = "Summary format")]
    pub format: OutputFormat,
    #[arg(long, short, help = "Quiet mode: only print the report path")]
    pub quiet: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::run(&args),
        Commands::Extract { path, format } => commands::extract::run(&path, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ReportError>(),
            Some(ReportError::Xlsx(_) | ReportError::EmptyOutput)
        )
    })
}
