//! ipsort: sort a proxy IP list and emit a plain list or health-check script.

use clap::Parser;
use ipsort::{Options, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ipsort")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Sort IP lists and generate proxy health-check scripts", long_about = None)]
struct Cli {
    /// Input IPs file
    #[arg(short = 'i', value_name = "INPUT")]
    input: PathBuf,

    /// Format flag (0 = health-check script, 1 = sorted list)
    #[arg(short = 'f', value_name = "0/1", allow_hyphen_values = true)]
    format: String,

    /// Remove IPs file
    #[arg(short = 'r', value_name = "REMOVE")]
    remove: Option<PathBuf>,

    /// Output IPs file
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: PathBuf,

    /// Do not print each address while writing
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> ipsort::Result<()> {
    let format = OutputFormat::from_flag(&cli.format)?;

    let mut options = Options::new(cli.input, format, cli.output).with_progress(!cli.quiet);
    if let Some(remove) = cli.remove {
        options = options.with_exclude(remove);
    }

    let summary = ipsort::run(&options)?;

    println!("IPs sorted and written to {}", summary.output.display());
    Ok(())
}
