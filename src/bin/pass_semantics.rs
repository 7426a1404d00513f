use clap::Parser;
use colored::Colorize;
use pass_semantics::{run, Demo, Scenario};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Walks through value and reference passing for scalars, slices, maps and structs.
#[derive(Parser, Debug)]
#[command(name = "pass-semantics", version)]
struct Cli {
    /// TOML scenario overriding the default values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run only these demos (repeatable)
    #[arg(long = "only", value_name = "DEMO")]
    only: Vec<Demo>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// List the available demos and exit
    #[arg(long)]
    list: bool,

    /// Log what happens inside each callee
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    if cli.list {
        for demo in Demo::ALL {
            println!("{:<24}{}", demo.name(), demo.summary());
        }
        return ExitCode::SUCCESS;
    }

    let mut scenario = match Scenario::load_or_default(cli.config.as_deref()) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };
    if !cli.only.is_empty() {
        scenario.demos = cli.only;
    }
    if cli.no_color {
        scenario.color = false;
    }

    match run(&scenario, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
