use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use gait::app::{self, AppError};
use gait::locomotion::config::LocomotionConfig;

#[derive(Parser)]
#[command(name = "gait", about = "Character locomotion demo")]
struct Args {
    /// Run the canned headless input script instead of opening a window
    #[arg(long)]
    script: bool,

    /// RON tuning file overriding the default locomotion config
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = match &args.tuning {
        Some(path) => app::load_tuning(path)?,
        None => LocomotionConfig::default(),
    };
    if args.script {
        app::run_scripted(config)
    } else {
        app::run_interactive(config)
    }
}
