use std::process::ExitCode;

use clap::Parser;
use mazer::{
    cli::{self, Args},
    error::AppError,
    logging,
    settings::Settings,
};

fn run(args: Args) -> Result<(), AppError> {
    logging::init(logging::level_from_flags(args.verbose, args.quiet))?;
    let settings_path = args.settings_path()?;

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;
    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    cli::run(&args, &settings)
}

fn main() -> ExitCode {
    let args = Args::parse();

    better_panic::install();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // printed directly, the logger may be silenced or missing
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
