use clap::Parser;
use keystats::args::{Args, Command};
use keystats::{generate, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = match &args.command {
        Some(Command::Generate(gen_args)) => generate::run(gen_args),
        None => keystats::run_aggregate(&args.aggregate).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keystats: {e}");
            ExitCode::FAILURE
        }
    }
}
