use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    panic,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use deskcalc::{
    error::Error, init_tracing, interpreter::session::Session, util::num::DEFAULT_PRECISION,
};

/// deskcalc is a simple calculator for floating-point expressions with
/// variables, square roots and integer powers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads statements from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skips the usage banner.
    #[arg(short, long)]
    quiet: bool,

    /// Number of significant digits printed for each result.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("{e}");
            ExitCode::from(1)
        },
        Err(_) => {
            eprintln!("exception");
            ExitCode::from(2)
        },
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if let Some(path) = &args.file {
        let file = File::open(path).map_err(|e| {
                                       io::Error::new(e.kind(),
                                                      format!("Failed to read the input file '{}': {e}",
                                                              path.display()))
                                   })?;
        drive(BufReader::new(file), args)
    } else {
        drive(io::stdin().lock(), args)
    }
}

fn drive<R: BufRead>(input: R, args: &Args) -> Result<(), Error> {
    let mut session = Session::new(input, io::stdout().lock(), io::stderr().lock())
        .with_precision(args.precision);
    if !args.quiet {
        session.write_banner()?;
    }
    session.run()
}
