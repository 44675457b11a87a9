use std::{fs, io, path::PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use funk::{interpreter::evaluator::core::Context, run_sources};

/// funk runs programs written in a small S-expression language.
///
/// Every top-level expression that evaluates to a number is printed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source files to run. Their tokens are joined in the order given.
    files: Vec<PathBuf>,

    /// Inline source text, run after the files. May be repeated.
    #[arg(short, long = "expr", value_name = "SOURCE")]
    expr: Vec<String>,

    /// Do not print the numeric results of top-level expressions.
    #[arg(short, long)]
    quiet: bool,

    /// Increases log verbosity. May be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.files.is_empty() && args.expr.is_empty() {
        if let Err(e) = Args::command().print_help() {
            exit_with_error(&e.to_string());
        }
        return;
    }

    let mut sources = Vec::with_capacity(args.files.len() + args.expr.len());
    for path in &args.files {
        match fs::read_to_string(path) {
            Ok(source) => sources.push(source),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                exit_with_error(&format!("Source file \"{}\" does not exist", path.display()));
            },
            Err(e) => {
                exit_with_error(&format!("Failed to read source file \"{}\": {e}",
                                         path.display()));
            },
        }
    }
    sources.extend(args.expr);

    let mut context = Context::new();
    if let Err(e) = run_sources(&sources, &mut context, !args.quiet) {
        exit_with_error(&e.to_string());
    }
}
