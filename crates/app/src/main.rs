use std::fmt;
use std::io;
use std::path::PathBuf;

use cli::{Console, Repl};
use storage::JsonSnapshotRepository;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  recall [--import_from <path>] [--export_to <path>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --import_from <path>  load a card snapshot before the command loop starts");
    eprintln!("  --export_to <path>    write a card snapshot when the session exits");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RECALL_IMPORT_FROM, RECALL_EXPORT_TO");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut import_from = std::env::var("RECALL_IMPORT_FROM").ok().map(PathBuf::from);
        let mut export_to = std::env::var("RECALL_EXPORT_TO").ok().map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--import_from" => {
                    let value = require_value(args, "--import_from")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath {
                            flag: "--import_from",
                            raw: value,
                        });
                    }
                    import_from = Some(PathBuf::from(value));
                }
                "--export_to" => {
                    let value = require_value(args, "--export_to")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath {
                            flag: "--export_to",
                            raw: value,
                        });
                    }
                    export_to = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            import_from,
            export_to,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut repl =
        Repl::new(console, JsonSnapshotRepository::new()).with_export_on_exit(args.export_to);

    if let Some(path) = &args.import_from {
        repl.load_snapshot(path)?;
    }

    repl.run()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
