// tapelang: run a tape-language program against stdin/stdout

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tapelang::{EofBehavior, Interpreter, InterpreterConfig, UnrecognizedSymbol};

#[derive(Parser)]
#[command(name = "tapelang", about = "Run a tape-language program")]
struct Cli {
    /// Program file to run.
    program: PathBuf,

    /// Number of cells on the tape.
    #[arg(long, default_value_t = tapelang::interpreter::constants::MEMORY_SIZE)]
    memory_size: usize,

    /// Stop after this many instructions (unbounded if omitted).
    #[arg(long)]
    step_limit: Option<u64>,

    /// What ',' does once stdin is exhausted.
    #[arg(long, value_enum, default_value_t = OnEof::Error)]
    on_eof: OnEof,

    /// What the parser does at a symbol that is not registered.
    #[arg(long, value_enum, default_value_t = OnUnrecognized::Truncate)]
    unrecognized: OnUnrecognized,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnEof {
    Error,
    Unchanged,
    Zero,
}

impl From<OnEof> for EofBehavior {
    fn from(value: OnEof) -> Self {
        match value {
            OnEof::Error => EofBehavior::Error,
            OnEof::Unchanged => EofBehavior::Unchanged,
            OnEof::Zero => EofBehavior::Zero,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OnUnrecognized {
    Truncate,
    Skip,
    Reject,
}

impl From<OnUnrecognized> for UnrecognizedSymbol {
    fn from(value: OnUnrecognized) -> Self {
        match value {
            OnUnrecognized::Truncate => UnrecognizedSymbol::Truncate,
            OnUnrecognized::Skip => UnrecognizedSymbol::Skip,
            OnUnrecognized::Reject => UnrecognizedSymbol::Reject,
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let program = match File::open(&cli.program) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open '{}': {}", cli.program.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut config = InterpreterConfig::default()
        .with_memory_size(cli.memory_size)
        .with_eof(cli.on_eof.into())
        .with_unrecognized(cli.unrecognized.into());
    if let Some(limit) = cli.step_limit {
        config = config.with_step_limit(limit);
    }

    let stdout = BufWriter::new(io::stdout().lock());
    let mut interpreter = Interpreter::with_config(io::stdin().lock(), stdout, program, config);

    match interpreter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
