//! Adler-32 of a string, a file or standard input.
//!
//! Usage:
//!   adler32 <DATA>
//!   adler32 --file <PATH>
//!   adler32 --stdin < input.bin
//!
//! Prints the 8-digit uppercase hex digest on stdout. Logs go to stderr and
//! are controlled by `RUST_LOG`.

use std::{
  env,
  ffi::OsString,
  io::{self, Write},
  path::PathBuf,
  process::ExitCode,
};

use adler32::Accumulator;

/// Exit code for command-line misuse.
const EXIT_USAGE: u8 = 2;

#[derive(Debug, thiserror::Error)]
enum CliError {
  #[error("{0}")]
  Usage(String),

  #[error(transparent)]
  Checksum(#[from] adler32::Error),

  #[error("failed to write digest: {0}")]
  Stdout(#[source] io::Error),
}

impl CliError {
  fn exit_code(&self) -> ExitCode {
    match self {
      Self::Usage(_) => ExitCode::from(EXIT_USAGE),
      Self::Checksum(_) | Self::Stdout(_) => ExitCode::FAILURE,
    }
  }
}

/// Where the bytes come from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
  /// Raw argument bytes; UTF-8 text hashes as its UTF-8 encoding.
  Literal(Vec<u8>),
  File(PathBuf),
  Stdin,
}

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// Treat the positional argument as a file path.
  file: bool,

  /// Read standard input.
  stdin: bool,

  /// Positional arguments, kept as the OS handed them over.
  values: Vec<OsString>,

  /// Show help.
  help: bool,

  /// Show version.
  version: bool,
}

fn parse_args(raw: impl IntoIterator<Item = OsString>) -> Result<Args, CliError> {
  let mut args = Args::default();
  let mut only_values = false;

  for arg in raw {
    if only_values {
      args.values.push(arg);
      continue;
    }
    // Flags are ASCII; anything that is not UTF-8 can only be a value.
    match arg.to_str() {
      Some("--") => only_values = true,
      Some("--file") => args.file = true,
      Some("--stdin") => args.stdin = true,
      Some("--help" | "-h") => args.help = true,
      Some("--version" | "-V") => args.version = true,
      Some(other) if other.starts_with('-') && other.len() > 1 => {
        return Err(CliError::Usage(format!("unknown argument: {other}")));
      }
      _ => args.values.push(arg),
    }
  }

  Ok(args)
}

fn expect_one(mut values: Vec<OsString>, missing: &str) -> Result<OsString, CliError> {
  match values.len() {
    0 => Err(CliError::Usage(missing.to_string())),
    1 => Ok(values.remove(0)),
    n => Err(CliError::Usage(format!("too many arguments: expected 1, got {n}"))),
  }
}

impl Args {
  fn source(self) -> Result<Source, CliError> {
    match (self.file, self.stdin) {
      (true, true) => Err(CliError::Usage("--file and --stdin cannot be used together".to_string())),
      (true, false) => expect_one(self.values, "file path is not defined").map(|path| Source::File(path.into())),
      (false, true) if self.values.is_empty() => Ok(Source::Stdin),
      (false, true) => Err(CliError::Usage(format!(
        "too many arguments: expected 0, got {}",
        self.values.len()
      ))),
      (false, false) => literal_bytes(expect_one(self.values, "data is not defined")?).map(Source::Literal),
    }
  }
}

#[cfg(unix)]
fn literal_bytes(value: OsString) -> Result<Vec<u8>, CliError> {
  use std::os::unix::ffi::OsStringExt;

  Ok(value.into_vec())
}

#[cfg(not(unix))]
fn literal_bytes(value: OsString) -> Result<Vec<u8>, CliError> {
  value
    .into_string()
    .map(String::into_bytes)
    .map_err(|raw| CliError::Usage(format!("data is not valid unicode: {}", raw.to_string_lossy())))
}

fn print_help() {
  eprintln!(
    "\
adler32: Adler-32 checksum of a string, a file or standard input

USAGE:
    adler32 [OPTIONS] <DATA>
    adler32 --file <PATH>
    adler32 --stdin

OPTIONS:
    --file            Treat the argument as a file path and checksum its contents
    --stdin           Checksum standard input until end of file
    -V, --version     Print version
    -h, --help        Show this help message

ENVIRONMENT:
    RUST_LOG                    Log filter (logs go to stderr)
    ADLER32_FORCE               auto | bytewise | batched
    ADLER32_BATCH_THRESHOLD     Input length at which auto switches to batched
    ADLER32_READ_CHUNK_BYTES    Read buffer size for --file and --stdin
"
  );
}

async fn checksum(source: Source) -> Result<Accumulator, CliError> {
  let acc = match source {
    Source::Literal(data) => Accumulator::with_data(data.as_slice()),
    Source::File(path) => Accumulator::from_file(&path).await?,
    Source::Stdin => {
      let mut acc = Accumulator::new();
      acc.update_from_async_reader(tokio::io::stdin()).await?;
      acc
    }
  };
  Ok(acc)
}

async fn run(args: Args) -> Result<(), CliError> {
  let source = args.source()?;
  log::debug!("checksumming {source:?}");

  let mut acc = checksum(source).await?;
  acc.freeze();

  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{}", acc.digest_hex()).map_err(CliError::Stdout)?;
  stdout.flush().map_err(CliError::Stdout)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = match parse_args(env::args_os().skip(1)) {
    Ok(args) => args,
    Err(err) => {
      eprintln!("Error: {err}");
      eprintln!("Run with --help for usage information.");
      return err.exit_code();
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }
  if args.version {
    println!("adler32 {}", env!("CARGO_PKG_VERSION"));
    return ExitCode::SUCCESS;
  }

  match run(args).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err}");
      if matches!(err, CliError::Usage(_)) {
        eprintln!("Run with --help for usage information.");
      }
      err.exit_code()
    }
  }
}
