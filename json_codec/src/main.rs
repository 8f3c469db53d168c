use std::{
	error::Error,
	fs,
	io::{self, stdin, Read, Write},
	path::{Path, PathBuf},
	process::exit,
};

use clap::Parser;
use json_codec::{parse_json_with_limits, serialize_with_limits, Limits, DEFAULT_MAX_DEPTH};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Validate JSON text and print it back in compact form.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
	/// File to read. Reads standard input when omitted.
	#[arg(value_name = "FILE")]
	input: Option<PathBuf>,

	/// Only check that the input is valid JSON.
	#[arg(long)]
	check: bool,

	/// Maximum nesting of arrays and objects.
	#[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
	max_depth: usize,

	/// Log at debug level. `RUST_LOG` takes precedence.
	#[arg(short, long)]
	verbose: bool,
}

const EXIT_FAILURE: i32 = 1;

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let result = read_input(cli.input.as_deref()).and_then(|input| render(&cli, &input));
	let code = report(result, &mut io::stdout().lock(), &mut io::stderr().lock());
	exit(code.unwrap_or(EXIT_FAILURE));
}

/// Parses `input` and returns its compact form, or `None` under `--check`.
fn render(cli: &Cli, input: &str) -> Result<Option<String>, Box<dyn Error>> {
	let limits = Limits::default().with_max_depth(cli.max_depth);

	let json = parse_json_with_limits(input, limits)?;
	if cli.check {
		debug!("input is valid JSON");
		return Ok(None);
	}

	Ok(Some(serialize_with_limits(&json, limits)?))
}

/// Prints the outcome of [`render`] and returns the process exit code.
fn report(
	result: Result<Option<String>, Box<dyn Error>>,
	out: &mut impl Write,
	err: &mut impl Write,
) -> io::Result<i32> {
	match result {
		Ok(Some(output)) => writeln!(out, "{output}")?,
		Ok(None) => {}
		Err(error) => {
			writeln!(err, "Error: {error}")?;
			return Ok(EXIT_FAILURE);
		}
	}
	Ok(0)
}

fn read_input(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
	match path {
		Some(path) => fs::read_to_string(path)
			.map_err(|error| Box::<dyn Error>::from(format!("{}: {error}", path.display()))),
		None => {
			let mut buf = String::new();
			stdin().read_to_string(&mut buf)?;
			Ok(buf)
		}
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(io::stderr)
		.try_init();
}
