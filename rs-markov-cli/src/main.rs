//! rs-markov CLI: prints Markov text generated from a file, a string or stdin.

use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::model::config::{DEFAULT_LINE_WIDTH, DEFAULT_WINDOW_SIZE};
use rs_markov_core::{GeneratorConfig, Markov, TailPolicy};

/// Generate pseudo-random text mimicking a source corpus with a word-level Markov chain.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Source text file.
	#[arg(long, short, conflicts_with = "text")]
	file: Option<PathBuf>,

	/// Source text given inline. Stdin is read when neither --file nor --text is set.
	#[arg(long, short)]
	text: Option<String>,

	/// Number of generation steps.
	#[arg(long, short, default_value_t = 20)]
	words: usize,

	/// Number of words conditioning the next one.
	#[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
	window_size: usize,

	/// Line flush threshold in characters.
	#[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
	line_width: usize,

	/// Drop the final partial line instead of printing it.
	#[arg(long)]
	drop_tail: bool,

	/// PRNG seed for reproducible output.
	#[arg(long)]
	seed: Option<u64>,

	/// Number of texts to generate.
	#[arg(long, default_value_t = 1)]
	repeat: usize,
}

fn build_config(args: &Args) -> Result<GeneratorConfig, Box<dyn Error>> {
	let mut config = GeneratorConfig::default();
	config.set_window_size(args.window_size)?;
	config.set_line_width(args.line_width)?;
	if args.drop_tail {
		config.set_tail(TailPolicy::Drop);
	}
	Ok(config)
}

fn load_source(args: &Args) -> Result<Markov, Box<dyn Error>> {
	if let Some(path) = &args.file {
		return Ok(Markov::from_file(path)?);
	}
	if let Some(text) = &args.text {
		return Ok(Markov::from_string(text.as_str()));
	}

	let mut text = String::new();
	io::stdin().read_to_string(&mut text)?;
	debug!("read {} bytes from stdin", text.len());
	Ok(Markov::from_string(text))
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	let mut markov = load_source(args)?;
	markov.set_config(build_config(args)?)?;

	match args.seed {
		Some(seed) => {
			let mut rng = StdRng::seed_from_u64(seed);
			for _ in 0..args.repeat {
				println!("{}", markov.generate_with_rng(args.words, &mut rng)?);
			}
		}
		None => {
			for _ in 0..args.repeat {
				println!("{}", markov.generate(args.words)?);
			}
		}
	}

	Ok(())
}

fn main() -> ExitCode {
	env_logger::init();
	let args = Args::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}
