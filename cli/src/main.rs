use std::{error::Error, io::Write};

use clap::Parser;

use cube_engine::prelude::*;

/// Turn and check a Rubik's Cube given as a facelet string
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as the output)
	#[arg(long, default_value_t = SOLVED_STATE.to_owned())]
	set: String,

	/// Only check whether the resulting cube is a reachable cube
	#[arg(long, default_value_t = false)]
	verify: bool,

	/// Print the cube a solver must solve to reach this pattern instead
	#[arg(long)]
	pattern: Option<String>,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	if args.verify {
		// An unreachable cube ends the program with an error
		apply_moves(&args.set, &args.sequence).and_then(|state| verify(&state))?;
		writeln!(out, "ok")?;
		return Ok(());
	}

	let state = apply_moves(&args.set, &args.sequence)?;
	log::info!("Cube after {:?}: {state}", args.sequence);

	if let Some(pattern) = args.pattern {
		let reduced = patternize(&decode(&state)?, &decode(&pattern)?);
		writeln!(out, "{}", encode(&reduced)?)?;
		return Ok(());
	}

	writeln!(out, "{state}")?;

	Ok(())
}
