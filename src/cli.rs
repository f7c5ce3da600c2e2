// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use clap::Parser;
use std::path::PathBuf;


/// Solutions to the Advent of Code 2020 puzzles.
#[derive(Parser, Debug)]
#[command(name = "advent20", version)]
pub(crate) struct Args {
	/// Day to run (runs every day with an input file if omitted)
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	pub(crate) day: Option<u8>,

	/// Part to run (runs both parts if omitted)
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	pub(crate) part: Option<u8>,

	/// Directory containing the `dayNN.txt` puzzle inputs
	#[arg(long, env = "ADVENT20_INPUTS", default_value = "inputs")]
	pub(crate) inputs: PathBuf,

	/// Input file for the selected day, instead of the one in `--inputs`
	#[arg(short, long, requires = "day")]
	pub(crate) input: Option<PathBuf>,
}

impl Args {
	pub(crate) fn days(&self) -> Vec<u8> {
		match self.day {
			Some(day) => vec![day],
			None => (1..=25).collect(),
		}
	}

	pub(crate) fn input_path(&self, day: u8) -> PathBuf {
		match &self.input {
			Some(path) => path.clone(),
			None => crate::input::day_path(&self.inputs, day),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn args() {
		let args = Args::try_parse_from(["advent20", "7", "--inputs", "puzzles"]).unwrap();
		assert_eq!(args.days(), [7]);
		assert_eq!(args.part, None);
		assert_eq!(args.input_path(7), PathBuf::from("puzzles/day07.txt"));

		let args = Args::try_parse_from(["advent20", "23", "-p", "2", "-i", "cups.txt"]).unwrap();
		assert_eq!(args.part, Some(2));
		assert_eq!(args.input_path(23), PathBuf::from("cups.txt"));

		assert!(Args::try_parse_from(["advent20", "26"]).is_err());
		assert!(Args::try_parse_from(["advent20", "--part", "3"]).is_err());
		assert!(Args::try_parse_from(["advent20", "--input", "x.txt"]).is_err());
	}
}
