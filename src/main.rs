// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;
use clap::Parser as _;

mod cli;
mod input;


macro_rules! days {
	( $( $day:literal => [ $( $num:literal : $part:ident ),+ ] ),+ $(,)? ) => { paste::paste! {
		$( mod [<day $day>]; )+

		/// Runs the selected parts of `day`, returning each part's number and answer.
		fn solve(day: u8, part: Option<u8>, input: &str) -> anyhow::Result<Vec<(u8, String)>> {
			let mut answers = Vec::new();
			match day {
				$( $day => { $(
					if part.map_or(true, |p| p == $num) {
						let _span = tracing::debug_span!("part", part = $num).entered();
						let answer = [<day $day>]::$part(input)
							.map_err(|e| anyhow::anyhow!("{e}"))
							.with_context(|| format!("day {day:02} part {}", $num))?;
						answers.push(($num, answer.to_string()));
					}
				)+ } )+
				_ => anyhow::bail!("no solution for day {day}"),
			}
			Ok(answers)
		}
	} }
}

days! {
	01 => [1: part1, 2: part2],
	02 => [1: part1, 2: part2],
	03 => [1: part1, 2: part2],
	04 => [1: part1, 2: part2],
	05 => [1: part1, 2: part2],
	06 => [1: part1, 2: part2],
	07 => [1: part1, 2: part2],
	08 => [1: part1, 2: part2],
	09 => [1: part1, 2: part2],
	10 => [1: part1, 2: part2],
	11 => [1: part1, 2: part2],
	12 => [1: part1, 2: part2],
	13 => [1: part1, 2: part2],
	14 => [1: part1, 2: part2],
	15 => [1: part1, 2: part2],
	16 => [1: part1, 2: part2],
	17 => [1: part1, 2: part2],
	18 => [1: part1, 2: part2],
	19 => [1: part1, 2: part2],
	20 => [1: part1, 2: part2],
	21 => [1: part1, 2: part2],
	22 => [1: part1, 2: part2],
	23 => [1: part1, 2: part2],
	24 => [1: part1, 2: part2],
	25 => [1: part1],
}


fn init_tracing() {
	use tracing_subscriber::{prelude::*, EnvFilter};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn main() -> anyhow::Result<()> {
	init_tracing();
	let args = cli::Args::parse();
	let single_day = args.day.is_some();

	for day in args.days() {
		let _span = tracing::info_span!("day", day).entered();
		let path = args.input_path(day);
		let input = match input::read(&path) {
			Ok(input) => input,
			Err(e) if !single_day && e.is_not_found() => {
				tracing::warn!("skipping day {day:02}: no input at {}", path.display());
				continue
			}
			Err(e) => return Err(e).with_context(|| format!("day {day:02}")),
		};

		for (part, answer) in solve(day, args.part, &input)? {
			if single_day { println!("{answer}") }
			else { println!("day {day:02} part {part}: {answer}") }
		}
	}

	Ok(())
}
