// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] crate::input::LineError<std::num::ParseIntError>),
	#[error("every number is a sum of two of its predecessors")]
	NoInvalid,
	#[error("no contiguous run sums to {0}")]
	NoRun(u64),
}


fn input_numbers_from_str(s: &str) -> Result<Vec<u64>, Error> {
	Ok(crate::input::try_parse_lines(s, str::parse)?)
}


fn is_pair_sum(window: &[u64], target: u64) -> bool {
	use itertools::Itertools as _;
	window.iter()
		.tuple_combinations()
		.any(|(&l, &r)| l != r && l + r == target)
}

fn first_invalid<const W: usize>(numbers: &[u64]) -> Option<u64> {
	numbers.windows(W + 1)
		.find(|w| !is_pair_sum(&w[..W], w[W]))
		.map(|w| w[W])
}

/// Two-pointer scan for a run of at least two numbers summing to `target`.
fn contiguous_run(numbers: &[u64], target: u64) -> Option<&[u64]> {
	let (mut start, mut sum) = (0, 0);
	for (end, &number) in numbers.iter().enumerate() {
		sum += number;
		while sum > target && start < end {
			sum -= numbers[start];
			start += 1;
		}
		if sum == target && end > start { return Some(&numbers[start..=end]) }
	}
	None
}

fn part1_impl<const W: usize>(numbers: &[u64]) -> Result<u64, Error> {
	first_invalid::<W>(numbers).ok_or(Error::NoInvalid)
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl::<25>(&input_numbers_from_str(input)?)
}


fn part2_impl<const W: usize>(numbers: &[u64]) -> Result<u64, Error> {
	use itertools::{Itertools as _, MinMaxResult::MinMax};
	let target = part1_impl::<W>(numbers)?;
	let run = contiguous_run(numbers, target).ok_or(Error::NoRun(target))?;
	match run.iter().minmax() {
		MinMax(min, max) => Ok(min + max),
		_ => Err(Error::NoRun(target)),
	}
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl::<25>(&input_numbers_from_str(input)?)
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		35
		20
		15
		25
		47
		40
		62
		55
		65
		95
		102
		117
		150
		182
		127
		219
		299
		277
		309
		576
	" };

	#[test]
	fn tests() {
		let numbers = input_numbers_from_str(INPUT).unwrap();
		assert_eq!(part1_impl::<5>(&numbers).unwrap(), 127);
		assert_eq!(contiguous_run(&numbers, 127), Some(&[15, 25, 47, 40][..]));
		assert_eq!(part2_impl::<5>(&numbers).unwrap(), 62);
		let preamble = (1..=25).collect::<Vec<_>>();
		assert!(is_pair_sum(&preamble, 26));
		assert!(is_pair_sum(&preamble, 49));
		assert!(!is_pair_sum(&preamble, 100));
		assert!(!is_pair_sum(&preamble, 50));
	}
}
