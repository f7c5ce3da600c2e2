// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SUM: u64 = 2020;


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] crate::input::LineError<std::num::ParseIntError>),
	#[error("no {0} entries sum to 2020")]
	NoEntries(usize),
}


fn input_entries_from_str(s: &str) -> Result<Vec<u64>, Error> {
	Ok(crate::input::try_parse_lines(s, str::parse)?)
}


/// Finds `N` distinct entries (by position) summing to `SUM`, returning their product.
fn find_product<const N: usize>(entries: &[u64]) -> Option<u64> {
	use itertools::Itertools as _;
	entries.iter()
		.combinations(N)
		.find(|combination| combination.iter().copied().sum::<u64>() == SUM)
		.map(|combination| combination.into_iter().product())
}

fn part1_impl(entries: &[u64]) -> Option<u64> {
	use std::collections::HashSet;
	let mut seen = HashSet::new();
	for &entry in entries {
		if entry <= SUM && seen.contains(&(SUM - entry)) { return Some(entry * (SUM - entry)) }
		seen.insert(entry);
	}
	None
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(&input_entries_from_str(input)?).ok_or(Error::NoEntries(2))
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	find_product::<3>(&input_entries_from_str(input)?).ok_or(Error::NoEntries(3))
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1721
		979
		366
		299
		675
		1456
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 514579);
		assert_eq!(find_product::<2>(&input_entries_from_str(INPUT).unwrap()), Some(514579));
		assert_eq!(part2(INPUT).unwrap(), 241861950);
		assert!(matches!(part1("1\n2\n"), Err(Error::NoEntries(2))));
		assert!(matches!(part1("1\nx\n"), Err(Error::Parse(e)) if e.line == 2));
	}
}
