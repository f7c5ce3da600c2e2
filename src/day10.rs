// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] crate::input::LineError<std::num::ParseIntError>),
	#[error("gap of {gap} jolts after adapter {after}")]
	Gap { after: u64, gap: u64 },
}


/// The outlet, the sorted adapters and the device, in chain order.
fn input_chain_from_str(s: &str) -> Result<Vec<u64>, Error> {
	let mut chain = crate::input::try_parse_lines(s, str::parse)?;
	chain.push(0);
	chain.sort_unstable();
	chain.push(chain[chain.len() - 1] + 3);
	Ok(chain)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	use itertools::Itertools as _;
	let mut gaps = [0; 4];
	for (l, r) in input_chain_from_str(input)?.into_iter().tuple_windows() {
		match r - l {
			gap @ 0..=3 => gaps[gap as usize] += 1,
			gap => return Err(Error::Gap { after: l, gap }),
		}
	}
	Ok(gaps[1] * gaps[3])
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let chain = input_chain_from_str(input)?;
	// Number of arrangements ending at each adapter
	let mut ways = vec![0u64; chain.len()];
	ways[0] = 1;
	for i in 1..chain.len() {
		ways[i] = (i.saturating_sub(3)..i)
			.filter(|&j| chain[i] - chain[j] <= 3)
			.map(|j| ways[j])
			.sum();
	}
	Ok(ways[chain.len() - 1])
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		"16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n",
		indoc::indoc! { "
			28
			33
			18
			42
			31
			14
			46
			20
			48
			47
			24
			23
			49
			45
			19
			38
			39
			11
			1
			32
			25
			35
			8
			17
			7
			9
			4
			2
			34
			10
			3
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 7 * 5);
		assert_eq!(part1(INPUTS[1]).unwrap(), 22 * 10);
		assert_eq!(part2(INPUTS[0]).unwrap(), 8);
		assert_eq!(part2(INPUTS[1]).unwrap(), 19208);
		assert!(matches!(part1("1\n5\n"), Err(Error::Gap { after: 1, gap: 4 })));
	}
}
