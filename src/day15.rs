// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("column {column}: invalid starting number: {source}")]
	Parse { column: usize, source: std::num::ParseIntError },
	#[error("no starting numbers")]
	Empty,
}


fn input_numbers_from_str(s: &str) -> Result<Vec<u32>, Error> {
	let numbers = s.trim()
		.split(',')
		.scan(0, |c, number| {
			let column = std::mem::replace(c, *c + number.len() + 1) + 1;
			Some((column, number))
		})
		.map(|(column, number)| number.parse()
			.map_err(|source| Error::Parse { column, source }))
		.collect::<Result<Vec<_>, _>>()?;
	Ok(numbers)
}


/// The `N`th number spoken, `N` counting from 1.
fn nth_spoken<const N: usize>(starting: &[u32]) -> Result<u32, Error> {
	let (&last, init) = starting.split_last().ok_or(Error::Empty)?;
	if N <= starting.len() { return Ok(starting[N - 1]) }

	// Turn (1-based) each number was last spoken on, `0` meaning never
	let mut spoken_on = vec![0u32; N.max(starting.iter().max().map_or(0, |&m| m as usize + 1))];
	for (turn, &number) in init.iter().enumerate() {
		spoken_on[number as usize] = turn as u32 + 1;
	}

	let mut last = last;
	for turn in starting.len() as u32..N as u32 {
		let prev = std::mem::replace(&mut spoken_on[last as usize], turn);
		last = if prev == 0 { 0 } else { turn - prev };
	}
	Ok(last)
}

pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	nth_spoken::<2020>(&input_numbers_from_str(input)?)
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	nth_spoken::<30_000_000>(&input_numbers_from_str(input)?)
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(nth_spoken::<10>(&[0, 3, 6]).unwrap(), 0);
		assert_eq!(nth_spoken::<9>(&[0, 3, 6]).unwrap(), 4);
		assert_eq!(nth_spoken::<2>(&[0, 3, 6]).unwrap(), 3);
		assert_eq!(part1("0,3,6\n").unwrap(), 436);
		for (input, expected) in [("1,3,2", 1), ("2,1,3", 10), ("1,2,3", 27), ("3,1,2", 1836)] {
			assert_eq!(part1(input).unwrap(), expected);
		}
		assert_eq!(part2("0,3,6").unwrap(), 175594);
		assert!(matches!(part1("0,x"), Err(Error::Parse { column: 3, .. })));
	}
}
