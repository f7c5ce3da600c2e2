// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Clockwise neighbor of every cup label; index `0` is unused.
struct Ring(Vec<u32>);

impl Ring {
	/// Cups labeled as given, followed by ascending labels up to `total`.
	fn new(cups: &[u32], total: usize) -> Self {
		let mut next = vec![0; total.max(cups.len()) + 1];
		let labels = cups.iter().copied().chain(cups.len() as u32 + 1..=total as u32);
		let mut prev = None::<u32>;
		for label in labels {
			if let Some(prev) = prev { next[prev as usize] = label }
			prev = Some(label);
		}
		if let (Some(&first), Some(last)) = (cups.first(), prev) { next[last as usize] = first }
		Self(next)
	}

	fn next(&self, label: u32) -> u32 {
		self.0[label as usize]
	}

	fn play(&mut self, mut current: u32, moves: usize) {
		let max = (self.0.len() - 1) as u32;
		for _ in 0..moves {
			let a = self.next(current);
			let b = self.next(a);
			let c = self.next(b);
			self.0[current as usize] = self.next(c);

			let mut destination = current;
			loop {
				destination = if destination == 1 { max } else { destination - 1 };
				if destination != a && destination != b && destination != c { break }
			}

			self.0[c as usize] = self.next(destination);
			self.0[destination as usize] = a;
			current = self.next(current);
		}
	}

	/// Labels clockwise after cup `1`, excluding it.
	fn after_one(&self) -> impl Iterator<Item = u32> + '_ {
		std::iter::successors(Some(self.next(1)), |&label| Some(self.next(label)))
			.take_while(|&label| label != 1)
	}
}


fn input_cups_from_str(s: &str) -> Result<Vec<u32>, parsing::CupsError> {
	parsing::try_cups_from_str(s)
}


fn part1_impl<const MOVES: usize>(cups: &[u32]) -> String {
	let mut ring = Ring::new(cups, cups.len());
	ring.play(cups[0], MOVES);
	ring.after_one().map(|label| char::from(b'0' + label as u8)).collect()
}

pub(crate) fn part1(input: &str) -> Result<String, parsing::CupsError> {
	Ok(part1_impl::<100>(&input_cups_from_str(input)?))
}


pub(crate) fn part2(input: &str) -> Result<u64, parsing::CupsError> {
	let cups = input_cups_from_str(input)?;
	let mut ring = Ring::new(&cups, 1_000_000);
	ring.play(cups[0], 10_000_000);
	Ok(ring.after_one().take(2).map(u64::from).product())
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CupsError {
		#[error("column {column}: expected a digit from 1 to 9, found {found:?}")]
		Digit { column: usize, found: char },
		#[error("cup {0} appears more than once")]
		Duplicate(u32),
		#[error("expected cups labeled 1 to {len}, but {missing} is missing")]
		Missing { len: usize, missing: u32 },
		#[error("expected at least 5 cups, found {0}")]
		TooFew(usize),
	}

	pub(super) fn try_cups_from_str(s: &str) -> Result<Vec<u32>, CupsError> {
		let mut cups = Vec::new();
		for (c, chr) in s.trim_end().chars().enumerate() {
			let cup = chr.to_digit(10)
				.filter(|&d| d > 0)
				.ok_or(CupsError::Digit { column: c + 1, found: chr })?;
			if cups.contains(&cup) { return Err(CupsError::Duplicate(cup)) }
			cups.push(cup);
		}
		if cups.len() < 5 { return Err(CupsError::TooFew(cups.len())) }
		if let Some(missing) = (1..=cups.len() as u32).find(|l| !cups.contains(l)) {
			return Err(CupsError::Missing { len: cups.len(), missing })
		}
		Ok(cups)
	}

	#[test]
	fn tests() {
		assert_eq!(try_cups_from_str("32415\n").unwrap(), [3, 2, 4, 1, 5]);
		assert!(matches!(try_cups_from_str("32405"), Err(CupsError::Digit { column: 4, found: '0' })));
		assert!(matches!(try_cups_from_str("324152"), Err(CupsError::Duplicate(2))));
		assert!(matches!(try_cups_from_str("324"), Err(CupsError::TooFew(3))));
		assert!(matches!(try_cups_from_str("324157"), Err(CupsError::Missing { len: 6, missing: 6 })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		let cups = input_cups_from_str("389125467").unwrap();
		assert_eq!(Ring::new(&cups, 12).after_one().collect::<Vec<_>>(), [2, 5, 4, 6, 7, 10, 11, 12, 3, 8, 9]);
		assert_eq!(part1_impl::<10>(&cups), "92658374");
		assert_eq!(part1("389125467").unwrap(), "67384529");
		assert_eq!(part2("389125467").unwrap(), 149245887792);
	}
}
