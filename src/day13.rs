// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Notes {
	earliest: u64,
	/// Bus IDs by offset; `None` for an `x`.
	buses: Vec<Option<u64>>,
}

impl Notes {
	fn buses(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
		self.buses.iter()
			.enumerate()
			.filter_map(|(offset, bus)| bus.map(|id| (offset as u64, id)))
	}
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::NotesError),
	#[error("no buses in service")]
	NoBuses,
	#[error("no timestamp lines up bus {id} at offset {offset} with the buses before it")]
	NoTimestamp { offset: u64, id: u64 },
}


fn input_notes_from_str(s: &str) -> Result<Notes, parsing::NotesError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let notes = input_notes_from_str(input)?;
	notes.buses()
		.map(|(_, id)| (id, (id - notes.earliest % id) % id))
		.min_by_key(|&(_, wait)| wait)
		.map(|(id, wait)| id * wait)
		.ok_or(Error::NoBuses)
}


/// Sieves for the earliest timestamp: once a bus lines up, the step grows by
/// its ID so every earlier bus keeps lining up. Stepping repeats modulo `id`
/// after `id / gcd(step, id)` tries.
fn part2_impl(notes: &Notes) -> Result<u64, Error> {
	use num_integer::Integer as _;
	let (mut time, mut step) = (0u64, 1u64);
	for (offset, id) in notes.buses() {
		let max_tries = id / step.gcd(&id);
		let mut tries = 0;
		while (time + offset) % id != 0 {
			tries += 1;
			if tries >= max_tries { return Err(Error::NoTimestamp { offset, id }) }
			time += step;
		}
		step = step.lcm(&id);
	}
	Ok(time)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let notes = input_notes_from_str(input)?;
	if notes.buses().next().is_none() { return Err(Error::NoBuses) }
	part2_impl(&notes)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Notes;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum NotesError {
		#[error("expected two lines")]
		Format,
		#[error("line 1: invalid timestamp: {0}")]
		Earliest(ParseIntError),
		#[error("line 2, column {column}: invalid bus ID: {source}")]
		Bus { column: usize, source: ParseIntError },
		#[error("line 2, column {column}: bus ID cannot be zero")]
		Zero { column: usize },
	}

	impl FromStr for Notes {
		type Err = NotesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines();
			let (Some(earliest), Some(buses), None) = (lines.next(), lines.next(), lines.next())
				else { return Err(NotesError::Format) };
			let earliest = earliest.parse().map_err(NotesError::Earliest)?;
			let buses = buses.split(',')
				.scan(0, |c, bus| {
					let column = std::mem::replace(c, *c + bus.len() + 1) + 1;
					Some((column, bus))
				})
				.map(|(column, bus)| match bus {
					"x" => Ok(None),
					bus => match bus.parse::<u64>() {
						Ok(0) => Err(NotesError::Zero { column }),
						Ok(id) => Ok(Some(id)),
						Err(source) => Err(NotesError::Bus { column, source }),
					},
				})
				.collect::<Result<_, _>>()?;
			Ok(Notes { earliest, buses })
		}
	}

	#[test]
	fn tests() {
		assert_eq!("939\n7,13,x,x,59".parse::<Notes>().unwrap(),
			Notes { earliest: 939, buses: vec![Some(7), Some(13), None, None, Some(59)] });
		assert!(matches!("939\n7,y".parse::<Notes>(), Err(NotesError::Bus { column: 3, .. })));
		assert!(matches!("939".parse::<Notes>(), Err(NotesError::Format)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		939
		7,13,x,x,59,x,31,19
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 295);
		assert_eq!(part2(INPUT).unwrap(), 1068781);
		for (buses, expected) in [
			("17,x,13,19", 3417),
			("67,7,59,61", 754018),
			("67,x,7,59,61", 779210),
			("67,7,x,59,61", 1261476),
			("1789,37,47,1889", 1202161486),
		] {
			assert_eq!(part2(&format!("0\n{buses}\n")).unwrap(), expected);
		}
		assert!(matches!(part2("0\n2,4\n"), Err(Error::NoTimestamp { offset: 1, id: 4 })));
		assert_eq!(part2("0\n2,x,4\n").unwrap(), 2);
	}
}
