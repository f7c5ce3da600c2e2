// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Policy {
	lo: usize,
	hi: usize,
	letter: u8,
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Entry<'a> {
	policy: Policy,
	password: &'a str,
}

impl Entry<'_> {
	fn is_valid_by_count(&self) -> bool {
		let Policy { lo, hi, letter } = self.policy;
		let count = self.password.bytes().filter(|&b| b == letter).count();
		(lo..=hi).contains(&count)
	}

	fn is_valid_by_position(&self) -> bool {
		let Policy { lo, hi, letter } = self.policy;
		let at = |pos: usize| pos.checked_sub(1)
			.and_then(|i| self.password.as_bytes().get(i))
			== Some(&letter);
		at(lo) ^ at(hi)
	}
}


fn input_entries_from_str(s: &str) -> Result<Vec<Entry<'_>>, parsing::EntriesError> {
	crate::input::try_parse_lines(s, Entry::try_from)
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::EntriesError> {
	Ok(input_entries_from_str(input)?.iter().filter(|e| e.is_valid_by_count()).count())
}


pub(crate) fn part2(input: &str) -> Result<usize, parsing::EntriesError> {
	Ok(input_entries_from_str(input)?.iter().filter(|e| e.is_valid_by_position()).count())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Entry, Policy};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum EntryError {
		#[error("expected `<lo>-<hi> <letter>: <password>`")]
		Format,
		#[error("invalid lower bound: {0}")]
		Lo(ParseIntError),
		#[error("invalid upper bound: {0}")]
		Hi(ParseIntError),
		#[error("expected a single ASCII letter, found {0:?}")]
		Letter(String),
	}

	pub(crate) type EntriesError = crate::input::LineError<EntryError>;

	impl<'a> TryFrom<&'a str> for Entry<'a> {
		type Error = EntryError;
		fn try_from(s: &'a str) -> Result<Self, Self::Error> {
			use EntryError::*;
			let (policy, password) = s.split_once(": ").ok_or(Format)?;
			let (range, letter) = policy.split_once(' ').ok_or(Format)?;
			let (lo, hi) = range.split_once('-').ok_or(Format)?;
			let lo = lo.parse().map_err(Lo)?;
			let hi = hi.parse().map_err(Hi)?;
			let letter = match letter.as_bytes() {
				&[b] if b.is_ascii_alphabetic() => b,
				_ => return Err(Letter(letter.to_owned())),
			};
			Ok(Entry { policy: Policy { lo, hi, letter }, password })
		}
	}

	#[test]
	fn tests() {
		assert_eq!(Entry::try_from("1-3 a: abcde").unwrap(),
			Entry { policy: Policy { lo: 1, hi: 3, letter: b'a' }, password: "abcde" });
		assert!(matches!(Entry::try_from("1-3 ab: abcde"), Err(EntryError::Letter(_))));
		assert!(matches!(Entry::try_from("1:3 a: abcde"), Err(EntryError::Format)));
	}
}
