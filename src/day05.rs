// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A seat ID; the boarding pass read as a binary number.
type SeatId = u16;


fn input_seat_ids_from_str(s: &str) -> Result<Vec<SeatId>, parsing::PassesError> {
	crate::input::try_parse_lines(s, parsing::try_seat_id_from_str)
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::PassesError),
	#[error("no boarding passes")]
	Empty,
	#[error("no free seat between two taken seats")]
	NoSeat,
}


pub(crate) fn part1(input: &str) -> Result<SeatId, Error> {
	input_seat_ids_from_str(input)?.into_iter().max().ok_or(Error::Empty)
}


fn part2_impl(mut seat_ids: Vec<SeatId>) -> Option<SeatId> {
	use itertools::Itertools as _;
	seat_ids.sort_unstable();
	seat_ids.into_iter()
		.tuple_windows()
		.find_map(|(l, r)| (r == l + 2).then_some(l + 1))
}

pub(crate) fn part2(input: &str) -> Result<SeatId, Error> {
	part2_impl(input_seat_ids_from_str(input)?).ok_or(Error::NoSeat)
}


mod parsing {
	use super::SeatId;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PassError {
		#[error("expected 10 characters, found {0}")]
		Len(usize),
		#[error("column {column}: invalid character {found:?}")]
		Char { column: usize, found: char },
	}

	pub(crate) type PassesError = crate::input::LineError<PassError>;

	pub(super) fn try_seat_id_from_str(s: &str) -> Result<SeatId, PassError> {
		if s.len() != 10 { return Err(PassError::Len(s.len())) }
		s.chars().enumerate().try_fold(0, |id, (c, chr)| match (c, chr) {
			(0..=6, 'F') | (7..=9, 'L') => Ok(id << 1),
			(0..=6, 'B') | (7..=9, 'R') => Ok(id << 1 | 1),
			(column, found) => Err(PassError::Char { column: column + 1, found }),
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		use parsing::try_seat_id_from_str as seat_id;
		assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
		assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
		assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
		assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
		assert!(matches!(seat_id("FBFBBFFRLF"), Err(parsing::PassError::Char { column: 10, found: 'F' })));
		assert_eq!(part1("FBFBBFFRLR\nBBFFBBFRLL\nBFFFBBFRRR\n").unwrap(), 820);
		assert_eq!(part2_impl(vec![10, 8, 7, 11]), Some(9));
		assert_eq!(part2_impl(vec![7, 8]), None);
		assert_eq!(part2("FFFFFFFLLL\nFFFFFFFLRL\n").unwrap(), 1);
	}
}
