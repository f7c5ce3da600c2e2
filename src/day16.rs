// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Field<'a> {
	name: &'a str,
	ranges: [RangeInclusive<u64>; 2],
}

impl Field<'_> {
	fn allows(&self, value: u64) -> bool {
		self.ranges.iter().any(|r| r.contains(&value))
	}
}

type Ticket = Vec<u64>;

struct Notes<'a> {
	fields: Vec<Field<'a>>,
	yours: Ticket,
	nearby: Vec<Ticket>,
}

impl Notes<'_> {
	fn invalid_values<'t>(&'t self, ticket: &'t Ticket) -> impl Iterator<Item = u64> + 't {
		ticket.iter().copied().filter(|&v| !self.fields.iter().any(|f| f.allows(v)))
	}
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::NotesError),
	#[error("cannot deduce the field of column {0}")]
	Ambiguous(usize),
}


fn input_notes_from_str(s: &str) -> Result<Notes<'_>, parsing::NotesError> {
	parsing::try_notes_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let notes = input_notes_from_str(input)?;
	Ok(notes.nearby.iter().flat_map(|t| notes.invalid_values(t)).sum())
}


/// Field index for every column, by repeatedly fixing a column that only one
/// remaining field fits.
fn deduce_columns(notes: &Notes) -> Result<Vec<usize>, Error> {
	let valid = notes.nearby.iter()
		.filter(|t| notes.invalid_values(t).next().is_none())
		.chain(std::iter::once(&notes.yours))
		.collect::<Vec<_>>();

	let num_columns = notes.fields.len();
	let mut candidates = (0..num_columns)
		.map(|column| (0..notes.fields.len())
			.filter(|&f| valid.iter().all(|t| notes.fields[f].allows(t[column])))
			.collect::<Vec<_>>())
		.collect::<Vec<_>>();

	let mut assigned = vec![None; num_columns];
	while let Some(column) = (0..num_columns)
			.find(|&c| assigned[c].is_none() && candidates[c].len() == 1) {
		let field = candidates[column][0];
		assigned[column] = Some(field);
		for candidates in &mut candidates { candidates.retain(|&f| f != field) }
	}

	assigned.into_iter()
		.enumerate()
		.map(|(column, field)| field.ok_or(Error::Ambiguous(column)))
		.collect()
}

fn part2_impl(notes: &Notes, prefix: &str) -> Result<u64, Error> {
	Ok(deduce_columns(notes)?.into_iter()
		.zip(&notes.yours)
		.filter(|&(f, _)| notes.fields[f].name.starts_with(prefix))
		.map(|(_, &value)| value)
		.product())
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl(&input_notes_from_str(input)?, "departure")
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive};
	use super::{Field, Notes, Ticket};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum NotesError {
		#[error("expected field rules, `your ticket:` and `nearby tickets:` sections")]
		Sections,
		#[error("line {line}: invalid field rule")]
		Field { line: usize },
		#[error("line {line}: invalid number: {source}")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line}: expected {expected} values, found {found}")]
		Len { line: usize, expected: usize, found: usize },
	}

	fn try_field_from_str(line: usize, s: &str) -> Result<Field<'_>, NotesError> {
		let (name, ranges) = s.split_once(": ").ok_or(NotesError::Field { line })?;
		let (r0, r1) = ranges.split_once(" or ").ok_or(NotesError::Field { line })?;
		let range = |r: &str| -> Result<RangeInclusive<u64>, NotesError> {
			let (lo, hi) = r.split_once('-').ok_or(NotesError::Field { line })?;
			let num = |n: &str| n.parse::<u64>().map_err(|source| NotesError::Number { line, source });
			Ok(num(lo)?..=num(hi)?)
		};
		Ok(Field { name, ranges: [range(r0)?, range(r1)?] })
	}

	fn try_ticket_from_str(line: usize, s: &str, expected: usize) -> Result<Ticket, NotesError> {
		let ticket = s.split(',')
			.map(|v| v.parse().map_err(|source| NotesError::Number { line, source }))
			.collect::<Result<Ticket, _>>()?;
		if ticket.len() != expected {
			return Err(NotesError::Len { line, expected, found: ticket.len() })
		}
		Ok(ticket)
	}

	pub(super) fn try_notes_from_str(s: &str) -> Result<Notes<'_>, NotesError> {
		let mut paragraphs = crate::input::paragraphs(s);
		let (Some((l0, rules)), Some((l1, yours)), Some((l2, nearby)), None) =
			(paragraphs.next(), paragraphs.next(), paragraphs.next(), paragraphs.next())
			else { return Err(NotesError::Sections) };

		let fields = rules.iter()
			.enumerate()
			.map(|(l, &rule)| try_field_from_str(l0 + l, rule))
			.collect::<Result<Vec<_>, _>>()?;

		let (&["your ticket:", yours], ["nearby tickets:", nearby @ ..]) = (&yours[..], &nearby[..])
			else { return Err(NotesError::Sections) };
		let yours = try_ticket_from_str(l1 + 1, yours, fields.len())?;
		let nearby = nearby.iter()
			.enumerate()
			.map(|(l, ticket)| try_ticket_from_str(l2 + 1 + l, ticket, fields.len()))
			.collect::<Result<_, _>>()?;

		Ok(Notes { fields, yours, nearby })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1(indoc::indoc! { "
			class: 1-3 or 5-7
			row: 6-11 or 33-44
			seat: 13-40 or 45-50

			your ticket:
			7,1,14

			nearby tickets:
			7,3,47
			40,4,50
			55,2,20
			38,6,12
		" }).unwrap(), 71);

		let notes = input_notes_from_str(indoc::indoc! { "
			class: 0-1 or 4-19
			row: 0-5 or 8-19
			seat: 0-13 or 16-19

			your ticket:
			11,12,13

			nearby tickets:
			3,9,18
			15,1,5
			5,14,9
		" }).unwrap();
		assert_eq!(notes.fields[0], Field { name: "class", ranges: [0..=1, 4..=19] });
		assert_eq!(deduce_columns(&notes).unwrap(), [1, 0, 2]);
		assert_eq!(part2_impl(&notes, "seat").unwrap(), 13);
		assert_eq!(part2_impl(&notes, "").unwrap(), 11 * 12 * 13);

		assert!(matches!(part1("a: 1-2 or 3-4\n\nyour ticket:\n1\n\nnearby tickets:\n1,2\n"),
			Err(Error::Parse(parsing::NotesError::Len { line: 7, expected: 1, found: 2 }))));
	}
}
