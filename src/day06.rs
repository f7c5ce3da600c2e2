// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// The questions one person answered "yes" to, as a bit set over `a..=z`.
#[derive(Clone, Copy)]
struct Answers(u32);

impl Answers {
	const NONE: Answers = Answers(0);
	const ALL: Answers = Answers((1 << 26) - 1);

	fn count(self) -> u32 {
		self.0.count_ones()
	}
}

type Group = Vec<Answers>;


fn input_groups_from_str(s: &str) -> Result<Vec<Group>, parsing::GroupsError> {
	parsing::try_groups_from_str(s)
}


fn sum_counts(groups: &[Group], init: Answers, combine: impl Fn(Answers, Answers) -> Answers) -> u32 {
	groups.iter()
		.map(|group| group.iter().fold(init, |acc, &a| combine(acc, a)).count())
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::GroupsError> {
	Ok(sum_counts(&input_groups_from_str(input)?, Answers::NONE, |l, r| Answers(l.0 | r.0)))
}


pub(crate) fn part2(input: &str) -> Result<u32, parsing::GroupsError> {
	Ok(sum_counts(&input_groups_from_str(input)?, Answers::ALL, |l, r| Answers(l.0 & r.0)))
}


mod parsing {
	use super::{Answers, Group};

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}, column {column}: invalid answer {found:?}")]
	pub(crate) struct GroupsError { line: usize, column: usize, found: char }

	pub(super) fn try_groups_from_str(s: &str) -> Result<Vec<Group>, GroupsError> {
		crate::input::paragraphs(s)
			.map(|(first_line, lines)| lines.into_iter()
				.enumerate()
				.map(|(l, line)| line.chars()
					.enumerate()
					.try_fold(0, |bits, (c, chr)| match chr {
						'a'..='z' => Ok(bits | 1 << (chr as u8 - b'a')),
						found => Err(GroupsError { line: first_line + l, column: c + 1, found }),
					})
					.map(Answers))
				.collect::<Result<Group, _>>())
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		abc

		a
		b
		c

		ab
		ac

		a
		a
		a
		a

		b
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 11);
		assert_eq!(part2(INPUT).unwrap(), 6);
		assert!(part1("ab\n\naB\n").is_err());
	}
}
