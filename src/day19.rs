// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Rule {
	Char(u8),
	/// Alternative sequences of rule numbers.
	Alts(Vec<Vec<usize>>),
}

type Rules = HashMap<usize, Rule>;

struct Puzzle<'a> {
	rules: Rules,
	messages: Vec<&'a str>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::PuzzleError),
	#[error("rule {0} is referenced but not defined")]
	Undefined(usize),
}


/// Every position right after a match of `rule` starting at `start`.
fn match_ends(rules: &Rules, rule: usize, message: &[u8], start: usize) -> Vec<usize> {
	match &rules[&rule] {
		Rule::Char(chr) => match message.get(start) {
			Some(c) if c == chr => vec![start + 1],
			_ => vec![],
		},
		Rule::Alts(alts) => alts.iter()
			.flat_map(|seq| seq.iter().fold(vec![start], |ends, &sub| ends.into_iter()
				.flat_map(|end| match_ends(rules, sub, message, end))
				.collect()))
			.collect(),
	}
}

fn matches(rules: &Rules, message: &str) -> bool {
	match_ends(rules, 0, message.as_bytes(), 0).contains(&message.len())
}

fn check_defined(rules: &Rules) -> Result<(), Error> {
	if !rules.contains_key(&0) { return Err(Error::Undefined(0)) }
	for rule in rules.values() {
		let Rule::Alts(alts) = rule else { continue };
		if let Some(&undefined) = alts.iter().flatten().find(|&&r| !rules.contains_key(&r)) {
			return Err(Error::Undefined(undefined))
		}
	}
	Ok(())
}

fn count_matching(puzzle: &Puzzle) -> Result<usize, Error> {
	check_defined(&puzzle.rules)?;
	Ok(puzzle.messages.iter().filter(|m| matches(&puzzle.rules, m)).count())
}


fn input_puzzle_from_str(s: &str) -> Result<Puzzle<'_>, parsing::PuzzleError> {
	parsing::try_puzzle_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	count_matching(&input_puzzle_from_str(input)?)
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let mut puzzle = input_puzzle_from_str(input)?;
	puzzle.rules.insert(8, Rule::Alts(vec![vec![42], vec![42, 8]]));
	puzzle.rules.insert(11, Rule::Alts(vec![vec![42, 31], vec![42, 11, 31]]));
	count_matching(&puzzle)
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Puzzle, Rule, Rules};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RuleError {
		#[error("expected `<number>: <rule>`")]
		Format,
		#[error("invalid rule number: {0}")]
		Number(#[from] ParseIntError),
		#[error("invalid character literal")]
		Char,
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PuzzleError {
		#[error("expected rules and messages sections")]
		Sections,
		#[error("line {line}: {source}")]
		Rule { line: usize, source: RuleError },
		#[error("line {line}: rule {number} is defined twice")]
		Duplicate { line: usize, number: usize },
	}

	fn try_rule_from_str(s: &str) -> Result<(usize, Rule), RuleError> {
		let (number, rule) = s.split_once(": ").ok_or(RuleError::Format)?;
		let number = number.parse()?;
		if let Some(literal) = rule.strip_prefix('"') {
			return match literal.as_bytes() {
				&[chr, b'"'] => Ok((number, Rule::Char(chr))),
				_ => Err(RuleError::Char),
			}
		}
		let alts = rule.split(" | ")
			.map(|seq| seq.split_whitespace().map(str::parse::<usize>).collect::<Result<Vec<_>, _>>())
			.collect::<Result<Vec<_>, _>>()?;
		if alts.iter().any(Vec::is_empty) { return Err(RuleError::Format) }
		Ok((number, Rule::Alts(alts)))
	}

	pub(super) fn try_puzzle_from_str(s: &str) -> Result<Puzzle<'_>, PuzzleError> {
		let mut paragraphs = crate::input::paragraphs(s);
		let (Some((l0, rule_lines)), Some((_, messages)), None) =
			(paragraphs.next(), paragraphs.next(), paragraphs.next())
			else { return Err(PuzzleError::Sections) };

		let mut rules = Rules::new();
		for (l, rule) in rule_lines.into_iter().enumerate() {
			let line = l0 + l;
			let (number, rule) = try_rule_from_str(rule)
				.map_err(|source| PuzzleError::Rule { line, source })?;
			if rules.insert(number, rule).is_some() {
				return Err(PuzzleError::Duplicate { line, number })
			}
		}

		Ok(Puzzle { rules, messages })
	}

	#[test]
	fn tests() {
		assert_eq!(try_rule_from_str("4: \"a\"").unwrap(), (4, Rule::Char(b'a')));
		assert_eq!(try_rule_from_str("1: 2 3 | 3 2").unwrap(),
			(1, Rule::Alts(vec![vec![2, 3], vec![3, 2]])));
		assert!(matches!(try_rule_from_str("1: \"ab\""), Err(RuleError::Char)));
		assert!(matches!(try_rule_from_str("1: 2 | "), Err(RuleError::Format)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1(indoc::indoc! { r#"
			0: 4 1 5
			1: 2 3 | 3 2
			2: 4 4 | 5 5
			3: 4 5 | 5 4
			4: "a"
			5: "b"

			ababbb
			bababa
			abbbab
			aaabbb
			aaaabbb
		"# }).unwrap(), 2);

		const INPUT: &str = indoc::indoc! { r#"
			42: 9 14 | 10 1
			9: 14 27 | 1 26
			10: 23 14 | 28 1
			1: "a"
			11: 42 31
			5: 1 14 | 15 1
			19: 14 1 | 14 14
			12: 24 14 | 19 1
			16: 15 1 | 14 14
			31: 14 17 | 1 13
			6: 14 14 | 1 14
			2: 1 24 | 14 4
			0: 8 11
			13: 14 3 | 1 12
			15: 1 | 14
			17: 14 2 | 1 7
			23: 25 1 | 22 14
			28: 16 1
			4: 1 1
			20: 14 14 | 1 15
			3: 5 14 | 16 1
			27: 1 6 | 14 18
			14: "b"
			21: 14 1 | 1 14
			25: 1 1 | 1 14
			22: 14 14
			8: 42
			26: 14 22 | 1 20
			18: 15 15
			7: 14 5 | 1 21
			24: 14 1

			abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
			bbabbbbaabaabba
			babbbbaabbbbbabbbbbbaabaaabaaa
			aaabbbbbbaaaabaababaabababbabaaabbababababaaa
			bbbbbbbaaaabbbbaaabbabaaa
			bbbababbbbaaaaaaaabbababaaababaabab
			ababaaaaaabaaab
			ababaaaaabbbaba
			baabbaaaabbaaaababbaababb
			abbbbabbbbaaaababbbbbbaaaababb
			aaaaabbaabaaaaababaa
			aaaabbaaaabbaaa
			aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
			babaaabbbaaabaababbaabababaaab
			aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba
		"# };
		assert_eq!(part1(INPUT).unwrap(), 3);
		assert_eq!(part2(INPUT).unwrap(), 12);

		assert!(matches!(part1("0: 1\n\na\n"), Err(Error::Undefined(1))));
		assert!(matches!(part1("0: \"a\"\n0: \"b\"\n\na\n"),
			Err(Error::Parse(parsing::PuzzleError::Duplicate { line: 2, number: 0 }))));
	}
}
