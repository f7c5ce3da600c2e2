// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


const SHINY_GOLD: &str = "shiny gold";

/// Container color as key, contained quantities and colors as value.
type Rules<'a> = HashMap<&'a str, Vec<(u64, &'a str)>>;


fn input_rules_from_str(s: &str) -> Result<Rules<'_>, parsing::RulesError> {
	parsing::try_rules_from_str(s)
}


fn part1_impl(rules: &Rules) -> usize {
	let mut containers: HashMap<&str, Vec<&str>> = HashMap::new();
	for (&outer, contents) in rules {
		for &(_, inner) in contents {
			containers.entry(inner).or_default().push(outer);
		}
	}

	let mut seen = HashSet::new();
	let mut stack = vec![SHINY_GOLD];
	while let Some(color) = stack.pop() {
		for &outer in containers.get(color).into_iter().flatten() {
			if seen.insert(outer) { stack.push(outer) }
		}
	}
	seen.len()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::RulesError> {
	Ok(part1_impl(&input_rules_from_str(input)?))
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::RulesError),
	#[error("{0:?} bags end up containing themselves")]
	Cycle(String),
}

/// Counts the bags inside one bag of `color`, memoized per color; `None`
/// marks a color whose count is still being computed.
fn count_inside<'a>(
	color: &'a str,
	rules: &Rules<'a>,
	memo: &mut HashMap<&'a str, Option<u64>>,
) -> Result<u64, Error> {
	match memo.get(color) {
		Some(&Some(count)) => return Ok(count),
		Some(None) => return Err(Error::Cycle(color.to_owned())),
		None => (),
	}
	memo.insert(color, None);
	let mut count = 0;
	for &(quantity, inner) in rules.get(color).into_iter().flatten() {
		count += quantity * (1 + count_inside(inner, rules, memo)?);
	}
	memo.insert(color, Some(count));
	Ok(count)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let rules = input_rules_from_str(input)?;
	count_inside(SHINY_GOLD, &rules, &mut HashMap::new())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Rules;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RuleError {
		#[error("expected `<color> bags contain <contents>.`")]
		Format,
		#[error("invalid contents {0:?}")]
		Contents(String),
		#[error("invalid quantity: {0}")]
		Quantity(ParseIntError),
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RulesError {
		#[error(transparent)]
		Rule(#[from] crate::input::LineError<RuleError>),
		#[error("line {line}: duplicate rule for {color:?}")]
		Duplicate { line: usize, color: String },
	}

	type Rule<'a> = (&'a str, Vec<(u64, &'a str)>);

	fn try_rule_from_str(s: &str) -> Result<Rule<'_>, RuleError> {
		use RuleError::*;
		let (outer, contents) = s.split_once(" bags contain ").ok_or(Format)?;
		let contents = contents.strip_suffix('.').ok_or(Format)?;
		if contents == "no other bags" { return Ok((outer, Vec::new())) }
		let contents = contents.split(", ")
			.map(|content| -> Result<_, RuleError> {
				let content = content.strip_suffix(" bags")
					.or_else(|| content.strip_suffix(" bag"))
					.ok_or_else(|| Contents(content.to_owned()))?;
				let (quantity, color) = content.split_once(' ')
					.ok_or_else(|| Contents(content.to_owned()))?;
				Ok((quantity.parse().map_err(Quantity)?, color))
			})
			.collect::<Result<_, _>>()?;
		Ok((outer, contents))
	}

	pub(super) fn try_rules_from_str(s: &str) -> Result<Rules<'_>, RulesError> {
		let mut rules = Rules::new();
		for (l, (outer, contents)) in crate::input::try_parse_lines(s, try_rule_from_str)?.into_iter().enumerate() {
			if rules.insert(outer, contents).is_some() {
				return Err(RulesError::Duplicate { line: l + 1, color: outer.to_owned() })
			}
		}
		Ok(rules)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			light red bags contain 1 bright white bag, 2 muted yellow bags.
			dark orange bags contain 3 bright white bags, 4 muted yellow bags.
			bright white bags contain 1 shiny gold bag.
			muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
			shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
			dark olive bags contain 3 faded blue bags, 4 dotted black bags.
			vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
			faded blue bags contain no other bags.
			dotted black bags contain no other bags.
		" },
		indoc::indoc! { "
			shiny gold bags contain 2 dark red bags.
			dark red bags contain 2 dark orange bags.
			dark orange bags contain 2 dark yellow bags.
			dark yellow bags contain 2 dark green bags.
			dark green bags contain 2 dark blue bags.
			dark blue bags contain 2 dark violet bags.
			dark violet bags contain no other bags.
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 4);
		assert_eq!(part2(INPUTS[0]).unwrap(), 32);
		assert_eq!(part2(INPUTS[1]).unwrap(), 126);
		assert!(matches!(part2(indoc::indoc! { "
			shiny gold bags contain 1 dark red bag.
			dark red bags contain 2 shiny gold bags.
		" }), Err(Error::Cycle(color)) if color == "shiny gold"));
		assert_eq!(part1(indoc::indoc! { "
			shiny gold bags contain 1 dark red bag.
			dark red bags contain 2 shiny gold bags.
		" }).unwrap(), 2);
		assert!(matches!(part1("faded blue bags contain some bags."),
			Err(parsing::RulesError::Rule(crate::input::LineError { line: 1, .. }))));
	}
}
