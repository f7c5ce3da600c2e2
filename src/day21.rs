// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{BTreeMap, HashSet};


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Food<'a> {
	ingredients: HashSet<&'a str>,
	allergens: Vec<&'a str>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::FoodsError),
	#[error("cannot determine which ingredient contains {0}")]
	Unresolved(String),
}


/// Per allergen, the ingredients present in every food listing it.
fn candidates<'a>(foods: &[Food<'a>]) -> BTreeMap<&'a str, HashSet<&'a str>> {
	let mut candidates = BTreeMap::<_, HashSet<_>>::new();
	for food in foods {
		for &allergen in &food.allergens {
			candidates.entry(allergen)
				.and_modify(|c| c.retain(|i| food.ingredients.contains(i)))
				.or_insert_with(|| food.ingredients.clone());
		}
	}
	candidates
}


fn input_foods_from_str(s: &str) -> Result<Vec<Food<'_>>, parsing::FoodsError> {
	crate::input::try_parse_lines(s, parsing::try_food_from_str)
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let foods = input_foods_from_str(input)?;
	let suspect = candidates(&foods).into_values().flatten().collect::<HashSet<_>>();
	Ok(foods.iter()
		.flat_map(|f| &f.ingredients)
		.filter(|i| !suspect.contains(*i))
		.count())
}


/// Resolves allergens by repeatedly fixing one with a single candidate left.
fn dangerous<'a>(foods: &[Food<'a>]) -> Result<BTreeMap<&'a str, &'a str>, Error> {
	let mut candidates = candidates(foods);
	let mut resolved = BTreeMap::new();
	while !candidates.is_empty() {
		let Some((&allergen, ingredient)) = candidates.iter()
			.find(|(_, c)| c.len() == 1)
			.and_then(|(a, c)| c.iter().next().map(|&i| (a, i)))
		else {
			let unresolved = candidates.keys().next().copied().unwrap_or_default();
			return Err(Error::Unresolved(unresolved.to_owned()))
		};
		tracing::trace!(allergen, ingredient, "resolved");
		candidates.remove(allergen);
		for c in candidates.values_mut() { c.remove(ingredient); }
		resolved.insert(allergen, ingredient);
	}
	Ok(resolved)
}

pub(crate) fn part2(input: &str) -> Result<String, Error> {
	use itertools::Itertools as _;
	Ok(dangerous(&input_foods_from_str(input)?)?.into_values().join(","))
}


mod parsing {
	use super::Food;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum FoodError {
		#[error("expected `<ingredients> (contains <allergens>)`")]
		Format,
		#[error("no ingredients")]
		Empty,
	}

	pub(crate) type FoodsError = crate::input::LineError<FoodError>;

	pub(super) fn try_food_from_str(s: &str) -> Result<Food<'_>, FoodError> {
		let (ingredients, allergens) = match s.split_once(" (contains ") {
			Some((ingredients, allergens)) => {
				let allergens = allergens.strip_suffix(')').ok_or(FoodError::Format)?;
				(ingredients, allergens.split(", ").collect())
			}
			None if !s.contains('(') => (s, Vec::new()),
			None => return Err(FoodError::Format),
		};
		let ingredients = ingredients.split_whitespace().collect::<std::collections::HashSet<_>>();
		if ingredients.is_empty() { return Err(FoodError::Empty) }
		Ok(Food { ingredients, allergens })
	}

	#[test]
	fn tests() {
		let food = try_food_from_str("a b (contains x, y)").unwrap();
		assert_eq!(food.ingredients, ["a", "b"].into_iter().collect());
		assert_eq!(food.allergens, ["x", "y"]);
		assert!(try_food_from_str("a b").unwrap().allergens.is_empty());
		assert!(matches!(try_food_from_str("a (contains x"), Err(FoodError::Format)));
		assert!(matches!(try_food_from_str(" (contains x)"), Err(FoodError::Empty)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		mxmxvkd kfcds sqjhc nhms (contains dairy, fish)
		trh fvjkl sbzzf mxmxvkd (contains dairy)
		sqjhc fvjkl (contains soy)
		sqjhc mxmxvkd sbzzf (contains fish)
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 5);
		assert_eq!(part2(INPUT).unwrap(), "mxmxvkd,sqjhc,fvjkl");
		assert!(matches!(part2("a b (contains x)\n"), Err(Error::Unresolved(a)) if a == "x"));
	}
}
