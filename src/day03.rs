// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Rows of trees; each row repeats endlessly to the right.
struct Map {
	width: usize,
	trees: Vec<bool>,
}

impl Map {
	fn height(&self) -> usize {
		self.trees.len() / self.width
	}

	fn count_trees(&self, (right, down): (usize, usize)) -> usize {
		(0..self.height())
			.step_by(down)
			.enumerate()
			.filter(|&(i, y)| self.trees[y * self.width + (i * right) % self.width])
			.count()
	}
}


fn input_map_from_str(s: &str) -> Result<Map, parsing::MapError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::MapError> {
	Ok(input_map_from_str(input)?.count_trees((3, 1)))
}


pub(crate) fn part2(input: &str) -> Result<usize, parsing::MapError> {
	let map = input_map_from_str(input)?;
	Ok([(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)].into_iter()
		.map(|slope| map.count_trees(slope))
		.product())
}


mod parsing {
	use std::str::FromStr;
	use super::Map;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MapError {
		#[error("empty map")]
		Empty,
		#[error("line {line}: expected {expected} columns, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid square {found:?}")]
		Square { line: usize, column: usize, found: char },
	}

	impl FromStr for Map {
		type Err = MapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut width = None;
			let mut trees = Vec::new();
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected || expected == 0 {
					return Err(MapError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					trees.push(match chr {
						'#' => true,
						'.' => false,
						found => return Err(MapError::Square { line: l + 1, column: c + 1, found }),
					})
				}
			}
			let width = width.ok_or(MapError::Empty)?;
			Ok(Map { width, trees })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		..##.......
		#...#...#..
		.#....#..#.
		..#.#...#.#
		.#...##..#.
		..#.##.....
		.#.#.#....#
		.#........#
		#.##...#...
		#...##....#
		.#..#...#.#
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 7);
		let map = input_map_from_str(INPUT).unwrap();
		assert_eq!(map.count_trees((1, 2)), 2);
		assert_eq!(part2(INPUT).unwrap(), 336);
		assert!(matches!(part1("..\n.x\n"), Err(parsing::MapError::Square { line: 2, column: 2, .. })));
	}
}
