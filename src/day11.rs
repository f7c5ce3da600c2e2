// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
enum Square { Floor, Empty, Occupied }

#[derive(Clone)]
struct Layout {
	width: usize,
	squares: Vec<Square>,
}

const DIRS: [(isize, isize); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

impl Layout {
	fn height(&self) -> usize {
		self.squares.len() / self.width
	}

	fn offset(&self, (x, y): (usize, usize), (dx, dy): (isize, isize)) -> Option<(usize, usize)> {
		let x = x.checked_add_signed(dx).filter(|&x| x < self.width)?;
		let y = y.checked_add_signed(dy).filter(|&y| y < self.height())?;
		Some((x, y))
	}

	fn at(&self, (x, y): (usize, usize)) -> Square {
		self.squares[y * self.width + x]
	}

	/// Occupied seats among the first seat in each direction, skipping floor when `far`.
	fn occupied_neighbors(&self, pos: (usize, usize), far: bool) -> usize {
		DIRS.iter()
			.filter(|&&dir| {
				let mut pos = pos;
				while let Some(next) = self.offset(pos, dir) {
					match self.at(next) {
						Square::Floor if far => pos = next,
						square => return square == Square::Occupied,
					}
				}
				false
			})
			.count()
	}

	/// Returns whether any seat changed.
	fn step(&mut self, far: bool, tolerance: usize) -> bool {
		let prev = self.clone();
		let mut changed = false;
		for (i, square) in self.squares.iter_mut().enumerate() {
			let pos = (i % prev.width, i / prev.width);
			match *square {
				Square::Empty if prev.occupied_neighbors(pos, far) == 0 => *square = Square::Occupied,
				Square::Occupied if prev.occupied_neighbors(pos, far) >= tolerance => *square = Square::Empty,
				_ => continue,
			}
			changed = true;
		}
		changed
	}

	fn settle(mut self, far: bool, tolerance: usize) -> usize {
		let mut rounds = 0;
		while self.step(far, tolerance) { rounds += 1 }
		tracing::debug!(rounds, "settled");
		self.squares.iter().filter(|&&s| s == Square::Occupied).count()
	}
}


fn input_layout_from_str(s: &str) -> Result<Layout, parsing::LayoutError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::LayoutError> {
	Ok(input_layout_from_str(input)?.settle(false, 4))
}


pub(crate) fn part2(input: &str) -> Result<usize, parsing::LayoutError> {
	Ok(input_layout_from_str(input)?.settle(true, 5))
}


mod parsing {
	use std::str::FromStr;
	use super::{Layout, Square};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum LayoutError {
		#[error("empty layout")]
		Empty,
		#[error("line {line}: expected {expected} columns, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid square {found:?}")]
		Square { line: usize, column: usize, found: char },
	}

	impl FromStr for Layout {
		type Err = LayoutError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut width = None;
			let mut squares = Vec::new();
			for (l, line) in s.lines().enumerate() {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected || expected == 0 {
					return Err(LayoutError::Width { line: l + 1, expected, found: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					squares.push(match chr {
						'.' => Square::Floor,
						'L' => Square::Empty,
						'#' => Square::Occupied,
						found => return Err(LayoutError::Square { line: l + 1, column: c + 1, found }),
					})
				}
			}
			Ok(Layout { width: width.ok_or(LayoutError::Empty)?, squares })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		L.LL.LL.LL
		LLLLLLL.LL
		L.L.L..L..
		LLLL.LL.LL
		L.LL.LL.LL
		L.LLLLL.LL
		..L.L.....
		LLLLLLLLLL
		L.LLLLLL.L
		L.LLLLL.LL
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 37);
		assert_eq!(part2(INPUT).unwrap(), 26);

		let layout = input_layout_from_str(indoc::indoc! { "
			.##.##.
			#.#.#.#
			##...##
			...L...
			##...##
			#.#.#.#
			.##.##.
		" }).unwrap();
		assert_eq!(layout.occupied_neighbors((3, 3), true), 0);
		assert_eq!(layout.occupied_neighbors((3, 3), false), 0);
		assert_eq!(layout.occupied_neighbors((0, 1), false), 3);
	}
}
