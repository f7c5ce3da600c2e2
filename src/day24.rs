// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Dir { E, Se, Sw, W, Nw, Ne }

impl Dir {
	const ALL: [Dir; 6] = [Dir::E, Dir::Se, Dir::Sw, Dir::W, Dir::Nw, Dir::Ne];

	/// Axial `(q, r)` offset.
	fn offset(self) -> (i32, i32) {
		match self {
			Dir::E => (1, 0),
			Dir::Se => (0, 1),
			Dir::Sw => (-1, 1),
			Dir::W => (-1, 0),
			Dir::Nw => (0, -1),
			Dir::Ne => (1, -1),
		}
	}
}

type Pos = (i32, i32);

fn walk(path: &[Dir]) -> Pos {
	path.iter().fold((0, 0), |(q, r), dir| {
		let (dq, dr) = dir.offset();
		(q + dq, r + dr)
	})
}

fn initial_black(paths: &[Vec<Dir>]) -> HashSet<Pos> {
	let mut black = HashSet::new();
	for path in paths {
		let pos = walk(path);
		if !black.remove(&pos) { black.insert(pos); }
	}
	black
}

fn next_day(black: &HashSet<Pos>) -> HashSet<Pos> {
	let mut black_neighbors = HashMap::<Pos, usize>::new();
	for &(q, r) in black {
		for (dq, dr) in Dir::ALL.map(Dir::offset) {
			*black_neighbors.entry((q + dq, r + dr)).or_default() += 1;
		}
	}
	black_neighbors.into_iter()
		.filter(|(pos, count)| *count == 2 || (*count == 1 && black.contains(pos)))
		.map(|(pos, _)| pos)
		.collect()
}


fn input_paths_from_str(s: &str) -> Result<Vec<Vec<Dir>>, parsing::PathsError> {
	crate::input::try_parse_lines(s, parsing::try_path_from_str)
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::PathsError> {
	Ok(initial_black(&input_paths_from_str(input)?).len())
}


fn part2_impl<const DAYS: usize>(paths: &[Vec<Dir>]) -> usize {
	let mut black = initial_black(paths);
	for _ in 0..DAYS { black = next_day(&black) }
	black.len()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PathsError> {
	Ok(part2_impl::<100>(&input_paths_from_str(input)?))
}


mod parsing {
	use super::Dir;

	#[derive(Debug, thiserror::Error)]
	#[error("column {column}: invalid direction")]
	pub(crate) struct PathError { column: usize }

	pub(crate) type PathsError = crate::input::LineError<PathError>;

	pub(super) fn try_path_from_str(s: &str) -> Result<Vec<Dir>, PathError> {
		let mut path = Vec::new();
		let mut rest = s.as_bytes();
		while !rest.is_empty() {
			let (dir, len) = match rest {
				[b'e', ..] => (Dir::E, 1),
				[b'w', ..] => (Dir::W, 1),
				[b's', b'e', ..] => (Dir::Se, 2),
				[b's', b'w', ..] => (Dir::Sw, 2),
				[b'n', b'w', ..] => (Dir::Nw, 2),
				[b'n', b'e', ..] => (Dir::Ne, 2),
				_ => return Err(PathError { column: s.len() - rest.len() + 1 }),
			};
			path.push(dir);
			rest = &rest[len..];
		}
		Ok(path)
	}

	#[test]
	fn tests() {
		assert_eq!(try_path_from_str("esenee").unwrap(), [Dir::E, Dir::Se, Dir::Ne, Dir::E]);
		assert!(matches!(try_path_from_str("esn"), Err(PathError { column: 2 })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		sesenwnenenewseeswwswswwnenewsewsw
		neeenesenwnwwswnenewnwwsewnenwseswesw
		seswneswswsenwwnwse
		nwnwneseeswswnenewneswwnewseswneseene
		swweswneswnenwsewnwneneseenw
		eesenwseswswnenwswnwnwsewwnwsene
		sewnenenenesenwsewnenwwwse
		wenwwweseeeweswwwnwwe
		wsweesenenewnwwnwsenewsenwwsesesenwne
		neeswseenwwswnwswswnw
		nenwswwsewswnenenewsenwsenwnesesenew
		enewnwewneswsewnwswenweswnenwsenwsw
		sweneswneswneneenwnewenewwneswswnese
		swwesenesewenwneswnwwneseswwne
		enesenwswwswneneswsenwnewswseenwsese
		wnwnesenesenenwwnenwsewesewsesesew
		nenewswnwewswnenesenwnesewesw
		eneswnwswnwsenenwnwnwwseeswneewsenese
		neswnwewnwnwseenwseesewsenwsweewe
		wseweeenwnesenwwwswnew
	" };

	#[test]
	fn tests() {
		assert_eq!(walk(&parsing::try_path_from_str("nwwswee").unwrap()), (0, 0));
		assert_eq!(part1(INPUT).unwrap(), 10);
		let paths = input_paths_from_str(INPUT).unwrap();
		assert_eq!(part2_impl::<1>(&paths), 15);
		assert_eq!(part2_impl::<10>(&paths), 37);
		assert_eq!(part2(INPUT).unwrap(), 2208);
	}
}
