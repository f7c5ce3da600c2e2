// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


/// Square grid of pixels, `true` being `#`.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Square {
	size: usize,
	pixels: Vec<bool>,
}

#[derive(Clone, Copy)]
enum Side { Top, Right, Bottom, Left }

impl Square {
	fn from_fn(size: usize, pixel: impl Fn(usize, usize) -> bool) -> Self {
		Self { size, pixels: (0..size * size).map(|i| pixel(i % size, i / size)).collect() }
	}

	fn get(&self, x: usize, y: usize) -> bool {
		self.pixels[y * self.size + x]
	}

	fn count(&self) -> usize {
		self.pixels.iter().filter(|&&p| p).count()
	}

	fn rotated(&self) -> Self {
		let n = self.size;
		Self::from_fn(n, |x, y| self.get(y, n - 1 - x))
	}

	fn flipped(&self) -> Self {
		let n = self.size;
		Self::from_fn(n, |x, y| self.get(n - 1 - x, y))
	}

	/// All eight rotations and reflections, starting with `self` as is.
	fn orientations(&self) -> impl Iterator<Item = Self> {
		let mut current = self.clone();
		(0..8).map(move |i| {
			if i == 4 { current = current.flipped() }
			let next = current.rotated();
			std::mem::replace(&mut current, next)
		})
	}

	/// Bits of the edge along `side`, read left to right or top to bottom.
	fn edge(&self, side: Side) -> u16 {
		let n = self.size;
		(0..n)
			.filter(|&i| match side {
				Side::Top => self.get(i, 0),
				Side::Right => self.get(n - 1, i),
				Side::Bottom => self.get(i, n - 1),
				Side::Left => self.get(0, i),
			})
			.fold(0, |edge, i| edge | 1 << i)
	}

	fn edges(&self) -> [u16; 4] {
		[Side::Top, Side::Right, Side::Bottom, Side::Left].map(|side| self.edge(side))
	}
}

/// Same for an edge and its reverse, so matching edges share it whatever the orientation.
fn fingerprint(edge: u16, size: usize) -> u16 {
	edge.min(edge.reverse_bits() >> (16 - size))
}


struct Tile {
	id: u64,
	square: Square,
}

struct Jigsaw {
	tile_size: usize,
	tiles: Vec<Tile>,
	/// Tile indices by the fingerprints of their edges.
	fingerprints: HashMap<u16, Vec<usize>>,
}

impl Jigsaw {
	fn new(tile_size: usize, tiles: Vec<Tile>) -> Self {
		let mut fingerprints = HashMap::<_, Vec<_>>::new();
		for (t, tile) in tiles.iter().enumerate() {
			for edge in tile.square.edges() {
				fingerprints.entry(fingerprint(edge, tile_size)).or_default().push(t);
			}
		}
		Self { tile_size, tiles, fingerprints }
	}

	fn is_unmatched(&self, edge: u16) -> bool {
		self.fingerprints.get(&fingerprint(edge, self.tile_size)).map_or(true, |t| t.len() < 2)
	}

	/// Indices of the tiles with two unmatched edges.
	fn corners(&self) -> Result<Vec<usize>, Error> {
		let corners = self.tiles.iter()
			.enumerate()
			.filter(|(_, tile)| tile.square.edges().into_iter()
				.filter(|&edge| self.is_unmatched(edge))
				.count() == 2)
			.map(|(t, _)| t)
			.collect::<Vec<_>>();
		if corners.len() != 4 { return Err(Error::Corners(corners.len())) }
		Ok(corners)
	}

	/// Places the tiles row by row, starting from a corner, and joins them with
	/// their borders stripped.
	fn assemble(&self) -> Result<Square, Error> {
		use num_integer::Roots as _;

		let n = self.tiles.len().sqrt();
		if n * n != self.tiles.len() { return Err(Error::NotSquare(self.tiles.len())) }

		let first = self.corners()?[0];
		let first_square = self.tiles[first].square.orientations()
			.find(|o| self.is_unmatched(o.edge(Side::Top)) && self.is_unmatched(o.edge(Side::Left)))
			.ok_or(Error::Unplaceable { row: 0, column: 0 })?;

		let mut used = vec![false; self.tiles.len()];
		used[first] = true;
		let mut placed = vec![first_square];

		for pos in 1..n * n {
			let (row, column) = (pos / n, pos % n);
			let (edge, side) = if column > 0 {
				(placed[pos - 1].edge(Side::Right), Side::Left)
			} else {
				(placed[pos - n].edge(Side::Bottom), Side::Top)
			};
			let (t, square) = self.fingerprints.get(&fingerprint(edge, self.tile_size))
				.into_iter()
				.flatten()
				.filter(|&&t| !used[t])
				.find_map(|&t| self.tiles[t].square.orientations()
					.find(|o| o.edge(side) == edge)
					.map(|o| (t, o)))
				.ok_or(Error::Unplaceable { row, column })?;
			tracing::trace!(row, column, id = self.tiles[t].id, "placed tile");
			used[t] = true;
			placed.push(square);
		}

		let inner = self.tile_size - 2;
		Ok(Square::from_fn(n * inner, |x, y| placed[(y / inner) * n + x / inner]
			.get(x % inner + 1, y % inner + 1)))
	}
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::JigsawError),
	#[error("expected 4 corner tiles, found {0}")]
	Corners(usize),
	#[error("{0} tiles cannot form a square")]
	NotSquare(usize),
	#[error("no tile fits at row {row}, column {column}")]
	Unplaceable { row: usize, column: usize },
}


fn input_jigsaw_from_str(s: &str) -> Result<Jigsaw, parsing::JigsawError> {
	parsing::try_jigsaw_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let jigsaw = input_jigsaw_from_str(input)?;
	Ok(jigsaw.corners()?.into_iter().map(|t| jigsaw.tiles[t].id).product())
}


const SEA_MONSTER: [&str; 3] = [
	"                  # ",
	"#    ##    ##    ###",
	" #  #  #  #   #  #  ",
];

/// Pixels that are `#` but not part of any sea monster, in the first
/// orientation that has sea monsters at all.
fn roughness(image: &Square) -> usize {
	let monster = SEA_MONSTER.iter()
		.enumerate()
		.flat_map(|(y, line)| line.bytes()
			.enumerate()
			.filter(|&(_, b)| b == b'#')
			.map(move |(x, _)| (x, y)))
		.collect::<Vec<_>>();
	let (width, height) = (SEA_MONSTER[0].len(), SEA_MONSTER.len());

	for (o, oriented) in image.orientations().enumerate() {
		let mut found = 0;
		let mut monster_pixels = HashSet::new();
		for y in 0..(oriented.size + 1).saturating_sub(height) {
			for x in 0..(oriented.size + 1).saturating_sub(width) {
				if monster.iter().all(|&(dx, dy)| oriented.get(x + dx, y + dy)) {
					found += 1;
					monster_pixels.extend(monster.iter().map(|&(dx, dy)| (x + dx, y + dy)));
				}
			}
		}
		if found > 0 {
			tracing::debug!(orientation = o, found, "found sea monsters");
			return oriented.count() - monster_pixels.len()
		}
	}

	tracing::warn!("no sea monsters in any orientation");
	image.count()
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	Ok(roughness(&input_jigsaw_from_str(input)?.assemble()?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Jigsaw, Square, Tile};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum JigsawError {
		#[error("line {line}: expected `Tile <id>:`")]
		Header { line: usize },
		#[error("line {line}: invalid tile ID: {source}")]
		Id { line: usize, source: ParseIntError },
		#[error("line {line}: tile is not square or differs in size from the others")]
		Shape { line: usize },
		#[error("line {line}, column {column}: invalid pixel {found:?}")]
		Pixel { line: usize, column: usize, found: char },
	}

	fn try_tile_from_lines(line: usize, lines: &[&str], size: Option<usize>) -> Result<Tile, JigsawError> {
		let (header, rows) = lines.split_first().ok_or(JigsawError::Header { line })?;
		let id = header.strip_prefix("Tile ")
			.and_then(|h| h.strip_suffix(':'))
			.ok_or(JigsawError::Header { line })?
			.parse()
			.map_err(|source| JigsawError::Id { line, source })?;

		let size = size.unwrap_or(rows.len());
		if !(3..=16).contains(&size) || rows.len() != size {
			return Err(JigsawError::Shape { line })
		}

		let mut pixels = Vec::with_capacity(size * size);
		for (y, row) in rows.iter().enumerate() {
			let line = line + 1 + y;
			if row.chars().count() != size { return Err(JigsawError::Shape { line }) }
			for (x, chr) in row.chars().enumerate() {
				pixels.push(match chr {
					'#' => true,
					'.' => false,
					found => return Err(JigsawError::Pixel { line, column: x + 1, found }),
				});
			}
		}

		Ok(Tile { id, square: Square { size, pixels } })
	}

	pub(super) fn try_jigsaw_from_str(s: &str) -> Result<Jigsaw, JigsawError> {
		let mut size = None;
		let tiles = crate::input::paragraphs(s)
			.map(|(line, lines)| {
				let tile = try_tile_from_lines(line, &lines, size)?;
				size = Some(tile.square.size);
				Ok(tile)
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Jigsaw::new(size.unwrap_or(3), tiles))
	}

	#[test]
	fn tests() {
		let jigsaw = try_jigsaw_from_str("Tile 7:\n#..\n..#\n.##\n").unwrap();
		assert_eq!(jigsaw.tiles[0].id, 7);
		assert_eq!(jigsaw.tiles[0].square.edges(), [0b001, 0b110, 0b110, 0b001]);
		assert!(matches!(try_jigsaw_from_str("Tile x:\n#..\n..#\n.##\n"),
			Err(JigsawError::Id { line: 1, .. })));
		assert!(matches!(try_jigsaw_from_str("Tile 1:\n#..\n..#\n.##\n\nTile 2:\n##\n.#\n"),
			Err(JigsawError::Shape { line: 6 })));
		assert!(matches!(try_jigsaw_from_str("Tile 1:\n#..\n.o#\n.##\n"),
			Err(JigsawError::Pixel { line: 3, column: 2, found: 'o' })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn square() {
		let square = Square::from_fn(3, |x, y| (x, y) == (0, 0) || (x, y) == (1, 0));
		let orientations = square.orientations().collect::<Vec<_>>();
		assert_eq!(orientations[0], square);
		assert_eq!(orientations[4], square.flipped());
		for (i, a) in orientations.iter().enumerate() {
			assert!(orientations[i + 1..].iter().all(|b| a != b));
		}
		assert_eq!(square.edge(Side::Top), 0b011);
		assert_eq!(square.flipped().edge(Side::Top), 0b110);
		assert_eq!(fingerprint(0b110, 3), 0b011);
		assert_eq!(fingerprint(0b0000000011, 10), 0b0000000011);
		assert_eq!(fingerprint(0b1100000000, 10), 0b0000000011);
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 4024 * 5784 * 5821 * 9510);
		let image = input_jigsaw_from_str(INPUT).unwrap().assemble().unwrap();
		assert_eq!(image.size, 24);
		assert_eq!(part2(INPUT).unwrap(), 193);
		assert!(matches!(part1("Tile 1:\n#..\n..#\n.##\n"), Err(Error::Corners(0))));
	}

	const INPUT: &str = indoc::indoc! { "
		Tile 1463:
		..####.##.
		...#..###.
		....#...#.
		..#....#..
		....###...
		#....#....
		##...####.
		..#.###.##
		.#..#...#.
		...##..###

		Tile 2570:
		...##..###
		#........#
		#.......#.
		#....##...
		.....#...#
		..###...#.
		......##.#
		.##...#...
		#.#.#.....
		#...#.....

		Tile 5784:
		#....##.##
		.........#
		.....#..##
		##.##..##.
		.##.#..##.
		.#.######.
		##...###.#
		####.#.#..
		.#..#....#
		##....###.

		Tile 5821:
		....##.##.
		....#.#...
		........#.
		#.####.#..
		.#.#..#.##
		##.##.##..
		.#..#..##.
		...##....#
		##.....#..
		#..###.#.#

		Tile 4024:
		...#..##..
		.........#
		.#.#.#....
		....#.##..
		#..###..#.
		#..###.#..
		.....#....
		.....##...
		.#####..#.
		.........#

		Tile 1296:
		###...#.#.
		.#.#.##...
		.#...#....
		..#..#..##
		.....#..##
		....#..##.
		###.#.#...
		..#...##..
		.....#.#..
		....##....

		Tile 9510:
		...#....#.
		###.##.#..
		..#...#...
		##...#..#.
		##...#####
		#..#......
		#.......#.
		.....###.#
		.#...##.#.
		..........

		Tile 9249:
		###.......
		...#..#...
		##..##.#..
		..#.#...##
		##..##.#.#
		#...###..#
		###.####.#
		.#####....
		...##.##.#
		#.#.......

		Tile 3468:
		#.........
		###.##.#..
		...###..##
		.###.....#
		.........#
		.#.##..#.#
		.#...#....
		.###.....#
		..###.####
		.#....#...
	" };
}
