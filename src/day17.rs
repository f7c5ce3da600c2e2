// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


/// Active cubes in `D` dimensions.
#[derive(Clone)]
struct Pocket<const D: usize>(HashSet<[i32; D]>);

impl<const D: usize> Pocket<D> {
	const AT_LEAST_2D: () = assert!(D >= 2, "a pocket needs room for the initial slice");

	/// Lifts the initial 2D slice (`x`, `y`) into `D` dimensions.
	fn from_slice(slice: &[(i32, i32)]) -> Self {
		let () = Self::AT_LEAST_2D;
		Self(slice.iter()
			.map(|&(x, y)| std::array::from_fn(|i| match i { 0 => x, 1 => y, _ => 0 }))
			.collect())
	}

	fn neighbor_offsets() -> Vec<[i32; D]> {
		use itertools::Itertools as _;
		(0..D).map(|_| -1..=1)
			.multi_cartesian_product()
			.filter(|offset| offset.iter().any(|&o| o != 0))
			.map(|offset| std::array::from_fn(|i| offset[i]))
			.collect()
	}

	fn cycle(&mut self, offsets: &[[i32; D]]) {
		let mut active_neighbors = HashMap::<[i32; D], usize>::new();
		for cube in &self.0 {
			for offset in offsets {
				let neighbor = std::array::from_fn(|i| cube[i] + offset[i]);
				*active_neighbors.entry(neighbor).or_default() += 1;
			}
		}
		self.0 = active_neighbors.into_iter()
			.filter(|(cube, count)| *count == 3 || (*count == 2 && self.0.contains(cube)))
			.map(|(cube, _)| cube)
			.collect();
	}

	fn boot(mut self, cycles: usize) -> usize {
		let offsets = Self::neighbor_offsets();
		for _ in 0..cycles { self.cycle(&offsets) }
		self.0.len()
	}
}


fn input_slice_from_str(s: &str) -> Result<Vec<(i32, i32)>, parsing::SliceError> {
	parsing::try_slice_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::SliceError> {
	Ok(Pocket::<3>::from_slice(&input_slice_from_str(input)?).boot(6))
}


pub(crate) fn part2(input: &str) -> Result<usize, parsing::SliceError> {
	Ok(Pocket::<4>::from_slice(&input_slice_from_str(input)?).boot(6))
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	#[error("line {line}, column {column}: invalid cube {found:?}")]
	pub(crate) struct SliceError { line: usize, column: usize, found: char }

	pub(super) fn try_slice_from_str(s: &str) -> Result<Vec<(i32, i32)>, SliceError> {
		let mut active = Vec::new();
		for (y, line) in s.lines().enumerate() {
			for (x, chr) in line.chars().enumerate() {
				match chr {
					'#' => active.push((x as i32, y as i32)),
					'.' => (),
					found => return Err(SliceError { line: y + 1, column: x + 1, found }),
				}
			}
		}
		Ok(active)
	}
}
