// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Dir { North, East, South, West }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Action {
	Move(Dir, i64),
	/// Clockwise quarter turns, `0..4`.
	Turn(u8),
	Forward(i64),
}

impl Dir {
	fn vector(self) -> (i64, i64) {
		match self {
			Dir::North => (0, 1),
			Dir::East => (1, 0),
			Dir::South => (0, -1),
			Dir::West => (-1, 0),
		}
	}
}

/// Rotates clockwise in quarter turns.
fn rotate((x, y): (i64, i64), quarters: u8) -> (i64, i64) {
	(0..quarters).fold((x, y), |(x, y), _| (y, -x))
}

fn add((x, y): (i64, i64), (dx, dy): (i64, i64), times: i64) -> (i64, i64) {
	(x + dx * times, y + dy * times)
}


fn input_actions_from_str(s: &str) -> Result<Vec<Action>, parsing::ActionsError> {
	crate::input::try_parse_lines(s, str::parse)
}


/// Navigates with `heading` either as the ship's facing or as a waypoint, returning
/// the final Manhattan distance.
fn navigate(actions: &[Action], mut heading: (i64, i64), waypoint: bool) -> i64 {
	let mut pos = (0, 0);
	for &action in actions {
		match action {
			Action::Move(dir, amount) if waypoint => heading = add(heading, dir.vector(), amount),
			Action::Move(dir, amount) => pos = add(pos, dir.vector(), amount),
			Action::Turn(quarters) => heading = rotate(heading, quarters),
			Action::Forward(times) => pos = add(pos, heading, times),
		}
	}
	pos.0.abs() + pos.1.abs()
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::ActionsError> {
	Ok(navigate(&input_actions_from_str(input)?, Dir::East.vector(), false))
}


pub(crate) fn part2(input: &str) -> Result<i64, parsing::ActionsError> {
	Ok(navigate(&input_actions_from_str(input)?, (10, 1), true))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Action, Dir};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ActionError {
		#[error("unknown action {0:?}")]
		Action(char),
		#[error("invalid value: {0}")]
		Value(ParseIntError),
		#[error("turn of {0} degrees is not a multiple of 90")]
		Degrees(i64),
	}

	pub(crate) type ActionsError = crate::input::LineError<ActionError>;

	impl FromStr for Action {
		type Err = ActionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut chars = s.chars();
			let action = chars.next().ok_or(ActionError::Action(' '))?;
			let value: i64 = chars.as_str().parse().map_err(ActionError::Value)?;
			let quarters = |clockwise: bool| {
				if value % 90 != 0 { return Err(ActionError::Degrees(value)) }
				let quarters = (value / 90).rem_euclid(4) as u8;
				Ok(if clockwise { quarters } else { (4 - quarters) % 4 })
			};
			Ok(match action {
				'N' => Action::Move(Dir::North, value),
				'E' => Action::Move(Dir::East, value),
				'S' => Action::Move(Dir::South, value),
				'W' => Action::Move(Dir::West, value),
				'R' => Action::Turn(quarters(true)?),
				'L' => Action::Turn(quarters(false)?),
				'F' => Action::Forward(value),
				other => return Err(ActionError::Action(other)),
			})
		}
	}

	#[test]
	fn tests() {
		assert_eq!("L270".parse::<Action>().unwrap(), Action::Turn(1));
		assert_eq!("R180".parse::<Action>().unwrap(), Action::Turn(2));
		assert!(matches!("R45".parse::<Action>(), Err(ActionError::Degrees(45))));
		assert!(matches!("X1".parse::<Action>(), Err(ActionError::Action('X'))));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		F10
		N3
		F7
		R90
		F11
	" };

	#[test]
	fn tests() {
		assert_eq!(rotate((10, 4), 1), (4, -10));
		assert_eq!(part1(INPUT).unwrap(), 25);
		assert_eq!(part2(INPUT).unwrap(), 286);
	}
}
