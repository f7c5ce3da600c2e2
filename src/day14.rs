// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone, Copy, Default)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Mask {
	ones: u64,
	floating: u64,
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Instr {
	Mask(Mask),
	Write { address: u64, value: u64 },
}

impl Mask {
	fn zeros(&self) -> u64 {
		!(self.ones | self.floating) & ((1 << 36) - 1)
	}

	fn apply_to_value(&self, value: u64) -> u64 {
		value & !self.zeros() | self.ones
	}

	/// Every address the floating bits resolve to.
	fn addresses(&self, address: u64) -> impl Iterator<Item = u64> {
		let base = (address | self.ones) & !self.floating;
		let floating = self.floating;
		// Enumerate all subsets of the floating bits
		let mut subset = Some(0u64);
		std::iter::from_fn(move || {
			let current = subset?;
			let next = current.wrapping_sub(floating) & floating;
			subset = (next != 0).then_some(next);
			Some(base | current)
		})
	}
}


fn input_program_from_str(s: &str) -> Result<Vec<Instr>, parsing::ProgramError> {
	crate::input::try_parse_lines(s, str::parse)
}


fn run(program: &[Instr], write: impl Fn(&mut HashMap<u64, u64>, Mask, u64, u64)) -> u64 {
	let mut memory = HashMap::new();
	let mut mask = Mask::default();
	for instr in program {
		match *instr {
			Instr::Mask(new) => mask = new,
			Instr::Write { address, value } => write(&mut memory, mask, address, value),
		}
	}
	memory.values().sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::ProgramError> {
	Ok(run(&input_program_from_str(input)?, |memory, mask, address, value| {
		memory.insert(address, mask.apply_to_value(value));
	}))
}


pub(crate) fn part2(input: &str) -> Result<u64, parsing::ProgramError> {
	Ok(run(&input_program_from_str(input)?, |memory, mask, address, value| {
		memory.extend(mask.addresses(address).map(|a| (a, value)));
	}))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Instr, Mask};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InstrError {
		#[error("expected `mask = <bits>` or `mem[<address>] = <value>`")]
		Format,
		#[error("expected 36 mask bits, found {0}")]
		MaskLen(usize),
		#[error("invalid mask bit {0:?}")]
		MaskBit(char),
		#[error("invalid address: {0}")]
		Address(ParseIntError),
		#[error("invalid value: {0}")]
		Value(ParseIntError),
	}

	pub(crate) type ProgramError = crate::input::LineError<InstrError>;

	impl FromStr for Mask {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.len() != 36 { return Err(InstrError::MaskLen(s.len())) }
			s.chars().try_fold(Mask::default(), |Mask { ones, floating }, chr| {
				let (ones, floating) = (ones << 1, floating << 1);
				match chr {
					'0' => Ok(Mask { ones, floating }),
					'1' => Ok(Mask { ones: ones | 1, floating }),
					'X' => Ok(Mask { ones, floating: floating | 1 }),
					other => Err(InstrError::MaskBit(other)),
				}
			})
		}
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (lhs, rhs) = s.split_once(" = ").ok_or(InstrError::Format)?;
			if lhs == "mask" {
				Ok(Instr::Mask(rhs.parse()?))
			} else {
				let address = lhs.strip_prefix("mem[")
					.and_then(|a| a.strip_suffix(']'))
					.ok_or(InstrError::Format)?;
				Ok(Instr::Write {
					address: address.parse().map_err(InstrError::Address)?,
					value: rhs.parse().map_err(InstrError::Value)?,
				})
			}
		}
	}

	#[test]
	fn tests() {
		assert_eq!("mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X".parse::<Instr>().unwrap(),
			Instr::Mask(Mask { ones: 0b1000000, floating: ((1 << 36) - 1) & !0b1000010 }));
		assert_eq!("mem[8] = 11".parse::<Instr>().unwrap(), Instr::Write { address: 8, value: 11 });
		assert!(matches!("mem[8] == 11".parse::<Instr>(), Err(InstrError::Format)));
		assert!(matches!("mask = 01".parse::<Instr>(), Err(InstrError::MaskLen(2))));
	}
}
