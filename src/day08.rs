// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Instr {
	Acc(i64),
	Jmp(i64),
	Nop(i64),
}

impl Instr {
	/// Swaps `jmp` and `nop`; `acc` has no counterpart.
	fn repaired(self) -> Option<Instr> {
		match self {
			Instr::Acc(_) => None,
			Instr::Jmp(arg) => Some(Instr::Nop(arg)),
			Instr::Nop(arg) => Some(Instr::Jmp(arg)),
		}
	}
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Halt {
	/// An instruction was about to run a second time.
	Loop { acc: i64 },
	/// The program counter landed exactly one past the last instruction.
	Terminated { acc: i64 },
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::ProgramError),
	#[error("jumped to {pc} outside of the program")]
	OutOfBounds { pc: i64 },
	#[error("no single repair makes the program terminate")]
	Unrepairable,
}

trait Program: AsRef<[Instr]> {
	fn run(&self) -> Result<Halt, Error> {
		let instrs = self.as_ref();
		let mut visited = vec![false; instrs.len()];
		let (mut pc, mut acc) = (0i64, 0i64);
		loop {
			if pc == instrs.len() as i64 { return Ok(Halt::Terminated { acc }) }
			let Some(seen) = usize::try_from(pc).ok().and_then(|pc| visited.get_mut(pc)) else {
				return Err(Error::OutOfBounds { pc })
			};
			if std::mem::replace(seen, true) {
				tracing::trace!(pc, acc, "loop detected");
				return Ok(Halt::Loop { acc })
			}
			match instrs[pc as usize] {
				Instr::Acc(arg) => { acc += arg; pc += 1 }
				Instr::Jmp(arg) => pc += arg,
				Instr::Nop(_) => pc += 1,
			}
		}
	}
}

impl Program for Vec<Instr> {}


fn input_program_from_str(s: &str) -> Result<Vec<Instr>, parsing::ProgramError> {
	crate::input::try_parse_lines(s, str::parse)
}


pub(crate) fn part1(input: &str) -> Result<i64, Error> {
	match input_program_from_str(input)?.run()? {
		Halt::Loop { acc } | Halt::Terminated { acc } => Ok(acc),
	}
}


pub(crate) fn part2(input: &str) -> Result<i64, Error> {
	let mut program = input_program_from_str(input)?;
	for pc in 0..program.len() {
		let Some(repaired) = program[pc].repaired() else { continue };
		let original = std::mem::replace(&mut program[pc], repaired);
		let halt = program.run();
		program[pc] = original;
		match halt {
			Ok(Halt::Terminated { acc }) => {
				tracing::debug!(pc, "repaired");
				return Ok(acc)
			}
			Ok(Halt::Loop { .. }) | Err(Error::OutOfBounds { .. }) => (),
			Err(e) => return Err(e),
		}
	}
	Err(Error::Unrepairable)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InstrError {
		#[error("expected `<op> <arg>`")]
		Format,
		#[error("unknown operation {0:?}")]
		Op(String),
		#[error("invalid argument: {0}")]
		Arg(ParseIntError),
	}

	pub(crate) type ProgramError = crate::input::LineError<InstrError>;

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (op, arg) = s.split_once(' ').ok_or(InstrError::Format)?;
			let arg = arg.parse().map_err(InstrError::Arg)?;
			match op {
				"acc" => Ok(Instr::Acc(arg)),
				"jmp" => Ok(Instr::Jmp(arg)),
				"nop" => Ok(Instr::Nop(arg)),
				_ => Err(InstrError::Op(op.to_owned())),
			}
		}
	}

	#[test]
	fn tests() {
		assert_eq!("jmp -4".parse::<Instr>().unwrap(), Instr::Jmp(-4));
		assert_eq!("acc +3".parse::<Instr>().unwrap(), Instr::Acc(3));
		assert!(matches!("mul +3".parse::<Instr>(), Err(InstrError::Op(_))));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		nop +0
		acc +1
		jmp +4
		acc +3
		jmp -3
		acc -99
		acc +1
		jmp -4
		acc +6
	" };

	#[test]
	fn tests() {
		assert_eq!(input_program_from_str(INPUT).unwrap().run().unwrap(), Halt::Loop { acc: 5 });
		assert_eq!(part1(INPUT).unwrap(), 5);
		assert_eq!(part2(INPUT).unwrap(), 8);
		assert!(matches!(part1("jmp -1\n"), Err(Error::OutOfBounds { pc: -1 })));
		assert!(matches!(part2("jmp +0\njmp +0\n"), Err(Error::Unrepairable)));
	}
}
