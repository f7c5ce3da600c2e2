// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const MODULUS: u64 = 20201227;
const SUBJECT: u64 = 7;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::KeysError),
	#[error("neither public key is a power of 7 modulo 20201227")]
	NoLoopSize,
}


/// Finds whichever key's loop size comes first and transforms the other key with it.
fn encryption_key([card, door]: [u64; 2]) -> Result<u64, Error> {
	use num_modular::{ModularCoreOps as _, ModularPow as _};

	let mut value = 1u64;
	for loop_size in 1..MODULUS {
		value = value.mulm(SUBJECT, &MODULUS);
		let other = if value == card { door } else if value == door { card } else { continue };
		tracing::debug!(loop_size, "found loop size");
		return Ok(other.powm(loop_size, &MODULUS))
	}
	Err(Error::NoLoopSize)
}


fn input_keys_from_str(s: &str) -> Result<[u64; 2], parsing::KeysError> {
	parsing::try_keys_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	encryption_key(input_keys_from_str(input)?)
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub(crate) enum KeysError {
		#[error("expected two lines with the card's and the door's public key")]
		Format,
		#[error("line {line}: invalid public key: {source}")]
		Key { line: usize, source: std::num::ParseIntError },
	}

	pub(super) fn try_keys_from_str(s: &str) -> Result<[u64; 2], KeysError> {
		let mut lines = s.lines();
		let (Some(card), Some(door), None) = (lines.next(), lines.next(), lines.next())
			else { return Err(KeysError::Format) };
		let key = |line, s: &str| s.parse::<u64>().map_err(|source| KeysError::Key { line, source });
		Ok([key(1, card)?, key(2, door)?])
	}

	#[test]
	fn tests() {
		assert_eq!(try_keys_from_str("5764801\n17807724\n").unwrap(), [5764801, 17807724]);
		assert!(matches!(try_keys_from_str("5764801\n"), Err(KeysError::Format)));
		assert!(matches!(try_keys_from_str("5764801\nx\n"), Err(KeysError::Key { line: 2, .. })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		use num_modular::ModularPow as _;
		assert_eq!(SUBJECT.powm(8, &MODULUS), 5764801);
		assert_eq!(SUBJECT.powm(11, &MODULUS), 17807724);
		assert_eq!(part1("5764801\n17807724\n").unwrap(), 14897079);
		assert_eq!(part1("17807724\n5764801\n").unwrap(), 14897079);
	}
}
