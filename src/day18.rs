// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Op { Add, Mul }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Token { Num(u64), Op(Op), Open, Close }

/// A line's tokens with their (1-based) columns.
type Tokens = Vec<(usize, Token)>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum EvalError {
	#[error("column {0}: unexpected token")]
	Unexpected(usize),
	#[error("unexpected end of expression")]
	End,
	#[error("column {0}: overflow")]
	Overflow(usize),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::HomeworkError),
	#[error("line {line}: {source}")]
	Eval { line: usize, source: EvalError },
	#[error("line {line}: sum overflows")]
	SumOverflow { line: usize },
}


struct Evaluator<'t, P> {
	tokens: std::iter::Peekable<std::slice::Iter<'t, (usize, Token)>>,
	precedence: P,
}

impl<P: Fn(Op) -> u8> Evaluator<'_, P> {
	fn primary(&mut self) -> Result<u64, EvalError> {
		match self.tokens.next() {
			Some(&(_, Token::Num(num))) => Ok(num),
			Some(&(_, Token::Open)) => {
				let value = self.expr(0)?;
				match self.tokens.next() {
					Some((_, Token::Close)) => Ok(value),
					Some(&(column, _)) => Err(EvalError::Unexpected(column)),
					None => Err(EvalError::End),
				}
			}
			Some(&(column, _)) => Err(EvalError::Unexpected(column)),
			None => Err(EvalError::End),
		}
	}

	/// Folds operators binding at least as tight as `min`.
	fn expr(&mut self, min: u8) -> Result<u64, EvalError> {
		let mut lhs = self.primary()?;
		while let Some(&&(column, Token::Op(op))) = self.tokens.peek() {
			let precedence = (self.precedence)(op);
			if precedence < min { break }
			self.tokens.next();
			let rhs = self.expr(precedence + 1)?;
			lhs = match op {
				Op::Add => lhs.checked_add(rhs),
				Op::Mul => lhs.checked_mul(rhs),
			}.ok_or(EvalError::Overflow(column))?;
		}
		Ok(lhs)
	}
}

fn eval(tokens: &Tokens, precedence: impl Fn(Op) -> u8) -> Result<u64, EvalError> {
	let mut evaluator = Evaluator { tokens: tokens.iter().peekable(), precedence };
	let value = evaluator.expr(0)?;
	match evaluator.tokens.next() {
		Some(&(column, _)) => Err(EvalError::Unexpected(column)),
		None => Ok(value),
	}
}


fn input_homework_from_str(s: &str) -> Result<Vec<Tokens>, parsing::HomeworkError> {
	crate::input::try_parse_lines(s, parsing::try_tokens_from_str)
}


fn sum(input: &str, precedence: impl Fn(Op) -> u8 + Copy) -> Result<u64, Error> {
	input_homework_from_str(input)?.iter()
		.enumerate()
		.try_fold(0u64, |sum, (l, tokens)| {
			let value = eval(tokens, precedence)
				.map_err(|source| Error::Eval { line: l + 1, source })?;
			sum.checked_add(value).ok_or(Error::SumOverflow { line: l + 1 })
		})
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	sum(input, |_| 0)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	sum(input, |op| match op { Op::Add => 1, Op::Mul => 0 })
}


mod parsing {
	use super::{Op, Token, Tokens};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum TokensError {
		#[error("column {column}: invalid character {found:?}")]
		Char { column: usize, found: char },
		#[error("column {column}: number too large")]
		Num { column: usize },
	}

	pub(crate) type HomeworkError = crate::input::LineError<TokensError>;

	pub(super) fn try_tokens_from_str(s: &str) -> Result<Tokens, TokensError> {
		let mut tokens = Vec::new();
		let mut chars = s.char_indices().peekable();
		while let Some((i, chr)) = chars.next() {
			let column = i + 1;
			let token = match chr {
				' ' => continue,
				'+' => Token::Op(Op::Add),
				'*' => Token::Op(Op::Mul),
				'(' => Token::Open,
				')' => Token::Close,
				'0'..='9' => {
					let mut num = chr as u64 - b'0' as u64;
					while let Some(&(_, digit @ '0'..='9')) = chars.peek() {
						num = num.checked_mul(10)
							.and_then(|n| n.checked_add(digit as u64 - b'0' as u64))
							.ok_or(TokensError::Num { column })?;
						chars.next();
					}
					Token::Num(num)
				}
				found => return Err(TokensError::Char { column, found }),
			};
			tokens.push((column, token));
		}
		Ok(tokens)
	}

	#[test]
	fn tests() {
		assert_eq!(try_tokens_from_str("12 * (3+4)").unwrap(), [
			(1, Token::Num(12)),
			(4, Token::Op(Op::Mul)),
			(6, Token::Open),
			(7, Token::Num(3)),
			(8, Token::Op(Op::Add)),
			(9, Token::Num(4)),
			(10, Token::Close),
		]);
		assert!(matches!(try_tokens_from_str("1 - 2"), Err(TokensError::Char { column: 3, found: '-' })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		for (input, expected1, expected2) in [
			("1 + 2 * 3 + 4 * 5 + 6", 71, 231),
			("1 + (2 * 3) + (4 * (5 + 6))", 51, 51),
			("2 * 3 + (4 * 5)", 26, 46),
			("5 + (8 * 3 + 9 + 3 * 4 * 3)", 437, 1445),
			("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240, 669060),
			("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2", 13632, 23340),
			("12 * 10 + 1", 121, 132),
		] {
			assert_eq!(part1(input).unwrap(), expected1, "{input}");
			assert_eq!(part2(input).unwrap(), expected2, "{input}");
		}
		assert_eq!(part1("1 + 2\n3 * 4\n").unwrap(), 15);

		assert!(matches!(part1("1 +\n"), Err(Error::Eval { line: 1, source: EvalError::End })));
		assert!(matches!(part1("1\n(1 + 2) 3\n"),
			Err(Error::Eval { line: 2, source: EvalError::Unexpected(9) })));
		assert!(matches!(part2("(1 + 2"), Err(Error::Eval { source: EvalError::End, .. })));
		assert!(matches!(part1("18446744073709551615\n1\n"), Err(Error::SumOverflow { line: 2 })));
		assert!(matches!(part1("18446744073709551615 + 1"), Err(Error::Eval { source: EvalError::Overflow(22), .. })));
		assert!(matches!(part1("1 + )"), Err(Error::Eval { source: EvalError::Unexpected(5), .. })));
	}
}
