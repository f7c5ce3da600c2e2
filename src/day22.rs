// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashSet, VecDeque};


type Deck = VecDeque<u8>;

fn score(deck: &Deck) -> u64 {
	deck.iter().rev().zip(1..).map(|(&card, position)| card as u64 * position).sum()
}

/// Moves both drawn cards to the bottom of the round winner's deck, winner's first.
fn award(decks: &mut [Deck; 2], winner: usize, cards: [u8; 2]) {
	decks[winner].extend([cards[winner], cards[1 - winner]]);
}

/// Takes both top cards, unless a deck is empty.
fn draw(decks: &mut [Deck; 2]) -> Option<[u8; 2]> {
	let (Some(&c0), Some(&c1)) = (decks[0].front(), decks[1].front()) else { return None };
	decks[0].pop_front();
	decks[1].pop_front();
	Some([c0, c1])
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::DecksError),
	#[error("the decks repeat a configuration, so the game never ends")]
	Endless,
}

/// Returns the winning player's index.
fn combat(decks: &mut [Deck; 2]) -> Result<usize, Error> {
	let mut seen = HashSet::new();
	while let Some(cards) = draw(decks) {
		award(decks, if cards[0] > cards[1] { 0 } else { 1 }, cards);
		if !seen.insert(decks.clone()) { return Err(Error::Endless) }
	}
	Ok(if decks[0].is_empty() { 1 } else { 0 })
}

/// Like [`combat`], but a configuration repeating within a game ends it in
/// player 1's favor, and rounds where both players have enough cards left are
/// decided by a sub-game.
fn recursive_combat(decks: &mut [Deck; 2], depth: usize) -> usize {
	let mut seen = HashSet::new();
	loop {
		if !seen.insert(decks.clone()) { return 0 }
		let Some(cards) = draw(decks) else { return if decks[0].is_empty() { 1 } else { 0 } };
		let winner = if decks.iter().zip(cards).all(|(d, c)| d.len() >= c as usize) {
			tracing::trace!(depth = depth + 1, "sub-game");
			let mut sub_decks: [Deck; 2] = [0, 1].map(|p| decks[p].iter().copied().take(cards[p] as usize).collect());
			recursive_combat(&mut sub_decks, depth + 1)
		} else if cards[0] > cards[1] { 0 } else { 1 };
		award(decks, winner, cards);
	}
}


fn input_decks_from_str(s: &str) -> Result<[Deck; 2], parsing::DecksError> {
	parsing::try_decks_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let mut decks = input_decks_from_str(input)?;
	let winner = combat(&mut decks)?;
	Ok(score(&decks[winner]))
}


pub(crate) fn part2(input: &str) -> Result<u64, parsing::DecksError> {
	let mut decks = input_decks_from_str(input)?;
	let winner = recursive_combat(&mut decks, 0);
	Ok(score(&decks[winner]))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Deck;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum DecksError {
		#[error("expected two decks")]
		Decks,
		#[error("line {line}: expected `Player {player}:`")]
		Header { line: usize, player: usize },
		#[error("line {line}: invalid card: {source}")]
		Card { line: usize, source: ParseIntError },
	}

	fn try_deck_from_lines(line: usize, lines: &[&str], player: usize) -> Result<Deck, DecksError> {
		match lines.split_first() {
			Some((header, cards)) if *header == format!("Player {player}:") => cards.iter()
				.enumerate()
				.map(|(l, card)| card.parse()
					.map_err(|source| DecksError::Card { line: line + 1 + l, source }))
				.collect(),
			_ => Err(DecksError::Header { line, player }),
		}
	}

	pub(super) fn try_decks_from_str(s: &str) -> Result<[Deck; 2], DecksError> {
		let mut paragraphs = crate::input::paragraphs(s);
		let (Some((l0, deck0)), Some((l1, deck1)), None) =
			(paragraphs.next(), paragraphs.next(), paragraphs.next())
			else { return Err(DecksError::Decks) };
		Ok([try_deck_from_lines(l0, &deck0, 1)?, try_deck_from_lines(l1, &deck1, 2)?])
	}

	#[test]
	fn tests() {
		let decks = try_decks_from_str("Player 1:\n1\n2\n\nPlayer 2:\n3\n").unwrap();
		assert_eq!(decks, [Deck::from([1, 2]), Deck::from([3])]);
		assert!(matches!(try_decks_from_str("Player 1:\n1\n\nPlayer 1:\n3\n"),
			Err(DecksError::Header { line: 4, player: 2 })));
		assert!(matches!(try_decks_from_str("Player 1:\n1\nx\n\nPlayer 2:\n3\n"),
			Err(DecksError::Card { line: 3, .. })));
		assert!(matches!(try_decks_from_str("Player 1:\n1\n"), Err(DecksError::Decks)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Player 1:
		9
		2
		6
		3
		1

		Player 2:
		5
		8
		4
		7
		10
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 306);
		assert_eq!(part2(INPUT).unwrap(), 291);

		const ENDLESS: &str = "Player 1:\n43\n19\n\nPlayer 2:\n2\n29\n14\n";
		assert!(matches!(part1(ENDLESS), Err(Error::Endless)));
		assert_eq!(part2(ENDLESS).unwrap(), 105);
		let mut decks = [Deck::from([43, 19]), Deck::from([2, 29, 14])];
		assert_eq!(recursive_combat(&mut decks, 0), 0);
	}
}
