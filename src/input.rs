// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::{Path, PathBuf};


#[derive(Debug, thiserror::Error)]
#[error("cannot read {}: {source}", path.display())]
pub(crate) struct InputError {
	path: PathBuf,
	source: std::io::Error,
}

impl InputError {
	pub(crate) fn is_not_found(&self) -> bool {
		self.source.kind() == std::io::ErrorKind::NotFound
	}
}

pub(crate) fn read(path: &Path) -> Result<String, InputError> {
	std::fs::read_to_string(path)
		.map_err(|source| InputError { path: path.to_owned(), source })
}

pub(crate) fn day_path(dir: &Path, day: u8) -> PathBuf {
	dir.join(format!("day{day:02}.txt"))
}


/// A parse failure on a single line, `line` being 1-based.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {error}")]
pub(crate) struct LineError<E> {
	pub(crate) line: usize,
	pub(crate) error: E,
}

pub(crate) fn try_parse_lines<'a, T, E>(
	s: &'a str,
	mut parse: impl FnMut(&'a str) -> Result<T, E>,
) -> Result<Vec<T>, LineError<E>> {
	s.lines()
		.enumerate()
		.map(|(l, line)| parse(line)
			.map_err(|error| LineError { line: l + 1, error }))
		.collect()
}

/// Groups of consecutive non-blank lines, each with the 1-based line number it starts at.
pub(crate) fn paragraphs(s: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
	let mut lines = s.lines().enumerate().peekable();
	std::iter::from_fn(move || {
		while lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
		let &(l, _) = lines.peek()?;
		let paragraph = lines.by_ref()
			.map(|(_, line)| line)
			.take_while(|line| !line.trim().is_empty())
			.collect();
		Some((l + 1, paragraph))
	})
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lines() {
		let parsed = try_parse_lines("1\n2\n3\n", str::parse::<u8>).unwrap();
		assert_eq!(parsed, [1, 2, 3]);
		let err = try_parse_lines("1\n2\nthree\n", str::parse::<u8>).unwrap_err();
		assert_eq!(err.line, 3);
		assert!(err.to_string().starts_with("line 3: "));
	}

	#[test]
	fn paragraphs() {
		let input = indoc::indoc! { "

			a
			b

			c


			d e
		" };
		let paragraphs = super::paragraphs(input).collect::<Vec<_>>();
		assert_eq!(paragraphs, [(2, vec!["a", "b"]), (5, vec!["c"]), (8, vec!["d e"])]);
		assert_eq!(super::paragraphs("").count(), 0);
	}

	#[test]
	fn missing_file() {
		let err = read(Path::new("no/such/dir/day99.txt")).unwrap_err();
		assert!(err.is_not_found());
		assert_eq!(day_path(Path::new("inputs"), 7), Path::new("inputs/day07.txt"));
	}
}
