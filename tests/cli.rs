// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt as _, str::contains};
use std::path::Path;


const DAY01: &str = "1721\n979\n366\n299\n675\n1456\n";
const DAY25: &str = "5764801\n17807724\n";

fn cmd() -> Command {
	let mut cmd = Command::cargo_bin("advent20").unwrap();
	cmd.env_remove("ADVENT20_INPUTS").env_remove("RUST_LOG");
	cmd
}

fn write_inputs(dir: &Path, inputs: &[(u8, &str)]) {
	for (day, input) in inputs {
		std::fs::write(dir.join(format!("day{day:02}.txt")), input).unwrap();
	}
}


#[test]
fn single_day() {
	let dir = tempfile::tempdir().unwrap();
	write_inputs(dir.path(), &[(1, DAY01)]);
	cmd().arg("1").arg("--inputs").arg(dir.path())
		.assert()
		.success()
		.stdout("514579\n241861950\n");
}

#[test]
fn single_part_from_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("expenses.txt");
	std::fs::write(&path, DAY01).unwrap();
	cmd().args(["1", "--part", "2", "--input"]).arg(&path)
		.assert()
		.success()
		.stdout("241861950\n");
}

#[test]
fn all_days() {
	let dir = tempfile::tempdir().unwrap();
	write_inputs(dir.path(), &[(1, DAY01), (25, DAY25)]);
	cmd().env("ADVENT20_INPUTS", dir.path())
		.assert()
		.success()
		.stdout("day 01 part 1: 514579\nday 01 part 2: 241861950\nday 25 part 1: 14897079\n")
		.stderr(contains("skipping day 02"));
}

#[test]
fn missing_input() {
	let dir = tempfile::tempdir().unwrap();
	cmd().arg("3").arg("--inputs").arg(dir.path())
		.assert()
		.failure()
		.stderr(contains("day 03").and(contains("cannot read")));
}

#[test]
fn invalid_input() {
	let dir = tempfile::tempdir().unwrap();
	write_inputs(dir.path(), &[(2, "1-3 a: abcde\n1-3 b cdefg\n")]);
	cmd().args(["2", "-p", "1", "--inputs"]).arg(dir.path())
		.assert()
		.failure()
		.stderr(contains("day 02 part 1").and(contains("line 2")));
}
