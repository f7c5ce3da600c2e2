// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Default)]
#[cfg_attr(test, derive(Debug))]
struct Passport<'a> {
	birth_year: Option<&'a str>,
	issue_year: Option<&'a str>,
	expiration_year: Option<&'a str>,
	height: Option<&'a str>,
	hair_color: Option<&'a str>,
	eye_color: Option<&'a str>,
	passport_id: Option<&'a str>,
	#[allow(dead_code)]
	country_id: Option<&'a str>,
}

const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

fn year_within(year: &str, range: std::ops::RangeInclusive<u16>) -> bool {
	year.len() == 4 && year.parse().map_or(false, |y| range.contains(&y))
}

fn all_digits(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Passport<'_> {
	/// The required fields, if present; `cid` is optional.
	fn required(&self) -> Option<[&str; 7]> {
		Some([
			self.birth_year?,
			self.issue_year?,
			self.expiration_year?,
			self.height?,
			self.hair_color?,
			self.eye_color?,
			self.passport_id?,
		])
	}

	fn is_complete(&self) -> bool {
		self.required().is_some()
	}

	fn is_valid(&self) -> bool {
		let Some([byr, iyr, eyr, hgt, hcl, ecl, pid]) = self.required() else { return false };

		let height_valid = if let Some(cm) = hgt.strip_suffix("cm") {
			all_digits(cm) && cm.parse().map_or(false, |h: u16| (150..=193).contains(&h))
		} else if let Some(inches) = hgt.strip_suffix("in") {
			all_digits(inches) && inches.parse().map_or(false, |h: u16| (59..=76).contains(&h))
		} else {
			false
		};

		let hair_valid = hcl.strip_prefix('#').map_or(false, |hex|
			hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));

		year_within(byr, 1920..=2002)
			&& year_within(iyr, 2010..=2020)
			&& year_within(eyr, 2020..=2030)
			&& height_valid
			&& hair_valid
			&& EYE_COLORS.contains(&ecl)
			&& pid.len() == 9 && all_digits(pid)
	}
}


fn input_passports_from_str(s: &str) -> Result<Vec<Passport<'_>>, parsing::PassportError> {
	parsing::try_passports_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::PassportError> {
	Ok(input_passports_from_str(input)?.iter().filter(|p| p.is_complete()).count())
}


pub(crate) fn part2(input: &str) -> Result<usize, parsing::PassportError> {
	Ok(input_passports_from_str(input)?.iter().filter(|p| p.is_valid()).count())
}


mod parsing {
	use super::Passport;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PassportError {
		#[error("line {line}: expected `key:value`, found {found:?}")]
		Format { line: usize, found: String },
		#[error("line {line}: unknown field {key:?}")]
		Key { line: usize, key: String },
		#[error("line {line}: duplicate field {key:?}")]
		Duplicate { line: usize, key: String },
	}

	fn try_passport_from_lines<'a>(first_line: usize, lines: &[&'a str]) -> Result<Passport<'a>, PassportError> {
		let mut passport = Passport::default();
		for (l, line) in lines.iter().enumerate() {
			let line_num = first_line + l;
			for field in line.split_whitespace() {
				let (key, value) = field.split_once(':')
					.ok_or_else(|| PassportError::Format { line: line_num, found: field.to_owned() })?;
				let slot = match key {
					"byr" => &mut passport.birth_year,
					"iyr" => &mut passport.issue_year,
					"eyr" => &mut passport.expiration_year,
					"hgt" => &mut passport.height,
					"hcl" => &mut passport.hair_color,
					"ecl" => &mut passport.eye_color,
					"pid" => &mut passport.passport_id,
					"cid" => &mut passport.country_id,
					_ => return Err(PassportError::Key { line: line_num, key: key.to_owned() }),
				};
				if slot.replace(value).is_some() {
					return Err(PassportError::Duplicate { line: line_num, key: key.to_owned() })
				}
			}
		}
		Ok(passport)
	}

	pub(super) fn try_passports_from_str(s: &str) -> Result<Vec<Passport<'_>>, PassportError> {
		crate::input::paragraphs(s)
			.map(|(line, lines)| try_passport_from_lines(line, &lines))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
		byr:1937 iyr:2017 cid:147 hgt:183cm

		iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
		hcl:#cfa07d byr:1929

		hcl:#ae17e1 iyr:2013
		eyr:2024
		ecl:brn pid:760753108 byr:1931
		hgt:179cm

		hcl:#cfa07d eyr:2025 pid:166559648
		iyr:2011 ecl:brn hgt:59in
	" };

	const INVALID: &str = indoc::indoc! { "
		eyr:1972 cid:100
		hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

		iyr:2019
		hcl:#602927 eyr:1967 hgt:170cm
		ecl:grn pid:012533040 byr:1946

		hcl:dab227 iyr:2012
		ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

		hgt:59cm ecl:zzz
		eyr:2038 hcl:74454a iyr:2023
		pid:3556412378 byr:2007
	" };

	const VALID: &str = indoc::indoc! { "
		pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
		hcl:#623a2f

		eyr:2029 ecl:blu cid:129 byr:1989
		iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

		hcl:#888785
		hgt:164cm byr:2001 iyr:2015 cid:88
		pid:545766238 ecl:hzl
		eyr:2022

		iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 2);
		assert_eq!(part2(INVALID).unwrap(), 0);
		assert_eq!(part2(VALID).unwrap(), 4);
		assert!(year_within("2002", 1920..=2002));
		assert!(!year_within("2003", 1920..=2002));
		assert!(matches!(part1("byr:1 foo:2\n"), Err(parsing::PassportError::Key { line: 1, .. })));
		assert!(matches!(part1("\nbyr:1\nbyr:2\n"), Err(parsing::PassportError::Duplicate { line: 3, .. })));
	}
}
