//! Per-field rules.

use std::sync::LazyLock;

use regex::Regex;

use super::result::FieldResult;

/// Domain appended to the derived email address.
pub const DEFAULT_EMAIL_DOMAIN: &str = "farmingdale.edu";

const NAME_PATTERN: &str = r"^[a-zA-Z]{2,25}$";
const DOB_PATTERN: &str = r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$";
const ZIP_PATTERN: &str = r"^[0-9]{5}$";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("Invalid regex pattern"));
static DOB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOB_PATTERN).expect("Invalid regex pattern"));
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_PATTERN).expect("Invalid regex pattern"));

fn check(re: &Regex, value: &str, msg: &str) -> FieldResult {
    if re.is_match(value) {
        FieldResult::valid()
    } else {
        FieldResult::invalid(msg)
    }
}

/// 2-25 ASCII letters.
pub fn validate_first_name(value: &str) -> FieldResult {
    check(&NAME_RE, value, "First name must be 2-25 letters")
}

/// 2-25 ASCII letters.
pub fn validate_last_name(value: &str) -> FieldResult {
    check(&NAME_RE, value, "Last name must be 2-25 letters")
}

/// `MM/DD/YYYY` with a 19xx or 20xx year.
///
/// Day and month ranges are checked independently, so `02/30/2020` passes.
pub fn validate_dob(value: &str) -> FieldResult {
    check(&DOB_RE, value, "Date must be in MM/DD/YYYY format")
}

/// Exactly five ASCII digits.
pub fn validate_zip_code(value: &str) -> FieldResult {
    check(&ZIP_RE, value, "Zip code must be 5 digits")
}

/// Build the address a student is expected to enter.
///
/// The local part is the lower-cased last name without its final character,
/// followed by the first character of the lower-cased first name. Returns
/// `None` if either name is empty.
pub fn expected_email(first_name: &str, last_name: &str, domain: &str) -> Option<String> {
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();

    let initial = first.chars().next()?;
    let mut prefix = last.chars();
    prefix.next_back()?;

    Some(format!("{}{}@{}", prefix.as_str(), initial, domain))
}

/// The typed address must equal [`expected_email`] exactly.
///
/// Only the names are lower-cased; the typed value is compared as entered,
/// so `Doej@farmingdale.edu` is rejected.
pub fn validate_email(email: &str, first_name: &str, last_name: &str, domain: &str) -> FieldResult {
    match expected_email(first_name, last_name, domain) {
        None => FieldResult::invalid("Enter first and last name first"),
        Some(expected) if email == expected => FieldResult::valid(),
        Some(expected) => FieldResult::invalid(format!("Email must be: {}", expected)),
    }
}
