//! Employee Number
//!
//! Human-readable sequential identifier of the form `EMP` + zero-padded
//! integer (`EMP001`, `EMP042`, `EMP1000`).

use std::fmt;

const PREFIX: &str = "EMP";

/// Sequential employee number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeNumber(u64);

impl EmployeeNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse `EMP<digits>`; anything else yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix(PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }

    /// Next number after the highest parseable one in `existing`.
    ///
    /// Unparseable entries are skipped. Returns `EMP001` when nothing parses.
    pub fn next_after<I, S>(existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max = existing
            .into_iter()
            .filter_map(|raw| Self::parse(raw.as_ref()))
            .map(Self::value)
            .max()
            .unwrap_or(0);

        Self(max.saturating_add(1))
    }
}

impl fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{:03}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_three_digits() {
        assert_eq!(EmployeeNumber::new(1).to_string(), "EMP001");
        assert_eq!(EmployeeNumber::new(42).to_string(), "EMP042");
        assert_eq!(EmployeeNumber::new(999).to_string(), "EMP999");
        assert_eq!(EmployeeNumber::new(1000).to_string(), "EMP1000");
    }

    #[test]
    fn test_parse() {
        assert_eq!(EmployeeNumber::parse("EMP007"), Some(EmployeeNumber::new(7)));
        assert_eq!(EmployeeNumber::parse("EMP12345"), Some(EmployeeNumber::new(12345)));
        assert_eq!(EmployeeNumber::parse("EMP"), None);
        assert_eq!(EmployeeNumber::parse("EMP-1"), None);
        assert_eq!(EmployeeNumber::parse("EMPabc"), None);
        assert_eq!(EmployeeNumber::parse("X001"), None);
        assert_eq!(EmployeeNumber::parse(""), None);
    }

    #[test]
    fn test_first_number() {
        let none: [&str; 0] = [];
        assert_eq!(EmployeeNumber::next_after(none).to_string(), "EMP001");
    }

    #[test]
    fn test_next_skips_unparseable() {
        let existing = ["EMP003", "legacy-17", "EMP010", "EMPX"];
        assert_eq!(EmployeeNumber::next_after(existing).to_string(), "EMP011");
    }

    #[test]
    fn test_next_overflows_padding() {
        let existing = vec!["EMP999".to_string()];
        assert_eq!(EmployeeNumber::next_after(&existing).to_string(), "EMP1000");
    }
}
