//! Sequential identifier allocation.
//!
//! Every record kind uses identifiers of the form `prefix + zero-padded number`
//! (`D001`, `DOC014`, `PI023`). The next identifier offered in a creation form
//! is one past the highest numeric suffix currently known for that kind.

use serde::Serialize;

/// Prefix and minimum digit width for one kind of identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdScheme {
    /// Fixed alphabetic prefix (e.g., "DOC")
    pub prefix: &'static str,
    /// Minimum number of digits after the prefix
    pub width: usize,
}

impl IdScheme {
    /// Create a scheme from a prefix and width.
    pub const fn new(prefix: &'static str, width: usize) -> Self {
        Self { prefix, width }
    }

    /// Parse the numeric suffix of an identifier.
    ///
    /// Returns `None` if the identifier does not start with the prefix or the
    /// remainder is not a plain run of ASCII digits.
    pub fn parse(&self, id: &str) -> Option<u64> {
        parse_suffix(id, self.prefix)
    }

    /// Format a sequence number as an identifier of this scheme.
    pub fn format(&self, value: u128) -> String {
        format!("{}{:0>width$}", self.prefix, value, width = self.width)
    }

    /// Suggest the next identifier given the ones already in use.
    pub fn next<I, S>(&self, existing_ids: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        next_id(existing_ids, self.prefix, self.width)
    }
}

/// Compute the next sequential identifier.
///
/// Entries that don't start with `prefix` or whose remainder isn't numeric are
/// skipped. With nothing parseable the result is the padded form of 1. Values
/// wider than `width` are never truncated (`D999` is followed by `D1000`).
pub fn next_id<I, S>(existing_ids: I, prefix: &str, width: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max = existing_ids
        .into_iter()
        .filter_map(|id| {
            let id = id.as_ref();
            let parsed = parse_suffix(id, prefix);
            if parsed.is_none() {
                tracing::trace!(id, prefix, "skipping non-conforming identifier");
            }
            parsed
        })
        .max();

    // u128 so that u64::MAX + 1 still has a representation
    let next = max.map_or(1, |m| u128::from(m) + 1);
    format!("{}{:0>width$}", prefix, next, width = width)
}

/// Strip `prefix` from the start of `id` and parse the rest as a decimal.
pub fn parse_suffix(id: &str, prefix: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_starts_at_one() {
        let ids: Vec<&str> = Vec::new();
        assert_eq!(next_id(ids, "D", 3), "D001");
    }

    #[test]
    fn test_gaps_are_ignored() {
        assert_eq!(next_id(["D001", "D002", "D004"], "D", 3), "D005");
    }

    #[test]
    fn test_malformed_entries_skipped() {
        assert_eq!(next_id(["D003", "X999", "foo"], "D", 3), "D004");
    }

    #[test]
    fn test_all_malformed_starts_at_one() {
        assert_eq!(next_id(["", "D", "Dabc", "D-12", "d005"], "D", 3), "D001");
    }

    #[test]
    fn test_overflow_not_truncated() {
        assert_eq!(next_id(["D999"], "D", 3), "D1000");
        assert_eq!(next_id(["D1000", "D0999"], "D", 3), "D1001");
    }

    #[test]
    fn test_unordered_and_duplicate_input() {
        assert_eq!(next_id(["P010", "P002", "P010", "P007"], "P", 3), "P011");
    }

    #[test]
    fn test_prefix_only_stripped_from_start() {
        // "DOC001" under prefix "D" leaves "OC001", which is not numeric
        assert_eq!(next_id(["DOC001", "D002"], "D", 3), "D003");
        assert_eq!(next_id(["XD005"], "D", 3), "D001");
    }

    #[test]
    fn test_whitespace_and_signs_rejected() {
        assert_eq!(parse_suffix("D 12", "D"), None);
        assert_eq!(parse_suffix("D+12", "D"), None);
        assert_eq!(parse_suffix("D12 ", "D"), None);
        assert_eq!(parse_suffix("D012", "D"), Some(12));
    }

    #[test]
    fn test_suffix_beyond_u64_is_malformed() {
        let huge = format!("D{}", "9".repeat(30));
        assert_eq!(next_id([huge.as_str(), "D004"], "D", 3), "D005");
    }

    #[test]
    fn test_u64_max_does_not_overflow() {
        let max = format!("D{}", u64::MAX);
        assert_eq!(next_id([max.as_str()], "D", 3), "D18446744073709551616");
    }

    #[test]
    fn test_other_widths() {
        let ids: Vec<String> = Vec::new();
        assert_eq!(next_id(&ids, "X", 5), "X00001");
        assert_eq!(next_id(["X7"], "X", 1), "X8");
        assert_eq!(next_id(["X7"], "X", 0), "X8");
    }

    #[test]
    fn test_scheme_helpers() {
        let scheme = IdScheme::new("MR", 3);
        assert_eq!(scheme.parse("MR042"), Some(42));
        assert_eq!(scheme.parse("M042"), None);
        assert_eq!(scheme.format(7), "MR007");
        assert_eq!(scheme.next(["MR001", "MR009"]), "MR010");
    }
}
