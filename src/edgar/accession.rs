// src/edgar/accession.rs
use std::fmt;

/// Width of the undashed accession number used in archive paths.
const UNDASHED_WIDTH: usize = 18;

/// An EDGAR accession number, stored in its undashed, zero-padded form.
///
/// EDGAR shows accession numbers as `0000950170-24-012345` in the submissions
/// index, while archive paths use `000095017024012345`. Both parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessionNumber(String);

impl AccessionNumber {
    /// Normalizes either representation.
    pub fn new(raw: &str) -> Self {
        AccessionNumber(drop_dashes(raw))
    }

    /// The 18-character form used when building archive paths.
    pub fn undashed(&self) -> &str {
        &self.0
    }

    /// The `XXXXXXXXXX-YY-ZZZZZZ` form shown in the submissions index.
    pub fn dashed(&self) -> String {
        add_dashes(&self.0)
    }
}

impl fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dashed())
    }
}

/// Converts an accession number to the no-dash representation, left padded with zeros to 18 chars.
pub fn drop_dashes(accession_number: &str) -> String {
    let digits: String = accession_number.chars().filter(|c| *c != '-').collect();
    format!("{:0>width$}", digits, width = UNDASHED_WIDTH)
}

/// Adds the dashes back into an undashed accession number (10 digits, 2 digits, remainder).
pub fn add_dashes(accession_number: &str) -> String {
    match (
        accession_number.get(..10),
        accession_number.get(10..12),
        accession_number.get(12..),
    ) {
        (Some(filer), Some(year), Some(sequence)) => format!("{}-{}-{}", filer, year, sequence),
        // Too short to split, leave as is
        _ => accession_number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_dashes_pads_to_eighteen() {
        assert_eq!(drop_dashes("0000950170-24-012345"), "000095017024012345");
        assert_eq!(drop_dashes("950170-24-012345"), "000095017024012345");
        assert_eq!(drop_dashes("1234567890"), "000000001234567890");
        assert_eq!(drop_dashes("1234567890").len(), 18);
    }

    #[test]
    fn test_add_dashes_splits_ten_two_rest() {
        assert_eq!(add_dashes("000095017024012345"), "0000950170-24-012345");
        assert_eq!(add_dashes("123"), "123");
    }

    #[test]
    fn test_round_trip_undashed_dashed_undashed() {
        for raw in [
            "1234567890",
            "000032019323000106",
            "0001193125-23-123456",
            "98765432101234",
            "000000000000000001",
        ] {
            let undashed = drop_dashes(raw);
            assert_eq!(undashed.len(), 18, "not padded: {}", raw);
            assert_eq!(drop_dashes(&add_dashes(&undashed)), undashed, "round trip failed for {}", raw);
        }
    }

    #[test]
    fn test_accession_number_representations_agree() {
        let dashed = AccessionNumber::new("0000320193-23-000106");
        let undashed = AccessionNumber::new("000032019323000106");
        assert_eq!(dashed, undashed);
        assert_eq!(dashed.undashed(), "000032019323000106");
        assert_eq!(undashed.to_string(), "0000320193-23-000106");
    }
}
