//! Record-related types
//!
//! A record file holds a single sale. Its name carries a sequence number
//! (`00000001.rcd`, `00000002.rcd`, ...) and its body holds three lines:
//! branch code, commodity code and amount.

use std::path::{Path, PathBuf};

/// Sequence number taken from the 8-digit prefix of a record file name
pub type Sequence = u32;

/// Amount of a single sale or an accumulated total
pub type Amount = u64;

/// Extension every record file name ends with
pub const RECORD_FILE_EXTENSION: &str = ".rcd";

/// Number of digits in a record file name prefix
pub const SEQUENCE_DIGITS: usize = 8;

/// Largest total that still fits in 10 decimal digits
pub const MAX_TOTAL: Amount = 9_999_999_999;

/// A candidate record file found in the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    /// Full path to the file
    pub path: PathBuf,

    /// File name, used in error messages
    pub name: String,

    /// Numeric value of the 8-digit prefix
    pub sequence: Sequence,
}

impl RecordFile {
    /// Build a RecordFile if the path's file name matches `^[0-9]{8}\.rcd$`
    ///
    /// Names that are not valid UTF-8 never match. This only looks at the name;
    /// whether the path is a regular file is the caller's concern.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let sequence = parse_sequence(name)?;

        Some(RecordFile {
            path: path.to_path_buf(),
            name: name.to_string(),
            sequence,
        })
    }
}

/// Extract the sequence number from a record file name
pub fn parse_sequence(name: &str) -> Option<Sequence> {
    let prefix = name.strip_suffix(RECORD_FILE_EXTENSION)?;
    if prefix.len() != SEQUENCE_DIGITS || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Body of a record file after the structure check
///
/// Fields are trimmed but otherwise unvalidated: codes are resolved against
/// the totals tables and the amount is parsed during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub branch_code: String,
    pub commodity_code: String,
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first("00000001.rcd", Some(1))]
    #[case::large("12345678.rcd", Some(12345678))]
    #[case::zero("00000000.rcd", Some(0))]
    #[case::seven_digits("0000001.rcd", None)]
    #[case::nine_digits("000000001.rcd", None)]
    #[case::wrong_extension("00000001.txt", None)]
    #[case::uppercase_extension("00000001.RCD", None)]
    #[case::letters("sales.rcd", None)]
    #[case::signed("+0000001.rcd", None)]
    #[case::trailing_text("00000001.rcd.bak", None)]
    #[case::no_extension("00000001", None)]
    fn test_parse_sequence(#[case] name: &str, #[case] expected: Option<Sequence>) {
        assert_eq!(parse_sequence(name), expected);
    }

    #[test]
    fn test_record_file_from_path() {
        let record = RecordFile::from_path(Path::new("/data/sales/00000042.rcd")).unwrap();
        assert_eq!(record.name, "00000042.rcd");
        assert_eq!(record.sequence, 42);
        assert_eq!(record.path, PathBuf::from("/data/sales/00000042.rcd"));

        assert!(RecordFile::from_path(Path::new("/data/sales/branch.lst")).is_none());
    }
}
