use std::fmt;
use std::num::IntErrorKind;

use crate::error::{Error, Result};

/// One input line, split into its key and raw hexadecimal value. Lives only
/// for the duration of converting that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub raw_value: String,
}

/// A converted line: the key and the hexadecimal value reinterpreted as a
/// signed 32-bit integer. Displays as `key=decimal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedRecord {
    pub key: String,
    pub value: i32,
}

impl Record {
    /// Parses one line. All whitespace is stripped first; the remainder must
    /// contain exactly one `=` separating the key from the hex digits.
    pub fn parse(line: &str) -> Result<Self> {
        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();

        let Some((key, raw_value)) = stripped.split_once('=') else {
            return Err(Error::MalformedLine(line.to_string()));
        };
        if raw_value.contains('=') {
            return Err(Error::MalformedLine(line.to_string()));
        }

        Ok(Record {
            key: key.to_string(),
            raw_value: raw_value.to_string(),
        })
    }

    /// Parses the raw value as unsigned 32-bit hex and reinterprets it as
    /// two's complement: values above 0x7FFF_FFFF wrap negative.
    pub fn convert(self) -> Result<ConvertedRecord> {
        let unsigned = u32::from_str_radix(&self.raw_value, 16).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => Error::OutOfRange(self.raw_value.clone()),
            _ => Error::InvalidHex(self.raw_value.clone()),
        })?;

        Ok(ConvertedRecord {
            key: self.key,
            value: unsigned as i32,
        })
    }
}

impl fmt::Display for ConvertedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("reg=1F", "reg", "1F")]
    #[case::spaces_around_separator("reg = 1F", "reg", "1F")]
    #[case::embedded_spaces(" r e g = 1 F ", "reg", "1F")]
    #[case::tabs("\treg\t=\t1F", "reg", "1F")]
    fn test_parse(#[case] line: &str, #[case] key: &str, #[case] raw_value: &str) {
        let record = Record::parse(line).unwrap();
        assert_eq!(record.key, key);
        assert_eq!(record.raw_value, raw_value);
    }

    #[rstest]
    #[case::no_separator("reg1F")]
    #[case::double_separator("badkey==1F")]
    #[case::two_pairs("a=1=2")]
    #[case::empty_line("")]
    #[case::whitespace_only("   ")]
    fn test_parse_malformed(#[case] line: &str) {
        assert!(matches!(
            Record::parse(line),
            Err(Error::MalformedLine(_))
        ));
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::small("FF", 255)]
    #[case::max_positive("7FFFFFFF", 2147483647)]
    #[case::min_negative("80000000", -2147483648)]
    #[case::minus_one("FFFFFFFF", -1)]
    #[case::lowercase("deadbeef", -559038737)]
    #[case::leading_zeros("000000FF", 255)]
    fn test_convert(#[case] raw_value: &str, #[case] expected: i32) {
        let record = Record {
            key: "k".to_string(),
            raw_value: raw_value.to_string(),
        };
        assert_eq!(record.convert().unwrap().value, expected);
    }

    #[rstest]
    #[case::letters("zz")]
    #[case::empty("")]
    #[case::prefixed("0xFF")]
    fn test_convert_invalid_hex(#[case] raw_value: &str) {
        let record = Record {
            key: "k".to_string(),
            raw_value: raw_value.to_string(),
        };
        assert!(matches!(record.convert(), Err(Error::InvalidHex(_))));
    }

    #[rstest]
    #[case::nine_digits("1FFFFFFFF")]
    #[case::way_too_big("FFFFFFFFFFFFFFFF")]
    fn test_convert_out_of_range(#[case] raw_value: &str) {
        let record = Record {
            key: "k".to_string(),
            raw_value: raw_value.to_string(),
        };
        assert!(matches!(record.convert(), Err(Error::OutOfRange(_))));
    }

    #[rstest]
    fn test_display() {
        let record = ConvertedRecord {
            key: "gamma".to_string(),
            value: -1,
        };
        assert_eq!(record.to_string(), "gamma=-1");
    }
}
