use std::io::Write;

use crate::error::Result;
use crate::record::{ConvertedRecord, Record};

/// Lazily converts lines of `key=hexvalue` into records, in input order.
/// Each line is independent; the first error ends the iteration usefully
/// for fail-fast callers.
pub fn convert_lines<'a, I>(lines: I) -> impl Iterator<Item = Result<ConvertedRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| Record::parse(line).and_then(Record::convert))
}

/// Converts a whole input buffer, writing one `key=decimal` line per input
/// line. Every record is newline-terminated, including the last. Aborts on
/// the first bad line with no partial-output guarantee.
pub fn convert(input: &[u8], writer: &mut dyn Write) -> Result<()> {
    let text = std::str::from_utf8(input)?;

    for record in convert_lines(text.lines()) {
        writeln!(writer, "{}", record?)?;
    }

    Ok(())
}
