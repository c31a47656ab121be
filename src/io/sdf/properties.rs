use std::sync::LazyLock;

use regex::Regex;

use crate::io::error::Error;
use crate::io::util::strip_line_breaks;
use crate::model::property::Property;

/// `>`, optional whitespace, then the bracketed tag name. Anything after the
/// closing bracket is ignored.
static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*<([^>]+)>").expect("invalid tag pattern"));

fn is_tag_line(line: &str) -> bool {
    line.starts_with('>')
}

fn parse_tag(line_no: usize, line: &str) -> Result<String, Error> {
    TAG_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::tag(line_no, strip_line_breaks(line)))
}

/// Groups the data section of a molecule into tagged properties.
///
/// `first_line_no` is the block line number of `lines[0]`. Lines ahead of
/// the first tag are ignored. A tag owns the lines after it up to, but not
/// including, the line just before the next tag (the blank separator); the
/// last tag runs to the end of `lines`.
pub fn decode_properties(first_line_no: usize, lines: &[String]) -> Result<Vec<Property>, Error> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| is_tag_line(l))
        .map(|(i, _)| i)
        .collect();

    let mut properties = Vec::with_capacity(starts.len());
    for (n, &start) in starts.iter().enumerate() {
        let tag = parse_tag(first_line_no + start, &lines[start])?;

        let end = match starts.get(n + 1) {
            Some(&next) => next - 1,
            None => lines.len(),
        };
        let values = lines
            .get(start + 1..end)
            .unwrap_or_default()
            .iter()
            .map(|l| strip_line_breaks(l).into_owned())
            .collect();

        properties.push(Property { tag, values });
    }

    Ok(properties)
}
