use regex::Regex;
use std::sync::OnceLock;

/// `<origin> <destination> <D[D]/M[M]/YYYY>`, anchored on both ends.
/// Digits are ASCII only; run digit normalization first.
const LINE_PATTERN: &str = r"^(\S+)\s+(\S+)\s+([0-9]{1,2}/[0-9]{1,2}/[0-9]{4})$";

fn line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"))
}

/// The three pieces of a search line, borrowed from the normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedLine<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub date: &'a str,
}

/// Split a normalized line into origin token, destination token and date.
/// Returns `None` when the line does not follow the grammar.
pub fn match_line(line: &str) -> Option<MatchedLine<'_>> {
    let caps = line_regex().captures(line)?;
    Some(MatchedLine {
        origin: caps.get(1)?.as_str(),
        destination: caps.get(2)?.as_str(),
        date: caps.get(3)?.as_str(),
    })
}
