//! Upload-format parser.
//!
//! One record per line:
//!
//! ```text
//! Name:Quantity
//! Name:Quantity [Alt1 Alt2 ...]
//! ```
//!
//! Blank lines are ignored. Structurally malformed lines are skipped and
//! reported, never fatal. A quantity that is not a non-negative integer
//! rejects the whole upload.

mod format;

pub use format::*;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AlternativesMap, Inventory, InventorySnapshot};

/// Parser errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "line {line}: invalid quantity {value:?} for {name} (expected a whole number from 0 to {})",
        u32::MAX
    )]
    InvalidQuantity {
        line: usize,
        name: String,
        value: String,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Why a line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `:` between name and quantity
    MissingSeparator,
    /// More than one `:` in the name/quantity part
    ExtraSeparator,
    /// Nothing before the `:`
    EmptyName,
}

/// A line the parser ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the uploaded text
    pub line: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Parsed upload plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub snapshot: InventorySnapshot,
    pub skipped: Vec<SkippedLine>,
}

/// Parse uploaded text into inventory and alternatives.
pub fn parse_inventory(text: &str) -> ParseResult<InventorySnapshot> {
    parse_with_report(text).map(|report| report.snapshot)
}

/// Parse uploaded text, keeping track of skipped lines.
pub fn parse_with_report(text: &str) -> ParseResult<ParseReport> {
    let mut inventory = Inventory::new();
    let mut alternatives = AlternativesMap::new();
    let mut skipped = Vec::new();

    for (idx, raw) in split_lines(text).enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (main, alt_list) = split_alternatives(line);

        let (name, qty) = match split_name_quantity(main) {
            Ok(parts) => parts,
            Err(reason) => {
                warn!(line = line_no, ?reason, "skipping malformed inventory line");
                skipped.push(SkippedLine {
                    line: line_no,
                    content: line.to_string(),
                    reason,
                });
                continue;
            }
        };

        let quantity = qty.parse::<u32>().map_err(|_| ParseError::InvalidQuantity {
            line: line_no,
            name: name.to_string(),
            value: qty.to_string(),
        })?;

        if inventory.insert(name.to_string(), quantity).is_some() {
            debug!(line = line_no, name, "duplicate medicine, later line wins");
        }
        if !alt_list.is_empty() {
            alternatives.insert(name.to_string(), alt_list);
        }
    }

    Ok(ParseReport {
        snapshot: InventorySnapshot::new(inventory, alternatives),
        skipped,
    })
}

/// Split on every line boundary: `\n`, `\r\n`, lone `\r`, and the other
/// Unicode line separators (`\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`,
/// `\u{2028}`, `\u{2029}`).
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| {
        line.strip_suffix('\r')
            .unwrap_or(line)
            .split(is_line_break)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split a trimmed line into its main part and bracketed alternatives.
fn split_alternatives(line: &str) -> (&str, Vec<String>) {
    match line.split_once('[') {
        Some((main, alt)) => {
            let alt = alt.trim_matches(|c: char| c.is_whitespace() || c == ']');
            let alt_list = alt.split_whitespace().map(str::to_string).collect();
            (main, alt_list)
        }
        None => (line, Vec::new()),
    }
}

fn split_name_quantity(main: &str) -> Result<(&str, &str), SkipReason> {
    let (name, qty) = main
        .trim()
        .split_once(':')
        .ok_or(SkipReason::MissingSeparator)?;

    if qty.contains(':') {
        return Err(SkipReason::ExtraSeparator);
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    Ok((name, qty.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let snapshot = parse_inventory("Dolo:3").unwrap();
        assert_eq!(snapshot.inventory["Dolo"], 3);
        assert!(snapshot.alternatives.is_empty());
    }

    #[test]
    fn test_line_with_alternatives() {
        let snapshot = parse_inventory("Paracetamol:0 [Crocin Dolo]").unwrap();
        assert_eq!(snapshot.inventory["Paracetamol"], 0);
        assert_eq!(
            snapshot.alternatives["Paracetamol"],
            vec!["Crocin".to_string(), "Dolo".to_string()]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let text = "   Ibuprofen :  10   [  Aspirin   Dolo ]  \n\n\t\n";
        let snapshot = parse_inventory(text).unwrap();
        assert_eq!(snapshot.inventory["Ibuprofen"], 10);
        assert_eq!(
            snapshot.alternatives["Ibuprofen"],
            vec!["Aspirin".to_string(), "Dolo".to_string()]
        );
    }

    #[test]
    fn test_empty_brackets_record_no_alternatives() {
        let snapshot = parse_inventory("Dolo:3 []").unwrap();
        assert_eq!(snapshot.inventory["Dolo"], 3);
        assert!(!snapshot.alternatives.contains_key("Dolo"));
    }

    #[test]
    fn test_malformed_line_skipped() {
        let report = parse_with_report("Dolo:3\ngarbage-no-colon\n").unwrap();
        assert_eq!(report.snapshot.inventory.len(), 1);
        assert_eq!(report.snapshot.inventory["Dolo"], 3);
        assert_eq!(
            report.skipped,
            vec![SkippedLine {
                line: 2,
                content: "garbage-no-colon".into(),
                reason: SkipReason::MissingSeparator,
            }]
        );
    }

    #[test]
    fn test_colon_only_inside_brackets_is_skipped() {
        let report = parse_with_report("Dolo [Crocin:3]").unwrap();
        assert!(report.snapshot.inventory.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::MissingSeparator);
    }

    #[test]
    fn test_extra_separator_and_empty_name_skipped() {
        let report = parse_with_report("A:1:2\n:5\nB:2").unwrap();
        assert_eq!(report.snapshot.inventory.len(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].reason, SkipReason::ExtraSeparator);
        assert_eq!(report.skipped[1].reason, SkipReason::EmptyName);
        assert_eq!(report.skipped[1].line, 2);
    }

    #[test]
    fn test_invalid_quantity_rejects_upload() {
        let err = parse_inventory("Dolo:3\nCrocin:lots").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidQuantity {
                line: 2,
                name: "Crocin".into(),
                value: "lots".into(),
            }
        );
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        assert!(matches!(
            parse_inventory("Dolo:-1"),
            Err(ParseError::InvalidQuantity { line: 1, .. })
        ));
    }

    #[test]
    fn test_quantity_above_range_names_the_bound() {
        let err = parse_inventory("Dolo:5000000000").unwrap_err();
        assert!(err.to_string().contains("4294967295"));
        let max = parse_inventory("Dolo:4294967295").unwrap();
        assert_eq!(max.inventory["Dolo"], u32::MAX);
    }

    #[test]
    fn test_line_endings() {
        let text = "Dolo:3\rCrocin:0\r\nAspirin:1\nDisprin:2\u{2028}Calpol:4";
        let report = parse_with_report(text).unwrap();
        let names: Vec<_> = report.snapshot.inventory.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Aspirin", "Calpol", "Crocin", "Disprin", "Dolo"]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_crlf_keeps_line_numbers() {
        let report = parse_with_report("Dolo:3\r\nbroken\r\nCrocin:0\r\n").unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(report.skipped[0].content, "broken");
    }

    #[test]
    fn test_empty_quantity_rejected() {
        assert!(parse_inventory("Dolo:").is_err());
    }

    #[test]
    fn test_last_write_wins() {
        let text = "Dolo:3 [Crocin]\nDolo:7\nDolo:9 [Calpol Crocin]";
        let snapshot = parse_inventory(text).unwrap();
        assert_eq!(snapshot.inventory["Dolo"], 9);
        assert_eq!(
            snapshot.alternatives["Dolo"],
            vec!["Calpol".to_string(), "Crocin".to_string()]
        );
    }

    #[test]
    fn test_later_line_without_brackets_keeps_alternatives() {
        let snapshot = parse_inventory("Dolo:3 [Crocin]\nDolo:7").unwrap();
        assert_eq!(snapshot.inventory["Dolo"], 7);
        assert_eq!(snapshot.alternatives["Dolo"], vec!["Crocin".to_string()]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let snapshot = parse_inventory("dolo:1\nDolo:2").unwrap();
        assert_eq!(snapshot.inventory.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let report = parse_with_report("").unwrap();
        assert!(report.snapshot.is_empty());
        assert!(report.skipped.is_empty());
    }
}
