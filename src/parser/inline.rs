//! Inline tokenizer.
//!
//! Converts a run of text into typed [`InlineSpan`]s through successive
//! passes over the evolving span sequence: bold, italic, code, then image
//! and link extraction. Each pass only re-examines spans still typed plain;
//! once a span becomes styled it is immune to further splitting, so nested
//! emphasis is deliberately unsupported. The pass order is a contract:
//! changing it changes output on inputs mixing delimiters adjacently.

use crate::error::{Error, Result};
use crate::model::InlineSpan;
use regex::Regex;
use std::sync::OnceLock;

/// Matches `![alt](url)`: alt is any run of non-bracket characters, url any
/// run of non-parenthesis characters. Compiled once.
fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap())
}

/// Matches `[text](url)`; image syntax is excluded by rejecting matches
/// immediately preceded by `!` (the regex crate has no lookbehind).
/// Compiled once.
fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap())
}

/// Tokenize a line or paragraph of raw text into inline spans.
///
/// Fails with [`Error::UnbalancedDelimiter`] when a bold, italic, or code
/// delimiter count within a plain span is odd.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>> {
    let spans = vec![InlineSpan::plain(text)];
    let spans = split_delimiter(spans, "**", InlineSpan::Bold)?;
    let spans = split_delimiter(spans, "_", InlineSpan::Italic)?;
    let spans = split_delimiter(spans, "`", InlineSpan::Code)?;
    let spans = split_pattern(spans, PatternKind::Image);
    Ok(split_pattern(spans, PatternKind::Link))
}

/// Split plain spans on a styling delimiter.
///
/// Fragments alternate plain/styled starting with plain; empty fragments are
/// dropped rather than emitted as empty spans. Spans that are no longer
/// plain pass through untouched and are not balance-checked.
fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &'static str,
    style: fn(String) -> InlineSpan,
) -> Result<Vec<InlineSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Plain(text) = span else {
            result.push(span);
            continue;
        };

        let count = text.matches(delimiter).count();
        if count % 2 != 0 {
            return Err(Error::UnbalancedDelimiter { delimiter, text });
        }
        if count == 0 {
            result.push(InlineSpan::Plain(text));
            continue;
        }

        for (index, fragment) in text.split(delimiter).enumerate() {
            if fragment.is_empty() {
                continue;
            }
            if index % 2 == 0 {
                result.push(InlineSpan::plain(fragment));
            } else {
                result.push(style(fragment.to_string()));
            }
        }
    }

    Ok(result)
}

#[derive(Clone, Copy)]
enum PatternKind {
    Image,
    Link,
}

/// Extract image or link syntax from plain spans, left to right.
///
/// For each match: the preceding text (if non-empty) is emitted as a plain
/// span, then the image/link span, and the scan continues past the match.
/// Any trailing remainder is emitted as a final plain span.
fn split_pattern(spans: Vec<InlineSpan>, kind: PatternKind) -> Vec<InlineSpan> {
    let regex = match kind {
        PatternKind::Image => image_regex(),
        PatternKind::Link => link_regex(),
    };
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Plain(text) = span else {
            result.push(span);
            continue;
        };

        let mut cursor = 0;
        let mut matched = false;
        for caps in regex.captures_iter(&text) {
            let whole = caps.get(0).unwrap();

            // A link match directly preceded by '!' is image syntax; leave
            // it in the surrounding plain text.
            if matches!(kind, PatternKind::Link)
                && whole.start() > 0
                && text.as_bytes()[whole.start() - 1] == b'!'
            {
                continue;
            }

            if whole.start() > cursor {
                result.push(InlineSpan::plain(&text[cursor..whole.start()]));
            }

            let label = caps.get(1).unwrap().as_str().to_string();
            let url = caps.get(2).unwrap().as_str().to_string();
            result.push(match kind {
                PatternKind::Image => InlineSpan::Image { alt: label, url },
                PatternKind::Link => InlineSpan::Link { text: label, url },
            });

            cursor = whole.end();
            matched = true;
        }

        if !matched {
            result.push(InlineSpan::Plain(text));
        } else if cursor < text.len() {
            result.push(InlineSpan::plain(&text[cursor..]));
        }
    }

    result
}
