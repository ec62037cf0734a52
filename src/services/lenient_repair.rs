//! Syntax-level normalizations applied to a near-JSON payload before it is
//! handed to `serde_json`. Nothing here changes what the payload says; it
//! only fixes punctuation a strict parser would reject.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::prompts::{
    BEGIN_JSON_MARKER, BEGIN_PREVIOUS_MARKER, END_JSON_MARKER, END_PREVIOUS_MARKER,
};

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*`{3,}[^\n]*\n").expect("LEADING_FENCE is a valid regex pattern")
});

static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`{3,}\s*$").expect("TRAILING_FENCE is a valid regex pattern"));

static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([^']*)'").expect("SINGLE_QUOTED is a valid regex pattern"));

const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

#[derive(Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Straight,
    Curly,
}

/// Runs every repair in order and returns the normalized payload.
pub fn repair_json(candidate: &str) -> String {
    let stripped = strip_stray_tokens(candidate);
    let unwrapped = unwrap_string_literal(&stripped);
    let quoted = if unwrapped.contains('"') || !unwrapped.contains('\'') {
        unwrapped
    } else {
        convert_single_quotes(&unwrapped)
    };
    normalize_punctuation(&quoted).trim().to_string()
}

/// Drops sentinel tokens and leading/trailing code-fence lines.
pub fn strip_stray_tokens(text: &str) -> String {
    let mut out = LEADING_FENCE.replace(text, "").into_owned();
    out = TRAILING_FENCE.replace(&out, "").into_owned();
    for token in [
        BEGIN_JSON_MARKER,
        END_JSON_MARKER,
        BEGIN_PREVIOUS_MARKER,
        END_PREVIOUS_MARKER,
    ] {
        out = out.replace(token, "");
    }
    out.trim().to_string()
}

/// `"{\"a\":1}"` becomes `{"a":1}`. Anything that is not a string literal
/// holding an object is returned as is.
pub fn unwrap_string_literal(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        if let Ok(inner) = serde_json::from_str::<String>(trimmed) {
            if inner.trim_start().starts_with('{') {
                return inner.trim().to_string();
            }
        }
    }
    trimmed.to_string()
}

/// For payloads written entirely with single quotes, e.g. `{'a': 'b'}`.
fn convert_single_quotes(text: &str) -> String {
    SINGLE_QUOTED
        .replace_all(text, |caps: &regex::Captures| {
            format!("\"{}\"", caps[1].replace('"', "\\\""))
        })
        .into_owned()
}

/// String-aware pass that turns curly-quote delimiters into straight quotes,
/// drops trailing commas and closes brackets left open at the end.
pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut open: Vec<char> = Vec::new();
    let mut string: Option<Delimiter> = None;
    let mut escaped = false;

    for ch in text.chars() {
        if let Some(delimiter) = string {
            if escaped {
                escaped = false;
                out.push(ch);
                continue;
            }
            match ch {
                '\\' => {
                    escaped = true;
                    out.push(ch);
                }
                '"' if delimiter == Delimiter::Straight => {
                    string = None;
                    out.push('"');
                }
                // a straight quote inside a curly-delimited string is content
                '"' => out.push_str("\\\""),
                LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE if delimiter == Delimiter::Curly => {
                    string = None;
                    out.push('"');
                }
                _ => out.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                string = Some(Delimiter::Straight);
                out.push('"');
            }
            LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE => {
                string = Some(Delimiter::Curly);
                out.push('"');
            }
            '{' | '[' => {
                open.push(ch);
                out.push(ch);
            }
            '}' | ']' => {
                drop_trailing_comma(&mut out);
                open.pop();
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    if string.is_none() && !open.is_empty() {
        drop_trailing_comma(&mut out);
        while let Some(bracket) = open.pop() {
            out.push(if bracket == '{' { '}' } else { ']' });
        }
    }

    out
}

fn drop_trailing_comma(out: &mut String) {
    let content_len = out.trim_end().len();
    if out[..content_len].ends_with(',') {
        out.truncate(content_len - 1);
    }
}
