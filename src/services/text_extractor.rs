//! Recovers the candidate payload from a raw model reply.
//!
//! A reply may arrive wrapped in a completion-API envelope, between the
//! sentinel markers, inside code fences, or surrounded by chatter. None of
//! these functions fail: the worst case hands the input back and lets the
//! structural parse reject it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::constants::prompts::{BEGIN_JSON_MARKER, END_JSON_MARKER};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```json").expect("JSON_FENCE is a valid regex pattern"));

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Unwraps `choices[0].text` (or the chat shape `choices[0].message.content`)
/// when `raw` is a completion envelope. Returns `None` on any mismatch.
pub fn unwrap_completion_envelope(raw: &str) -> Option<String> {
    let envelope: CompletionEnvelope = serde_json::from_str(raw.trim()).ok()?;
    let first = envelope.choices.into_iter().next()?;
    first
        .text
        .or_else(|| first.message.and_then(|m| m.content))
}

/// Generated text of a model reply: the envelope's inner text, or the reply
/// itself when it is not an envelope.
pub fn completion_text(raw: &str) -> String {
    unwrap_completion_envelope(raw).unwrap_or_else(|| raw.to_string())
}

/// Trimmed content between the begin and end sentinels, if both are present
/// in order.
pub fn extract_between_markers(text: &str) -> Option<&str> {
    let start = text.find(BEGIN_JSON_MARKER)?;
    let inner_start = start + BEGIN_JSON_MARKER.len();
    let end = text[inner_start..].find(END_JSON_MARKER)? + inner_start;
    Some(text[inner_start..end].trim())
}

/// Removes code-fence tokens and narrows to the outermost `{ ... }` span.
pub fn strip_fences_to_object(text: &str) -> String {
    let without_lang = JSON_FENCE.replace_all(text, "```");
    let no_fences = without_lang.replace("```", "");
    let no_fences = no_fences.trim();

    match (no_fences.find('{'), no_fences.rfind('}')) {
        (Some(start), Some(end)) if end > start => no_fences[start..=end].trim().to_string(),
        _ => no_fences.to_string(),
    }
}

/// Candidate JSON inside already-unwrapped reply text. The marker slice,
/// when present, is narrowed the same way as a bare reply.
pub fn extract_json_candidate(text: &str) -> String {
    strip_fences_to_object(extract_between_markers(text).unwrap_or(text))
}

/// Best-effort payload of a raw reply: envelope, then markers, then fences
/// and brace span.
pub fn extract_payload(raw: &str) -> String {
    extract_json_candidate(&completion_text(raw))
}
