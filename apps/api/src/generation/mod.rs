// Tailoring pipeline: prompt construction, one completion call per stage,
// defensive parsing of untrusted model JSON.
// All completion calls go through llm_client; no direct HTTP here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod requirements;

/// Hard bound on how much job text ever reaches a prompt. This is a
/// reproducible contract, not a performance hint: the first 4000
/// characters, exactly.
pub const JOB_TEXT_PROMPT_LIMIT: usize = 4000;

/// Truncates to the first `max` characters, never splitting a character.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
