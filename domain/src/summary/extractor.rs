//! Summary extraction from chat-completion responses.
//!
//! Providers disagree on where the final answer lives. Plain chat models put
//! it in `content`; reasoning models often leave `content` empty or truncated
//! and write everything, answer included, into a `reasoning` field. The
//! extractor recovers the postable summary with an ordered chain of attempts:
//!
//! | Order | Source | Attempt |
//! |-------|--------|---------|
//! | 1 | reasoning | [`SUMMARY_OPEN`] … [`SUMMARY_CLOSE`] pair |
//! | 2 | primary | the same marker pair |
//! | 3 | reasoning | fenced code block (only when primary looks incomplete) |
//! | 4 | reasoning | text from the later of 🚀 / 🎉 |
//! | 5 | reasoning | last paragraph |
//!
//! Reasoning is only consulted when it holds more than
//! [`MIN_MEANINGFUL_CHARS`] characters; otherwise the primary text passes
//! through. The result is always trimmed and the function never fails.

/// Marker the prompt asks the model to emit before its final summary.
pub const SUMMARY_OPEN: &str = "【SUMMARY】";

/// Marker closing the summary.
pub const SUMMARY_CLOSE: &str = "【/SUMMARY】";

/// Text with at most this many characters (after trimming) is ignored.
pub const MIN_MEANINGFUL_CHARS: usize = 10;

/// Primary text shorter than this is treated as incomplete.
pub const COMPLETE_PRIMARY_CHARS: usize = 50;

const FENCE: &str = "```";
const ANCHOR_EMOJIS: [&str; 2] = ["🚀", "🎉"];

/// Extract the best-effort summary from a completion.
///
/// # Examples
///
/// ```
/// use herald_domain::summary::extractor::extract;
///
/// assert_eq!(extract(None, None), "");
/// assert_eq!(extract(Some("  hello  "), None), "hello");
///
/// let reasoning = "Let me think.\n【SUMMARY】\n🚀 v1.2.0 ships faster builds\n【/SUMMARY】";
/// assert_eq!(extract(Some(""), Some(reasoning)), "🚀 v1.2.0 ships faster builds");
/// ```
pub fn extract(primary: Option<&str>, reasoning: Option<&str>) -> String {
    select(primary, reasoning).trim().to_string()
}

/// Pick the untrimmed slice that becomes the summary.
fn select<'a>(primary: Option<&'a str>, reasoning: Option<&'a str>) -> &'a str {
    let primary_text = primary.unwrap_or("");

    let Some(reasoning) = reasoning.filter(|r| is_meaningful(r)) else {
        return primary_text;
    };

    if let Some(inner) = tagged_summary(reasoning) {
        return inner;
    }

    // Once the primary text carries the open marker it is authoritative,
    // whether or not a usable pair follows.
    if primary_text.contains(SUMMARY_OPEN) {
        return tagged_summary(primary_text).unwrap_or(primary_text);
    }

    if trimmed_chars(primary_text) >= COMPLETE_PRIMARY_CHARS {
        return primary_text;
    }

    fenced_block(reasoning)
        .or_else(|| emoji_anchored(reasoning))
        .unwrap_or_else(|| last_paragraph(reasoning))
}

/// Inner text of the first marker pair, if it is long enough to be a summary.
pub fn tagged_summary(text: &str) -> Option<&str> {
    let start = text.find(SUMMARY_OPEN)? + SUMMARY_OPEN.len();
    let end = start + text[start..].find(SUMMARY_CLOSE)?;
    let inner = &text[start..end];
    is_meaningful(inner).then_some(inner)
}

/// Body of the first fenced code block. The rest of the opening fence line
/// (a language tag, usually) is skipped.
pub fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)? + FENCE.len();
    let body_start = open + text[open..].find('\n')? + 1;
    let body_end = body_start + text[body_start..].find(FENCE)?;
    let body = &text[body_start..body_end];
    is_meaningful(body).then_some(body)
}

/// Text starting at the later-occurring anchor emoji.
///
/// Returns `None` when neither emoji is present. When the anchor sits at the
/// very start the whole text is returned.
pub fn emoji_anchored(text: &str) -> Option<&str> {
    let anchor = ANCHOR_EMOJIS.iter().filter_map(|e| text.find(*e)).max()?;
    if anchor > 0 {
        Some(&text[anchor..])
    } else {
        Some(text)
    }
}

/// Last blank-line separated paragraph with meaningful content, or the whole
/// text when none qualifies.
pub fn last_paragraph(text: &str) -> &str {
    text.split("\n\n")
        .filter(|p| is_meaningful(p))
        .last()
        .unwrap_or(text)
}

fn trimmed_chars(text: &str) -> usize {
    text.trim().chars().count()
}

fn is_meaningful(text: &str) -> bool {
    trimmed_chars(text) > MIN_MEANINGFUL_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_PRIMARY: &str =
        "This primary answer is comfortably longer than fifty characters in total.";

    // ==================== Pass-through ====================

    #[test]
    fn test_all_empty_yields_empty() {
        assert_eq!(extract(None, None), "");
        assert_eq!(extract(Some(""), Some("")), "");
        assert_eq!(extract(Some("   \n"), None), "");
    }

    #[test]
    fn test_primary_passes_through_without_reasoning() {
        assert_eq!(extract(Some("hello"), None), "hello");
    }

    #[test]
    fn test_short_reasoning_is_ignored() {
        assert_eq!(extract(Some("hello"), Some("short")), "hello");
        // exactly ten characters is still too short
        assert_eq!(extract(Some("hello"), Some("  0123456789  ")), "hello");
    }

    #[test]
    fn test_short_reasoning_with_missing_primary() {
        assert_eq!(extract(None, Some("tiny")), "");
    }

    // ==================== Marker pair ====================

    #[test]
    fn test_reasoning_marker_wins_over_primary_marker() {
        let reasoning = "noise 【SUMMARY】 inner-r summary text 【/SUMMARY】 more noise";
        let primary = "junk 【SUMMARY】 inner-p summary text 【/SUMMARY】 junk";
        assert_eq!(extract(Some(primary), Some(reasoning)), "inner-r summary text");
        assert_eq!(extract(None, Some(reasoning)), "inner-r summary text");
    }

    #[test]
    fn test_primary_marker_used_when_reasoning_has_none() {
        let reasoning = "I should summarize the release for social media.";
        let primary = "junk 【SUMMARY】 inner-p summary text 【/SUMMARY】 junk";
        assert_eq!(extract(Some(primary), Some(reasoning)), "inner-p summary text");
    }

    #[test]
    fn test_marker_pair_is_non_greedy() {
        let reasoning = "【SUMMARY】first summary body【/SUMMARY】 and 【SUMMARY】second body here【/SUMMARY】";
        assert_eq!(extract(None, Some(reasoning)), "first summary body");
    }

    #[test]
    fn test_short_tagged_inner_is_rejected() {
        // "inner-r" is only seven characters, so the pair does not qualify and
        // the single-paragraph reasoning is returned whole.
        let reasoning = "noise 【SUMMARY】 inner-r 【/SUMMARY】 more noise";
        assert_eq!(extract(None, Some(reasoning)), reasoning);
    }

    #[test]
    fn test_unclosed_marker_in_primary_keeps_primary() {
        let reasoning = "🚀 this emoji text would otherwise be picked";
        let primary = "【SUMMARY】 never closed";
        assert_eq!(extract(Some(primary), Some(reasoning)), primary);
    }

    #[test]
    fn test_multiline_tagged_summary() {
        let reasoning = "Draft:\n【SUMMARY】\n🚀 v0.2.0\n\n• Discord support\n• AI summaries\n【/SUMMARY】\nDone.";
        assert_eq!(
            extract(Some(""), Some(reasoning)),
            "🚀 v0.2.0\n\n• Discord support\n• AI summaries"
        );
    }

    // ==================== Complete primary ====================

    #[test]
    fn test_complete_primary_stands() {
        let reasoning = "intro\n```\nCODE BODY HERE\n```\ntail";
        assert_eq!(extract(Some(LONG_PRIMARY), Some(reasoning)), LONG_PRIMARY);
    }

    #[test]
    fn test_incomplete_primary_falls_back_to_reasoning() {
        let reasoning = "intro\n```\nCODE BODY HERE\n```\ntail";
        assert_eq!(extract(Some("Sure!"), Some(reasoning)), "CODE BODY HERE");
    }

    // ==================== Code block ====================

    #[test]
    fn test_code_block_fallback() {
        let reasoning = "intro\n```\nCODE BODY HERE\n```\ntail";
        assert_eq!(extract(Some(""), Some(reasoning)), "CODE BODY HERE");
    }

    #[test]
    fn test_code_block_with_language_tag() {
        let reasoning = "Here it is:\n```markdown\n🚀 Release v2 is out\n```";
        assert_eq!(extract(None, Some(reasoning)), "🚀 Release v2 is out");
    }

    #[test]
    fn test_short_code_block_falls_through_to_emoji() {
        let reasoning = "see ```\nshort\n``` then 🚀 the actual announcement";
        assert_eq!(extract(None, Some(reasoning)), "🚀 the actual announcement");
    }

    #[test]
    fn test_unclosed_code_block_is_ignored() {
        assert_eq!(fenced_block("```\nnever closed at all"), None);
        assert_eq!(fenced_block("``` no newline after fence ```"), None);
    }

    // ==================== Emoji anchor ====================

    #[test]
    fn test_emoji_anchor_fallback() {
        assert_eq!(
            extract(None, Some("blah blah 🚀 release text here")),
            "🚀 release text here"
        );
    }

    #[test]
    fn test_emoji_anchor_prefers_later_occurrence() {
        // The later anchor wins even when the earlier one is the rocket.
        // Changing this to first-occurrence must be a deliberate decision.
        let reasoning = "abcd 🚀 middle part 🎉 final words";
        assert_eq!(extract(None, Some(reasoning)), "🎉 final words");

        let reasoning = "abcd 🎉 middle part 🚀 final words";
        assert_eq!(extract(None, Some(reasoning)), "🚀 final words");
    }

    #[test]
    fn test_emoji_at_start_returns_whole_reasoning() {
        let reasoning = "🎉 celebration text\n\nsecond paragraph here";
        assert_eq!(extract(None, Some(reasoning)), reasoning);
    }

    // ==================== Last paragraph ====================

    #[test]
    fn test_last_paragraph_fallback() {
        let reasoning = "First paragraph of thinking.\n\nSecond paragraph is the answer.\n\nok";
        assert_eq!(
            extract(None, Some(reasoning)),
            "Second paragraph is the answer."
        );
    }

    #[test]
    fn test_single_paragraph_returns_reasoning() {
        let reasoning = "  one long paragraph without anchors  ";
        assert_eq!(
            extract(None, Some(reasoning)),
            "one long paragraph without anchors"
        );
    }

    #[test]
    fn test_last_paragraph_without_qualifying_piece() {
        assert_eq!(last_paragraph("a\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    // ==================== Invariants ====================

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            (Some("  hello  "), None),
            (None, Some("blah blah 🚀 release text here\n")),
            (Some(""), Some("intro\n```\n  CODE BODY HERE  \n```\ntail")),
            (None, Some("First paragraph of thinking.\n\n Second one here \n")),
        ];
        for (primary, reasoning) in inputs {
            let once = extract(primary, reasoning);
            assert_eq!(extract(Some(&once), None), once);
        }
    }

    #[test]
    fn test_result_is_always_trimmed() {
        let inputs = [
            (Some("\n  padded primary \t"), None),
            (None, Some("\n【SUMMARY】\n  padded summary text  \n【/SUMMARY】\n")),
            (Some(" "), Some("x 🚀 trailing spaces   \n\n")),
            (None, Some("  paragraph one is long  \n\n  paragraph two is long  ")),
        ];
        for (primary, reasoning) in inputs {
            let result = extract(primary, reasoning);
            assert_eq!(result, result.trim(), "untrimmed result: {:?}", result);
        }
    }

    #[test]
    fn test_length_threshold_counts_characters() {
        // Eleven Japanese characters: 33 bytes but only 11 chars
        let inner = "新機能を追加しました！";
        assert_eq!(inner.chars().count(), 11);
        let reasoning = format!("{}{}{}", SUMMARY_OPEN, inner, SUMMARY_CLOSE);
        assert_eq!(tagged_summary(&reasoning), Some(inner));
    }

    #[test]
    fn test_emoji_heavy_primary_counts_each_emoji_once() {
        // Thirty emoji are 30 chars (60 UTF-16 units), short of a complete primary
        let primary = "🎉".repeat(30);
        let reasoning = "Thinking about the notes.\n\n🚀 Faster builds and smaller binaries";
        assert_eq!(
            extract(Some(&primary), Some(reasoning)),
            "🚀 Faster builds and smaller binaries"
        );

        let primary = "🎉".repeat(COMPLETE_PRIMARY_CHARS);
        assert_eq!(extract(Some(&primary), Some(reasoning)), primary);
    }
}
