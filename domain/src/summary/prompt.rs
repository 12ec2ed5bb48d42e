//! Prompt templates for release-note summarization

use super::extractor::{SUMMARY_CLOSE, SUMMARY_OPEN};
use super::language::Language;

/// Nominal length of a summary, matching the X post limit for free accounts
pub const SUMMARY_MAX_CHARS: usize = 280;

/// Templates for the summarization request
pub struct SummaryPrompt;

impl SummaryPrompt {
    /// System prompt asking for a short, emoji-friendly summary wrapped in the
    /// marker pair the extractor recognizes.
    pub fn system(language: Language) -> String {
        match language {
            Language::Japanese => format!(
                r#"あなたはGitHubリリースノートをSNS向けに要約するAIアシスタントです。

以下のガイドラインに従って要約してください：
- 最大{max}文字（X/Twitterの文字数制限に合わせる）
- 箇条書きや絵文字を活用して読みやすく
- 重要な変更点を優先的に伝える
- 専門用語は簡潔に説明する

【重要】最終的な要約を{open}と{close}で囲んで出力してください。例：
{open}
🚀 リリース名

• 変更点1
• 変更点2
• 変更点3
{close}

これにより、正確な要約を抽出できます。"#,
                max = SUMMARY_MAX_CHARS,
                open = SUMMARY_OPEN,
                close = SUMMARY_CLOSE,
            ),
            Language::English => format!(
                r#"You are an AI assistant that summarizes GitHub release notes for social media.

Follow these guidelines:
- Maximum {max} characters (Twitter/X character limit)
- Use bullet points and emojis for readability
- Focus on important changes
- Keep technical terms brief

【IMPORTANT】Wrap your final summary with {open} and {close} tags. Example:
{open}
🚀 Release Name

• Change 1
• Change 2
• Change 3
{close}

This ensures accurate extraction of the summary."#,
                max = SUMMARY_MAX_CHARS,
                open = SUMMARY_OPEN,
                close = SUMMARY_CLOSE,
            ),
        }
    }

    /// User prompt carrying the release notes
    pub fn user(release_notes: &str, language: Language) -> String {
        match language {
            Language::Japanese => format!(
                "以下のGitHubリリースノートをSNS向けに要約してください：\n\n---\n{}\n---\n\n上記のリリースノートを要約してください。",
                release_notes
            ),
            Language::English => format!(
                "Please summarize the following GitHub release notes for social media:\n\n---\n{}\n---\n\nSummarize the release notes above.",
                release_notes
            ),
        }
    }
}
