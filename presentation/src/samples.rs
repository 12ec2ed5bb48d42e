//! Built-in sample content for `--test` runs

use chrono::{DateTime, FixedOffset, Offset, Utc};

pub const SAMPLE_REPOSITORY_URL: &str = "https://github.com/Sunwood-ai-labs/release-note-x";

/// Current time in Japan Standard Time
pub fn jst_now() -> DateTime<FixedOffset> {
    let jst = FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&jst)
}

fn time_label(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y/%-m/%-d %-H:%M:%S").to_string()
}

/// Timestamped test post for X
pub fn test_post(now: &DateTime<FixedOffset>) -> String {
    format!(
        "🚀 Release Note X テスト投稿\n\n時刻: {}\n\nこれはGitHubリリースノートを要約してXに投稿するシステムのテストです。\n\n#ReleaseNoteX #GitHub #Twitter",
        time_label(now)
    )
}

/// Release notes used by `summarize --test`
pub fn test_release_notes() -> &'static str {
    "# v0.2.0 - Multi-Platform Expansion Release

## 新機能

- 💬 Discord Webhook 投稿機能
- 🤖 AI によるリリースノート要約
- 🌐 マルチプラットフォーム対応（X + Discord）
- 🔧 OpenRouter サポート（無料モデル）

## バグ修正

- Discord 応答処理: 204 No Content 対応
- post-release スクリプトの構文エラー修正
- ワークフローの YAML 構文エラー修正

## 変更点

- README をマルチプラットフォーム対応に書き直し
- ドキュメントを分割（X.md, DISCORD.md, AI.md）
- GitHub Secrets 同期ツール追加

## 互換性

- Node.js 18 以上が必要"
}

/// Release notes used by `announce --test`
pub fn test_announce_notes() -> &'static str {
    "## テストリリース

テスト投稿です。

### 新機能
- 機能1
- 機能2

### バグ修正
- バグ1
- バグ2"
}

/// Posts used by `thread --test`
pub fn test_thread() -> Vec<String> {
    [
        "🧵 GitHubリリースノートをXに自動投稿するシステムを作りました！",
        "✨ 機能：\n• GitHubリリース監視\n• AIによる要約\n• Xへの自動投稿",
        "🚀 使い方：\nrelease-herald post \"メッセージ\"",
        "📝 詳しくは：\nhttps://github.com/Sunwood-ai-labs/release-note-x\n\n#GitHub #X #Twitter",
    ]
    .map(String::from)
    .to_vec()
}

/// A throwaway release for `discord --test` and `announce --test`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRelease {
    pub title: String,
    pub url: String,
    /// Embed description for `discord --test`
    pub summary: String,
}

pub fn test_release(now: &DateTime<FixedOffset>) -> TestRelease {
    TestRelease {
        title: format!("Test Release {}", now.timestamp_millis()),
        url: SAMPLE_REPOSITORY_URL.to_string(),
        summary: format!(
            "🧪 Discord投稿テスト\n\n時刻: {}\n\nこれはGitHubリリースノートをDiscordに投稿するシステムのテストです。",
            time_label(now)
        ),
    }
}
