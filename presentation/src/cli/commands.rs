//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use herald_domain::{Channel, Language};
use std::path::PathBuf;

/// CLI arguments for release-herald
#[derive(Parser, Debug)]
#[command(name = "release-herald")]
#[command(author, version, about = "Announce GitHub releases on X and Discord")]
#[command(long_about = r#"
release-herald posts GitHub release announcements to X (Twitter) and Discord,
optionally summarizing the release notes with an OpenAI-compatible model.

Credentials are read from the environment (a .env file in the working
directory is loaded first):
  OPENAI_API_KEY / OPENROUTER_API_KEY   AI summaries
  DISCORD_WEBHOOK_URL                   Discord
  X_API_KEY, X_API_SECRET,
  X_ACCESS_TOKEN, X_ACCESS_SECRET       X (Twitter)

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./herald.toml       Project-level config
3. ~/.config/release-herald/config.toml   Global config

Example:
  release-herald summarize --file RELEASE_NOTES.md
  release-herald announce v1.2.0 https://github.com/acme/tool/releases/tag/v1.2.0 "$NOTES" --summarize
  release-herald thread --file thread.md
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize release notes and print the summary
    Summarize(SummarizeArgs),
    /// Post text to X
    Post(PostArgs),
    /// Post the default release announcement to X
    Release(ReleaseArgs),
    /// Post a release card to Discord
    Discord(DiscordArgs),
    /// Post a release to every configured channel
    Announce(AnnounceArgs),
    /// Post a thread (reply chain) to X
    Thread(ThreadArgs),
    /// Check markdown files for common syntax problems
    Lint(LintArgs),
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Release notes (joined with spaces)
    pub notes: Vec<String>,

    /// Read release notes from a file
    #[arg(long, value_name = "PATH", conflicts_with = "notes")]
    pub file: Option<PathBuf>,

    /// Summarize built-in sample notes
    #[arg(long)]
    pub test: bool,

    /// Print only the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Summary language (ja or en); detected from the notes by default
    #[arg(long, value_name = "LANG")]
    pub language: Option<Language>,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Text to post (joined with spaces)
    pub text: Vec<String>,

    /// Summarize NOTES and post the summary with the release URL
    #[arg(
        long,
        num_args = 3,
        value_names = ["TITLE", "URL", "NOTES"],
        conflicts_with = "text"
    )]
    pub with_ai: Option<Vec<String>>,

    /// Post a timestamped test message
    #[arg(long)]
    pub test: bool,

    /// Post without asking when the text is over the length limit
    #[arg(short, long)]
    pub yes: bool,
}

impl PostArgs {
    /// `(title, url, notes)` from `--with-ai`
    pub fn with_ai_parts(&self) -> Option<(&str, &str, &str)> {
        match self.with_ai.as_deref() {
            Some([title, url, notes]) => Some((title, url, notes)),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Release title
    pub title: String,
    /// Release URL
    pub url: String,
}

#[derive(Args, Debug)]
pub struct DiscordArgs {
    /// Release title
    #[arg(required_unless_present = "test")]
    pub title: Option<String>,

    /// Release URL
    #[arg(required_unless_present = "test")]
    pub url: Option<String>,

    /// Embed description
    #[arg(conflicts_with_all = ["file", "with_ai"])]
    pub summary: Option<String>,

    /// Read the embed description from a file
    #[arg(long, value_name = "PATH", conflicts_with = "with_ai")]
    pub file: Option<PathBuf>,

    /// Summarize NOTES for the embed description
    #[arg(long, value_name = "NOTES")]
    pub with_ai: Option<String>,

    /// Post a test release card
    #[arg(long)]
    pub test: bool,
}

#[derive(Args, Debug)]
pub struct AnnounceArgs {
    /// Release title
    #[arg(required_unless_present = "test")]
    pub title: Option<String>,

    /// Release URL
    #[arg(required_unless_present = "test")]
    pub url: Option<String>,

    /// Release notes (joined with spaces)
    pub notes: Vec<String>,

    /// Summarize the release notes with AI
    #[arg(long)]
    pub summarize: bool,

    /// Post to X only
    #[arg(long, conflicts_with = "discord_only")]
    pub x_only: bool,

    /// Post to Discord only
    #[arg(long)]
    pub discord_only: bool,

    /// Announce a test release
    #[arg(long)]
    pub test: bool,
}

impl AnnounceArgs {
    pub fn only(&self) -> Option<Channel> {
        if self.x_only {
            Some(Channel::X)
        } else if self.discord_only {
            Some(Channel::Discord)
        } else {
            None
        }
    }

    /// Notes joined with spaces, `None` when absent
    pub fn notes_text(&self) -> Option<String> {
        let notes = self.notes.join(" ");
        (!notes.trim().is_empty()).then_some(notes)
    }
}

#[derive(Args, Debug)]
pub struct ThreadArgs {
    /// Posts, in order
    pub posts: Vec<String>,

    /// Read posts from a file, separated by lines containing only ---
    #[arg(long, value_name = "PATH", conflicts_with = "posts")]
    pub file: Option<PathBuf>,

    /// Post a built-in sample thread
    #[arg(long)]
    pub test: bool,
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Markdown files to check
    #[arg(default_value = "README.md")]
    pub files: Vec<PathBuf>,
}
