//! Command handlers

use crate::app::{App, config_help};
use crate::input::{joined, read_text, read_thread};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use dialoguer::Confirm;
use herald_application::{
    AnnounceReleaseInput, AnnounceReleaseUseCase, PostThreadUseCase, ProgressNotifier,
    PublishError, Publisher, SummarizeError, SummarizeReleaseUseCase, SummaryOutput,
};
use herald_domain::{
    Announcement, Channel, Language, Release, Thread, length_warning, unavailable_summary,
    validate_markdown,
};
use herald_infrastructure::ConfigError;
use herald_presentation::{
    AnnounceArgs, ConsoleFormatter, DiscordArgs, LintArgs, PostArgs, ProgressReporter,
    ReleaseArgs, SimpleProgress, SummarizeArgs, ThreadArgs, samples,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

fn print_config_error(error: &ConfigError) {
    eprintln!("{} {}", "❌".red(), error);
    if let Some(help) = config_help(error) {
        eprintln!("   {}", help);
    }
}

/// Require an adapter, explaining how to configure it when missing
fn require<T>(adapter: Result<T, ConfigError>) -> Result<T> {
    adapter.map_err(|e| {
        print_config_error(&e);
        anyhow::Error::new(e)
    })
}

async fn publish(publisher: &dyn Publisher, announcement: &Announcement) -> ExitCode {
    let channel = publisher.channel();
    println!(
        "{}",
        ConsoleFormatter::post_preview(channel, &announcement.post_text())
    );
    match publisher.publish(announcement).await {
        Ok(receipt) => {
            println!("{}", ConsoleFormatter::receipt(&receipt));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::publish_failure(channel, &e));
            ExitCode::FAILURE
        }
    }
}

// ==================== summarize ====================

pub async fn summarize(app: &App, args: SummarizeArgs) -> Result<ExitCode> {
    let notes = if args.test {
        if !args.quiet {
            println!("🧪 Summarizing sample release notes\n");
        }
        samples::test_release_notes().to_string()
    } else if let Some(path) = &args.file {
        let notes = read_text(path)?;
        if !args.quiet {
            println!("📄 Read {}\n", path.display());
        }
        notes
    } else {
        joined(&args.notes).unwrap_or_default()
    };

    if notes.trim().is_empty() {
        bail!("No release notes given. Pass them as arguments, with --file, or use --test");
    }

    let input = app.summary_input(&notes, args.language);
    let language = input
        .language
        .unwrap_or_else(|| Language::detect(&notes));

    if !args.quiet {
        println!("🌐 Language: {}\n", language.display_name());
        println!("{}\n", ConsoleFormatter::framed("📝 Release notes", &notes));
    }

    let gateway = match app.gateway() {
        Ok(gateway) => gateway,
        Err(e) => {
            print_config_error(&e);
            print_fallback(&notes, language, &e.to_string(), args.quiet);
            return Ok(ExitCode::FAILURE);
        }
    };
    let use_case = SummarizeReleaseUseCase::new(Arc::new(gateway));

    let progress = ProgressReporter::new();
    if !args.quiet {
        progress.on_summary_start(use_case.model());
    }
    let result = use_case.execute(&input).await;
    progress.finish_spinner();

    match result {
        Ok(output) if args.quiet => {
            println!("{}", output.summary);
            Ok(ExitCode::SUCCESS)
        }
        Ok(output) => {
            println!("{}", ConsoleFormatter::summary(&output));
            Ok(ExitCode::SUCCESS)
        }
        Err(SummarizeError::Gateway(e)) => {
            eprintln!("{}", ConsoleFormatter::gateway_failure(&e));
            print_fallback(&notes, language, &e.to_string(), args.quiet);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e);
            print_fallback(&notes, language, &e.to_string(), args.quiet);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_fallback(notes: &str, language: Language, reason: &str, quiet: bool) {
    let fallback = SummaryOutput::fallback(notes, language, reason);
    if quiet {
        println!("{}", fallback.summary);
    } else {
        println!("\n{}", ConsoleFormatter::summary(&fallback));
    }
}

// ==================== post ====================

pub async fn post(app: &App, args: PostArgs) -> Result<ExitCode> {
    let text = if let Some((title, url, notes)) = args.with_ai_parts() {
        let release = Release::try_new(title, url)?;
        let summary = if notes.trim().is_empty() {
            None
        } else {
            app.try_summary(notes).await
        };
        Announcement::release(release, summary).post_text()
    } else if args.test {
        println!("🧪 Posting a test message\n");
        samples::test_post(&samples::jst_now())
    } else {
        match joined(&args.text) {
            Some(text) => text,
            None => bail!("Nothing to post. Pass the text as arguments, use --with-ai, or --test"),
        }
    };

    if let Some(warning) = length_warning(&text) {
        println!("{} {}", "⚠️ ".yellow(), warning);
        if !args.yes && !confirm("Post anyway?")? {
            println!("Cancelled");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let x = require(app.x_client())?;
    Ok(publish(&x, &Announcement::text(text)?).await)
}

fn confirm(prompt: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        bail!("Refusing to post an over-long text without a terminal to confirm; pass --yes");
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

// ==================== release ====================

pub async fn release(app: &App, args: ReleaseArgs) -> Result<ExitCode> {
    let release = Release::try_new(args.title, args.url)?;
    let x = require(app.x_client())?;
    Ok(publish(&x, &Announcement::release(release, None)).await)
}

// ==================== discord ====================

pub async fn discord(app: &App, args: DiscordArgs) -> Result<ExitCode> {
    let webhook = require(app.discord())?;

    let (release, summary) = if args.test {
        println!("🧪 Posting a test release card\n");
        let sample = samples::test_release(&samples::jst_now());
        (Release::try_new(sample.title, sample.url)?, Some(sample.summary))
    } else {
        let (Some(title), Some(url)) = (args.title, args.url) else {
            bail!("Release title and URL are required");
        };
        let release = Release::try_new(title, url)?;

        let summary = if let Some(notes) = &args.with_ai {
            match app.try_summary(notes).await {
                Some(summary) => Some(summary),
                None => Some(unavailable_summary(&release)),
            }
        } else if let Some(path) = &args.file {
            match read_text(path) {
                Ok(text) => Some(text),
                Err(e) => {
                    println!("{} {:#}", "⚠️ ".yellow(), e);
                    None
                }
            }
        } else {
            args.summary
        };
        (release, summary)
    };

    Ok(publish(&webhook, &Announcement::release(release, summary)).await)
}

// ==================== announce ====================

pub async fn announce(app: &App, args: AnnounceArgs) -> Result<ExitCode> {
    let (title, url, notes) = if args.test {
        println!("🧪 Announcing a test release\n");
        let sample = samples::test_release(&samples::jst_now());
        (
            sample.title,
            sample.url,
            Some(samples::test_announce_notes().to_string()),
        )
    } else {
        let notes = args.notes_text();
        match (args.title.clone(), args.url.clone()) {
            (Some(title), Some(url)) => (title, url, notes),
            _ => bail!("Release title and URL are required"),
        }
    };

    let mut release = Release::try_new(title, url)?;
    if let Some(notes) = notes {
        release = release.with_notes(notes);
    }

    println!("{}", "📋 Announcement".cyan().bold());
    println!("   Title: {}", release.title());
    println!("   URL: {}", release.url());
    println!(
        "   AI summary: {}\n",
        if args.summarize { "on" } else { "off" }
    );

    let gateway = if args.summarize && release.notes().is_some() {
        app.optional_gateway()
    } else {
        None
    };
    let use_case = AnnounceReleaseUseCase::new(app.configured_publishers()).with_gateway(gateway);
    let input = AnnounceReleaseInput::new(release)
        .with_summary(args.summarize)
        .only(args.only())
        .with_language(app.language());

    let progress: Box<dyn ProgressNotifier> = if std::io::stdout().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let output = use_case.execute_with_progress(input, progress.as_ref()).await;

    println!("{}", ConsoleFormatter::announce_results(&output));

    if !output.outcomes.iter().any(|(_, o)| o.is_attempted()) {
        eprintln!(
            "\n{} No channel was posted to. Configure X or Discord credentials.",
            "❌".red()
        );
        return Ok(ExitCode::FAILURE);
    }
    if output.all_failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

// ==================== thread ====================

pub async fn thread(app: &App, args: ThreadArgs) -> Result<ExitCode> {
    let thread = if args.test {
        Thread::try_new(samples::test_thread())?
    } else if let Some(path) = &args.file {
        read_thread(path)?
    } else if args.posts.is_empty() {
        bail!("No posts given. Pass them as arguments, with --file, or use --test");
    } else {
        Thread::try_new(args.posts).context("Every post is empty")?
    };

    let x = require(app.x_client())?;

    println!("🧵 Posting a {}-post thread\n", thread.len());
    for (index, post) in thread.posts().iter().enumerate() {
        println!("--- Post {} ---\n{}\n", index + 1, post);
    }
    for (index, len) in thread.oversized() {
        println!("{} Post {} is {}/500 characters", "⚠️ ".yellow(), index + 1, len);
    }

    match PostThreadUseCase::new(Arc::new(x)).execute(&thread).await {
        Ok(receipts) => {
            println!("{}", ConsoleFormatter::thread(&receipts));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::publish_failure(Channel::X, &e));
            if let PublishError::RateLimited(_) = e {
                info!("Thread stopped by rate limiting; earlier posts stay published");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

// ==================== lint ====================

pub fn lint(args: LintArgs) -> Result<ExitCode> {
    let mut clean = true;
    for path in &args.files {
        let content = read_text(path)?;
        let report = validate_markdown(&content);
        println!("{}\n", ConsoleFormatter::lint_report(path, &report));
        clean &= report.is_clean();
    }
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
