use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reminders_core::{AddReminderDraft, ReminderSession, ReminderStore};
use shared::{
    domain::DEFAULT_REMINDER_TITLES,
    protocol::{ScreenSnapshot, SessionNotice},
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{broadcast, watch},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_command, ConsoleCommand, HELP};
use config::{load_settings, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(about = "Reminders screen driven from the terminal")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Start with an empty list instead of the default reminders.
    #[arg(long)]
    no_seed: bool,
    /// Render snapshots as JSON lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if args.no_seed {
        settings.seed_defaults = false;
    }
    if args.json {
        settings.render_json = true;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = if settings.seed_defaults {
        ReminderStore::with_titles(DEFAULT_REMINDER_TITLES)
    } else {
        ReminderStore::new()
    };
    let handle = ReminderSession::spawn(store);
    print_snapshot(&handle.snapshot(), settings.render_json)?;

    let renderer = tokio::spawn(render_loop(
        handle.subscribe(),
        handle.notices(),
        settings.render_json,
    ));

    let mut draft = AddReminderDraft::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(ConsoleCommand::Add(text)) => {
                draft.set_text(text);
                match draft.confirm_intent() {
                    Some(intent) => handle.dispatch(intent).await?,
                    None => eprintln!("nothing to save; type a title after 'add'"),
                }
            }
            Ok(ConsoleCommand::Intent(intent)) => handle.dispatch(intent).await?,
            Ok(ConsoleCommand::List) => print_snapshot(&handle.snapshot(), settings.render_json)?,
            Ok(ConsoleCommand::Help) => println!("{HELP}"),
            Ok(ConsoleCommand::Quit) => break,
            Err(err) => {
                warn!(error = %err, "unrecognized console input");
                eprintln!("{err}; {HELP}");
            }
        }
    }

    let last = handle.shutdown().await?;
    renderer.await?;
    info!(reminders = last.reminders.len(), "console closed");
    Ok(())
}

async fn render_loop(
    mut snapshots: watch::Receiver<ScreenSnapshot>,
    mut notices: broadcast::Receiver<SessionNotice>,
    json: bool,
) {
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if let Err(err) = print_snapshot(&snapshot, json) {
                    warn!(error = %err, "failed to render snapshot");
                }
            }
            notice = notices.recv() => match notice {
                Ok(notice) => eprintln!("{}", render::describe_notice(&notice)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "render loop fell behind on notices");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }
}

fn print_snapshot(snapshot: &ScreenSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", render::render_json(snapshot)?);
    } else {
        print!("{}", render::render_text(snapshot));
    }
    Ok(())
}
