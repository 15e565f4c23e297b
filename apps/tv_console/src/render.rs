use std::fmt::Write as _;

use shared::protocol::{ScreenSnapshot, SessionNotice};

pub fn render_text(snapshot: &ScreenSnapshot) -> String {
    let mut out = String::new();
    if snapshot.ticker.is_showing {
        let _ = writeln!(
            out,
            ">>> {} <<<  (loop {}s)",
            snapshot.ticker.active.join("  |  "),
            snapshot.ticker.scroll_cycle().as_secs()
        );
    }

    out.push_str("Reminders\n");
    if snapshot.reminders.is_empty() {
        out.push_str("  (nothing to do)\n");
    }
    for (offset, item) in snapshot.reminders.iter().enumerate() {
        let mark = if item.is_checked { "x" } else { " " };
        let _ = writeln!(out, "  {offset}. [{mark}] #{} {}", item.id, item.title);
    }
    out
}

pub fn render_json(snapshot: &ScreenSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

pub fn describe_notice(notice: &SessionNotice) -> String {
    match notice {
        SessionNotice::ReminderAdded { item } => format!("added #{} {}", item.id, item.title),
        SessionNotice::IntentRejected { intent, rejection } => {
            format!("{intent} ignored: {}", rejection.message)
        }
        SessionNotice::TickerExpired { title } => format!("ticker cleared: {title}"),
    }
}
