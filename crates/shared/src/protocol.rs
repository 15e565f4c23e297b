use std::{collections::BTreeSet, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ReminderId, ReminderItem},
    error::IntentRejection,
};

const SCROLL_SECONDS_PER_ENTRY: u64 = 5;
const REVEAL_SECONDS_PER_ENTRY: u64 = 2;

/// User actions forwarded by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    RequestAdd { title: String },
    RequestToggle { id: ReminderId },
    RequestDelete { id: ReminderId },
    RequestDeleteAtOffsets { offsets: BTreeSet<usize> },
    RequestShowInTicker { id: ReminderId },
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestAdd { .. } => "request_add",
            Self::RequestToggle { .. } => "request_toggle",
            Self::RequestDelete { .. } => "request_delete",
            Self::RequestDeleteAtOffsets { .. } => "request_delete_at_offsets",
            Self::RequestShowInTicker { .. } => "request_show_in_ticker",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub is_showing: bool,
    pub active: Vec<String>,
}

impl TickerSnapshot {
    /// Time for one full pass of the marquee across the screen.
    pub fn scroll_cycle(&self) -> Duration {
        Duration::from_secs(SCROLL_SECONDS_PER_ENTRY * self.active.len() as u64)
    }

    /// Time for the marquee to slide in from the top edge.
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_secs(REVEAL_SECONDS_PER_ENTRY * self.active.len() as u64)
    }
}

/// Everything the rendering layer needs to draw the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub reminders: Vec<ReminderItem>,
    pub ticker: TickerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionNotice {
    ReminderAdded { item: ReminderItem },
    IntentRejected {
        intent: String,
        rejection: IntentRejection,
    },
    TickerExpired { title: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_uses_tagged_json_layout() {
        let intent = Intent::RequestToggle { id: ReminderId(3) };
        let json = serde_json::to_value(&intent).expect("json");
        assert_eq!(
            json,
            serde_json::json!({ "type": "request_toggle", "payload": { "id": 3 } })
        );
    }

    #[test]
    fn offsets_parse_as_a_set() {
        let intent: Intent = serde_json::from_str(
            r#"{"type":"request_delete_at_offsets","payload":{"offsets":[2,0,2]}}"#,
        )
        .expect("parse");
        assert_eq!(
            intent,
            Intent::RequestDeleteAtOffsets {
                offsets: BTreeSet::from([0, 2])
            }
        );
    }

    #[test]
    fn marquee_timings_scale_with_active_entries() {
        let idle = TickerSnapshot::default();
        assert_eq!(idle.scroll_cycle(), Duration::ZERO);

        let showing = TickerSnapshot {
            is_showing: true,
            active: vec!["Buy milk".into()],
        };
        assert_eq!(showing.scroll_cycle(), Duration::from_secs(5));
        assert_eq!(showing.reveal_duration(), Duration::from_secs(2));
    }
}
