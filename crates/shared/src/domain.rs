use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ReminderId);

/// A single to-do entry shown as one row of the reminders list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderItem {
    pub id: ReminderId,
    pub title: String,
    #[serde(default)]
    pub is_checked: bool,
}

impl ReminderItem {
    pub fn new(id: ReminderId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_checked: false,
        }
    }
}

/// Reminders the screen starts with when seeding is enabled.
pub const DEFAULT_REMINDER_TITLES: [&str; 5] = [
    "Doctor's appointment at 3 PM",
    "Buy groceries",
    "Call Mary",
    "Meeting with the team at 4 PM",
    "Pick up dry cleaning",
];
