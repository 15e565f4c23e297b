use std::collections::BTreeSet;

use shared::{
    domain::{ReminderId, ReminderItem},
    error::ReminderError,
};
use tracing::debug;

/// Ordered reminder list. Insertion order is display order and ids are
/// never reused, even after the item they named is gone.
#[derive(Debug, Clone)]
pub struct ReminderStore {
    items: Vec<ReminderItem>,
    next_id: u64,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store pre-populated with `titles`; blank titles are skipped.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for title in titles {
            if let Err(err) = store.add(title) {
                debug!(error = %err, "skipping blank seed title");
            }
        }
        store
    }

    pub fn add(&mut self, title: impl Into<String>) -> Result<ReminderItem, ReminderError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ReminderError::invalid_input("reminder title must not be empty"));
        }

        let id = ReminderId(self.next_id);
        self.next_id += 1;

        let item = ReminderItem::new(id, title);
        self.items.push(item.clone());
        debug!(reminder_id = id.0, len = self.items.len(), "reminder added");
        Ok(item)
    }

    pub fn toggle(&mut self, id: ReminderId) -> Result<&ReminderItem, ReminderError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ReminderError::NotFound { id })?;
        item.is_checked = !item.is_checked;
        debug!(reminder_id = id.0, is_checked = item.is_checked, "reminder toggled");
        Ok(&*item)
    }

    pub fn remove(&mut self, id: ReminderId) -> Result<ReminderItem, ReminderError> {
        let index = self.position(id).ok_or(ReminderError::NotFound { id })?;
        let removed = self.items.remove(index);
        debug!(reminder_id = id.0, len = self.items.len(), "reminder removed");
        Ok(removed)
    }

    /// Removes every item at `offsets` (positions in current display order).
    /// Either all of them go or, on a bad offset, none do.
    pub fn remove_at_offsets(
        &mut self,
        offsets: &BTreeSet<usize>,
    ) -> Result<Vec<ReminderItem>, ReminderError> {
        let len = self.items.len();
        if let Some(&offset) = offsets.iter().find(|&&offset| offset >= len) {
            return Err(ReminderError::OutOfRange { offset, len });
        }

        let mut removed: Vec<ReminderItem> = offsets
            .iter()
            .rev()
            .map(|&offset| self.items.remove(offset))
            .collect();
        removed.reverse();

        debug!(
            removed = removed.len(),
            len = self.items.len(),
            "reminders removed at offsets"
        );
        Ok(removed)
    }

    pub fn get(&self, id: ReminderId) -> Option<&ReminderItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ReminderItem] {
        &self.items
    }

    pub fn snapshot(&self) -> Vec<ReminderItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ReminderId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
