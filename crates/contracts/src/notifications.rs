//! Local notification list with optimistic updates.
//!
//! Mark-read and delete change the list immediately and hand back a
//! [`PendingChange`]. When the matching API call fails the caller passes that
//! change to [`NotificationFeed::rollback`] so the list matches the server again.

use crate::domain::a015_notification::aggregate::Notification;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

/// Undo record for one optimistic change.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    MarkedRead { previous: Notification },
    Removed { index: usize, item: Notification },
}

impl PendingChange {
    pub fn id(&self) -> i64 {
        match self {
            PendingChange::MarkedRead { previous } => previous.id,
            PendingChange::Removed { item, .. } => item.id,
        }
    }
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Replace with a fresh server snapshot.
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// `None` when the notification is unknown or already read.
    pub fn mark_read(&mut self, id: i64, now: &str) -> Option<PendingChange> {
        let item = self.items.iter_mut().find(|n| n.id == id)?;
        if item.is_read {
            return None;
        }
        let previous = item.clone();
        item.is_read = true;
        item.read_at = Some(now.to_string());
        Some(PendingChange::MarkedRead { previous })
    }

    pub fn remove(&mut self, id: i64) -> Option<PendingChange> {
        let index = self.items.iter().position(|n| n.id == id)?;
        let item = self.items.remove(index);
        Some(PendingChange::Removed { index, item })
    }

    /// Undo a change whose API call failed.
    ///
    /// A poll may have replaced the list in the meantime: a mark-read is only
    /// reverted if the item is still there, a removal is only restored if the
    /// item has not come back already.
    pub fn rollback(&mut self, change: PendingChange) {
        match change {
            PendingChange::MarkedRead { previous } => {
                if let Some(item) = self.items.iter_mut().find(|n| n.id == previous.id) {
                    item.is_read = previous.is_read;
                    item.read_at = previous.read_at;
                }
            }
            PendingChange::Removed { index, item } => {
                if self.items.iter().any(|n| n.id == item.id) {
                    return;
                }
                let index = index.min(self.items.len());
                self.items.insert(index, item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-06-15T09:00:00.000Z";

    fn note(id: i64, is_read: bool) -> Notification {
        Notification {
            id,
            title: Some(format!("n{}", id)),
            is_read,
            ..Notification::default()
        }
    }

    fn feed() -> NotificationFeed {
        NotificationFeed::new(vec![note(1, false), note(2, true), note(3, false)])
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(feed().unread_count(), 2);
    }

    #[test]
    fn test_mark_read_is_immediate() {
        let mut feed = feed();
        let change = feed.mark_read(1, NOW).unwrap();
        assert_eq!(change.id(), 1);
        assert_eq!(feed.unread_count(), 1);
        assert_eq!(feed.items()[0].read_at.as_deref(), Some(NOW));
        assert!(feed.mark_read(2, NOW).is_none());
        assert!(feed.mark_read(99, NOW).is_none());
    }

    #[test]
    fn test_failed_mark_read_rolls_back() {
        let mut feed = feed();
        let before = feed.clone();
        let change = feed.mark_read(3, NOW).unwrap();
        feed.rollback(change);
        assert_eq!(feed, before);
    }

    #[test]
    fn test_failed_delete_restores_position() {
        let mut feed = feed();
        let before = feed.clone();
        let change = feed.remove(2).unwrap();
        assert_eq!(feed.items().len(), 2);
        feed.rollback(change);
        assert_eq!(feed, before);
    }

    #[test]
    fn test_rollback_after_poll_does_not_duplicate() {
        let mut feed = feed();
        let change = feed.remove(1).unwrap();
        feed.replace(vec![note(1, false), note(4, false)]);
        feed.rollback(change);
        assert_eq!(feed.items().len(), 2);

        let mut feed = NotificationFeed::new(vec![note(5, false)]);
        let change = feed.remove(5).unwrap();
        feed.replace(Vec::new());
        feed.rollback(change);
        assert_eq!(feed.items().iter().map(|n| n.id).collect::<Vec<_>>(), vec![5]);
    }
}
