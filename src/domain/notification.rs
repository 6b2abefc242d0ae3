use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{clip_text, Displayable, Identifiable};

/// Longest message the notification log stores.
pub const MAX_MESSAGE_LEN: usize = 100;

/// A short operational message kept in the ledger's bounded FIFO log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: clip_text(message, MAX_MESSAGE_LEN),
            timestamp: Utc::now(),
            is_read: false,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

impl Identifiable for Notification {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Notification {
    fn display_label(&self) -> String {
        let marker = if self.is_read { ' ' } else { '*' };
        format!("{marker} {}", self.message)
    }
}
