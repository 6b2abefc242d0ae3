//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{clip_text, Displayable, Identifiable, NamedEntity};

/// Longest category name the tracker stores.
pub const MAX_NAME_LEN: usize = 50;

/// A named spending bucket with an optional budget limit.
///
/// A `budget_limit` of zero means the category is unconstrained.
/// `current_spent` only ever grows; the tracker has no edit or delete
/// operations for recorded expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub budget_limit: f64,
    pub current_spent: f64,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: clip_text(&name.into(), MAX_NAME_LEN),
            budget_limit: 0.0,
            current_spent: 0.0,
        }
    }

    /// True once a non-zero limit is strictly exceeded by recorded spending.
    pub fn limit_exceeded(&self) -> bool {
        self.budget_limit > 0.0 && self.current_spent > self.budget_limit
    }

    /// Amount left under the limit; `None` while no limit is set.
    pub fn remaining(&self) -> Option<f64> {
        (self.budget_limit > 0.0).then(|| self.budget_limit - self.current_spent)
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        match self.remaining() {
            Some(_) => format!(
                "{} (${:.2} of ${:.2})",
                self.name, self.current_spent, self.budget_limit
            ),
            None => format!("{} (${:.2} spent, no limit)", self.name, self.current_spent),
        }
    }
}
