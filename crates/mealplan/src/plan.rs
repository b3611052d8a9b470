use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mealweek_shared::Weekday;

/// A recipe reference bound to one weekday within one week.
///
/// The plan owns assignments; the recipe itself lives in the store and may
/// be referenced by any number of assignments across any number of weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub recipe_id: String,
    pub assigned_at: String,
}

impl Assignment {
    pub fn new(recipe_id: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            assigned_at: mealweek_shared::now_rfc3339(),
        }
    }
}

/// Per-week mapping of weekday to assignment. Days with no meal planned
/// are absent keys, never null values; `BTreeMap` keeps iteration in
/// monday..sunday order.
pub type WeekAssignments = BTreeMap<Weekday, Assignment>;

/// All planned weeks, keyed by week key (ISO date of the week's Monday).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    weeks: BTreeMap<String, WeekAssignments>,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one week's assignments; an unplanned week is an empty
    /// mapping, not an error.
    pub fn assignments_for(&self, week_key: &str) -> WeekAssignments {
        self.weeks.get(week_key).cloned().unwrap_or_default()
    }

    /// Assigns a recipe to one day, replacing any existing assignment.
    pub fn assign(&mut self, week_key: impl Into<String>, day: Weekday, assignment: Assignment) {
        self.weeks
            .entry(week_key.into())
            .or_default()
            .insert(day, assignment);
    }

    /// Removes one day's assignment; a week with nothing left planned is
    /// dropped entirely.
    pub fn clear(&mut self, week_key: &str, day: Weekday) -> Option<Assignment> {
        let assignments = self.weeks.get_mut(week_key)?;
        let removed = assignments.remove(&day);
        if assignments.is_empty() {
            self.weeks.remove(week_key);
        }
        removed
    }

    /// Replaces an entire week, used by auto-assignment.
    pub fn set_week(&mut self, week_key: impl Into<String>, assignments: WeekAssignments) {
        let week_key = week_key.into();
        if assignments.is_empty() {
            self.weeks.remove(&week_key);
        } else {
            self.weeks.insert(week_key, assignments);
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = (&String, &WeekAssignments)> {
        self.weeks.iter()
    }
}
