use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;

/// Fixed cardinality of the course timeline.
pub const TOTAL_WEEKS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Coursework,
    Reading,
    Assignment,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Coursework => write!(f, "coursework"),
            ItemType::Reading => write!(f, "reading"),
            ItemType::Assignment => write!(f, "assignment"),
        }
    }
}

impl FromStr for ItemType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coursework" => Ok(ItemType::Coursework),
            "reading" => Ok(ItemType::Reading),
            "assignment" => Ok(ItemType::Assignment),
            other => Err(ParseError::UnknownItemType(other.to_string())),
        }
    }
}

/// A trackable unit of work inside one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub due_date: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRequest {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Partial update with the same shallow-overwrite semantics as
/// [`crate::models::CourseUpdate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
}

impl CourseItem {
    pub fn create(req: NewItemRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: req.title,
            description: req.description,
            completed: false,
            due_date: req.due_date,
            item_type: req.item_type,
        }
    }

    pub fn merge(&mut self, updates: ItemUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(completed) = updates.completed {
            self.completed = completed;
        }
        if let Some(due_date) = updates.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(item_type) = updates.item_type {
            self.item_type = item_type;
        }
    }
}

/// One of the 16 timeline slots under the selected course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u8,
    pub title: String,
    pub items: Vec<CourseItem>,
}

impl Week {
    pub fn empty(week_number: u8) -> Self {
        Self {
            week_number,
            title: format!("Week {week_number}"),
            items: Vec::new(),
        }
    }

    /// Items of one type, in insertion order. The week view renders one
    /// section per type.
    pub fn items_of_type(&self, item_type: ItemType) -> impl Iterator<Item = &CourseItem> {
        self.items.iter().filter(move |item| item.item_type == item_type)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Rounded completion percentage; an empty week counts as 0.
    pub fn completion_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u8
    }
}
