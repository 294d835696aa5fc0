//! Lists and items
//!
//! A list is an identifier-only container. Every item belongs to exactly
//! one list; items are never edited or removed once stored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database-assigned list identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub i64);

/// Database-assigned item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ListId {
    pub fn get(self) -> i64 {
        self.0
    }

    /// Path of the page showing this list, e.g. `/lists/3/`.
    pub fn view_path(self) -> String {
        format!("/lists/{}/", self.0)
    }

    /// Path the add-item form posts to.
    pub fn add_item_path(self) -> String {
        format!("/lists/{}/add_item", self.0)
    }
}

impl ItemId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a path segment is not a list identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidListId(pub String);

impl fmt::Display for InvalidListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a list id", self.0)
    }
}

impl std::error::Error for InvalidListId {}

impl FromStr for ListId {
    type Err = InvalidListId;

    /// Accepts ASCII digits only; signs, whitespace and empty input are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidListId(s.to_owned()));
        }
        s.parse::<i64>()
            .map(ListId)
            .map_err(|_| InvalidListId(s.to_owned()))
    }
}

/// A stored to-do list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub created_at: DateTime<Utc>,
}

/// A stored item, owned by exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub list_id: ListId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn belongs_to(&self, list: &TodoList) -> bool {
        self.list_id == list.id
    }
}
