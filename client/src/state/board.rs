//! Board-list state for the board page.
//!
//! DESIGN
//! ======
//! The page fetches once on mount and keeps the result here. Row rendering
//! is switched off, so `items` is held but not shown.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::net::error::ApiError;

/// Log line written when the board list cannot be loaded.
pub const FETCH_FAILED_LOG: &str = "게시글 조회 실패";

/// One discussion-board post as listed by `GET /api/boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardItem {
    #[serde(alias = "boardId")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: i64,
}

/// Treat an explicit JSON `null` like a missing key so one sparse row does
/// not fail the whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fetch bookkeeping for the board list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardListState {
    pub items: Vec<BoardItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardListState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a finished fetch. A failure leaves the list empty.
    pub fn finish_fetch(&mut self, result: Result<Vec<BoardItem>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                log::debug!("loaded {} boards", items.len());
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.to_string());
            }
        }
    }
}
