//! Discussion-board listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page requests the board list once and keeps the result in
//! page-local state. Rows are not rendered yet, so the table body stays
//! empty whether or not the request succeeds.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::config::use_api_config;
use crate::net::error::ApiError;
use crate::state::board::{BoardItem, BoardListState, FETCH_FAILED_LOG};

/// Column headings of the board table.
pub const BOARD_COLUMNS: [&str; 4] = ["게시물 번호", "제목", "작성자", "조회 수"];

/// Inline style of the board table; the cell border lives here because
/// `<table>` has no typed `border` attribute in `view!`.
pub const BOARD_TABLE_STYLE: &str = "margin: 0 auto; width: 80%; border: 1px solid; border-collapse: collapse;";

/// Error log line for a failed board fetch, `None` on success.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn fetch_failure_log(result: &Result<Vec<BoardItem>, ApiError>) -> Option<String> {
    result.as_ref().err().map(|err| format!("{FETCH_FAILED_LOG}: {err}"))
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let config = use_api_config();
    let boards = RwSignal::new(BoardListState::default());

    #[cfg(feature = "hydrate")]
    {
        boards.update(BoardListState::begin_fetch);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_boards(&config).await;
            if let Some(line) = fetch_failure_log(&result) {
                log::error!("{line}");
            }
            // The page may have been left before the response arrived.
            let _ = boards.try_update(|s| s.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, boards);

    view! {
        <div class="board-container" style="text-align: center; margin-top: 50px;">
            <h1>"게시판"</h1>
            <table style=BOARD_TABLE_STYLE>
                <thead>
                    <tr>
                        {BOARD_COLUMNS.iter().map(|title| view! { <th style="border: 1px solid;">{*title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody></tbody>
            </table>
        </div>
    }
}
