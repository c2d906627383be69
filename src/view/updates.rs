use maud::{Markup, html};
use std::cmp::Reverse;

use super::format::{format_update_date, paragraphs, parse_update_date};
use crate::model::Update;

pub const UPDATES_ERROR: &str = "Failed to load updates";
pub const UPDATES_EMPTY: &str = "No updates yet. Check back soon!";

/// Newest first. Updates with unreadable dates go last, in their original order.
#[must_use]
pub fn sort_updates(updates: &[Update]) -> Vec<&Update> {
    let mut sorted: Vec<&Update> = updates.iter().collect();
    sorted.sort_by_key(|u| {
        let date = parse_update_date(&u.date);
        (date.is_none(), Reverse(date))
    });
    sorted
}

/// Whole content of `#updates-container`.
#[must_use]
pub fn render_updates(updates: &[Update]) -> Markup {
    if updates.is_empty() {
        return html! {
            div class="loading" { (UPDATES_EMPTY) }
        };
    }

    html! {
        div class="updates-list" {
            @for update in sort_updates(updates) {
                div class="update-card" {
                    div class="update-header" {
                        h3 class="update-title" { (update.title) }
                        span class="update-date" { (format_update_date(&update.date)) }
                    }
                    div class="update-content" {
                        @for para in paragraphs(&update.content) {
                            p { (para) }
                        }
                    }
                }
            }
        }
    }
}
