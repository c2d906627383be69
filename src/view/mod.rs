pub mod format;
pub mod index;
pub mod leaderboard;
pub mod updates;

use maud::{Markup, html};

/// Inline message that replaces a view's content when it fails to load.
#[must_use]
pub fn render_inline_error(message: &str) -> Markup {
    html! {
        div class="error" { (message) }
    }
}
