use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::controller::navigator::{NavState, Navigator, Section, SectionKind};

pub const DEFAULT_INDEX_TITLE: &str = "Masters Pool";

#[must_use]
pub fn render_index_template(title: &str, navigator: &Navigator, refresh_secs: u64) -> Markup {
    let initial = navigator.handle_fragment("");
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
            script src="static/nav.js" defer {}
        }
        body {
            header class="site-header" {
                h1 { (title) }
            }
            div id="app" {
                (render_view(navigator, &initial, refresh_secs))
            }
        }
    }
}

/// Nav bar plus every section, with only `state.visible` shown. Only the visible
/// section gets a container that loads itself.
#[must_use]
pub fn render_view(navigator: &Navigator, state: &NavState, refresh_secs: u64) -> Markup {
    html! {
        nav class="main-nav" {
            ul {
                @for section in navigator.sections() {
                    li {
                        // no default action: htmx owns the swap and the fragment
                        button type="button"
                            class=(if state.is_visible(&section.id) { "nav-link active" } else { "nav-link" })
                            hx-get={ "view?section=" (section.id) }
                            hx-target="#app"
                            hx-push-url=(section.href()) {
                            (section.label)
                        }
                    }
                }
            }
        }
        main {
            @for section in navigator.sections() {
                @let visible = state.is_visible(&section.id);
                section id=(section.id) class=(if visible { "section active" } else { "section" }) {
                    h2 { (section.label) }
                    @if visible {
                        (section_body(section, refresh_secs))
                    }
                }
            }
        }
    }
}

fn section_body(section: &Section, refresh_secs: u64) -> Markup {
    match section.kind {
        SectionKind::Leaderboard => html! {
            div id="leaderboard-container"
                hx-get="leaderboard"
                hx-trigger={ "load, every " (refresh_secs) "s" } {
                div class="loading" { "Loading leaderboard..." }
            }
        },
        SectionKind::Updates => html! {
            div id="updates-container" hx-get="updates" hx-trigger="load" {
                div class="loading" { "Loading updates..." }
            }
        },
    }
}
