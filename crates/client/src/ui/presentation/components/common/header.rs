//! Page heading with title and subtitle.

use dioxus::prelude::*;

/// Page header: uppercase title with a subtitle underneath. Cosmetic only.
#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "page-header",
            h2 { class: "page-title", "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}
