use codr_domain::constants::{BACKGROUND_ID, BACKGROUND_SRC};
use dioxus::prelude::*;

/// Full-bleed decorative image behind the page content.
#[component]
pub fn Background() -> Element {
    rsx! {
        img { id: BACKGROUND_ID, src: BACKGROUND_SRC, alt: "", decoding: "async" }
    }
}
