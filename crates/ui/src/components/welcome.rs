use codr_domain::constants::{BIO, GREETING};
use dioxus::prelude::*;

#[component]
pub fn Welcome() -> Element {
    rsx! {
        section { class: "welcome",
            h1 { "{GREETING}" }
            p { "{BIO}" }
        }
    }
}
