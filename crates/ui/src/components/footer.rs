use super::icons::SocialGlyph;
use codr_domain::constants::SOCIAL_LINKS_CLASS;
use codr_domain::links::SOCIAL_LINKS;
use dioxus::prelude::*;

/// Social profile links. Each anchor carries its service name as `aria-label`
/// since the visible content is only an icon.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            small { "Built with Rust, served by axum." }
            div { class: SOCIAL_LINKS_CLASS,
                for link in SOCIAL_LINKS {
                    a {
                        key: "{link.label}",
                        href: link.href,
                        "aria-label": link.label,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        SocialGlyph { icon: link.icon }
                    }
                }
            }
        }
    }
}
