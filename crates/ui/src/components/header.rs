use codr_domain::constants::{HOME_PATH, LOGO_TEXT};
use codr_domain::features::FeatureFlags;
use codr_domain::links::NavLink;
use dioxus::prelude::*;

/// Logo plus navigation. Projects and Blog only appear with
/// [`FeatureFlags::SHOW_HEADER_LINKS`].
#[component]
pub fn Header(flags: FeatureFlags) -> Element {
    rsx! {
        header { class: "site-header",
            a { class: "logo", href: HOME_PATH, "{LOGO_TEXT}" }
            nav { "aria-label": "Main",
                for link in NavLink::visible(flags) {
                    a { key: "{link.href}", href: link.href, "{link.label}" }
                }
            }
        }
    }
}
