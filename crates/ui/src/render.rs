use crate::components::{Footer, Header, HomePage, NotFoundPage, Section, SectionPage, Welcome};
use codr_domain::config::MetaConfig;
use codr_domain::features::FeatureFlags;
use dioxus::prelude::*;

const DOCUMENT_OPEN: &str = r#"<!DOCTYPE html><html lang="en">"#;
const DOCUMENT_CLOSE: &str = "</html>";

fn document(page: Element) -> String {
    format!("{DOCUMENT_OPEN}{}{DOCUMENT_CLOSE}", dioxus_ssr::render_element(page))
}

/// Header markup on its own.
#[must_use]
pub fn render_header(flags: FeatureFlags) -> String {
    dioxus_ssr::render_element(rsx! { Header { flags } })
}

/// Footer markup on its own.
#[must_use]
pub fn render_footer() -> String {
    dioxus_ssr::render_element(rsx! { Footer {} })
}

/// Welcome markup on its own.
#[must_use]
pub fn render_welcome() -> String {
    dioxus_ssr::render_element(rsx! { Welcome {} })
}

/// The landing page as a complete HTML document.
#[must_use]
pub fn render_home(site: &MetaConfig, flags: FeatureFlags) -> String {
    document(rsx! { HomePage { site: site.clone(), flags } })
}

#[must_use]
pub fn render_section(site: &MetaConfig, flags: FeatureFlags, kind: Section) -> String {
    document(rsx! { SectionPage { site: site.clone(), flags, kind } })
}

/// 404 document naming the `path` that missed.
#[must_use]
pub fn render_not_found(site: &MetaConfig, flags: FeatureFlags, path: &str) -> String {
    document(rsx! { NotFoundPage { site: site.clone(), flags, path: path.to_owned() } })
}
