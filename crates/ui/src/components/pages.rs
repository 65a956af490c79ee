use super::{Background, Footer, Header, Welcome};
use codr_domain::config::MetaConfig;
use codr_domain::constants::{
    BLOG_PATH, FAVICON_HREF, HOME_PATH, NOT_FOUND_CLASS, PROJECTS_PATH, STYLESHEET_HREF,
};
use codr_domain::features::FeatureFlags;
use dioxus::prelude::*;

/// Pages reachable from the flagged header links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Blog,
}

impl Section {
    pub const ALL: [Self; 2] = [Self::Projects, Self::Blog];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Blog => "Blog",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Projects => PROJECTS_PATH,
            Self::Blog => BLOG_PATH,
        }
    }

    const fn blurb(self) -> &'static str {
        match self {
            Self::Projects => "Things I've built will show up here soon.",
            Self::Blog => "Writing is on its way. Check back shortly.",
        }
    }
}

/// Contents of the `<html>` root: head metadata, then a body with background,
/// header, content and footer. The root element itself is written by the renderer.
#[component]
pub fn Shell(
    site: MetaConfig,
    page_title: String,
    flags: FeatureFlags,
    children: Element,
) -> Element {
    let MetaConfig { description, author, .. } = site;
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "description", content: "{description}" }
            meta { name: "author", content: "{author}" }
            title { "{page_title}" }
            link { rel: "icon", r#type: "image/svg+xml", href: FAVICON_HREF }
            link { rel: "stylesheet", href: STYLESHEET_HREF }
        }
        body {
            Background {}
            Header { flags }
            main { {children} }
            Footer {}
        }
    }
}

#[component]
pub fn HomePage(site: MetaConfig, flags: FeatureFlags) -> Element {
    let page_title = site.title.clone();
    rsx! {
        Shell { site, page_title, flags, Welcome {} }
    }
}

#[component]
pub fn SectionPage(site: MetaConfig, flags: FeatureFlags, kind: Section) -> Element {
    let heading = kind.title();
    let blurb = kind.blurb();
    let page_title = format!("{heading} | {}", site.title);
    rsx! {
        Shell { site, page_title, flags,
            section { class: "placeholder",
                h1 { "{heading}" }
                p { "{blurb}" }
            }
        }
    }
}

/// Body of a 404 response. The `not-found` class is what link checkers look for.
#[component]
pub fn NotFoundPage(site: MetaConfig, flags: FeatureFlags, path: String) -> Element {
    let page_title = format!("Not found | {}", site.title);
    rsx! {
        Shell { site, page_title, flags,
            section { class: NOT_FOUND_CLASS,
                h1 { "Page not found" }
                p { "Nothing lives at {path}." }
                a { href: HOME_PATH, "Back home" }
            }
        }
    }
}
