//! Owned snapshot of a loaded HTML page.
//!
//! `scraper::Html` is not `Send`, so documents are parsed and reduced to plain data
//! in one synchronous step before the checker awaits anything else.

use crate::error::CheckError;
use codr_domain::constants::{BACKGROUND_ID, ERROR_CLASS, NOT_FOUND_CLASS, SOCIAL_LINKS_CLASS};
use reqwest::{StatusCode, Url};
use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};

/// Pre-parsed CSS selectors, built once per checker.
#[derive(Debug)]
pub(crate) struct Selectors {
    body: Selector,
    anchors: Selector,
    social: Selector,
    background: Selector,
    subresources: Selector,
    errors: Selector,
}

impl Selectors {
    pub(crate) fn new() -> Result<Self, CheckError> {
        Ok(Self {
            body: parse("body")?,
            anchors: parse("a[href]")?,
            social: parse(&format!(".{SOCIAL_LINKS_CLASS} a"))?,
            background: parse(&format!("#{BACKGROUND_ID}"))?,
            subresources: parse(
                "img[src], script[src], link[rel~='stylesheet'][href], link[rel~='icon'][href]",
            )?,
            errors: parse(&format!(".{ERROR_CLASS}, .{NOT_FOUND_CLASS}"))?,
        })
    }
}

fn parse(css: &str) -> Result<Selector, CheckError> {
    Selector::parse(css).map_err(|e| CheckError::from(format!("bad selector '{css}': {e}")))
}

/// The element the page uses as its background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub tag: String,
    pub src: Option<String>,
    /// No `hidden` attribute or hiding inline style on it or any ancestor.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAnchor {
    pub href: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub status: StatusCode,
    /// Text inside `<body>` with whitespace collapsed. Head content such as
    /// `<title>` is left out.
    pub text: String,
    pub background: Option<Background>,
    /// Raw `href` of every anchor, in document order.
    pub links: Vec<String>,
    pub social_links: Vec<SocialAnchor>,
    /// Raw `src`/`href` of images, scripts, stylesheets and icons.
    pub subresources: Vec<String>,
    /// Count of `.error` / `.not-found` elements.
    pub error_elements: usize,
}

impl Page {
    pub(crate) fn parse(url: Url, status: StatusCode, body: &str, sel: &Selectors) -> Self {
        let doc = Html::parse_document(body);

        let background = doc.select(&sel.background).next().map(|el| Background {
            tag: el.value().name().to_owned(),
            src: el.value().attr("src").map(str::to_owned),
            visible: is_visible(el),
        });

        let links =
            doc.select(&sel.anchors).filter_map(|a| a.value().attr("href")).map(str::to_owned);

        let social_links = doc.select(&sel.social).map(|a| SocialAnchor {
            href: a.value().attr("href").map(str::to_owned),
            aria_label: a.value().attr("aria-label").map(str::to_owned),
        });

        let subresources = doc
            .select(&sel.subresources)
            .filter_map(|el| el.value().attr("src").or_else(|| el.value().attr("href")))
            .filter(|src| !src.starts_with("data:"))
            .map(str::to_owned);

        Self {
            url,
            status,
            text: doc
                .select(&sel.body)
                .next()
                .map(|body| collapse_whitespace(body.text()))
                .unwrap_or_default(),
            background,
            links: links.collect(),
            social_links: social_links.collect(),
            subresources: subresources.collect(),
            error_elements: doc.select(&sel.errors).count(),
        }
    }

    /// Resolves an `href`/`src` found on this page.
    pub(crate) fn resolve(&self, href: &str) -> Result<Url, CheckError> {
        let mut url = self.url.join(href).map_err(|e| CheckError::invalid_url(href, e))?;
        url.set_fragment(None);
        Ok(url)
    }

    /// Resolved same-site links, deduplicated, in first-seen order.
    pub(crate) fn internal_links(&self) -> Result<Vec<Url>, CheckError> {
        let mut seen = Vec::new();
        for href in self.links.iter().filter(|href| is_internal(href)) {
            let url = self.resolve(href)?;
            if !seen.contains(&url) {
                seen.push(url);
            }
        }
        Ok(seen)
    }
}

/// `true` for root-relative and relative links; `false` for anything with a
/// scheme, protocol-relative links and bare fragments.
#[must_use]
pub fn is_internal(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("//") {
        return false;
    }
    if href.starts_with('/') {
        return true;
    }
    if href.contains("://") {
        return false;
    }
    // mailto:, tel:, javascript: ...
    !has_scheme(href)
}

fn has_scheme(href: &str) -> bool {
    href.split_once(':').is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && !scheme.contains('/')
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// `true` for an absolute `http://` or `https://` URL with a host part.
#[must_use]
pub fn is_absolute_http(href: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| href.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

fn is_visible(el: ElementRef<'_>) -> bool {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .all(|node| !hides(node.value()))
}

fn hides(el: &Element) -> bool {
    if el.attr("hidden").is_some() {
        return true;
    }
    el.attr("style").is_some_and(|style| {
        let style: String =
            style.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_lowercase();
        style.contains("display:none") || style.contains("visibility:hidden")
    })
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in parts.flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Page {
        let url = Url::parse("http://localhost:4321/").expect("url");
        Page::parse(url, StatusCode::OK, body, &Selectors::new().expect("selectors"))
    }

    #[test]
    fn internal_link_classification() {
        assert!(is_internal("/"));
        assert!(is_internal("/projects"));
        assert!(is_internal("about.html"));
        assert!(is_internal("./blog"));

        assert!(!is_internal("https://github.com/codr-io"));
        assert!(!is_internal("//cdn.example.com/x.js"));
        assert!(!is_internal("#top"));
        assert!(!is_internal("mailto:cody@codr.io"));
        assert!(!is_internal(""));
    }

    #[test]
    fn absolute_http_urls() {
        assert!(is_absolute_http("https://bsky.app/profile/codr.io"));
        assert!(is_absolute_http("http://example.com"));
        assert!(!is_absolute_http("https://"));
        assert!(!is_absolute_http("/github"));
        assert!(!is_absolute_http("ftp://example.com"));
    }

    #[test]
    fn snapshot_collects_dom_contract() {
        let page = page(
            r#"<!DOCTYPE html><html><head>
                <link rel="stylesheet" href="/assets/site.css">
                <link rel="canonical" href="https://codr.io/">
            </head><body>
                <img id="background" src="/assets/background.png" alt="">
                <a href="/">Home</a><a href="/#top">Top</a><a href="/blog">Blog</a>
                <div class="social-links">
                    <a href="https://github.com/codr-io" aria-label="GitHub"></a>
                    <a href="https://twitter.com/codr_io"></a>
                </div>
                <p>Hi, I&#39;m   Cody</p>
            </body></html>"#,
        );

        let bg = page.background.as_ref().expect("background");
        assert_eq!(bg.tag, "img");
        assert_eq!(bg.src.as_deref(), Some("/assets/background.png"));
        assert!(bg.visible);

        assert_eq!(page.subresources, ["/assets/site.css", "/assets/background.png"]);
        assert_eq!(page.social_links.len(), 2);
        assert_eq!(page.social_links[1].aria_label, None);
        assert_eq!(page.error_elements, 0);
        assert!(page.text.contains("Hi, I'm Cody"));

        let links: Vec<String> =
            page.internal_links().expect("links").iter().map(Url::to_string).collect();
        assert_eq!(links, ["http://localhost:4321/", "http://localhost:4321/blog"]);
    }

    #[test]
    fn text_ignores_head_content() {
        let page = page(
            "<html><head><title>Hi, I'm Cody</title></head><body><p>Welcome</p></body></html>",
        );

        assert_eq!(page.text, "Welcome");
        assert!(!page.text.contains("Hi, I'm Cody"));
    }

    #[test]
    fn hidden_ancestor_hides_background() {
        let page = page(
            r#"<div style="display: none"><img id="background" src="/bg.png"></div>
               <p class="error">boom</p><section class="not-found"></section>"#,
        );

        assert!(!page.background.expect("background").visible);
        assert_eq!(page.error_elements, 2);
    }

    #[test]
    fn hidden_attribute_hides_background() {
        let page = page(r#"<img id="background" src="/bg.png" hidden>"#);
        assert!(!page.background.expect("background").visible);
    }
}
