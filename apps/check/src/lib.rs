//! # codr.io Site Checker
//!
//! Black-box checks against a running site over HTTP. Each check does its own fresh
//! load of the home page, so one failure never leaks state into another:
//!
//! * the home page answers `200`,
//! * every image, script, stylesheet and icon it references answers `200`,
//! * `#background` is visible, loads and decodes to a non-empty image,
//! * every internal link answers `200` and shows no `.error` / `.not-found` element,
//! * every `.social-links` anchor has an absolute `http(s)` href and an `aria-label`,
//! * the page contains each expected text snippet.
//!
//! ## Example
//! ```no_run
//! # async fn run() -> Result<(), codr_check::CheckError> {
//! let report = codr_check::Checker::new("http://127.0.0.1:4321")?.run().await;
//! assert!(report.passed, "{report}");
//! # Ok(())
//! # }
//! ```

mod error;
mod page;
mod report;

pub use crate::error::{CheckError, CheckErrorExt};
pub use crate::page::{Background, Page, SocialAnchor, is_absolute_http, is_internal};
pub use crate::report::{Check, Outcome, Report};

use crate::page::Selectors;
use codr_domain::constants::BACKGROUND_ID;
use image::ImageReader;
use reqwest::{Client, StatusCode, Url};
use std::io::Cursor;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:4321";
/// Checked when no `--expect-text` is given.
pub const DEFAULT_EXPECTED_TEXT: &str = "Hi, I'm Cody";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs [`Check`]s against one site.
#[derive(Debug)]
pub struct Checker {
    client: Client,
    base: Url,
    expected_text: Vec<String>,
    selectors: Selectors,
}

impl Checker {
    /// # Errors
    /// [`CheckError::InvalidUrl`] unless `base_url` is an absolute `http(s)` URL;
    /// [`CheckError::Http`] if the HTTP client can't be built.
    pub fn new(base_url: &str) -> Result<Self, CheckError> {
        let base = Url::parse(base_url).map_err(|e| CheckError::invalid_url(base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CheckError::invalid_url(base_url, "expected an http or https URL"));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("codr-check/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;

        Ok(Self { client, base, expected_text: Vec::new(), selectors: Selectors::new()? })
    }

    /// Adds a text snippet the home page must contain. Replaces the default.
    #[must_use]
    pub fn expect_text(mut self, text: impl Into<String>) -> Self {
        self.expected_text.push(text.into());
        self
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Runs every check in order.
    pub async fn run(&self) -> Report {
        let mut outcomes = Vec::with_capacity(Check::ALL.len());
        for check in Check::ALL {
            outcomes.push(self.run_check(check).await);
        }
        Report::new(self.base.as_str(), outcomes)
    }

    /// Runs a single check. Transport errors become failures of that check.
    pub async fn run_check(&self, check: Check) -> Outcome {
        debug!(%check, "Running check");
        let result = match check {
            Check::RootStatus => self.root_status().await,
            Check::Subresources => self.subresources().await,
            Check::Background => self.background().await,
            Check::InternalLinks => self.internal_links().await,
            Check::SocialLinks => self.social_links().await,
            Check::ExpectedText => self.expected_text().await,
        };
        let failures = result.unwrap_or_else(|e| vec![e.to_string()]);

        if failures.is_empty() {
            info!(%check, "Check passed");
        } else {
            warn!(%check, failures = failures.len(), "Check failed");
        }
        Outcome::new(check, failures)
    }

    async fn root_status(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        Ok(expect_ok(&page.url, page.status).into_iter().collect())
    }

    async fn subresources(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        let mut failures = Vec::new();
        for src in &page.subresources {
            let url = page.resolve(src)?;
            if let Some(failure) = self.probe(&url).await {
                failures.push(failure);
            }
        }
        Ok(failures)
    }

    async fn background(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        let Some(bg) = &page.background else {
            return Ok(vec![format!("no #{BACKGROUND_ID} element on {}", page.url)]);
        };

        let mut failures = Vec::new();
        if bg.tag != "img" {
            failures.push(format!("#{BACKGROUND_ID} is a <{}>, expected <img>", bg.tag));
        }
        if !bg.visible {
            failures.push(format!("#{BACKGROUND_ID} is hidden"));
        }
        let Some(src) = bg.src.as_deref() else {
            failures.push(format!("#{BACKGROUND_ID} has no src"));
            return Ok(failures);
        };

        let url = page.resolve(src)?;
        let response = self.client.get(url.clone()).send().await.context(format!("GET {url}"))?;
        if let Some(failure) = expect_ok(&url, response.status()) {
            failures.push(failure);
            return Ok(failures);
        }

        let bytes = response.bytes().await.context(format!("reading {url}"))?;
        match image_dimensions(&bytes) {
            Ok((width, height)) if width > 0 && height > 0 => {
                debug!(%url, width, height, "Background decoded");
            },
            Ok((width, height)) => failures.push(format!("{url} decodes to {width}x{height}")),
            Err(e) => failures.push(format!("{url} does not decode: {e}")),
        }
        Ok(failures)
    }

    async fn internal_links(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        let mut failures = Vec::new();
        for url in page.internal_links()? {
            match self.load(&url).await {
                Ok(linked) => {
                    failures.extend(expect_ok(&url, linked.status));
                    if linked.error_elements > 0 {
                        failures.push(format!(
                            "{url} shows {} error/not-found element(s)",
                            linked.error_elements
                        ));
                    }
                },
                Err(e) => failures.push(e.to_string()),
            }
        }
        Ok(failures)
    }

    async fn social_links(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        if page.social_links.is_empty() {
            return Ok(vec!["no social links found".to_owned()]);
        }

        let mut failures = Vec::new();
        for (i, anchor) in page.social_links.iter().enumerate() {
            let href = anchor.href.as_deref().unwrap_or_default();
            if !is_absolute_http(href) {
                failures.push(format!("social link #{i} has a non-http(s) href '{href}'"));
            }
            if anchor.aria_label.as_deref().is_none_or(|label| label.trim().is_empty()) {
                failures.push(format!("social link #{i} ({href}) has no aria-label"));
            }
        }
        Ok(failures)
    }

    async fn expected_text(&self) -> Result<Vec<String>, CheckError> {
        let page = self.load(&self.base).await?;
        let defaults = [DEFAULT_EXPECTED_TEXT.to_owned()];
        let expected =
            if self.expected_text.is_empty() { &defaults[..] } else { &self.expected_text[..] };

        Ok(expected
            .iter()
            .filter(|text| !page.text.contains(text.as_str()))
            .map(|text| format!("text '{text}' not found on {}", page.url))
            .collect())
    }

    /// GETs `url` and parses the body into an owned [`Page`].
    async fn load(&self, url: &Url) -> Result<Page, CheckError> {
        let response = self.client.get(url.clone()).send().await.context(format!("GET {url}"))?;
        let status = response.status();
        let body = response.text().await.context(format!("reading {url}"))?;
        Ok(Page::parse(url.clone(), status, &body, &self.selectors))
    }

    /// `None` when `url` answers 200.
    async fn probe(&self, url: &Url) -> Option<String> {
        match self.client.get(url.clone()).send().await {
            Ok(response) => expect_ok(url, response.status()),
            Err(e) => Some(format!("GET {url} failed: {e}")),
        }
    }
}

fn expect_ok(url: &Url, status: StatusCode) -> Option<String> {
    (status != StatusCode::OK).then(|| format!("GET {url} returned {status}"))
}

fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), CheckError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}
