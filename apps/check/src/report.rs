use serde::Serialize;
use std::fmt;

/// One independent check against the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// `/` answers 200.
    RootStatus,
    /// Every image, script, stylesheet and icon on `/` answers 200.
    Subresources,
    /// `#background` is visible, loads and decodes to a non-empty image.
    Background,
    /// Every internal link answers 200 without error markers.
    InternalLinks,
    /// Every social anchor has an absolute http(s) href and an accessible name.
    SocialLinks,
    /// `/` contains every expected text snippet.
    ExpectedText,
}

impl Check {
    pub const ALL: [Self; 6] = [
        Self::RootStatus,
        Self::Subresources,
        Self::Background,
        Self::InternalLinks,
        Self::SocialLinks,
        Self::ExpectedText,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RootStatus => "root_status",
            Self::Subresources => "subresources",
            Self::Background => "background",
            Self::InternalLinks => "internal_links",
            Self::SocialLinks => "social_links",
            Self::ExpectedText => "expected_text",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub check: Check,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl Outcome {
    #[must_use]
    pub fn new(check: Check, failures: Vec<String>) -> Self {
        Self { check, passed: failures.is_empty(), failures }
    }
}

/// Results of a full run, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub base_url: String,
    pub passed: bool,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    #[must_use]
    pub fn new(base_url: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        let passed = outcomes.iter().all(|o| o.passed);
        Self { base_url: base_url.into(), passed, outcomes }
    }

    #[must_use]
    pub fn outcome(&self, check: Check) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }

    pub fn failures(&self) -> impl Iterator<Item = (Check, &str)> {
        self.outcomes.iter().flat_map(|o| o.failures.iter().map(move |f| (o.check, f.as_str())))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checking {}", self.base_url)?;
        for outcome in &self.outcomes {
            let mark = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f, "  {mark} {}", outcome.check)?;
            for failure in &outcome.failures {
                writeln!(f, "       - {failure}")?;
            }
        }
        let failed = self.outcomes.iter().filter(|o| !o.passed).count();
        write!(f, "{} checks, {failed} failed", self.outcomes.len())
    }
}
