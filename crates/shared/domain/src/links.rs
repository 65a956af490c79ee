//! Static link tables rendered by the header and footer.

use crate::constants::{BLOG_PATH, HOME_PATH, PROJECTS_PATH};
use crate::features::FeatureFlags;

/// An internal navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HOME_LINK: NavLink = NavLink { label: "Home", href: HOME_PATH };

/// Links shown only when [`FeatureFlags::SHOW_HEADER_LINKS`] is set.
pub const FLAGGED_NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", href: PROJECTS_PATH },
    NavLink { label: "Blog", href: BLOG_PATH },
];

impl NavLink {
    /// Header links visible under `flags`, home first.
    pub fn visible(flags: FeatureFlags) -> impl Iterator<Item = &'static Self> {
        let flagged: &'static [Self] =
            if flags.contains(FeatureFlags::SHOW_HEADER_LINKS) { FLAGGED_NAV_LINKS } else { &[] };
        std::iter::once(&HOME_LINK).chain(flagged)
    }
}

/// Brand glyph drawn next to a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    GitHub,
    Twitter,
    Bluesky,
    LinkedIn,
}

/// An external profile link. `label` is the accessible name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/codr-io", icon: SocialIcon::GitHub },
    SocialLink { label: "Twitter", href: "https://twitter.com/codr_io", icon: SocialIcon::Twitter },
    SocialLink {
        label: "Bluesky",
        href: "https://bsky.app/profile/codr.io",
        icon: SocialIcon::Bluesky,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/codr-io",
        icon: SocialIcon::LinkedIn,
    },
];
