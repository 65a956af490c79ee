use codr_domain::features::FeatureFlags;
use codr_domain::links::{HOME_LINK, NavLink, SOCIAL_LINKS};

#[test]
fn only_home_is_visible_without_flags() {
    let links: Vec<_> = NavLink::visible(FeatureFlags::empty()).collect();
    assert_eq!(links, vec![&HOME_LINK]);
}

#[test]
fn flagged_links_follow_home() {
    let hrefs: Vec<_> =
        NavLink::visible(FeatureFlags::SHOW_HEADER_LINKS).map(|link| link.href).collect();
    assert_eq!(hrefs, vec!["/", "/projects", "/blog"]);
}

#[test]
fn social_links_are_absolute_and_labelled() {
    assert_eq!(SOCIAL_LINKS.len(), 4);
    for link in SOCIAL_LINKS {
        assert!(
            link.href.starts_with("https://") || link.href.starts_with("http://"),
            "{} must be absolute",
            link.href
        );
        assert!(!link.label.trim().is_empty());
    }

    let labels: Vec<_> = SOCIAL_LINKS.iter().map(|link| link.label).collect();
    assert_eq!(labels, vec!["GitHub", "Twitter", "Bluesky", "LinkedIn"]);
}
