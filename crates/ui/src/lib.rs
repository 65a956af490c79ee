//! # UI
//!
//! Dioxus components for the site and the functions that render them to HTML
//! strings on the server. Nothing here runs in the browser: every component is
//! a pure function of its props, and the only input that changes output is the
//! [`FeatureFlags`](codr_domain::features::FeatureFlags) value passed in.

pub mod components;
mod render;

pub use components::Section;
pub use render::{
    render_footer, render_header, render_home, render_not_found, render_section, render_welcome,
};
