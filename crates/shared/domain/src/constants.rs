//! Names shared between the renderer, the router and the site checker.

// Feature flag names (keys of the `[features]` config table)
pub const SHOW_HEADER_LINKS: &str = "show_header_links";

// DOM contract
pub const BACKGROUND_ID: &str = "background";
pub const SOCIAL_LINKS_CLASS: &str = "social-links";
pub const NOT_FOUND_CLASS: &str = "not-found";
pub const ERROR_CLASS: &str = "error";

// Static assets
pub const ASSETS_PREFIX: &str = "/assets";
pub const BACKGROUND_SRC: &str = "/assets/background.png";
pub const STYLESHEET_HREF: &str = "/assets/site.css";
pub const FAVICON_HREF: &str = "/assets/favicon.svg";

// Routes
pub const HOME_PATH: &str = "/";
pub const PROJECTS_PATH: &str = "/projects";
pub const BLOG_PATH: &str = "/blog";
pub const HEALTH_PATH: &str = "/health";

// Copy
pub const LOGO_TEXT: &str = "codr.io";
pub const GREETING: &str = "Hi, I'm Cody 👋";
pub const BIO: &str =
    "I'm a software engineer who enjoys building fast, accessible things for the web.";
