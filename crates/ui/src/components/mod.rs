mod background;
mod footer;
mod header;
mod icons;
mod pages;
mod welcome;

pub use background::Background;
pub use footer::Footer;
pub use header::Header;
pub use pages::{HomePage, NotFoundPage, Section, SectionPage, Shell};
pub use welcome::Welcome;
