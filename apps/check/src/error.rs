use std::borrow::Cow;

#[codr_derive::codr_error]
pub enum CheckError {
    /// Connection, timeout or body read failure.
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Image error{}: {source}", format_context(.context))]
    Image { source: image::ImageError, context: Option<Cow<'static, str>> },

    #[error("Image read error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid URL{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal checker error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CheckError {
    pub(crate) fn invalid_url(raw: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl { message: format!("'{raw}': {reason}").into(), context: None }
    }
}
