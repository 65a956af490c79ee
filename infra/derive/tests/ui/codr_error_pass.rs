use std::borrow::Cow;

#[codr_derive::codr_error]
pub enum RenderError {
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = RenderError::InvalidInput { message: "empty".into(), context: None };
    let _ = err.to_string();
    let _: Result<(), RenderError> = Err(std::fmt::Error).context("writing markup");
}
