use sizer_derive::sizer_error;
use std::borrow::Cow;

#[sizer_error]
pub enum LookupError {
    #[error("Unknown size{}: {key}", format_context(.context))]
    Unknown { key: String, context: Option<Cow<'static, str>> },

    #[error("Too many sizes{}: {requested}", format_context(.context))]
    TooMany { requested: usize, context: Option<std::borrow::Cow<'static, str>> },
}

fn lookup(key: &str) -> Result<(), LookupError> {
    Err(LookupError::Unknown { key: key.to_owned(), context: None }).context("demo")
}

fn main() {
    let _ = lookup("5M");
}
