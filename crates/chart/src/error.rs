use std::borrow::Cow;

/// Errors raised while building or querying a size chart.
#[sizer_derive::sizer_error]
pub enum ChartError {
    /// A template entry is not a usable size (empty or duplicate key, non-finite value,
    /// mixed simple and detailed entries).
    #[error("Invalid size template{}: {message}", format_context(.context))]
    InvalidTemplate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A dynamic operation references a missing size or carries an illegal increment/direction.
    #[error("Invalid dynamic operation{}: {message}", format_context(.context))]
    InvalidDynamicOperation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The prefix in front of an anchor suffix is not a positive integer.
    #[error(
        "Unparsable size key{}: '{key}', prefix of dynamic key must be a positive number or not set",
        format_context(.context)
    )]
    UnparsableKey { key: String, context: Option<Cow<'static, str>> },

    /// The key is neither stored, a numeric literal, nor an extension of a known anchor.
    #[error("Unresolvable size key{}: '{key}', {message}", format_context(.context))]
    UnresolvableKey {
        key: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A list length or range walk went past [`crate::MAX_SEQUENCE_LENGTH`].
    #[error("Bounds exceeded{}: requested {requested}, maximum is {max}", format_context(.context))]
    BoundsExceeded { requested: usize, max: usize, context: Option<Cow<'static, str>> },

    /// A walk reached a size that has no neighbor on the side it needed.
    #[error("Size chain exhausted{}: no {side} size after '{key}'", format_context(.context))]
    ChainExhausted { key: String, side: &'static str, context: Option<Cow<'static, str>> },
}

impl ChartError {
    pub(crate) fn invalid_template(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidTemplate { message: message.into(), context: None }
    }

    pub(crate) fn invalid_dynamic_operation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidDynamicOperation { message: message.into(), context: None }
    }

    pub(crate) fn unparsable(key: &str) -> Self {
        Self::UnparsableKey { key: key.to_owned(), context: None }
    }

    pub(crate) fn unresolvable(key: &str, message: &'static str) -> Self {
        Self::UnresolvableKey { key: key.to_owned(), message: message.into(), context: None }
    }

    pub(crate) const fn bounds(requested: usize, max: usize) -> Self {
        Self::BoundsExceeded { requested, max, context: None }
    }

    pub(crate) fn exhausted(key: &str, side: &'static str) -> Self {
        Self::ChainExhausted { key: key.to_owned(), side, context: None }
    }
}
