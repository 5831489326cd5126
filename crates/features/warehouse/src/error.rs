use std::borrow::Cow;

/// Error types specific to the warehouse feature.
#[depot_derive::depot_error]
pub enum WarehouseError {
    /// No constructor is registered for the product tag.
    #[error("Unknown product kind `{tag}`{}", format_context(.context))]
    UnknownProductKind { tag: String, context: Option<Cow<'static, str>> },

    /// The department tag does not name a known department kind.
    #[error("Unknown department kind `{tag}`{}", format_context(.context))]
    UnknownDepartmentKind { tag: String, context: Option<Cow<'static, str>> },

    /// The product attributes are out of range (negative or non-finite size).
    #[error("Invalid product `{name}`{}: {reason}", format_context(.context))]
    InvalidProduct {
        name: String,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Serde JSON error with optional context.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal warehouse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
