use depot_derive::depot_error;
use std::borrow::Cow;

#[depot_error]
pub enum StockError {
    #[error("Stock decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown product kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Internal stock error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: StockError = "broken".into();
    assert_eq!(err.to_string(), "Internal stock error: broken");

    let err = StockError::UnknownKind { kind: "Crate".to_owned() };
    assert_eq!(err.to_string(), "Unknown product kind: Crate");
}
