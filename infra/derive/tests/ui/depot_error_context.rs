use depot_derive::depot_error;
use std::borrow::Cow;

#[depot_error]
pub enum StockError {
    #[error("Stock decode error{}: {source}", format_context(.context))]
    Decode { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    #[error("Internal stock error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64, StockError> {
    raw.parse::<f64>().context("Parsing item size")
}

fn relabel(raw: &str) -> Result<f64, StockError> {
    parse(raw).context("Restoring department")
}

fn main() {
    assert!(parse("2.5").is_ok());

    let err = parse("two").expect_err("size is not numeric");
    assert!(err.to_string().starts_with("Stock decode error (Parsing item size): "));

    let err = relabel("two").expect_err("size is not numeric");
    assert!(err.to_string().starts_with("Stock decode error (Restoring department): "));

    let err: StockError = String::from("lost").into();
    assert!(matches!(err, StockError::Internal { context: None, .. }));
}
