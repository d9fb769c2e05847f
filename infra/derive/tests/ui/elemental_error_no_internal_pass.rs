use elemental_derive::elemental_error;
use std::borrow::Cow;

#[elemental_error]
#[derive(Clone, PartialEq, Eq)]
enum LookupError {
    #[error("Not found{}: {name}", format_context(.context))]
    NotFound { name: String, context: Option<Cow<'static, str>> },

    #[error("Disabled")]
    Disabled {},
}

fn main() {
    let result: Result<u8, LookupError> = Err(LookupError::Disabled {});
    assert_eq!(result.context("ignored").unwrap_err(), LookupError::Disabled {});

    let result: Result<u8, LookupError> =
        Err(LookupError::NotFound { name: "kiwi".to_owned(), context: None });
    let err = result.context("fruit bowl").unwrap_err();
    assert_eq!(err.to_string(), "Not found (fruit bowl): kiwi");
}
