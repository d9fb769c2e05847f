use elemental_derive::elemental_error;
use std::borrow::Cow;

#[elemental_error]
pub enum LoadError {
    #[error("Io error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing entry{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal load error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

fn main() {
    let err = read().context("reading catalog").unwrap_err();
    assert_eq!(err.to_string(), "Io error (reading catalog): disk unplugged");

    let err: LoadError = std::io::Error::other("gone").into();
    assert!(matches!(err, LoadError::Io { context: None, .. }));

    let missing: Result<(), LoadError> =
        Err(LoadError::Missing { key: "fruit".to_owned(), context: None });
    assert_eq!(missing.context("startup").unwrap_err().to_string(), "Missing entry (startup): fruit");

    let internal = LoadError::from("broken invariant");
    assert_eq!(internal.to_string(), "Internal load error: broken invariant");
    let owned = LoadError::from(String::from("owned"));
    assert!(matches!(owned, LoadError::Internal { .. }));
}
