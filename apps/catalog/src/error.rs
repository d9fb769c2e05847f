use crate::programmers::ProgrammersError;
use std::borrow::Cow;

/// Errors surfaced by the catalog binary.
#[elemental::elemental_error]
pub enum CatalogError {
    #[error("{source}{}", format_context(.context))]
    Elemental { source: elemental::ElementalError, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Programmers { source: ProgrammersError, context: Option<Cow<'static, str>> },

    #[error("Unknown registry{}: `{name}` (try `elemental registries`)", format_context(.context))]
    UnknownRegistry { name: String, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
