#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the elemental workspace.
//!
//! * [`macro@elemental_error`] turns a plain enum into a context-aware error type.
//! * [`macro@Elemental`] binds a fieldless enum to a process-wide, immutable
//!   `elemental::Registry`, so member names are checked by the compiler instead of at lookup.
//!
//! Consumers normally reach these through the `elemental` crate, which re-exports both.
//! Examples are `ignore`d here because the generated code refers to `::elemental`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: generates a companion `<Name>Ext` trait that adds `.context(..)` to any
///   `Result<T, Name>`, and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`), and `From<&'static str>`/`From<String>` when an `Internal`
///   variant carrying a `message` exists.
/// * **Formatting**: a module-local `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants that wrap a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[elemental_derive::elemental_error]
/// pub enum CatalogError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn elemental_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Derives `elemental::Elemental` for a fieldless enum.
///
/// Each variant becomes one member, in declaration order. The variant identifier is the
/// member name unless overridden; names are normalized at registration, so `FourFiveSix`
/// is stored as `four_five_six`.
///
/// # Enum attributes
///
/// * `#[elemental(name = "...")]` - registry name used in errors and logs (defaults to the
///   enum identifier).
/// * `#[elemental(persist_ordinally)]` - values are ordinals instead of names. Once values
///   are persisted, only ever append variants.
/// * `#[elemental(serde = false)]` - skips the generated `Serialize`/`Deserialize` impls, for
///   enums that bring their own.
///
/// # Variant attributes
///
/// * `#[member(name = "...")]` - overrides the member name.
/// * `#[member(display = "...")]` - display text.
/// * `#[member(position = 10)]` - sort position (defaults to the ordinal).
/// * `#[member(default)]` - marks the member as a default.
/// * `#[member(synonym = "...")]` - an extra name for the member; may repeat.
///
/// `Serialize`/`Deserialize` impls going through the registry's value policy are generated
/// unless `serde = false` is set.
///
/// # Example
///
/// ```rust,ignore
/// use elemental::Elemental;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Elemental)]
/// enum Fruit {
///     #[member(synonym = "machintosh")]
///     Apple,
///     #[member(default)]
///     Pear,
///     #[member(default)]
///     Banana,
///     Kiwi,
/// }
///
/// assert_eq!(Fruit::lookup("machintosh")?, Fruit::Apple);
/// assert_eq!(Fruit::Kiwi.succ(), Fruit::Apple);
/// ```
#[proc_macro_derive(Elemental, attributes(elemental, member))]
pub fn derive_elemental(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::elemental::expand_derive(input).into()
}
