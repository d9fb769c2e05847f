//! # Elemental
//!
//! Closed, named enumerations with stable ordinals, independent sort positions, synonyms and
//! circular navigation.
//!
//! A [`Registry`] is declared once through [`Registry::builder`] and is immutable afterwards.
//! Lookups accept an ordinal (negative values count from the end), a name in any common
//! spelling (`"FourFiveSix"`, `"four-five-six"`, `"four_five_six"`), a synonym, or a member,
//! and return an [`Element`]: the member plus its owning registry.
//!
//! For enumerations known at compile time, `#[derive(Elemental)]` on a fieldless enum backs
//! it with a static registry and implements [`Elemental`] and serde.
//!
//! ```rust
//! use elemental::Elemental;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Elemental)]
//! #[elemental(persist_ordinally)]
//! enum Rating {
//!     Spam,
//!     Insulting,
//!     #[member(default)]
//!     Moderated,
//!     Mediocre,
//!     Interesting,
//!     #[member(display = "Gold Standard")]
//!     GoldStandard,
//! }
//!
//! assert_eq!(Rating::lookup("GoldStandard")?, Rating::GoldStandard);
//! assert_eq!(Rating::GoldStandard.succ(), Rating::Spam);
//! assert_eq!(Rating::defaults(), [Rating::Moderated]);
//! assert_eq!(Rating::Moderated.value(), elemental::MemberValue::Ordinal(2));
//! # Ok::<(), elemental::ElementalError>(())
//! ```

mod builder;
mod element;
mod error;
mod key;
mod member;
mod name;
mod registry;
mod typed;
pub mod value;

pub use builder::RegistryBuilder;
pub use element::Element;
pub use error::{ElementalError, ElementalErrorExt};
pub use key::Key;
pub use member::{Attribute, Member, MemberOptions};
pub use name::canonical_name;
pub use registry::{Iter, Registry};
pub use typed::Elemental;
pub use value::MemberValue;

pub use elemental_derive::{Elemental, elemental_error};

#[doc(hidden)]
pub use serde;

/// Unwraps the declaration of a static registry.
///
/// Used by `#[derive(Elemental)]`; a declaration either always fails or never does, so there
/// is nothing to recover from.
///
/// # Panics
/// Panics with the declaration error, e.g. two variant names that normalize to the same
/// canonical name.
#[doc(hidden)]
pub fn declared(declaration: Result<Registry, ElementalError>) -> Registry {
    match declaration {
        Ok(registry) => registry,
        Err(err) => panic!("invalid elemental declaration: {err}"),
    }
}
