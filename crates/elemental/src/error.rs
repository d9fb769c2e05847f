//! # Elemental Errors
//!
//! Every failure is local to the call that produced it: registration is append-only and
//! queries are side-effect free, so there is never partial state to roll back.

use std::borrow::Cow;

/// Errors raised while declaring or querying a [`Registry`](crate::Registry).
#[elemental_derive::elemental_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ElementalError {
    /// A name or synonym lookup had no match.
    #[error("Unknown member{}: `{name}` is not declared in {registry}", format_context(.context))]
    UnknownMember {
        name: Cow<'static, str>,
        registry: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// An ordinal lookup fell outside `[-size, size - 1]`.
    #[error(
        "Index out of range{}: {index} is outside {registry} with {size} members",
        format_context(.context)
    )]
    IndexOutOfRange {
        index: i64,
        size: usize,
        registry: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// `first`, `last` or navigation on a registry without members.
    #[error("Empty registry{}: {registry} has no members", format_context(.context))]
    EmptyRegistry { registry: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A member or synonym name collides with a name already declared.
    #[error("Duplicate member{}: `{name}` is already declared in {registry}", format_context(.context))]
    DuplicateMember {
        name: Cow<'static, str>,
        registry: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for broken invariants.
    #[error("Internal elemental error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
