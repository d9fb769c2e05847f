//! Error messages declared as an enumeration.
//!
//! The message text lives in the registry; [`ProgrammersError`] only picks a member. Adding a
//! member is enough to add an error kind.

use elemental::{Elemental, ElementalError, canonical_name};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Elemental)]
pub enum ProgrammersErrorMessages {
    #[member(display = "An unspecified error occurred.")]
    UnspecifiedProgrammers,
    #[member(display = "Called an abstract method.")]
    AbstractMethod,
    #[member(display = "Invalid field was passed in arguments.")]
    InvalidFieldPassed,
}

/// An error whose message comes from [`ProgrammersErrorMessages`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ProgrammersError {
    kind: ProgrammersErrorMessages,
    detail: Option<String>,
}

impl ProgrammersError {
    pub const fn new(kind: ProgrammersErrorMessages) -> Self {
        Self { kind, detail: None }
    }

    /// Resolves an error kind by name, e.g. `AbstractMethodError` or `abstract_method`.
    ///
    /// A trailing `Error` is ignored. The bare `ProgrammersError` name and an empty name mean
    /// the first (unspecified) kind.
    pub fn named(name: &str) -> Result<Self, ElementalError> {
        let canonical = canonical_name(name.trim());
        let stem = match canonical.as_str() {
            "error" => "",
            other => other.strip_suffix("_error").unwrap_or(other),
        };

        let kind = if stem.is_empty() || stem == "programmers" {
            ProgrammersErrorMessages::VARIANTS[0]
        } else {
            ProgrammersErrorMessages::lookup(stem)?
        };
        Ok(Self::new(kind))
    }

    /// Attaches a free-form detail shown after the message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub const fn kind(&self) -> ProgrammersErrorMessages {
        self.kind
    }
}

impl fmt::Display for ProgrammersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Programmer's Error: {}", self.kind.display())?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_resolve_from_type_style_names() {
        assert_eq!(
            ProgrammersError::named("AbstractMethodError").unwrap().kind(),
            ProgrammersErrorMessages::AbstractMethod
        );
        assert_eq!(
            ProgrammersError::named("invalid_field_passed").unwrap().kind(),
            ProgrammersErrorMessages::InvalidFieldPassed
        );
        assert_eq!(
            ProgrammersError::named("UnspecifiedProgrammersError").unwrap().kind(),
            ProgrammersErrorMessages::UnspecifiedProgrammers
        );
    }

    #[test]
    fn generic_name_falls_back_to_first_kind() {
        for name in ["ProgrammersError", "programmers", ""] {
            assert_eq!(
                ProgrammersError::named(name).unwrap().kind(),
                ProgrammersErrorMessages::UnspecifiedProgrammers
            );
        }
        assert!(ProgrammersError::named("SegfaultError").is_err());
    }

    #[test]
    fn message_uses_member_display() {
        let err = ProgrammersError::new(ProgrammersErrorMessages::AbstractMethod);
        assert_eq!(err.to_string(), "Programmer's Error: Called an abstract method.");

        let err = err.with_detail("Shape::area");
        assert_eq!(err.to_string(), "Programmer's Error: Called an abstract method. (Shape::area)");
    }
}
