//! Compile-time checked enumerations.
//!
//! [`Elemental`] is implemented by `#[derive(Elemental)]`: every variant of a fieldless enum is
//! one member of a process-wide [`Registry`], declared lazily on first use. The enum value and
//! the registry member share the same ordinal, so converting between the two never searches.

use crate::element::Element;
use crate::error::ElementalError;
use crate::key::Key;
use crate::registry::Registry;
use crate::value::MemberValue;

/// A Rust enum backed by a static [`Registry`].
///
/// Only [`Elemental::VARIANTS`], [`Elemental::declare`], [`Elemental::registry`] and
/// [`Elemental::ordinal`] are required; the derive provides them. Everything else is
/// expressed through the registry.
pub trait Elemental: Copy + 'static {
    /// All variants in ordinal order.
    const VARIANTS: &'static [Self];

    /// Declares the backing registry. Called once, by [`Elemental::registry`].
    ///
    /// # Errors
    /// Returns [`ElementalError::DuplicateMember`] when two names normalize to the same
    /// canonical form.
    fn declare() -> Result<Registry, ElementalError>;

    /// The process-wide registry for this enum.
    fn registry() -> &'static Registry;

    /// Zero-based declaration index.
    fn ordinal(self) -> usize;

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Resolves any registry key (ordinal, name, synonym) to a variant.
    ///
    /// # Errors
    /// Any error from [`Registry::lookup`].
    fn lookup<'k>(key: impl Into<Key<'k>>) -> Result<Self, ElementalError> {
        let registry = Self::registry();
        let element = registry.lookup(key)?;
        Self::from_ordinal(element.ordinal()).ok_or_else(|| ElementalError::Internal {
            message: format!("{} has no variant for ordinal {}", registry.name(), element.ordinal())
                .into(),
            context: None,
        })
    }

    /// The registry member for this variant.
    fn element(self) -> Element<'static> {
        let registry = Self::registry();
        Element::new(registry, &registry.members()[self.ordinal()])
    }

    fn name(self) -> &'static str {
        self.element().member().name()
    }

    fn display(self) -> &'static str {
        self.element().member().display()
    }

    fn position(self) -> i64 {
        self.element().position()
    }

    fn is_default(self) -> bool {
        self.element().is_default()
    }

    /// The persisted value under the registry's policy.
    fn value(self) -> MemberValue<'static> {
        self.element().value()
    }

    /// The next variant; the last wraps to the first.
    fn succ(self) -> Self {
        Self::VARIANTS[(self.ordinal() + 1) % Self::VARIANTS.len()]
    }

    /// The previous variant; the first wraps to the last.
    fn pred(self) -> Self {
        let len = Self::VARIANTS.len();
        Self::VARIANTS[(self.ordinal() + len - 1) % len]
    }

    /// Checks whether `key` names this variant.
    fn is<'k>(self, key: impl Into<Key<'k>>) -> bool {
        self.element().is(key)
    }

    /// All variants in ordinal order.
    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::VARIANTS.iter().copied()
    }

    /// Variants flagged as default, in ordinal order.
    fn defaults() -> Vec<Self> {
        Self::iter().filter(|variant| variant.is_default()).collect()
    }

    /// Variants ordered by position, ties broken by ordinal.
    fn sorted_by_position() -> Vec<Self> {
        let mut variants: Vec<Self> = Self::iter().collect();
        variants.sort_by_key(|variant| variant.position());
        variants
    }
}
