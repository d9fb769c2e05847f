use crate::error::ElementalError;
use crate::key::Key;
use crate::member::{Member, MemberOptions};
use crate::name::canonical_name;
use crate::registry::Registry;
use fxhash::FxHashMap;
use std::borrow::Cow;
use tracing::debug;

/// Declaration phase of a [`Registry`].
///
/// Members are numbered in registration order. Names (and synonyms) are normalized on the way
/// in and must stay unique within the registry. Once [`RegistryBuilder::build`] returns, the
/// member set is frozen.
///
/// The consuming methods chain; the `register_*` forms take `&mut self` for declarations
/// driven by a loop.
///
/// # Example
/// ```rust
/// use elemental::{MemberOptions, Registry};
///
/// let mut builder = Registry::builder("Level");
/// for name in ["Low", "Medium", "High"] {
///     builder.register_member(name, MemberOptions::new())?;
/// }
/// builder.register_synonym("normal", "medium")?;
///
/// let levels = builder.build();
/// assert_eq!(levels.lookup("normal")?.name(), "medium");
/// # Ok::<(), elemental::ElementalError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use = "A registry builder does nothing until built."]
pub struct RegistryBuilder {
    name: Cow<'static, str>,
    members: Vec<Member>,
    index: FxHashMap<String, usize>,
    value_as_ordinal: bool,
}

impl RegistryBuilder {
    pub(crate) fn new(name: Cow<'static, str>) -> Self {
        Self { name, members: Vec::new(), index: FxHashMap::default(), value_as_ordinal: false }
    }

    /// Adds a member and returns the builder.
    ///
    /// # Errors
    /// Returns [`ElementalError::DuplicateMember`] if the normalized name is already taken by a
    /// member or a synonym.
    pub fn member(mut self, name: impl AsRef<str>, options: MemberOptions) -> Result<Self, ElementalError> {
        self.register_member(name, options)?;
        Ok(self)
    }

    /// Adds an alternative name for an existing member.
    ///
    /// # Errors
    /// Returns [`ElementalError::UnknownMember`] if `existing` does not resolve and
    /// [`ElementalError::DuplicateMember`] if `alias` is already taken.
    pub fn synonym<'k>(mut self, alias: impl AsRef<str>, existing: impl Into<Key<'k>>) -> Result<Self, ElementalError> {
        self.register_synonym(alias, existing)?;
        Ok(self)
    }

    /// Makes member values their ordinals instead of their names.
    pub const fn persist_ordinally(mut self) -> Self {
        self.value_as_ordinal = true;
        self
    }

    /// Adds a member in place and returns its ordinal.
    ///
    /// # Errors
    /// See [`RegistryBuilder::member`].
    pub fn register_member(&mut self, name: impl AsRef<str>, options: MemberOptions) -> Result<usize, ElementalError> {
        let canonical = canonical_name(name.as_ref());
        self.ensure_vacant(&canonical)?;

        let ordinal = self.members.len();
        debug!(registry = %self.name, member = %canonical, ordinal, "Registering member");
        self.index.insert(canonical.clone(), ordinal);
        self.members.push(Member::new(canonical, ordinal, options));
        Ok(ordinal)
    }

    /// Adds a synonym in place.
    ///
    /// # Errors
    /// See [`RegistryBuilder::synonym`].
    pub fn register_synonym<'k>(&mut self, alias: impl AsRef<str>, existing: impl Into<Key<'k>>) -> Result<(), ElementalError> {
        let ordinal = self.resolve(existing.into())?;
        let canonical = canonical_name(alias.as_ref());
        self.ensure_vacant(&canonical)?;

        debug!(registry = %self.name, synonym = %canonical, member = %self.members[ordinal].name(), "Registering synonym");
        self.index.insert(canonical, ordinal);
        Ok(())
    }

    pub const fn enable_persist_ordinally(&mut self) -> &mut Self {
        self.value_as_ordinal = true;
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Freezes the declaration.
    pub fn build(self) -> Registry {
        debug!(
            registry = %self.name,
            members = self.members.len(),
            synonyms = self.index.len() - self.members.len(),
            value_as_ordinal = self.value_as_ordinal,
            "Registry built"
        );
        Registry {
            name: self.name,
            members: self.members,
            index: self.index,
            value_as_ordinal: self.value_as_ordinal,
        }
    }

    fn ensure_vacant(&self, canonical: &str) -> Result<(), ElementalError> {
        if self.index.contains_key(canonical) {
            return Err(ElementalError::DuplicateMember {
                name: canonical.to_owned().into(),
                registry: self.name.clone(),
                context: None,
            });
        }
        Ok(())
    }

    fn resolve(&self, key: Key<'_>) -> Result<usize, ElementalError> {
        let len = self.members.len();
        let found = match &key {
            Key::Ordinal(ordinal) => {
                let signed = i64::try_from(len).unwrap_or(i64::MAX);
                let resolved = if *ordinal < 0 { ordinal + signed } else { *ordinal };
                return usize::try_from(resolved).ok().filter(|i| *i < len).ok_or_else(|| {
                    ElementalError::IndexOutOfRange {
                        index: *ordinal,
                        size: len,
                        registry: self.name.clone(),
                        context: None,
                    }
                });
            },
            Key::Name(name) => self.index.get(&canonical_name(name)).copied(),
            Key::Member(member) => self.index.get(member.name()).copied(),
        };
        found.ok_or_else(|| ElementalError::UnknownMember {
            name: canonical_name(&key.to_string()).into(),
            registry: self.name.clone(),
            context: None,
        })
    }
}
