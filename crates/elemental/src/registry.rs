use crate::builder::RegistryBuilder;
use crate::element::{Element, Step};
use crate::error::ElementalError;
use crate::key::Key;
use crate::member::Member;
use crate::name::canonical_name;
use crate::value::MemberValue;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::iter::FusedIterator;
use std::{ptr, slice};
use tracing::trace;

/// The closed set of members of one enumeration.
///
/// A registry is populated once through [`Registry::builder`] and is immutable afterwards:
/// every query takes `&self`, so a built registry can be shared freely across threads
/// (typically from a `static`).
///
/// Members keep two independent orders. Iteration follows the ordinal (registration order);
/// [`Registry::sorted_by_position`] follows the explicit sort positions.
///
/// # Example
/// ```rust
/// use elemental::{MemberOptions, Registry};
///
/// let colors = Registry::builder("Color")
///     .member("blue", MemberOptions::new().display("Hazel Blue").as_default())?
///     .member("red", MemberOptions::new().display("Fire Engine Red"))?
///     .member("yellow", MemberOptions::new())?
///     .build();
///
/// assert_eq!(colors.len(), 3);
/// assert_eq!(colors.first()?.name(), "blue");
/// assert_eq!(colors.first()?.succ().succ().succ(), colors.first()?);
/// assert_eq!(colors.lookup("yellow")?.display(), "yellow");
/// assert_eq!(colors.lookup(-1)?, colors.last()?);
/// # Ok::<(), elemental::ElementalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) name: Cow<'static, str>,
    pub(crate) members: Vec<Member>,
    pub(crate) index: FxHashMap<String, usize>,
    pub(crate) value_as_ordinal: bool,
}

impl Registry {
    /// Starts declaring a registry. `name` identifies it in errors and logs.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> RegistryBuilder {
        RegistryBuilder::new(name.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members; synonyms are not counted.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether member values are ordinals rather than names.
    pub const fn value_as_ordinal(&self) -> bool {
        self.value_as_ordinal
    }

    /// All members in ordinal order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Resolves an ordinal, name, synonym or member to its element.
    ///
    /// Negative ordinals count from the end (`-1` is the last member). Names are normalized
    /// first, so `"FourFiveSix"` and `"four_five_six"` are the same key. A member that belongs
    /// to another registry resolves by name.
    ///
    /// # Errors
    /// Returns [`ElementalError::IndexOutOfRange`] for an ordinal outside `[-len, len - 1]` and
    /// [`ElementalError::UnknownMember`] for a name with no match.
    pub fn lookup<'k>(&self, key: impl Into<Key<'k>>) -> Result<Element<'_>, ElementalError> {
        match key.into() {
            Key::Ordinal(ordinal) => self.by_ordinal(ordinal),
            Key::Name(name) => self.by_name(&name),
            Key::Member(member) => match self.members.get(member.ordinal()) {
                Some(own) if ptr::eq(own, member) => Ok(Element::new(self, own)),
                _ => self.by_name(member.name()),
            },
        }
    }

    /// Like [`Registry::lookup`], but discards the error.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<Element<'_>> {
        self.lookup(key).ok()
    }

    pub fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.lookup(key).is_ok()
    }

    /// The member with ordinal 0.
    ///
    /// # Errors
    /// Returns [`ElementalError::EmptyRegistry`] when no members were declared.
    pub fn first(&self) -> Result<Element<'_>, ElementalError> {
        self.members.first().map(|m| Element::new(self, m)).ok_or_else(|| self.empty())
    }

    /// The member with the highest ordinal.
    ///
    /// # Errors
    /// Returns [`ElementalError::EmptyRegistry`] when no members were declared.
    pub fn last(&self) -> Result<Element<'_>, ElementalError> {
        self.members.last().map(|m| Element::new(self, m)).ok_or_else(|| self.empty())
    }

    /// The member after `key`, wrapping from the last member to the first.
    ///
    /// # Errors
    /// Returns [`ElementalError::EmptyRegistry`] on an empty registry, otherwise any error
    /// from [`Registry::lookup`].
    pub fn succ<'k>(&self, key: impl Into<Key<'k>>) -> Result<Element<'_>, ElementalError> {
        self.navigate(key.into(), Step::Forward)
    }

    /// The member before `key`, wrapping from the first member to the last.
    ///
    /// # Errors
    /// Returns [`ElementalError::EmptyRegistry`] on an empty registry, otherwise any error
    /// from [`Registry::lookup`].
    pub fn pred<'k>(&self, key: impl Into<Key<'k>>) -> Result<Element<'_>, ElementalError> {
        self.navigate(key.into(), Step::Backward)
    }

    /// Iterates members in ordinal order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { registry: self, members: self.members.iter() }
    }

    /// Members ordered by position, ties broken by ordinal.
    ///
    /// ```rust
    /// use elemental::{MemberOptions, Registry};
    ///
    /// let cars = Registry::builder("Car")
    ///     .member("honda", MemberOptions::new().position(100))?
    ///     .member("toyota", MemberOptions::new().position(30))?
    ///     .member("mazda", MemberOptions::new().position(1))?
    ///     .build();
    ///
    /// let by_position = cars.sorted_by_position();
    /// let sorted: Vec<_> = by_position.iter().map(|e| e.name()).collect();
    /// assert_eq!(sorted, ["mazda", "toyota", "honda"]);
    /// # Ok::<(), elemental::ElementalError>(())
    /// ```
    pub fn sorted_by_position(&self) -> Vec<Element<'_>> {
        let mut elements: Vec<_> = self.iter().collect();
        elements.sort_by_key(|e| e.position());
        elements
    }

    /// Members flagged as default, in ordinal order. May be empty.
    pub fn defaults(&self) -> impl Iterator<Item = Element<'_>> {
        self.iter().filter(|e| e.is_default())
    }

    /// The value of `member` under this registry's policy: its ordinal once
    /// `persist_ordinally` was declared, its canonical name otherwise.
    pub fn member_value<'m>(&self, member: &'m Member) -> MemberValue<'m> {
        if self.value_as_ordinal {
            MemberValue::Ordinal(member.ordinal())
        } else {
            MemberValue::Symbol(member.name())
        }
    }

    /// Every name that resolves to `key`'s member: the canonical name followed by its
    /// synonyms in alphabetical order.
    ///
    /// # Errors
    /// Any error from [`Registry::lookup`].
    pub fn names_of<'k>(&self, key: impl Into<Key<'k>>) -> Result<Vec<&str>, ElementalError> {
        let element = self.lookup(key)?;
        let mut synonyms: Vec<&str> = self
            .index
            .iter()
            .filter(|(name, ordinal)| **ordinal == element.ordinal() && *name != element.name())
            .map(|(name, _)| name.as_str())
            .collect();
        synonyms.sort_unstable();

        let mut names = Vec::with_capacity(synonyms.len() + 1);
        names.push(self.members[element.ordinal()].name());
        names.extend(synonyms);
        Ok(names)
    }

    pub(crate) fn step(&self, ordinal: usize, step: Step) -> Element<'_> {
        let len = self.members.len();
        let next = match step {
            Step::Forward => (ordinal + 1) % len,
            Step::Backward => (ordinal + len - 1) % len,
        };
        Element::new(self, &self.members[next])
    }

    fn navigate(&self, key: Key<'_>, step: Step) -> Result<Element<'_>, ElementalError> {
        if self.members.is_empty() {
            return Err(self.empty());
        }
        let element = self.lookup(key)?;
        Ok(self.step(element.ordinal(), step))
    }

    fn by_ordinal(&self, ordinal: i64) -> Result<Element<'_>, ElementalError> {
        let len = i64::try_from(self.members.len()).unwrap_or(i64::MAX);
        let resolved = if ordinal < 0 { ordinal + len } else { ordinal };

        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.members.get(i))
            .map(|member| Element::new(self, member))
            .ok_or_else(|| {
                trace!(registry = %self.name, ordinal, "Ordinal out of range");
                ElementalError::IndexOutOfRange {
                    index: ordinal,
                    size: self.members.len(),
                    registry: self.name.clone(),
                    context: None,
                }
            })
    }

    fn by_name(&self, name: &str) -> Result<Element<'_>, ElementalError> {
        let canonical = canonical_name(name);
        self.index
            .get(&canonical)
            .map(|&ordinal| Element::new(self, &self.members[ordinal]))
            .ok_or_else(|| {
                trace!(registry = %self.name, name, "Unknown member");
                ElementalError::UnknownMember {
                    name: canonical.into(),
                    registry: self.name.clone(),
                    context: None,
                }
            })
    }

    fn empty(&self) -> ElementalError {
        ElementalError::EmptyRegistry { registry: self.name.clone(), context: None }
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = Element<'r>;
    type IntoIter = Iter<'r>;

    fn into_iter(self) -> Iter<'r> {
        self.iter()
    }
}

/// Ordinal-order iterator over a registry's members.
#[derive(Debug, Clone)]
pub struct Iter<'r> {
    registry: &'r Registry,
    members: slice::Iter<'r, Member>,
}

impl<'r> Iterator for Iter<'r> {
    type Item = Element<'r>;

    fn next(&mut self) -> Option<Element<'r>> {
        self.members.next().map(|member| Element::new(self.registry, member))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.members.next_back().map(|member| Element::new(self.registry, member))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
