use crate::key::Key;
use crate::member::Member;
use crate::registry::Registry;
use crate::value::MemberValue;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::ptr;

/// A member together with the registry that owns it.
///
/// Every lookup returns an `Element`. It dereferences to [`Member`] for the plain attributes
/// and adds what needs the owner: circular navigation, the value policy and key comparison.
///
/// Equality is identity: two elements are equal when they are the same member of the same
/// registry. Ordering follows [`Member::position`], with the ordinal as tie-breaker, which
/// makes a plain `sort()` equivalent to [`Registry::sorted_by_position`].
#[derive(Clone, Copy)]
pub struct Element<'r> {
    registry: &'r Registry,
    member: &'r Member,
}

impl<'r> Element<'r> {
    pub(crate) const fn new(registry: &'r Registry, member: &'r Member) -> Self {
        Self { registry, member }
    }

    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub const fn member(&self) -> &'r Member {
        self.member
    }

    /// The next member in ordinal order; the last member wraps to the first.
    pub fn succ(&self) -> Self {
        self.registry.step(self.member.ordinal(), Step::Forward)
    }

    /// The previous member in ordinal order; the first member wraps to the last.
    pub fn pred(&self) -> Self {
        self.registry.step(self.member.ordinal(), Step::Backward)
    }

    /// Returns the member's value under the owning registry's policy.
    pub fn value(&self) -> MemberValue<'r> {
        self.registry.member_value(self.member)
    }

    /// Checks whether `key` resolves to this member in the owning registry.
    ///
    /// ```rust
    /// use elemental::{MemberOptions, Registry};
    ///
    /// let fruit = Registry::builder("Fruit")
    ///     .member("apple", MemberOptions::new())?
    ///     .member("banana", MemberOptions::new())?
    ///     .synonym("machintosh", "apple")?
    ///     .build();
    ///
    /// let apple = fruit.first()?;
    /// assert!(apple.is("machintosh"));
    /// assert!(apple.is(0));
    /// assert!(!apple.is("banana"));
    /// assert!(!apple.is("tomato"));
    /// # Ok::<(), elemental::ElementalError>(())
    /// ```
    pub fn is<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.registry.lookup(key).is_ok_and(|other| other == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Forward,
    Backward,
}

impl Deref for Element<'_> {
    type Target = Member;

    fn deref(&self) -> &Member {
        self.member
    }
}

impl AsRef<Member> for Element<'_> {
    fn as_ref(&self) -> &Member {
        self.member
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.registry, other.registry) && self.member.ordinal() == other.member.ordinal()
    }
}

impl Eq for Element<'_> {}

impl Hash for Element<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.registry, state);
        self.member.ordinal().hash(state);
    }
}

impl PartialOrd for Element<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.member
            .position()
            .cmp(&other.member.position())
            .then_with(|| self.member.ordinal().cmp(&other.member.ordinal()))
            .then_with(|| ptr::from_ref(self.registry).cmp(&ptr::from_ref(other.registry)))
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member.name())
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("registry", &self.registry.name())
            .field("name", &self.member.name())
            .field("ordinal", &self.member.ordinal())
            .field("display", &self.member.display())
            .field("position", &self.member.position())
            .field("default", &self.member.is_default())
            .finish()
    }
}

impl Serialize for Element<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MemberOptions, Registry};

    fn cars() -> Registry {
        Registry::builder("Car")
            .member("honda", MemberOptions::new().position(100))
            .and_then(|b| b.member("toyota", MemberOptions::new().position(30)))
            .and_then(|b| b.member("ford", MemberOptions::new().position(30)))
            .map(crate::RegistryBuilder::build)
            .unwrap()
    }

    #[test]
    fn ordering_uses_position_then_ordinal() {
        let cars = cars();
        let honda = cars.lookup("honda").unwrap();
        let toyota = cars.lookup("toyota").unwrap();
        let ford = cars.lookup("ford").unwrap();

        assert!(toyota < ford, "equal positions fall back to ordinal");
        assert!(ford < honda);

        let mut all: Vec<_> = cars.iter().collect();
        all.sort();
        assert_eq!(all, cars.sorted_by_position());
    }

    #[test]
    fn equality_is_scoped_to_the_registry() {
        let a = cars();
        let b = cars();

        assert_eq!(a.first().unwrap(), a.lookup(0).unwrap());
        assert_ne!(a.first().unwrap(), b.first().unwrap());
        assert!(a.first().unwrap().is(b.first().unwrap()), "foreign members resolve by name");
    }

    #[test]
    fn debug_lists_every_field() {
        let cars = cars();
        let rendered = format!("{:?}", cars.lookup("toyota").unwrap());

        assert!(rendered.contains("registry: \"Car\""));
        assert!(rendered.contains("name: \"toyota\""));
        assert!(rendered.contains("position: 30"));
    }
}
