//! Member values and their serde representation.
//!
//! A registry decides whether a member's value is its canonical name (the default) or its
//! ordinal (after `persist_ordinally`). Persistence layers store whatever [`MemberValue`]
//! serializes to: a string or an unsigned integer.
//!
//! Ordinal values stay meaningful only while members are appended, never reordered or
//! removed. Nothing enforces this.

use crate::typed::Elemental;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The persisted representation of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MemberValue<'a> {
    Symbol(&'a str),
    Ordinal(usize),
}

impl MemberValue<'_> {
    pub const fn as_ordinal(&self) -> Option<usize> {
        match self {
            Self::Ordinal(ordinal) => Some(*ordinal),
            Self::Symbol(_) => None,
        }
    }

    pub const fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(*name),
            Self::Ordinal(_) => None,
        }
    }
}

impl fmt::Display for MemberValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => f.write_str(name),
            Self::Ordinal(ordinal) => write!(f, "{ordinal}"),
        }
    }
}

/// Serializes a typed member as its registry value.
///
/// # Errors
/// Propagates serializer failures.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Elemental,
    S: Serializer,
{
    value.value().serialize(serializer)
}

/// Deserializes a typed member from either a name or an ordinal.
///
/// Both forms are accepted regardless of the registry's value policy, so data written before
/// `persist_ordinally` was switched on still loads. Stored ordinals are never negative; the
/// from-the-end indexing of `lookup` does not apply here.
///
/// # Errors
/// Fails when the input is neither a string nor an integer, is a negative integer, or does not
/// resolve to a member.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Elemental,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ValueVisitor(PhantomData))
}

struct ValueVisitor<T>(PhantomData<T>);

impl<T: Elemental> Visitor<'_> for ValueVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a member name or ordinal of {}", T::registry().name())
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<T, E> {
        T::lookup(name).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, ordinal: i64) -> Result<T, E> {
        if ordinal < 0 {
            return Err(E::invalid_value(de::Unexpected::Signed(ordinal), &self));
        }
        T::lookup(ordinal).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, ordinal: u64) -> Result<T, E> {
        let ordinal = i64::try_from(ordinal).map_err(E::custom)?;
        T::lookup(ordinal).map_err(E::custom)
    }
}
