use crate::element::Element;
use crate::member::Member;
use crate::value::MemberValue;
use std::borrow::Cow;
use std::fmt;

/// Anything a [`Registry`](crate::Registry) can resolve to a member.
///
/// Integers address members by ordinal (negative values count from the end); strings are
/// normalized and matched against member names and synonyms; members resolve to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    Ordinal(i64),
    Name(Cow<'a, str>),
    Member(&'a Member),
}

impl From<i64> for Key<'_> {
    fn from(ordinal: i64) -> Self {
        Self::Ordinal(ordinal)
    }
}

impl From<i32> for Key<'_> {
    fn from(ordinal: i32) -> Self {
        Self::Ordinal(i64::from(ordinal))
    }
}

impl From<usize> for Key<'_> {
    fn from(ordinal: usize) -> Self {
        Self::Ordinal(i64::try_from(ordinal).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for Key<'_> {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl<'a> From<&'a Member> for Key<'a> {
    fn from(member: &'a Member) -> Self {
        Self::Member(member)
    }
}

impl<'a> From<Element<'a>> for Key<'a> {
    fn from(element: Element<'a>) -> Self {
        Self::Member(element.member())
    }
}

impl<'a> From<&Element<'a>> for Key<'a> {
    fn from(element: &Element<'a>) -> Self {
        Self::Member(element.member())
    }
}

impl<'a> From<MemberValue<'a>> for Key<'a> {
    fn from(value: MemberValue<'a>) -> Self {
        match value {
            MemberValue::Symbol(name) => Self::Name(Cow::Borrowed(name)),
            MemberValue::Ordinal(ordinal) => ordinal.into(),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(ordinal) => write!(f, "{ordinal}"),
            Self::Name(name) => f.write_str(name),
            Self::Member(member) => f.write_str(member.name()),
        }
    }
}
