use crate::name;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Extra, statically typed metadata attached to a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// Registration options for a single member.
///
/// Anything left unset falls back to the registry's defaults: the display text is the
/// canonical name, the position is the ordinal and the member is not a default.
///
/// # Example
/// ```rust
/// use elemental::MemberOptions;
///
/// let options = MemberOptions::new().display("Hazel Blue").position(10).as_default();
/// assert_eq!(options.display_text(), Some("Hazel Blue"));
/// ```
#[derive(Debug, Clone, Default)]
#[must_use = "Options do nothing until passed to a registry builder."]
pub struct MemberOptions {
    display: Option<String>,
    position: Option<i64>,
    default: bool,
    attributes: BTreeMap<Cow<'static, str>, Attribute>,
}

impl MemberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the human-readable label.
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Sets the sort position, independent of registration order.
    pub const fn position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Flags the member as a default (e.g. preselected in a list).
    pub const fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Attaches a metadata entry. A repeated key replaces the earlier value.
    pub fn attribute(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Attribute>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn display_text(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

/// One immutable entry of a [`Registry`](crate::Registry).
///
/// Members are only ever created by a registry builder. Navigation and the value policy need
/// the owning registry, so they live on [`Element`](crate::Element), the borrowed handle that
/// lookups return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    name: String,
    ordinal: usize,
    display: String,
    position: i64,
    default: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<Cow<'static, str>, Attribute>,
}

impl Member {
    pub(crate) fn new(name: String, ordinal: usize, options: MemberOptions) -> Self {
        let MemberOptions { display, position, default, attributes } = options;
        Self {
            display: display.unwrap_or_else(|| name.clone()),
            position: position.unwrap_or_else(|| i64::try_from(ordinal).unwrap_or(i64::MAX)),
            name,
            ordinal,
            default,
            attributes,
        }
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based registration index.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Alias of [`Member::ordinal`].
    pub const fn index(&self) -> usize {
        self.ordinal
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Sort key; equals the ordinal unless set explicitly.
    pub const fn position(&self) -> i64 {
        self.position
    }

    pub const fn is_default(&self) -> bool {
        self.default
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes.iter().map(|(key, value)| (key.as_ref(), value))
    }

    /// The display text when it was overridden, otherwise a label derived from the name.
    ///
    /// ```rust
    /// use elemental::{MemberOptions, Registry};
    ///
    /// let registry = Registry::builder("Jumbled")
    ///     .member("what_an_id", MemberOptions::new())?
    ///     .member("blue", MemberOptions::new().display("Hazel Blue"))?
    ///     .build();
    ///
    /// assert_eq!(registry.lookup("what_an_id")?.humanize(), "What an");
    /// assert_eq!(registry.lookup("blue")?.humanize(), "Hazel Blue");
    /// # Ok::<(), elemental::ElementalError>(())
    /// ```
    pub fn humanize(&self) -> Cow<'_, str> {
        if self.display == self.name {
            Cow::Owned(name::humanize(&self.name))
        } else {
            Cow::Borrowed(&self.display)
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
