//! Enumerations shipped with the catalog.

use crate::error::CatalogError;
use crate::programmers::ProgrammersErrorMessages;
use elemental::{Elemental, Registry, canonical_name};

/// Publication workflow of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Elemental)]
pub enum PublicStatus {
    #[member(display = "Not Published", default)]
    Unpublished,
    #[member(display = "Editorial Approval Needed", synonym = "pending")]
    EditorApproval,
    #[member(display = "Published")]
    Published,
    #[member(display = "Archived")]
    Archived,
}

/// Who may comment on a post. Stored as an ordinal, so new kinds are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Elemental)]
#[elemental(persist_ordinally)]
pub enum CommentType {
    #[member(display = "Anyone can post")]
    All,
    #[member(display = "Moderated", default)]
    Moderated,
    #[member(display = "Closed to new posts")]
    Closed,
}

/// Every registry the catalog can show.
pub fn registries() -> [&'static Registry; 3] {
    [PublicStatus::registry(), CommentType::registry(), ProgrammersErrorMessages::registry()]
}

/// Finds a registry by name in any spelling (`PublicStatus`, `public-status`, ...).
pub fn find_registry(name: &str) -> Result<&'static Registry, CatalogError> {
    let wanted = canonical_name(name);
    registries()
        .into_iter()
        .find(|registry| canonical_name(registry.name()) == wanted)
        .ok_or_else(|| CatalogError::UnknownRegistry { name: name.to_owned(), context: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental::MemberValue;

    #[test]
    fn public_status_defaults_to_unpublished() {
        assert_eq!(PublicStatus::defaults(), [PublicStatus::Unpublished]);
        assert_eq!(PublicStatus::lookup("pending").unwrap(), PublicStatus::EditorApproval);
        assert_eq!(PublicStatus::EditorApproval.value(), MemberValue::Symbol("editor_approval"));
    }

    #[test]
    fn comment_type_persists_ordinally() {
        assert_eq!(CommentType::Closed.value(), MemberValue::Ordinal(2));
        assert_eq!(CommentType::defaults(), [CommentType::Moderated]);
        assert_eq!(CommentType::Closed.succ(), CommentType::All);
    }

    #[test]
    fn registries_resolve_in_any_spelling() {
        assert_eq!(find_registry("PublicStatus").unwrap().name(), "PublicStatus");
        assert_eq!(find_registry("comment-type").unwrap().len(), 3);
        assert!(matches!(find_registry("weather"), Err(CatalogError::UnknownRegistry { .. })));
    }
}
