use elemental::Elemental;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Elemental)]
#[elemental(name = "Public status")]
enum PublicStatus {
    #[member(display = "Not Published", default)]
    Unpublished,
    #[member(display = "Editorial Approval Needed", synonym = "pending", synonym = "in_review")]
    EditorApproval,
    #[member(position = -1)]
    Published,
    Archived,
}

fn main() {
    assert_eq!(PublicStatus::lookup("in-review").unwrap(), PublicStatus::EditorApproval);
    assert_eq!(PublicStatus::sorted_by_position()[0], PublicStatus::Published);
    assert_eq!(PublicStatus::Archived.succ(), PublicStatus::Unpublished);
}
