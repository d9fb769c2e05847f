use elemental::Elemental;

#[derive(Debug, Clone, Copy, Elemental)]
enum Nothing {}

fn main() {
    assert!(Nothing::registry().is_empty());
    assert!(Nothing::registry().first().is_err());
    assert!(Nothing::defaults().is_empty());
}
