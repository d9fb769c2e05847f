use elemental::Elemental;
use serde::{Deserialize, Serialize};

// `serde = false` leaves serialization to the enum's own derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Elemental)]
#[elemental(persist_ordinally, serde = false)]
enum Priority {
    Low,
    High,
}

fn main() {
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    assert_eq!(serde_json::from_str::<Priority>("\"Low\"").unwrap(), Priority::Low);
    assert_eq!(Priority::High.value(), elemental::MemberValue::Ordinal(1));
}
