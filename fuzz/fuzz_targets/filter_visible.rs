#![no_main]

// Harness: filter_visible
// Focus: order preservation, idempotence and exactness of role filtering over
// arbitrary (possibly malformed) capability tokens.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rolegate_core::{CapabilityResolver, Resource, Role};

#[derive(Arbitrary, Debug, Clone, PartialEq, Eq)]
struct Row {
    id: u16,
    view: String,
    edit: Option<String>,
}

impl Resource for Row {
    fn view_capability(&self) -> &str {
        &self.view
    }

    fn edit_capability(&self) -> Option<&str> {
        self.edit.as_deref()
    }
}

#[derive(Arbitrary, Debug)]
struct FilterFrame {
    role: u8,
    rows: Vec<Row>,
}

fuzz_target!(|frame: FilterFrame| {
    let resolver = CapabilityResolver::default();
    let role = Role::ALL[usize::from(frame.role) % Role::ALL.len()];

    let once = resolver.filter_visible(role, &frame.rows);
    let twice = resolver.filter_visible(role, once.iter().copied());
    assert_eq!(once, twice);

    let expected: Vec<&Row> = frame.rows.iter().filter(|r| resolver.has(role, &r.view)).collect();
    assert_eq!(once, expected);

    for row in resolver.filter_editable(role, &frame.rows) {
        assert!(resolver.can_edit(role, row));
    }
});
