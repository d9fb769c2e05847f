#[test]
fn elemental_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/elemental_error_pass.rs");
    t.pass("tests/ui/elemental_error_no_internal_pass.rs");
}
