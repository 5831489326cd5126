#[test]
fn depot_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/depot_error_pass.rs");
    t.pass("tests/ui/depot_error_context.rs");
}
