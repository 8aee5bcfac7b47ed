//! trybuild UI tests for ioc_macros

#[test]
fn ui_ioc_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/bean_ok.rs");
    t.pass("tests/trybuild/interface_ok.rs");
}
