#[cfg(feature = "ssr")]
use super::*;

#[cfg(feature = "ssr")]
#[test]
fn page_renders_form_fields_and_button() {
    let html = crate::test_helpers::render_html(|| view! { <LoginPage/> });
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"type="password""#));
    assert!(html.contains(r#"type="button""#));
    assert!(!html.contains("<table"));
}
