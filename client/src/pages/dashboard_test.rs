use super::*;
use leptos::tachys::view::RenderHtml;

#[test]
fn greeting_text_is_exact() {
    assert_eq!(DASHBOARD_GREETING, "Bienvenido al dashboard 🔐");
}

#[test]
fn renders_greeting_inside_padded_div() {
    let html = DashboardPage().to_html();
    assert!(html.contains(DASHBOARD_GREETING), "missing greeting in {html}");
    assert!(html.contains("class=\"p-10\""), "missing p-10 class in {html}");
}

#[test]
fn repeated_render_is_identical() {
    let first = DashboardPage().to_html();
    let second = DashboardPage().to_html();
    assert_eq!(first, second);
}
