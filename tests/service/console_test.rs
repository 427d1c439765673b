use crate::common::console_page;
use prompt_relay::service::{ConsoleLabels, ConsolePage, ConsoleView};
use prompt_relay::Locales;

#[test]
fn test_view_holds_at_most_one_of_output_and_error() {
    let empty = ConsoleView::default();
    assert_eq!((empty.output(), empty.error()), (None, None));

    let ok = ConsoleView::with_output("prompt", "text");
    assert_eq!((ok.output(), ok.error()), (Some("text"), None));

    let failed = ConsoleView::with_error("prompt", "boom");
    assert_eq!((failed.output(), failed.error()), (None, Some("boom")));
    assert_eq!(failed.prompt(), "prompt");
}

#[test]
fn test_empty_view_hides_both_panels() {
    let html = console_page().render(&ConsoleView::default()).unwrap();

    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("<title>AI Prompt Generator</title>"));
    assert!(html.contains(r#"<p id="error" class="error" hidden></p>"#));
    assert!(html.contains(r#"<section id="result" class="result" hidden>"#));
    assert!(html.contains(r#"<pre id="output"></pre>"#));
    assert!(html.contains(r#"data-busy-label="Generating...""#));
    assert!(html.contains(r#"data-empty-prompt="Prompt cannot be empty.""#));
}

#[test]
fn test_output_is_escaped_and_keeps_whitespace() {
    let view = ConsoleView::with_output("<b>hi</b>", "line one\n  <em>line two</em>");
    let html = console_page().render(&view).unwrap();

    assert!(html.contains(r#"<pre id="output">line one
  &lt;em&gt;line two&lt;"#));
    assert!(html.contains(r#"<section id="result" class="result">"#));
    assert!(html.contains(r#"<p id="error" class="error" hidden></p>"#));
    assert!(html.contains("&lt;b&gt;hi&lt;"));
    assert!(!html.contains("<em>line two"));
}

#[test]
fn test_error_view_hides_result() {
    let view = ConsoleView::with_error("", "Prompt cannot be empty.");
    let html = console_page().render(&view).unwrap();

    assert!(html.contains(r#"<p id="error" class="error">Prompt cannot be empty.</p>"#));
    assert!(html.contains(r#"<section id="result" class="result" hidden>"#));
}

#[test]
fn test_labels_follow_default_locale() {
    let locales = Locales::load("locales", "zh-CN").unwrap();
    let labels = ConsoleLabels::from_locales(&locales);
    assert_eq!(labels.submit, "生成");
    assert_eq!(labels.busy, "生成中...");

    let page = ConsolePage::new(&locales).unwrap();
    assert_eq!(page.lang(), "zh-CN");
    let html = page.render(&ConsoleView::default()).unwrap();
    assert!(html.contains(r#"<html lang="zh-CN">"#));
    assert!(html.contains("<title>AI 提示词生成器</title>"));
}
