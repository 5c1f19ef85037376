#![cfg(all(feature = "render", not(feature = "logic-only")))]

use policy_rate_board::app::{ROOT_ELEMENT_ID, mount_rate_board};
use policy_rate_board::config::BoardConfig;
use policy_rate_board::presentation::RateBoardApi;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(existing) = document.get_element_by_id(ROOT_ELEMENT_ID) {
        existing.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(ROOT_ELEMENT_ID);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn api_search_returns_plain_object() {
    let mut api = RateBoardApi::new().unwrap();
    assert_eq!(api.record_count(), 20);
    assert!(!api.is_filtered());

    let result = api.search("🇯🇵").unwrap();
    assert!(api.is_filtered());
    assert_eq!(field(&result, "count").as_f64(), Some(1.0));
    assert_eq!(field(&result, "max").as_string().as_deref(), Some("0.10%"));
}

#[wasm_bindgen_test]
fn api_rejects_broken_document() {
    assert!(RateBoardApi::from_document("const baseRates = [{]").is_err());
}

#[wasm_bindgen_test]
fn mounts_one_card_per_record() {
    let root = fresh_root();
    mount_rate_board(&BoardConfig::default()).unwrap();

    let html = root.inner_html();
    assert_eq!(html.matches("class=\"rate-card\"").count(), 20);
    assert!(html.contains("45.00%"));
}

#[wasm_bindgen_test]
fn initial_search_prefilters() {
    let root = fresh_root();
    let config = BoardConfig::from_query("q=%F0%9F%87%B0%F0%9F%87%B7");
    mount_rate_board(&config).unwrap();

    assert_eq!(root.inner_html().matches("class=\"rate-card\"").count(), 1);
}

fn type_into_search(root: &web_sys::Element, term: &str) {
    let input = root
        .query_selector(".search-input")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(term);

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn stat_values(root: &web_sys::Element) -> Vec<String> {
    let nodes = root.query_selector_all(".stat-value").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

fn card_count(root: &web_sys::Element) -> usize {
    root.inner_html().matches("class=\"rate-card\"").count()
}

#[wasm_bindgen_test]
fn typing_replaces_cards_and_statistics() {
    let root = fresh_root();
    mount_rate_board(&BoardConfig::default()).unwrap();
    assert_eq!(card_count(&root), 20);
    assert_eq!(stat_values(&root)[1], "45.00%");

    type_into_search(&root, "🇯🇵");
    assert_eq!(card_count(&root), 1);
    assert_eq!(stat_values(&root), vec!["0.10%", "0.10%", "0.10%"]);
    assert!(root.inner_html().contains("1개 국가"));

    type_into_search(&root, "no-such-country");
    assert_eq!(card_count(&root), 0);
    assert_eq!(stat_values(&root), vec!["0.00%", "0.00%", "0.00%"]);

    type_into_search(&root, "");
    assert_eq!(card_count(&root), 20);
    assert!(root.inner_html().contains("20개 국가"));
}
