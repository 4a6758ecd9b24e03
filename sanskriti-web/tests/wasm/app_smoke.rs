//! Browser-only smoke checks; run with `wasm-pack test --headless --chrome`.
use wasm_bindgen_test::*;
use yew::Renderer;

use sanskriti_web::app::App;
use sanskriti_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_mounts_with_live_region() {
    sanskriti_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    assert!(doc.get_element_by_id("live-status").is_some());
}

#[wasm_bindgen_test]
fn status_announcements_reach_the_live_region() {
    sanskriti_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    sanskriti_web::a11y::set_status("Photo uploaded successfully!");
    let node = dom::document()
        .get_element_by_id("live-status")
        .expect("live region");
    assert_eq!(
        node.text_content().unwrap_or_default(),
        "Photo uploaded successfully!"
    );
}
