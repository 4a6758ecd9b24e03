// Accessibility helpers

/// Critical CSS injected early in the page: focus ring styles plus the
/// screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #f59e0b;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the polite live region so assistive technology announces the
/// message. Looks up the #live-status element rendered by the home page.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("live-status"))
        {
            node.set_text_content(Some(msg));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}
