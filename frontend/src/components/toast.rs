use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification at the bottom of the screen.
///
/// Injects a styled `div` into the DOM and removes it after three seconds.
/// Used for every mutation outcome so no operation succeeds or fails
/// silently.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                for (prop, value) in [
                    ("position", "fixed"),
                    ("bottom", "24px"),
                    ("left", "50%"),
                    ("transform", "translateX(-50%)"),
                    ("background", "rgba(20, 20, 20, 0.85)"),
                    ("color", "#fff"),
                    ("padding", "10px 18px"),
                    ("border-radius", "6px"),
                    ("z-index", "10000"),
                ] {
                    style.set_property(prop, value).ok();
                }

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
