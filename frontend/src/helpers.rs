//! Browser helpers shared by the page and its components.
//!
//! - **Dialogs**: blocking `alert`/`confirm` wrappers used for errors and delete confirmation.
//! - **User Feedback**: short-lived "toast" notifications for successful saves.
//! - **Formatting**: prices with thousands separators.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a blocking alert. Used for every failed API call.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Asks the user to confirm. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification at the bottom of the screen that removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

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

/// `55000.0` becomes `"55 000 ₽"`; fractional prices are rounded to kopecks
/// and keep two decimals.
pub fn format_price(price: f64) -> String {
    let kopecks = (price * 100.0).round() as i64;
    let grouped = (kopecks / 100).to_formatted_string(&Locale::ru);
    let fraction = (kopecks % 100).abs();

    if fraction == 0 {
        format!("{grouped} ₽")
    } else {
        format!("{grouped},{fraction:02} ₽")
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
