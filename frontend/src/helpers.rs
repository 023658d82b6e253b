//! Small DOM and formatting utilities shared by the pages.

use gloo_console::error;
use num_format::{Locale, ToFormattedString};
use web_sys::Element;

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 3000;

const TOAST_STYLE: &str = "position:fixed;bottom:20px;left:50%;transform:translateX(-50%);color:#fff;padding:10px 20px;border-radius:4px;z-index:10000;";

/// Tone of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Success,
    Failure,
}

impl Toast {
    fn style(self) -> String {
        let background = match self {
            Toast::Success => "#15803d",
            Toast::Failure => "#b91c1c",
        };
        format!("{TOAST_STYLE}background:{background};")
    }
}

/// Shows `message` at the bottom of the screen for `TOAST_DURATION_MS`.
///
/// The toast lives outside the Yew tree, appended straight to `body`, so it
/// survives the page re-rendering underneath it.
pub fn show_toast(message: &str, tone: Toast) {
    let Some(toast) = build_toast(message, tone) else {
        error!("Não foi possível exibir a notificação");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toast.remove();
    });
}

fn build_toast(message: &str, tone: Toast) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let toast = document.create_element("div").ok()?;
    toast.set_text_content(Some(message));
    toast
        .set_attribute("style", &tone.style())
        .ok()?;
    document.body()?.append_child(&toast).ok()?;
    Some(toast)
}

/// Current inner width of the browser window, in CSS pixels.
///
/// Falls back to `0.0` (narrow layout) when the window is unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Customer count with Brazilian digit grouping, e.g. `12.500 clientes`.
pub fn customers_label(count: u64) -> String {
    let noun = if count == 1 { "cliente" } else { "clientes" };
    format!("{} {}", count.to_formatted_string(&Locale::pt), noun)
}
