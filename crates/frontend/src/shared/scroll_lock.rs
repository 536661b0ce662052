//! Body scroll lock used while a detail modal is open

use contracts::shared::catalog::ScrollHost;

const LOCKED_PROPS: [&str; 4] = ["position", "top", "width", "overflow"];

/// `ScrollHost` backed by `window` and `document.body`.
///
/// Locking fixes the body at the captured offset so the page behind the
/// overlay does not move; restoring clears those styles and scrolls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollHost;

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

impl ScrollHost for BodyScrollHost {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn lock(&self, offset: f64) {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{}px", offset));
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("overflow", "hidden");
    }

    fn restore(&self, offset: f64) {
        if let Some(body) = body() {
            let style = body.style();
            for prop in LOCKED_PROPS {
                let _ = style.remove_property(prop);
            }
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}
