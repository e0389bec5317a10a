//! Page-chrome fade-in: DOM text revealed on fixed timers after load,
//! independent of the render loop. Missing elements are skipped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, HtmlElement};

use super::webgl::js_err;

const BODY_FADE_MS: i32 = 500;
const NAME_FADE_MS: i32 = 1200;
const DESCRIPTION_FADE_MS: i32 = 2200;

pub fn schedule_fade_in(document: &Document) -> Result<(), JsValue> {
    {
        let document = document.clone();
        schedule(BODY_FADE_MS, move || {
            if let Some(body) = document.body() {
                let _ = body.style().set_property("opacity", "1");
            }
        })?;
    }
    {
        let document = document.clone();
        schedule(NAME_FADE_MS, move || {
            if let Ok(Some(element)) = document.query_selector(".name") {
                if let Some(element) = element.dyn_ref::<HtmlElement>() {
                    reveal(element);
                }
            }
        })?;
    }
    {
        let document = document.clone();
        schedule(DESCRIPTION_FADE_MS, move || {
            if let Ok(nodes) = document.query_selector_all(".description") {
                for i in 0..nodes.length() {
                    if let Some(element) =
                        nodes.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok())
                    {
                        reveal(&element);
                    }
                }
            }
        })?;
    }
    Ok(())
}

fn reveal(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("transform", "scale(1)");
    let _ = style.set_property("opacity", "1");
}

fn schedule<F: FnOnce() + 'static>(delay_ms: i32, callback: F) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| js_err("no window"))?;
    let closure = Closure::once(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    // One-shot; the browser drops the callback after it fires.
    closure.forget();
    Ok(())
}
