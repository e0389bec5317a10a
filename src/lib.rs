#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! An animated particle blob for a browser canvas: a static spiral point
//! cloud perturbed per frame by simplex noise in the vertex shader, driven
//! by a slowly-eased time offset.
//!
//! The pure animation math lives in [`anim`] and [`points`] and is tested
//! on the host; everything that touches the DOM or WebGL2 is gated behind
//! `target_arch = "wasm32"`.

pub mod anim;
pub mod points;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    pub mod blob;
    pub mod chrome;
    pub mod render;
    pub mod shaders;
    pub mod webgl;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        body.append_child(&canvas)?;

        let session = render::Session::start(canvas)?;
        // Page lifetime: nothing ever tears the session down, so leak it
        // rather than cancel the loop when it drops out of scope.
        std::mem::forget(session);

        chrome::schedule_fade_in(&document)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
