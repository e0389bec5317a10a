//! Session setup, the per-frame loop, and the resize handler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, Window};

use super::blob::{Blob, BlobConfig};
use super::webgl::js_err;

/// Real time is divided down so the noise field drifts slowly.
const TIME_SCALE: f64 = 3000.0;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the canvas, the entity, and the loop state that used to be
/// free-standing. The frame loop runs until [`Session::shutdown`] clears
/// the running flag; GPU resources live as long as the context does.
pub struct Session {
    canvas: HtmlCanvasElement,
    blob: Rc<RefCell<Blob>>,
    running: Rc<Cell<bool>>,
}

impl Session {
    /// Acquire a WebGL2 context, fit the canvas to the window, register
    /// the resize listener, build the blob, and start the frame loop.
    pub fn start(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        fit_canvas(&canvas)?;

        let resize_closure = {
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                let _ = fit_canvas(&canvas);
            }) as Box<dyn FnMut()>)
        };
        window()
            .ok_or_else(|| js_err("no window"))?
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        resize_closure.forget();

        let blob = Rc::new(RefCell::new(Blob::new(&gl, &BlobConfig::default())?));
        let running = Rc::new(Cell::new(true));
        spawn_frame_loop(gl, Rc::clone(&blob), Rc::clone(&running));

        Ok(Self {
            canvas,
            blob,
            running,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Stop requesting frames and cancel the blob's resample timer.
    pub fn shutdown(&mut self) {
        self.running.set(false);
        self.blob.borrow_mut().shutdown();
    }
}

/// Per-frame body: re-request first so a throwing frame cannot kill the
/// loop, then compute the scaled clock and delta, size the viewport to the
/// device-pixel window extent, clear, and hand off to the blob.
fn spawn_frame_loop(gl: GL, blob: Rc<RefCell<Blob>>, running: Rc<Cell<bool>>) {
    // The closure re-requests itself, so it holds a handle to its own cell.
    let f: FrameClosure = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut previous = 0.0f64;

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if running.get() {
            request_frame(&f);
        }

        let win = match window() {
            Some(win) => win,
            None => return,
        };
        let now = win.performance().map_or(0.0, |p| p.now()) / TIME_SCALE;
        let dt = now - previous;
        previous = now;

        let dpr = win.device_pixel_ratio();
        let (width, height) = window_size(&win);
        gl.viewport(0, 0, (width * dpr) as i32, (height * dpr) as i32);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        blob.borrow_mut().render_frame(&gl, dt as f32, now as f32);
    }) as Box<dyn FnMut()>));

    request_frame(&g);
}

fn request_frame(f: &FrameClosure) {
    if let Some(win) = window() {
        if let Some(callback) = f.borrow().as_ref() {
            let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }
}

/// Match the backing store to the device-pixel-scaled window size and the
/// CSS size to the raw window size.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| js_err("no window"))?;
    let dpr = win.device_pixel_ratio();
    let (width, height) = window_size(&win);

    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);

    let style = canvas.style();
    style.set_property("width", &format!("{width}px"))?;
    style.set_property("height", &format!("{height}px"))?;
    Ok(())
}

fn window_size(win: &Window) -> (f64, f64) {
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
