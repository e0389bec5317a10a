#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL};

use blob_wasm::wasm::blob::{Blob, BlobConfig};
use blob_wasm::wasm::render;
use blob_wasm::wasm::shaders;
use blob_wasm::wasm::webgl;

wasm_bindgen_test_configure!(run_in_browser);

fn test_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn test_context() -> GL {
    test_canvas()
        .get_context("webgl2")
        .unwrap()
        .expect("WebGL2 not supported")
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn webgl2_context_is_available() {
    let gl = test_context();
    assert_eq!(gl.get_error(), GL::NO_ERROR);
}

#[wasm_bindgen_test]
fn invalid_shader_source_is_rejected() {
    let gl = test_context();
    let result = webgl::compile_shader(&gl, GL::VERTEX_SHADER, "this is not glsl");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn blob_shader_pair_links_and_validates() {
    let gl = test_context();
    let vertex_shader =
        webgl::compile_shader(&gl, GL::VERTEX_SHADER, &shaders::vertex_source()).unwrap();
    let fragment_shader =
        webgl::compile_shader(&gl, GL::FRAGMENT_SHADER, shaders::FRAGMENT).unwrap();
    let program = webgl::link_program(&gl, &vertex_shader, &fragment_shader, true).unwrap();
    assert!(gl.is_program(Some(&program)));
    // Linking releases the intermediate shader objects.
    assert!(!gl.is_shader(Some(&vertex_shader)));
    assert!(!gl.is_shader(Some(&fragment_shader)));
}

#[wasm_bindgen_test]
fn tiny_blob_renders_one_frame_with_zero_dt() {
    let gl = test_context();
    let config = BlobConfig {
        num_points: 4,
        ..BlobConfig::default()
    };
    let mut blob = Blob::new(&gl, &config).unwrap();
    assert_eq!(blob.offset(), 1.0);

    // No elapsed time means no smoothing step.
    blob.render_frame(&gl, 0.0, 0.0);
    assert_eq!(blob.offset(), 1.0);
    assert_eq!(gl.get_error(), GL::NO_ERROR);

    blob.shutdown();
}

#[wasm_bindgen_test]
fn fit_canvas_tracks_window_and_device_pixel_ratio() {
    let canvas = test_canvas();
    render::fit_canvas(&canvas).unwrap();

    let win = web_sys::window().unwrap();
    let dpr = win.device_pixel_ratio();
    let width = win.inner_width().unwrap().as_f64().unwrap();
    let height = win.inner_height().unwrap().as_f64().unwrap();

    assert_eq!(canvas.width(), (width * dpr) as u32);
    assert_eq!(canvas.height(), (height * dpr) as u32);
    assert_eq!(
        canvas.style().get_property_value("width").unwrap(),
        format!("{width}px")
    );
    assert_eq!(
        canvas.style().get_property_value("height").unwrap(),
        format!("{height}px")
    );
}
