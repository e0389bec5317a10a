//! The animated point-cloud entity: one program, one vertex array, two
//! uniforms, and an eased time offset chasing a timer-resampled target.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use super::shaders;
use super::webgl::{self, js_err, AttribDesc};
use crate::anim::{self, EasedOffset};
use crate::points;

/// How often the target offset is resampled.
const RESAMPLE_INTERVAL_MS: i32 = 3000;

pub struct BlobConfig {
    pub num_points: usize,
    pub vertex_src: String,
    pub fragment_src: String,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            num_points: points::DEFAULT_NUM_POINTS,
            vertex_src: shaders::vertex_source(),
            fragment_src: shaders::FRAGMENT.to_string(),
        }
    }
}

/// Keeps the resample callback alive for as long as its interval runs.
struct Resampler {
    interval_id: i32,
    _closure: Closure<dyn FnMut()>,
}

pub struct Blob {
    num_points: usize,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    _buffers: Vec<WebGlBuffer>,
    u_time: Option<WebGlUniformLocation>,
    u_time_offset: Option<WebGlUniformLocation>,
    offset: EasedOffset,
    target: Rc<Cell<f32>>,
    resampler: Option<Resampler>,
}

impl Blob {
    /// Compile and link the program, upload the spiral point cloud, resolve
    /// uniform locations, and start the periodic target resampler. Any GPU
    /// failure aborts construction, so an existing `Blob` is always usable.
    pub fn new(gl: &GL, config: &BlobConfig) -> Result<Self, JsValue> {
        let vertex_shader = webgl::compile_shader(gl, GL::VERTEX_SHADER, &config.vertex_src)?;
        let fragment_shader =
            webgl::compile_shader(gl, GL::FRAGMENT_SHADER, &config.fragment_src)?;
        let program = webgl::link_program(gl, &vertex_shader, &fragment_shader, false)?;

        let location = gl.get_attrib_location(&program, "a_position");
        if location < 0 {
            return Err(js_err("a_position attribute not found"));
        }

        let positions = points::spiral_points(config.num_points);
        let (vao, buffers) = webgl::make_vao(
            gl,
            &[AttribDesc {
                buffer_kind: GL::ARRAY_BUFFER,
                data: &positions,
                usage: GL::STREAM_DRAW,
                attrib_type: GL::FLOAT,
                location: location as u32,
                components: 2,
            }],
        )?;

        gl.use_program(Some(&program));
        let u_time = gl.get_uniform_location(&program, "u_time");
        let u_time_offset = gl.get_uniform_location(&program, "u_timeOffset");
        gl.use_program(None);

        let offset = EasedOffset::default();
        let target = Rc::new(Cell::new(offset.target()));
        let resampler = start_resampler(Rc::clone(&target))?;

        Ok(Self {
            num_points: config.num_points,
            program,
            vao,
            _buffers: buffers,
            u_time,
            u_time_offset,
            offset,
            target,
            resampler: Some(resampler),
        })
    }

    /// Ease the offset toward the latest target, push the uniforms, and
    /// draw the whole cloud as points.
    pub fn render_frame(&mut self, gl: &GL, dt: f32, now: f32) {
        self.offset.set_target(self.target.get());
        let offset = self.offset.step(dt);

        gl.use_program(Some(&self.program));
        gl.uniform1f(self.u_time.as_ref(), now);
        gl.uniform1f(self.u_time_offset.as_ref(), offset);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.num_points as i32);
        gl.bind_vertex_array(None);
        gl.use_program(None);
    }

    /// Current eased offset, mostly of interest to tests.
    pub fn offset(&self) -> f32 {
        self.offset.current()
    }

    /// Cancel the target resampler. Idempotent. GPU handles are released
    /// implicitly when the context goes away.
    pub fn shutdown(&mut self) {
        if let Some(resampler) = self.resampler.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(resampler.interval_id);
            }
        }
    }
}

fn start_resampler(target: Rc<Cell<f32>>) -> Result<Resampler, JsValue> {
    let closure = Closure::wrap(Box::new(move || {
        target.set(anim::target_from_unit(js_sys::Math::random()));
    }) as Box<dyn FnMut()>);

    let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        RESAMPLE_INTERVAL_MS,
    )?;

    Ok(Resampler {
        interval_id,
        _closure: closure,
    })
}
