//! Thin WebGL2 resource helpers: shader compilation, program linking, and
//! attribute buffer / vertex-array construction.
//!
//! Every fallible GPU acquisition returns `Result`, so callers have to
//! branch before using a handle; compile/link/validate diagnostics carry
//! the driver's info log and are also mirrored to the console.

use js_sys::Float32Array;
use wasm_bindgen::JsValue;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlVertexArrayObject,
};

pub fn js_err(message: &str) -> JsValue {
    JsValue::from_str(message)
}

fn report(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Compile one shader stage. On failure the shader object is deleted and
/// no usable handle escapes.
pub fn compile_shader(gl: &GL, stage: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(stage)
        .ok_or_else(|| js_err("failed to create shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let stage_name = if stage == GL::VERTEX_SHADER {
            "vertex"
        } else {
            "fragment"
        };
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader error".to_string());
        gl.delete_shader(Some(&shader));
        Err(report(format!("error compiling {stage_name} shader: {info}")))
    }
}

/// Link a vertex/fragment pair into a program, optionally validating it.
/// On success the intermediate shader objects are detached and deleted;
/// only the program is needed thereafter.
pub fn link_program(
    gl: &GL,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
    validate: bool,
) -> Result<WebGlProgram, JsValue> {
    let program = gl
        .create_program()
        .ok_or_else(|| js_err("failed to create program"))?;
    gl.attach_shader(&program, vertex_shader);
    gl.attach_shader(&program, fragment_shader);
    gl.link_program(&program);

    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program error".to_string());
        gl.delete_program(Some(&program));
        return Err(report(format!("error linking program: {info}")));
    }

    if validate {
        gl.validate_program(&program);
        if !gl
            .get_program_parameter(&program, GL::VALIDATE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let info = gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown program error".to_string());
            gl.delete_program(Some(&program));
            return Err(report(format!("error validating program: {info}")));
        }
    }

    gl.detach_shader(&program, vertex_shader);
    gl.detach_shader(&program, fragment_shader);
    gl.delete_shader(Some(vertex_shader));
    gl.delete_shader(Some(fragment_shader));

    Ok(program)
}

/// One attribute buffer to create inside a vertex array.
pub struct AttribDesc<'a> {
    /// `ARRAY_BUFFER` or `ELEMENT_ARRAY_BUFFER`.
    pub buffer_kind: u32,
    pub data: &'a [f32],
    /// Draw-usage hint, e.g. `STATIC_DRAW` or `STREAM_DRAW`.
    pub usage: u32,
    /// Element type of `data`, e.g. `FLOAT`.
    pub attrib_type: u32,
    /// Attribute slot resolved from the linked program.
    pub location: u32,
    /// Components per vertex.
    pub components: i32,
}

/// Create a buffer and upload `data` into it.
pub fn make_buffer(gl: &GL, desc: &AttribDesc) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl
        .create_buffer()
        .ok_or_else(|| js_err("failed to create buffer"))?;
    gl.bind_buffer(desc.buffer_kind, Some(&buffer));
    // The view aliases wasm linear memory; nothing may allocate while it
    // is live.
    unsafe {
        let view = Float32Array::view(desc.data);
        gl.buffer_data_with_array_buffer_view(desc.buffer_kind, &view, desc.usage);
    }
    Ok(buffer)
}

fn bind_attrib(gl: &GL, buffer: &WebGlBuffer, desc: &AttribDesc) {
    gl.bind_buffer(desc.buffer_kind, Some(buffer));
    gl.enable_vertex_attrib_array(desc.location);
    // Tightly packed: stride 0, no normalization, no offset.
    gl.vertex_attrib_pointer_with_i32(desc.location, desc.components, desc.attrib_type, false, 0, 0);
    gl.bind_buffer(desc.buffer_kind, None);
}

/// Build a vertex array from attribute descriptors, one buffer per
/// descriptor. Index buffers (element-array kind) are uploaded but not
/// attribute-bound. Returns the vertex array together with the buffers it
/// references so the caller keeps them alive.
pub fn make_vao(
    gl: &GL,
    attribs: &[AttribDesc],
) -> Result<(WebGlVertexArrayObject, Vec<WebGlBuffer>), JsValue> {
    let vao = gl
        .create_vertex_array()
        .ok_or_else(|| js_err("failed to create vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let mut buffers = Vec::with_capacity(attribs.len());
    for desc in attribs {
        let buffer = make_buffer(gl, desc)?;
        if desc.buffer_kind != GL::ELEMENT_ARRAY_BUFFER {
            bind_attrib(gl, &buffer, desc);
        }
        buffers.push(buffer);
    }

    gl.bind_vertex_array(None);
    Ok((vao, buffers))
}
