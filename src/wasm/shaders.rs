//! Inline GLSL for the point pipeline.
//!
//! The vertex stage displaces each spiral point with 2D simplex noise.
//! `noiseX` feeds back into the seed of the second sample, so the y
//! displacement shears along the x displacement instead of tracking it.
//! Point size follows the y sample, and the fragment stage just maps
//! clip-space position into color.

/// 2D simplex noise, Ian McEwan / Ashima Arts (public domain port).
pub const SNOISE_2D: &str = r#"
vec3 mod289(vec3 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec2 mod289(vec2 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec3 permute(vec3 x) { return mod289(((x * 34.0) + 1.0) * x); }

float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod289(i);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 ox = floor(x + 0.5);
    vec3 a0 = x - ox;
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}
"#;

/// Vertex shader with the noise function spliced in above `main`.
pub fn vertex_source() -> String {
    format!(
        r#"#version 300 es

uniform float u_time;
uniform float u_timeOffset;

in vec2 a_position;

out vec4 v_position;

{snoise}

void main() {{
    float noiseX = snoise(a_position * 0.5 + u_time * 0.5) * 0.3;
    float noiseY = snoise(a_position * noiseX * 2.5 + u_time * 0.5) * 0.3;
    gl_Position = vec4(a_position + vec2(noiseX, noiseY), 0.0, 1.0);
    gl_PointSize = noiseY * 5.0 + 2.0;

    v_position = gl_Position;
}}
"#,
        snoise = SNOISE_2D
    )
}

pub const FRAGMENT: &str = r#"#version 300 es
precision highp float;

in vec4 v_position;

out vec4 outColor;

void main() {
    outColor = vec4(v_position.xyz + 0.5, 1.0);
}
"#;
