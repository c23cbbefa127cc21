use anyhow::{Context as _, Error, Result};
use glow::HasContext;

use super::geometry::{self, Vertex};
use super::shader;

/// Renderer for the one static circle this program exists to show.
///
/// Owns the linked shader program and the fan mesh's vertex array/buffer.
/// All three handles are created once in [`CircleRenderer::new`], used
/// unchanged every frame, and released once in [`CircleRenderer::destroy`].
pub struct CircleRenderer {
    program: glow::Program,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

impl CircleRenderer {
    /// Compiles and links the shader pair, generates the fan mesh and
    /// uploads it to a static vertex buffer.
    pub fn new(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        let program = shader::link_program(gl, vertex_src, fragment_src)?;
        let vertices = geometry::circle_fan(geometry::CIRCLE_SEGMENTS);

        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(Error::msg)
                .context("failed to create vertex array")?;
            let vbo = gl
                .create_buffer()
                .map_err(Error::msg)
                .context("failed to create vertex buffer")?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&vertices),
                glow::STATIC_DRAW,
            );

            // Attribute 0: vec2 position, tightly packed.
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, Vertex::STRIDE, 0);
            gl.enable_vertex_attrib_array(0);
            gl.bind_vertex_array(None);

            Ok(Self {
                program,
                vao,
                vbo,
                vertex_count: vertices.len() as i32,
            })
        }
    }

    /// Number of vertices covered by the draw call.
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Clears the color buffer to opaque black and issues the single
    /// triangle-fan draw call covering the whole mesh.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(self.program));
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLE_FAN, 0, self.vertex_count);
        }
    }

    /// Releases the vertex array, vertex buffer and program.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_program(self.program);
        }
    }
}
