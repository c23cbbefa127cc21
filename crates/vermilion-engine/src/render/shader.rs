//! Shader pipeline setup.
//!
//! Sources are read from disk in full before any compilation is attempted,
//! compiled per stage, and linked into a single program. Driver diagnostics
//! from failed compiles and links are carried in the error so the caller can
//! log them verbatim. There is no caching, no hot-reload and no variants.

use std::path::{Path, PathBuf};

use glow::HasContext;
use thiserror::Error;

/// Pipeline stage of a shader source.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Shader pipeline failures. All of them are fatal to startup.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("could not read shader file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader file {path} is empty")]
    Empty { path: PathBuf },

    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program linking failed:\n{log}")]
    Link { log: String },

    #[error("driver refused to allocate a shader object: {0}")]
    Allocate(String),
}

/// Reads a whole shader source file.
///
/// A missing or empty file is an error; callers load every stage before
/// compiling any of them, so a bad path never reaches the compiler.
pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if source.is_empty() {
        return Err(ShaderError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(source)
}

/// Compiles a single shader stage, preserving the driver's info log on
/// failure.
pub fn compile(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl.create_shader(stage.gl_type()).map_err(ShaderError::Allocate)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile {
                stage: stage.label(),
                log,
            });
        }

        Ok(shader)
    }
}

/// Compiles both stages and links them into one program.
///
/// The intermediate shader objects are detached and deleted as soon as the
/// link result is known, success or not.
pub fn link_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    let vertex = compile(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile(gl, ShaderStage::Fragment, fragment_src) {
        Ok(shader) => shader,
        Err(e) => {
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };

    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(ShaderError::Allocate(e));
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("vermilion-shader-test-{name}"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_source_reads_contents() {
        let path = temp_file("ok.glsl", "void main() {}\n");
        let source = load_source(&path).unwrap();
        assert_eq!(source, "void main() {}\n");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_source_missing_file_is_read_error() {
        let path = PathBuf::from("definitely-not-here.glsl");
        assert!(matches!(
            load_source(&path),
            Err(ShaderError::Read { .. })
        ));
    }

    #[test]
    fn load_source_empty_file_is_rejected() {
        let path = temp_file("empty.glsl", "");
        assert!(matches!(load_source(&path), Err(ShaderError::Empty { .. })));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn stage_maps_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Vertex.label(), "vertex");
        assert_eq!(ShaderStage::Fragment.label(), "fragment");
    }

    #[test]
    fn compile_error_display_carries_driver_log() {
        let err = ShaderError::Compile {
            stage: "fragment",
            log: "0:3: 'vec5' : no such type".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("no such type"));
    }
}
