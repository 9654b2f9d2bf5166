//! Rendering module
//!
//! Entities draw onto the `Canvas` trait. `VertexCanvas` turns the primitives
//! into triangles which `RenderState` uploads and draws with wgpu.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, VertexCanvas};
pub use pipeline::RenderState;
pub use vertex::Vertex;
