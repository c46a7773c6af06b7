//! WebGPU rendering module
//!
//! Tessellates the read-only `GameState` into colored triangles each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
