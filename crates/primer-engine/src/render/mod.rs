//! GPU resources and drawing.
//!
//! Resources are acquired once at startup and released in exact reverse
//! order at shutdown. Every lifecycle step ends with a driver error query;
//! any error is returned as a fatal `GlError`.

mod mesh;
mod resources;
mod shader;
mod triangle;
mod vertex;

pub use mesh::Mesh;
pub use resources::GpuResources;
pub use shader::{ShaderProgram, FRAGMENT_SHADER_SRC, VERTEX_SHADER_SRC};
pub use triangle::Triangle;
pub use vertex::{Vertex, TRIANGLE};
