use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: homogeneous position followed by RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    pub const POSITION_LOCATION: u32 = 0;
    pub const COLOR_LOCATION: u32 = 1;

    /// Byte distance between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Byte offset of `color` inside a vertex record.
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 4]>();

    pub const fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Red, green and blue corners in clip space.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new([-0.8, -0.8, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([0.0, 0.8, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([0.8, -0.8, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
];
