mod geometry;
mod mesh_data;
mod vertex_index;

pub use geometry::*;
pub use mesh_data::*;
pub use vertex_index::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = VertexIndex;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of raw triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh, in file order.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;

    /// Iterates the triangles of this mesh in order, with points resolved.
    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_>;

    /// Returns a slice that represents a series of triangles.
    ///
    /// As this is returning a slice, this will only return `Some` if the
    /// implementation already stores the mesh in this format.
    fn as_triangle_slice(&self) -> Option<&[Triangle]>;
}

/// Triangles exactly as they were read, with no shared vertices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TriangleSoup(pub Vec<Triangle>);

impl TriangleMesh for TriangleSoup {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        TriangleSoup(triangles)
    }

    fn triangle_count(&self) -> usize {
        self.0.len()
    }

    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new(self.0.iter().copied())
    }

    fn as_triangle_slice(&self) -> Option<&[Triangle]> {
        Some(&self.0)
    }
}
