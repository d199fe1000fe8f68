use std::collections::BTreeMap;

use crate::geometry::Vector3;
use crate::vertex_index::VertexIndex;

/// The kinds of cells a general-purpose mesh container may hold.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub enum CellType {
    Vertex,
    Line,
    Triangle,
    Quad,
    Tetra,
    Hexahedron,
    Wedge,
    Pyramid,
}

impl CellType {
    pub fn name(&self) -> &'static str {
        match self {
            CellType::Vertex => "vertex",
            CellType::Line => "line",
            CellType::Triangle => "triangle",
            CellType::Quad => "quad",
            CellType::Tetra => "tetra",
            CellType::Hexahedron => "hexahedron",
            CellType::Wedge => "wedge",
            CellType::Pyramid => "pyramid",
        }
    }

    pub fn nodes_per_cell(&self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Quad => 4,
            CellType::Tetra => 4,
            CellType::Hexahedron => 8,
            CellType::Wedge => 6,
            CellType::Pyramid => 5,
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A homogeneous run of cells with flat connectivity, `nodes_per_cell` indices per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBlock {
    pub cell_type: CellType,
    pub connectivity: Vec<u32>,
}

impl CellBlock {
    pub fn new(cell_type: CellType, connectivity: Vec<u32>) -> Self {
        Self {
            cell_type,
            connectivity,
        }
    }

    pub fn triangles(connectivity: Vec<u32>) -> Self {
        Self::new(CellType::Triangle, connectivity)
    }
}

/// Named auxiliary arrays attached to a mesh.
pub type DataMap = BTreeMap<String, Vec<f64>>;

/// A general mesh description: points, typed cell blocks, and auxiliary data.
///
/// This is wider than what many formats can carry. Writers for narrower formats are
/// expected to check what they are given and refuse what they cannot represent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeshData {
    pub points: Vec<Vector3>,
    pub cells: Vec<CellBlock>,
    pub point_data: DataMap,
    pub cell_data: DataMap,
    pub field_data: DataMap,
}

impl MeshData {
    pub fn new(points: Vec<Vector3>, cells: Vec<CellBlock>) -> Self {
        Self {
            points,
            cells,
            ..Default::default()
        }
    }
}

impl From<&VertexIndex> for MeshData {
    fn from(mesh: &VertexIndex) -> Self {
        let connectivity = mesh.faces().iter().flat_map(|f| f.indices()).collect();
        MeshData::new(
            mesh.points().to_vec(),
            vec![CellBlock::triangles(connectivity)],
        )
    }
}

impl From<VertexIndex> for MeshData {
    fn from(mesh: VertexIndex) -> Self {
        let (points, faces) = mesh.into_parts();
        let connectivity = faces.iter().flat_map(|f| f.indices()).collect();
        MeshData::new(points, vec![CellBlock::triangles(connectivity)])
    }
}
