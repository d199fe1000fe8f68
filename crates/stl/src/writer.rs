use std::io::Write;

use stlkit_mesh::{CellType, MeshData, Triangle, VertexIndex};

use crate::error::{StlError, StlResult};
use crate::{ascii, binary};

/// The two STL encodings.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum StlFormat {
    Ascii,
    #[default]
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    pub format: StlFormat,
    /// Text for the 80 byte binary header. Ignored for ASCII output.
    pub header: String,
}

impl WriteOptions {
    pub fn new(format: StlFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            format: StlFormat::Binary,
            header: concat!("Binary STL written by stlkit ", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

fn reject_data(kind: &str, data: &stlkit_mesh::DataMap) -> StlResult<()> {
    match data.keys().next() {
        Some(name) => Err(StlError::unsupported(format!(
            "STL cannot carry {} data (found {:?})",
            kind, name
        ))),
        None => Ok(()),
    }
}

/// Checks that `mesh` holds nothing but triangles and resolves them to points.
///
/// Nothing STL cannot represent is dropped silently: auxiliary data, non-triangle cells,
/// and out-of-range indices are all errors.
pub(crate) fn resolve_triangles(mesh: &MeshData) -> StlResult<Vec<Triangle>> {
    reject_data("point", &mesh.point_data)?;
    reject_data("cell", &mesh.cell_data)?;
    reject_data("field", &mesh.field_data)?;

    let mut triangles = Vec::new();
    for block in &mesh.cells {
        if block.cell_type != CellType::Triangle {
            return Err(StlError::unsupported(format!(
                "STL can only write triangle cells, found {}",
                block.cell_type
            )));
        }
        if block.connectivity.len() % 3 != 0 {
            return Err(StlError::unsupported(format!(
                "triangle connectivity of length {} is not a multiple of 3",
                block.connectivity.len()
            )));
        }

        triangles.reserve(block.connectivity.len() / 3);
        for (face, indices) in block.connectivity.chunks_exact(3).enumerate() {
            let point = |i: u32| {
                mesh.points.get(i as usize).copied().ok_or_else(|| {
                    StlError::unsupported(format!(
                        "triangle {} refers to point {} of {}",
                        face,
                        i,
                        mesh.points.len()
                    ))
                })
            };
            triangles.push(Triangle {
                p0: point(indices[0])?,
                p1: point(indices[1])?,
                p2: point(indices[2])?,
            });
        }
    }
    Ok(triangles)
}

pub(crate) fn write_triangles<W: Write>(
    w: &mut W,
    triangles: &[Triangle],
    options: &WriteOptions,
) -> StlResult<()> {
    match options.format {
        StlFormat::Ascii => ascii::write_ascii(w, triangles),
        StlFormat::Binary => binary::write_binary(w, triangles, &options.header),
    }
}

pub trait StlWriter: Write {
    /// Validates `mesh` and writes it as STL.
    ///
    /// Nothing is written if validation fails.
    fn write_stl(&mut self, mesh: &MeshData, options: &WriteOptions) -> StlResult<()>;

    /// Writes an indexed triangle mesh as STL.
    fn write_mesh(&mut self, mesh: &VertexIndex, options: &WriteOptions) -> StlResult<()>;
}

impl<T: Write> StlWriter for T {
    fn write_stl(&mut self, mesh: &MeshData, options: &WriteOptions) -> StlResult<()> {
        let triangles = resolve_triangles(mesh)?;
        write_triangles(self, &triangles, options)?;
        self.flush()?;
        Ok(())
    }

    fn write_mesh(&mut self, mesh: &VertexIndex, options: &WriteOptions) -> StlResult<()> {
        self.write_stl(&MeshData::from(mesh), options)
    }
}
