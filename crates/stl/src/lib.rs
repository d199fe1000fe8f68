//! Reading and writing STL triangle meshes in both the ASCII and binary encodings.
//!
//! Readers produce any [`TriangleMesh`]; the default [`stlkit_mesh::VertexIndex`] collapses
//! the per-facet vertex copies STL stores into a shared point list. Writers take a
//! [`MeshData`] and refuse anything STL cannot represent.

mod ascii;
mod binary;
mod error;
mod writer;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom};
use std::path::Path;

use stlkit_mesh::{MeshData, TriangleMesh};

pub use error::*;
pub use writer::{StlFormat, StlWriter, WriteOptions};

/// ASCII files begin with this keyword; anything else is treated as binary.
const ASCII_MAGIC: &[u8] = b"solid";

/// Peeks at the start of `f` to decide which encoding it holds.
///
/// The stream is left positioned at its start either way. Only a prefix of at most five
/// bytes is examined, so binary input without any newline is fine.
pub fn detect_format<T: Read + Seek>(f: &mut T) -> StlResult<StlFormat> {
    f.seek(SeekFrom::Start(0))?;
    let mut magic = Vec::with_capacity(ASCII_MAGIC.len());
    f.by_ref()
        .take(ASCII_MAGIC.len() as u64)
        .read_to_end(&mut magic)?;
    f.seek(SeekFrom::Start(0))?;

    if magic.is_empty() {
        return Err(StlError::Format("input is empty".into()));
    }
    let format = if magic == ASCII_MAGIC {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    };
    log::debug!("detected {:?} STL", format);
    Ok(format)
}

fn read_any<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> StlResult<M> {
    match detect_format(f)? {
        StlFormat::Ascii => ascii::read_ascii(BufReader::new(f)),
        StlFormat::Binary => binary::read_binary(f),
    }
}

/// Reads an STL file, detecting its encoding.
///
/// The file is closed before returning, whether or not parsing succeeded.
pub fn read_stl<M: TriangleMesh, P: AsRef<Path>>(p: P) -> StlResult<M> {
    let mut f = BufReader::new(File::open(p)?);
    read_any(&mut f)
}

/// Parses an in-memory STL, detecting its encoding.
pub fn parse_stl<M: TriangleMesh>(data: &[u8]) -> StlResult<M> {
    let mut c = std::io::Cursor::new(data);
    read_any(&mut c)
}

/// Writes `mesh` to a new file at `p`, replacing any existing file.
///
/// Validation happens before the file is created, so an unsupported mesh leaves the
/// filesystem untouched.
pub fn write_stl<P: AsRef<Path>>(p: P, mesh: &MeshData, options: &WriteOptions) -> StlResult<()> {
    let triangles = writer::resolve_triangles(mesh)?;
    let mut f = BufWriter::new(File::create(p)?);
    writer::write_triangles(&mut f, &triangles, options)?;
    f.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(())
}

/// Reads STL from any seekable stream positioned at the start of the data.
pub trait StlReader: Read {
    fn read_stl<M: TriangleMesh>(&mut self) -> StlResult<M>;
}

impl<T: Read + Seek> StlReader for T {
    fn read_stl<M: TriangleMesh>(&mut self) -> StlResult<M> {
        read_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stlkit_mesh::DefaultMesh;

    #[test]
    fn detect_ascii() {
        let mut c = Cursor::new(b"solid cube\nendsolid cube\n".to_vec());
        assert_eq!(StlFormat::Ascii, detect_format(&mut c).unwrap());
        assert_eq!(0, c.position());
    }

    #[test]
    fn detect_binary_without_newline() {
        let mut c = Cursor::new(vec![7u8; 3]);
        assert_eq!(StlFormat::Binary, detect_format(&mut c).unwrap());
        assert_eq!(0, c.position());
    }

    #[test]
    fn detect_empty() {
        let err = detect_format(&mut Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, StlError::Format(_)));
        assert!(matches!(parse_stl::<DefaultMesh>(b""), Err(StlError::Format(_))));
    }

    #[test]
    fn create_stl_mesh() {
        let mesh = parse_stl::<DefaultMesh>(stlkit_test_data::STL_CUBE.bytes).unwrap();
        assert_eq!(12, mesh.triangle_count());
    }
}
