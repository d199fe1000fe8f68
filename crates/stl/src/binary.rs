//! Binary STL.
//!
//! ```text
//! UINT8[80]    - header, no defined structure
//! UINT32       - number of triangles
//! foreach triangle
//!     REAL32[3] - normal vector
//!     REAL32[3] - vertex 1
//!     REAL32[3] - vertex 2
//!     REAL32[3] - vertex 3
//!     UINT16    - attribute byte count
//! end
//! ```
//!
//! All values are little-endian and records are packed with no padding.

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use stlkit_mesh::{Triangle, TriangleMesh, Vector3};

use crate::error::{ParseError, StlError, StlResult};

pub(crate) const HEADER_SIZE: u64 = 80;
pub(crate) const TRIANGLE_SIZE: u64 = 50;

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    // Binary STL stores single precision; widen to the mesh's double precision.
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()?.into(),
        y: f.read_f32::<LittleEndian>()?.into(),
        z: f.read_f32::<LittleEndian>()?.into(),
    })
}

fn write_vector<W: Write>(w: &mut W, v: &Vector3) -> std::io::Result<()> {
    w.write_f32::<LittleEndian>(v.x as f32)?;
    w.write_f32::<LittleEndian>(v.y as f32)?;
    w.write_f32::<LittleEndian>(v.z as f32)
}

/// Reads a binary STL from the start of `f`.
///
/// The stream length is checked against the triangle count before any triangle is read,
/// so a truncated file fails without allocating for the bogus count.
pub(crate) fn read_binary<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> StlResult<M> {
    let len = f.seek(SeekFrom::End(0))?;
    if len < HEADER_SIZE + 4 {
        return Err(ParseError::Truncated {
            expected: HEADER_SIZE + 4,
            actual: len,
        }
        .into());
    }

    // Binary files start with an 80 byte header. There is no defined structure for this
    // header but some implementations will stash some metadata in this header. For now
    // we'll just skip the header and load the geometry.
    f.seek(SeekFrom::Start(HEADER_SIZE))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triangles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()?;
    let expected = HEADER_SIZE + 4 + TRIANGLE_SIZE * u64::from(n_triangles);
    if len < expected {
        return Err(ParseError::Truncated {
            expected,
            actual: len,
        }
        .into());
    }
    if len > expected {
        log::warn!(
            "ignoring {} trailing bytes after {} binary STL triangles",
            len - expected,
            n_triangles
        );
    }
    log::debug!("reading {} binary STL triangles", n_triangles);

    let mut data = Vec::<Triangle>::with_capacity(n_triangles as usize);
    for _ in 0..n_triangles {
        // Each triangle is specified by a normal vector followed by 3 vertices of the
        // triangle. The normal is recomputed from the vertices on write, so the stored
        // one is never trusted.
        let _normal = read_vector(f)?;
        data.push(Triangle {
            p0: read_vector(f)?,
            p1: read_vector(f)?,
            p2: read_vector(f)?,
        });
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field, but
        // some applications use this for color data.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    Ok(M::from_triangles(data))
}

/// Pads or truncates `header` to exactly 80 bytes.
pub(crate) fn header_bytes(header: &str) -> StlResult<[u8; HEADER_SIZE as usize]> {
    let mut bytes = [b' '; HEADER_SIZE as usize];
    let text = header.as_bytes();
    let n = text.len().min(bytes.len());
    bytes[..n].copy_from_slice(&text[..n]);
    // Readers route anything starting with `solid` to the text parser.
    if bytes.starts_with(b"solid") {
        return Err(StlError::unsupported(
            "binary STL header must not start with \"solid\"",
        ));
    }
    Ok(bytes)
}

pub(crate) fn write_binary<W: Write>(
    w: &mut W,
    triangles: &[Triangle],
    header: &str,
) -> StlResult<()> {
    let header = header_bytes(header)?;
    let count = u32::try_from(triangles.len()).map_err(|_| {
        StlError::unsupported(format!(
            "{} triangles exceed the binary STL count field",
            triangles.len()
        ))
    })?;

    w.write_all(&header)?;
    w.write_u32::<LittleEndian>(count)?;
    for t in triangles {
        write_vector(w, &t.normal())?;
        write_vector(w, &t.p0)?;
        write_vector(w, &t.p1)?;
        write_vector(w, &t.p2)?;
        w.write_u16::<LittleEndian>(0)?;
    }
    log::debug!("wrote {} binary STL triangles", count);
    Ok(())
}
