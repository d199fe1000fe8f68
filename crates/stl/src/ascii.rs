//! ASCII STL.
//!
//! ```text
//! solid [name]
//!  facet normal ni nj nk
//!    outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!    endloop
//!  endfacet
//! endsolid [name]
//! ```
//!
//! Keywords are case sensitive. Leading and trailing whitespace on a line is not
//! significant.

use std::io::{BufRead, Write};

use stlkit_mesh::{Triangle, TriangleMesh, Vector3};

use crate::error::{ParseError, StlResult};

/// Reads a text stream one line at a time, keeping a 1-based line number for errors.
struct Lines<R> {
    inner: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: Vec::new(),
        }
    }

    fn next_line(&mut self) -> StlResult<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| ParseError::InvalidUtf8 { line: self.line })?;
        Ok(Some(text.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    /// Like `next_line`, but running out of input is an error.
    fn expect_line(&mut self, expected: &'static str) -> StlResult<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(ParseError::UnexpectedEof {
                line: self.line + 1,
                expected,
            }
            .into()),
        }
    }

    /// Consumes a line that must read exactly `keyword` once trimmed.
    fn expect_keyword(&mut self, keyword: &'static str) -> StlResult<()> {
        let line = self.expect_line(keyword)?;
        if line.trim() != keyword {
            return Err(self.syntax(line, keyword));
        }
        Ok(())
    }

    fn syntax(&self, text: String, expected: &'static str) -> crate::StlError {
        ParseError::Syntax {
            line: self.line,
            text,
            expected,
        }
        .into()
    }

    fn parse_coords(&self, coords: &[&str], text: &str) -> StlResult<Vector3> {
        let parse = |s: &str| {
            s.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line: self.line,
                text: text.to_string(),
            })
        };
        Ok(Vector3::new(
            parse(coords[0])?,
            parse(coords[1])?,
            parse(coords[2])?,
        ))
    }

    fn read_vertex(&mut self) -> StlResult<Vector3> {
        const EXPECTED: &str = "vertex x y z";
        let line = self.expect_line(EXPECTED)?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 || parts[0] != "vertex" {
            return Err(self.syntax(line.clone(), EXPECTED));
        }
        self.parse_coords(&parts[1..], &line)
    }
}

/// Reads an ASCII STL, starting at the `solid` line.
///
/// Only the first solid is read; anything after its `endsolid` is left unread.
pub(crate) fn read_ascii<M: TriangleMesh, R: BufRead>(reader: R) -> StlResult<M> {
    const FACET: &str = "facet normal nx ny nz";

    let mut lines = Lines::new(reader);
    let header = lines.expect_line("solid")?;
    if !header.starts_with("solid") {
        return Err(lines.syntax(header, "solid"));
    }

    let mut data = Vec::<Triangle>::new();
    loop {
        let line = lines.expect_line("facet or endsolid")?;
        let trimmed = line.trim();
        if trimmed.starts_with("endsolid") {
            break;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            ["facet"] => (),
            // The stored normal is validated but not kept; it is recomputed on write.
            ["facet", "normal", n @ ..] if n.len() == 3 => {
                let _normal = lines.parse_coords(n, &line)?;
            }
            _ => return Err(lines.syntax(line.clone(), FACET)),
        }

        lines.expect_keyword("outer loop")?;
        let p0 = lines.read_vertex()?;
        let p1 = lines.read_vertex()?;
        let p2 = lines.read_vertex()?;
        lines.expect_keyword("endloop")?;
        lines.expect_keyword("endfacet")?;

        log::trace!("facet ending at line {}", lines.line);
        data.push(Triangle { p0, p1, p2 });
    }

    log::debug!("read {} ASCII STL facets", data.len());
    Ok(M::from_triangles(data))
}

pub(crate) fn write_ascii<W: Write>(w: &mut W, triangles: &[Triangle]) -> StlResult<()> {
    writeln!(w, "solid")?;
    for t in triangles {
        let n = t.normal();
        writeln!(w, " facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(w, "   outer loop")?;
        for p in t.points() {
            writeln!(w, "      vertex {} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(w, "   endloop")?;
        writeln!(w, " endfacet")?;
    }
    writeln!(w, "endsolid")?;
    log::debug!("wrote {} ASCII STL facets", triangles.len());
    Ok(())
}
