use std::fmt;

use anyhow::Context;
use stlkit_mesh::{DefaultMesh, TriangleMesh, Vector3};

use crate::args;

/// Summary of a mesh as printed by `stlkit info`.
#[derive(Debug, PartialEq)]
pub struct MeshInfo {
    pub triangles: usize,
    pub vertices: usize,
    /// Axis-aligned bounds as `(min, max)`, absent for an empty mesh.
    pub bounds: Option<(Vector3, Vector3)>,
}

impl MeshInfo {
    pub fn from_mesh(mesh: &DefaultMesh) -> Self {
        let bounds = mesh.points().iter().fold(None, |acc, p| match acc {
            None => Some((*p, *p)),
            Some((lo, hi)) => Some((
                Vector3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vector3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )),
        });
        Self {
            triangles: mesh.triangle_count(),
            vertices: mesh.points().len(),
            bounds,
        }
    }
}

impl fmt::Display for MeshInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "triangles: {}", self.triangles)?;
        writeln!(f, "vertices:  {}", self.vertices)?;
        match self.bounds {
            Some((lo, hi)) => write!(
                f,
                "bounds:    ({}, {}, {}) - ({}, {}, {})",
                lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
            ),
            None => write!(f, "bounds:    empty"),
        }
    }
}

pub fn info_command(args: args::InfoArgs) -> anyhow::Result<()> {
    let mesh = stlkit_stl::read_stl::<DefaultMesh, _>(&args.stl_path)
        .with_context(|| format!("failed to read {}", args.stl_path))?;
    println!("{}", MeshInfo::from_mesh(&mesh));
    Ok(())
}
