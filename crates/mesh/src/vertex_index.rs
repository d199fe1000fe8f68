use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::geometry::{Triangle, Vector3};
use crate::TriangleMesh;

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector. We do this so we can store each vertex as 4 bytes instead of the 24 bytes
/// required to store the entire Vector3. This has further savings if a vertex is reused.
///
/// As a simple example, consider a simple geometry such as:
///
///    *-------*
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   *   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    *-------*
///
/// Here we have 5 points and 4 facets. If we would store every facet as a series of points
/// we would need:
///    3 floats * 8b * 3 points * 4 facets = 288 bytes.
///
/// If instead we store:
///    3 floats * 8b * 5 points  = 120b
///  + 3 indices * 4b * 4 facets =  48b
///                              =======
///                               168b
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Face {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Face {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl From<[u32; 3]> for Face {
    fn from([p0, p1, p2]: [u32; 3]) -> Self {
        Self { p0, p1, p2 }
    }
}

/// Exact-equality key for a point. Floats are not hash nor eq, so we go through
/// ordered-float. `-0.0` and `0.0` share a key, as do all NaNs.
type PointKey = [OrderedFloat<f64>; 3];

fn point_key(p: &Vector3) -> PointKey {
    [OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z)]
}

/// A deduplicated triangle mesh: unique points plus faces indexing into them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexIndex {
    points: Vec<Vector3>,
    faces: Vec<Face>,
}

impl VertexIndex {
    /// Creates a mesh from points and faces that are already indexed.
    ///
    /// No deduplication or index validation happens here; writers validate indices before
    /// emitting anything.
    pub fn new(points: Vec<Vector3>, faces: Vec<Face>) -> Self {
        Self { points, faces }
    }

    /// Collapses repeated vertex coordinates across `triangles` into a shared point list.
    ///
    /// Points are compared by exact coordinate equality; no tolerance is applied, so two
    /// points that differ in the last bit stay distinct. The point list is ordered by first
    /// occurrence in the flattened `p0, p1, p2` stream and faces keep the input order, so
    /// the output is fully determined by the input sequence.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let mut lookup: HashMap<PointKey, u32> = HashMap::with_capacity(triangles.len());
        let mut points = Vec::new();

        let mut index_of = |p: Vector3| -> u32 {
            *lookup.entry(point_key(&p)).or_insert_with(|| {
                points.push(p);
                (points.len() - 1) as u32
            })
        };

        let faces: Vec<Face> = triangles
            .iter()
            .map(|t| Face {
                p0: index_of(t.p0),
                p1: index_of(t.p1),
                p2: index_of(t.p2),
            })
            .collect();

        log::debug!(
            "deduplicated {} facet points into {} vertices",
            faces.len() * 3,
            points.len()
        );
        Self { points, faces }
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Resolves the face at `index` into its three points.
    ///
    /// Returns `None` if the face does not exist or refers to a point out of range.
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let face = self.faces.get(index)?;
        Some(Triangle {
            p0: *self.points.get(face.p0 as usize)?,
            p1: *self.points.get(face.p1 as usize)?,
            p2: *self.points.get(face.p2 as usize)?,
        })
    }

    pub fn into_parts(self) -> (Vec<Vector3>, Vec<Face>) {
        let VertexIndex { points, faces } = self;
        (points, faces)
    }
}

impl TriangleMesh for VertexIndex {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        VertexIndex::from_triangles(triangles)
    }

    fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new((0..self.faces.len()).filter_map(|i| self.triangle(i)))
    }

    fn as_triangle_slice(&self) -> Option<&[Triangle]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn first_occurrence_order() {
        let (a, b, c, d, e) = (
            v(5.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(3.0, 0.0, 0.0),
            v(0.0, 0.0, 0.0),
            v(2.0, 0.0, 0.0),
        );
        let mesh = VertexIndex::from_triangles(vec![
            Triangle::new(a, b, c),
            Triangle::new(b, d, e),
        ]);
        assert_eq!(&[a, b, c, d, e], mesh.points());
        assert_eq!(&[Face::new(0, 1, 2), Face::new(1, 3, 4)], mesh.faces());
    }

    #[test]
    fn duplicate_collapse() {
        let (a, b, c, d) = (
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        let mesh = VertexIndex::from_triangles(vec![
            Triangle::new(a, b, c),
            Triangle::new(a, c, d),
        ]);
        assert_eq!(&[a, b, c, d], mesh.points());
        assert_eq!(&[Face::new(0, 1, 2), Face::new(0, 2, 3)], mesh.faces());
    }

    #[test]
    fn empty_input() {
        let mesh = VertexIndex::from_triangles(Vec::new());
        assert!(mesh.points().is_empty());
        assert!(mesh.faces().is_empty());
    }

    #[test]
    fn degenerate_facets_are_kept() {
        let p = v(1.0, 2.0, 3.0);
        let q = v(4.0, 5.0, 6.0);
        let mesh = VertexIndex::from_triangles(vec![Triangle::new(p, p, q)]);
        assert_eq!(&[p, q], mesh.points());
        assert_eq!(&[Face::new(0, 0, 1)], mesh.faces());
    }

    #[test]
    fn no_tolerance_applied() {
        let p = v(1.0, 0.0, 0.0);
        let q = v(1.0 + f64::EPSILON, 0.0, 0.0);
        let r = v(0.0, 1.0, 0.0);
        let mesh = VertexIndex::from_triangles(vec![Triangle::new(p, q, r)]);
        assert_eq!(3, mesh.points().len());
    }

    #[test]
    fn signed_zero_shares_a_vertex() {
        let mesh = VertexIndex::from_triangles(vec![Triangle::new(
            v(0.0, 0.0, 0.0),
            v(-0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
        )]);
        assert_eq!(2, mesh.points().len());
        assert_eq!(&[Face::new(0, 0, 1)], mesh.faces());
    }

    #[test]
    fn triangle_out_of_range() {
        let mesh = VertexIndex::new(vec![v(0.0, 0.0, 0.0)], vec![Face::new(0, 0, 1)]);
        assert_eq!(None, mesh.triangle(0));
        assert_eq!(None, mesh.triangle(1));
    }
}
