use cgmath::InnerSpace;

pub type Vector3 = cgmath::Vector3<f64>;

/// A single raw facet: three points in the winding order they were read or supplied in.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn points(&self) -> [Vector3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Computes the unit normal of this triangle from its winding order.
    ///
    /// The normal is `normalize((p1 - p0) x (p2 - p0))`. For degenerate triangles
    /// (repeated or collinear points) the cross product has no length and the zero
    /// vector is returned instead. The same applies when the cross product is not
    /// finite. STL requires a normal record for every facet, so writers emit the zero
    /// vector as-is.
    pub fn normal(&self) -> Vector3 {
        let n = (self.p1 - self.p0).cross(self.p2 - self.p0);
        let len = n.magnitude();
        if len > 0.0 && len.is_finite() {
            n / len
        } else {
            Vector3::new(0.0, 0.0, 0.0)
        }
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        let origin = Vector3::new(0.0, 0.0, 0.0);
        Self {
            p0: origin,
            p1: origin,
            p2: origin,
        }
    }
}
