pub struct TestModel {
    pub bytes: &'static [u8],
    pub triangle_count: usize,
    pub vertex_count: usize,
}

/// A 20mm cube with one corner at the origin, in binary encoding.
pub const STL_CUBE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-bin.stl"),
    triangle_count: 12,
    vertex_count: 8,
};

/// The same cube as `STL_CUBE`, with identical facet order, in ASCII encoding.
pub const STL_CUBE_ASCII: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-ascii.stl"),
    triangle_count: 12,
    vertex_count: 8,
};
