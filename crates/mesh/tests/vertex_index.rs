use proptest::prelude::*;
use stlkit_mesh::{Face, Triangle, TriangleMesh, Vector3, VertexIndex};

fn arb_point() -> impl Strategy<Value = Vector3> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|[x, y, z]| Vector3::new(x, y, z))
}

/// Raw facets drawn from a small pool of points so that coordinates repeat.
fn arb_facets() -> impl Strategy<Value = Vec<Triangle>> {
    prop::collection::vec(arb_point(), 1..12).prop_flat_map(|pool| {
        let n = pool.len();
        prop::collection::vec(prop::array::uniform3(0..n), 0..40).prop_map(move |picks| {
            picks
                .into_iter()
                .map(|[a, b, c]| Triangle::new(pool[a], pool[b], pool[c]))
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn faces_reproduce_input(facets in arb_facets()) {
        let mesh = VertexIndex::from_triangles(facets.clone());
        prop_assert_eq!(facets.len(), mesh.triangle_count());
        let rebuilt: Vec<Triangle> = mesh.triangles().collect();
        prop_assert_eq!(facets, rebuilt);
    }

    #[test]
    fn points_are_unique_and_used(facets in arb_facets()) {
        let mesh = VertexIndex::from_triangles(facets);
        let points = mesh.points();
        for (i, p) in points.iter().enumerate() {
            prop_assert!(!points[..i].contains(p));
        }
        let mut used = vec![false; points.len()];
        for f in mesh.faces() {
            for i in f.indices() {
                used[i as usize] = true;
            }
        }
        prop_assert!(used.into_iter().all(|u| u));
    }

    #[test]
    fn indices_appear_in_first_occurrence_order(facets in arb_facets()) {
        let mesh = VertexIndex::from_triangles(facets);
        let mut next = 0;
        for i in mesh.faces().iter().flat_map(|f| f.indices()) {
            prop_assert!(i <= next);
            if i == next {
                next += 1;
            }
        }
        prop_assert_eq!(next as usize, mesh.points().len());
    }

    #[test]
    fn dedup_is_idempotent(facets in arb_facets()) {
        let once = VertexIndex::from_triangles(facets);
        let twice = VertexIndex::from_triangles(once.triangles().collect());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn square_from_two_facets() {
    let a = Vector3::new(0.0, 0.0, 0.0);
    let b = Vector3::new(1.0, 0.0, 0.0);
    let c = Vector3::new(1.0, 1.0, 0.0);
    let d = Vector3::new(0.0, 1.0, 0.0);
    let mesh = <VertexIndex as TriangleMesh>::from_triangles(vec![
        Triangle::new(a, b, c),
        Triangle::new(c, d, a),
    ]);
    assert_eq!(4, mesh.points().len());
    assert_eq!(&[Face::new(0, 1, 2), Face::new(2, 3, 0)], mesh.faces());
    assert_eq!(None, mesh.as_triangle_slice());
}
