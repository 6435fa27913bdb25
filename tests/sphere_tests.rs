// Panorama sphere geometry.

use tour_core::constants::{SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS};
use tour_core::{SphereMesh, SphericalPosition};

#[test]
fn mesh_sizes_follow_the_segment_counts() {
    let mesh = SphereMesh::inverted(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    let (w, h) = (SPHERE_WIDTH_SEGMENTS as usize, SPHERE_HEIGHT_SEGMENTS as usize);
    assert_eq!(mesh.vertices.len(), (w + 1) * (h + 1));
    // one triangle per segment in each pole row, two elsewhere
    assert_eq!(mesh.indices.len(), w * (2 * h - 2) * 3);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn vertices_lie_on_the_sphere() {
    let mesh = SphereMesh::inverted(SPHERE_RADIUS, 24, 12);
    for v in &mesh.vertices {
        let len = glam::Vec3::from(v.position).length();
        assert!((len - SPHERE_RADIUS).abs() < 1e-2, "len {}", len);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn texture_coordinates_match_hotspot_directions() {
    let mesh = SphereMesh::inverted(1.0, 8, 4);
    // row 2 is the equator, column 2 a quarter turn round
    let v = mesh.vertices[2 * 9 + 2];
    assert_eq!(v.uv, [0.25, 0.5]);
    let expected = SphericalPosition::new(std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2)
        .direction();
    let got = glam::Vec3::from(v.position);
    assert!((got - expected).length() < 1e-5);
}

#[test]
fn tiny_segment_counts_are_raised_to_a_closed_shape() {
    let mesh = SphereMesh::inverted(1.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert!(!mesh.indices.is_empty());
}
