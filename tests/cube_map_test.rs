use sky_orbit::data_structures::texture::cube_strip_extent;

#[test]
fn accepts_a_vertical_six_face_strip() {
    let extent = cube_strip_extent(64, 384).expect("64x384 is a valid strip");
    assert_eq!(extent.width, 64);
    assert_eq!(extent.height, 64);
    assert_eq!(extent.depth_or_array_layers, 6);
}

#[test]
fn accepts_a_single_pixel_strip() {
    let extent = cube_strip_extent(1, 6).expect("1x6 is a valid strip");
    assert_eq!(extent.width, 1);
    assert_eq!(extent.depth_or_array_layers, 6);
}

#[test]
fn rejects_a_square_image() {
    assert!(cube_strip_extent(128, 128).is_err());
}

#[test]
fn rejects_a_horizontal_cross_layout() {
    // 4x3 face grid, the other common cube map layout.
    assert!(cube_strip_extent(256, 192).is_err());
}

#[test]
fn rejects_an_empty_image() {
    assert!(cube_strip_extent(0, 0).is_err());
}

#[test]
fn rejects_non_square_faces() {
    assert!(cube_strip_extent(64, 390).is_err());
}
