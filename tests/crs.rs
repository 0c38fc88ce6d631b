use survey_reduction::crs::{GeoPoint, GridCrs};

#[test]
fn round_trip_is_identity_within_tolerance() {
    let grid = GridCrs::default();
    let geo = GeoPoint::new(48.2082, 16.3738);
    let planar = grid.to_planar(geo).unwrap();
    let back = grid.to_geo(planar).unwrap();
    assert!((back.latitude - geo.latitude).abs() < 1e-6);
    assert!((back.longitude - geo.longitude).abs() < 1e-6);
}

#[test]
fn planar_axes_are_swapped_and_scaled() {
    let grid = GridCrs::default();
    // Inside the grid zone, a little east of the central meridian.
    let planar = grid.to_planar(GeoPoint::new(48.2082, 16.3738)).unwrap();
    // x carries the northing: ~340 km above the false origin, in tens of meters
    assert!(planar.x > 32_000.0 && planar.x < 36_000.0, "x = {}", planar.x);
    // y carries the easting: near the 450 km false easting, in tens of meters
    assert!(planar.y > 44_000.0 && planar.y < 46_500.0, "y = {}", planar.y);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    let grid = GridCrs::default();
    grid.save(path.to_str().unwrap()).unwrap();
    let loaded = GridCrs::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded, grid);
}
