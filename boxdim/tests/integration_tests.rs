//! Integration tests for the public `boxdim` API.

use boxdim::{BoxError, BoxFormat, Cuboid, CuboidCatalog, CuboidRecord, UnitOfMeasure};
use std::io::Write;
use tempfile::NamedTempFile;

// ==================== Helper Functions ====================

fn write_catalog(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

// ==================== Tests ====================

#[test]
fn same_box_in_three_units() {
    let m = Cuboid::new(1.2, 0.8, 0.45, UnitOfMeasure::Meter).unwrap();
    let cm = Cuboid::new(120.0, 80.0, 45.0, UnitOfMeasure::Centimeter).unwrap();
    let mm = Cuboid::new(1200.0, 800.0, 450.0, UnitOfMeasure::Millimeter).unwrap();

    assert_eq!(cm, mm);
    for cuboid in [m, cm, mm] {
        assert_eq!(cuboid.to_string(), "1.200 m × 0.800 m × 0.450 m");
        assert_eq!(
            cuboid.format(BoxFormat::Centimeters),
            "120.0 cm × 80.0 cm × 45.0 cm"
        );
        assert_eq!(
            cuboid.format(BoxFormat::Millimeters),
            "1200 mm × 800 mm × 450 mm"
        );
    }
}

#[test]
fn format_selector_is_parsed_once() {
    let cuboid = Cuboid::with_two(30.0, 40.0, UnitOfMeasure::Centimeter).unwrap();
    let format: BoxFormat = "mm".parse().unwrap();
    assert_eq!(cuboid.format(format), "300 mm × 400 mm × 100 mm");
    assert!(matches!(
        "inch".parse::<BoxFormat>(),
        Err(BoxError::UnsupportedFormat(s)) if s == "inch"
    ));
}

#[test]
fn tuple_boxes_are_millimeters() {
    let cuboid: Cuboid = (5.0, 6.0, 7.0).try_into().unwrap();
    assert_eq!(cuboid.to_string(), "0.005 m × 0.006 m × 0.007 m");
    assert_eq!(<[f64; 3]>::from(cuboid), [5.0, 6.0, 7.0]);
}

#[test]
fn catalog_file_loads_and_validates() {
    let file = write_catalog(
        r#"
[[boxes]]
a = 600
b = 400
c = 300
unit = "mm"

[[boxes]]
a = 60
b = 40
c = 30
unit = "centimetre"

[[boxes]]
a = 0.6
b = 0.4
c = 0.3
"#,
    );

    let cuboids = CuboidCatalog::from_file(file.path())
        .unwrap()
        .cuboids()
        .unwrap();
    assert_eq!(cuboids.len(), 3);
    assert_eq!(cuboids[0], cuboids[1]);
    assert_eq!(cuboids[1], cuboids[2]);
    assert_eq!(cuboids[1].unit(), UnitOfMeasure::Centimeter);
}

#[test]
fn catalog_with_oversized_box_is_rejected() {
    let file = write_catalog("[[boxes]]\na = 1001\nb = 1\nc = 1\nunit = \"cm\"\n");
    let catalog = CuboidCatalog::from_file(file.path()).unwrap();
    let err = catalog.cuboids().unwrap_err();
    assert_eq!(
        err,
        BoxError::out_of_range(1001.0, 1.0, 1.0, UnitOfMeasure::Centimeter)
    );
}

#[test]
fn record_round_trips_through_cuboid() {
    let record = CuboidRecord {
        a: 250.0,
        b: 120.0,
        c: 80.0,
        unit: UnitOfMeasure::Millimeter,
    };
    let cuboid = Cuboid::try_from(record).unwrap();
    assert_eq!(CuboidRecord::from(cuboid), record);
}

#[test]
fn boxes_are_shareable_across_threads() {
    let cuboid = Cuboid::in_meters(1.0, 2.0, 3.0).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || cuboid.iter().sum::<f64>()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6.0);
    }
}
