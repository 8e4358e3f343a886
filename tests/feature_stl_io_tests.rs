#![cfg(feature = "stl-io")]

use vmf_mesh::io::{self, Format, stl};
use vmf_mesh::{ImportOptions, Level, import_str};

mod support;

use crate::support::{box_solid, map_with_solids};

fn two_boxes() -> Level {
    let source = map_with_solids(&[
        box_solid(2, [0, 0, 0], [64, 64, 64]),
        box_solid(3, [128, 0, 0], [192, 32, 16]),
    ]);
    import_str(&source, "boxes.vmf", &ImportOptions::default()).expect("map should import")
}

#[test]
fn ascii_stl_lists_every_triangle() {
    let level = two_boxes();
    let text = level.to_stl_ascii("boxes");

    assert!(text.starts_with("solid boxes\n"));
    assert!(text.trim_end().ends_with("endsolid boxes"));
    assert_eq!(text.matches("facet normal").count(), 24);
    assert_eq!(text.matches("vertex ").count(), 72);
    assert_eq!(stl::triangle_count(&level), 24);
}

#[test]
fn binary_stl_has_fixed_layout() {
    let level = two_boxes();
    let bytes = level.worlds[0].brushes[0].to_stl_binary("cube").unwrap();

    // 80 byte header, triangle count, 50 bytes per triangle
    assert_eq!(bytes.len(), 84 + 50 * 12);
    assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 12);
}

#[test]
fn binary_stl_reads_back() {
    let level = two_boxes();
    let bytes = level.to_stl_binary("boxes").unwrap();

    let mut cursor = std::io::Cursor::new(bytes);
    let reader = stl_io::create_stl_reader(&mut cursor).unwrap();

    let mut count = 0;
    for triangle in reader {
        let triangle = triangle.unwrap();
        let n = triangle.normal;
        let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((length - 1.0).abs() < 1e-5);
        assert!(triangle.vertices.iter().all(|v| (-1.0..=193.0).contains(&v[0])));
        count += 1;
    }
    assert_eq!(count, 24);
}

#[test]
fn save_writes_the_requested_format() -> Result<(), Box<dyn std::error::Error>> {
    let level = two_boxes();
    let dir = tempfile::tempdir()?;

    let binary = dir.path().join("boxes.stl");
    io::save(&level, "boxes", &binary, Format::from_path(&binary, false)?)?;
    assert_eq!(std::fs::metadata(&binary)?.len(), 84 + 50 * 24);

    let ascii = dir.path().join("boxes_ascii.stl");
    io::save(&level, "boxes", &ascii, Format::from_path(&ascii, true)?)?;
    assert!(std::fs::read_to_string(&ascii)?.starts_with("solid boxes"));
    Ok(())
}
