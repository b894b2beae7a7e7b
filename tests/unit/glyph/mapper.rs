use super::*;

#[test]
fn rejects_non_positive_parameters() {
    assert!(CoordinateMapper::new(0.0, 0.0, 0.0, 2).is_err());
    assert!(CoordinateMapper::new(-4.0, 0.0, 0.0, 2).is_err());
    assert!(CoordinateMapper::new(f64::NAN, 0.0, 0.0, 2).is_err());
    assert!(CoordinateMapper::new(4.0, 0.0, 0.0, 0).is_err());
    assert!(CoordinateMapper::new(4.0, 0.0, 0.0, 2).is_ok());
}

#[test]
fn maps_with_vertical_flip() {
    // 2x2 image, scale 4, offsets (50, 100): pixel (0, 0) sits on the top
    // raster row, which is the *upper* font row after the flip.
    let mapper = CoordinateMapper::new(4.0, 50.0, 100.0, 2).unwrap();
    let rect = mapper.map(0, 0);
    assert_eq!(rect, Rect::new(50.0, 104.0, 54.0, 108.0));

    let rect = mapper.map(0, 1);
    assert_eq!(rect, Rect::new(50.0, 100.0, 54.0, 104.0));
}

#[test]
fn map_is_pure_and_repeatable() {
    let mapper = CoordinateMapper::new(3.0, 12.0, -7.0, 9).unwrap();
    for (x, y) in [(0, 0), (3, 5), (8, 8)] {
        let a = mapper.map(x, y);
        let b = mapper.map(x, y);
        assert_eq!(a.x0.to_bits(), b.x0.to_bits());
        assert_eq!(a.y0.to_bits(), b.y0.to_bits());
        assert_eq!(a.x1.to_bits(), b.x1.to_bits());
        assert_eq!(a.y1.to_bits(), b.y1.to_bits());
    }
}

#[test]
fn two_mappers_with_equal_parameters_agree() {
    let a = CoordinateMapper::new(4.0, 50.0, 100.0, 16).unwrap();
    let b = CoordinateMapper::new(4.0, 50.0, 100.0, 16).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.map(7, 11), b.map(7, 11));
}

#[test]
fn left_bottom_recover_the_pixel_coordinate() {
    let mapper = CoordinateMapper::new(4.0, 50.0, 100.0, 16).unwrap();
    for (x, y) in [(0u32, 0u32), (5, 2), (15, 15)] {
        let rect = mapper.map(x, y);
        let rx = (rect.x0 - mapper.x_offset()) / mapper.scale_factor();
        let ry = (rect.y0 - mapper.y_offset()) / mapper.scale_factor();
        assert_eq!(rx, f64::from(x));
        assert_eq!(ry, f64::from(mapper.flip_y(y)));
    }
}

#[test]
#[should_panic(expected = "outside image height")]
fn row_beyond_image_height_panics_in_debug() {
    let mapper = CoordinateMapper::new(4.0, 0.0, 0.0, 2).unwrap();
    mapper.map(0, 2);
}

#[test]
fn rect_spans_exactly_one_scale_unit() {
    let mapper = CoordinateMapper::new(2.5, 0.0, 0.0, 4).unwrap();
    let rect = mapper.map(1, 1);
    assert_eq!(rect.width(), 2.5);
    assert_eq!(rect.height(), 2.5);
}
