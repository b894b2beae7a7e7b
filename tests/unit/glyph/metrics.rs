use super::*;

fn mapper(height: u32) -> CoordinateMapper {
    CoordinateMapper::new(4.0, 50.0, 100.0, height).unwrap()
}

#[test]
fn single_pixel_metrics() {
    // One pixel at (0, 0) in a 2x2 image: span 1 pixel + 1 slack = 2
    // pixels of advance plus a bearing on each side.
    let m = mapper(2);
    let metrics = compute_metrics(&[Pixel::new(0, 0)], &m, 2, 50.0);
    assert_eq!(metrics.advance_width, 2.0 * 4.0 + 100.0);
    assert_eq!(metrics.bounds, Rect::new(50.0, 104.0, 54.0, 108.0));
}

#[test]
fn bounds_cover_the_pixel_span_with_the_flip() {
    let m = mapper(4);
    let pixels = [Pixel::new(1, 0), Pixel::new(2, 3)];
    let metrics = compute_metrics(&pixels, &m, 4, 50.0);
    // x spans pixels 1..=2; y spans rows 0..=3, flipped to rows 0..=3
    // bottom-up.
    assert_eq!(metrics.bounds.x0, 1.0 * 4.0 + 50.0);
    assert_eq!(metrics.bounds.x1, 3.0 * 4.0 + 50.0);
    assert_eq!(metrics.bounds.y0, 100.0);
    assert_eq!(metrics.bounds.y1, 4.0 * 4.0 + 100.0);
}

#[test]
fn empty_union_falls_back_to_the_scaled_image_extent() {
    let m = mapper(2);
    let metrics = compute_metrics(&[], &m, 3, 50.0);
    assert_eq!(metrics.advance_width, 3.0 * 4.0 + 100.0);
    assert_eq!(metrics.bounds, Rect::new(50.0, 100.0, 62.0, 108.0));
}

#[test]
fn growing_the_pixel_span_grows_bounds_and_advance() {
    let m = mapper(8);
    let base = compute_metrics(&[Pixel::new(2, 2), Pixel::new(3, 3)], &m, 8, 50.0);

    let wider = compute_metrics(
        &[Pixel::new(2, 2), Pixel::new(3, 3), Pixel::new(6, 3)],
        &m,
        8,
        50.0,
    );
    assert!(wider.advance_width > base.advance_width);
    assert!(wider.bounds.x1 > base.bounds.x1);

    let taller = compute_metrics(
        &[Pixel::new(2, 2), Pixel::new(3, 3), Pixel::new(3, 7)],
        &m,
        8,
        50.0,
    );
    // A lower raster row extends the box downward in font space; the
    // advance only tracks the horizontal span.
    assert!(taller.bounds.y0 < base.bounds.y0);
    assert_eq!(taller.advance_width, base.advance_width);
}

#[test]
fn interior_pixels_do_not_change_metrics() {
    let m = mapper(8);
    let corners = [Pixel::new(1, 1), Pixel::new(6, 6)];
    let with_interior = [Pixel::new(1, 1), Pixel::new(6, 6), Pixel::new(3, 4)];
    assert_eq!(
        compute_metrics(&corners, &m, 8, 50.0),
        compute_metrics(&with_interior, &m, 8, 50.0)
    );
}
