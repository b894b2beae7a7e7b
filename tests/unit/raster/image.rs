use super::*;

const BG: Rgb = Rgb::new(0, 0, 0);
const PURPLE: Rgb = Rgb::new(128, 32, 192);

fn grid(width: u32, height: u32, painted: &[(u32, u32, Rgb)]) -> Vec<Rgb> {
    let mut pixels = vec![BG; width as usize * height as usize];
    for &(x, y, rgb) in painted {
        pixels[y as usize * width as usize + x as usize] = rgb;
    }
    pixels
}

#[test]
fn rejects_zero_dimensions() {
    assert!(RasterImage::new(0, 2, Vec::new()).is_err());
    assert!(RasterImage::new(2, 0, Vec::new()).is_err());
}

#[test]
fn rejects_mismatched_pixel_count() {
    let err = RasterImage::new(2, 2, vec![BG; 3]).unwrap_err();
    assert!(err.to_string().contains("2x2"));
}

#[test]
fn background_defaults_to_origin_pixel() {
    let img = RasterImage::new(2, 1, vec![PURPLE, BG]).unwrap();
    assert_eq!(img.background(), PURPLE);
}

#[test]
fn background_can_be_overridden() {
    let img = RasterImage::with_background(2, 1, vec![PURPLE, BG], BG).unwrap();
    assert_eq!(img.background(), BG);
    let visible: Vec<_> = img.visible_pixels().collect();
    assert_eq!(visible, vec![(Pixel::new(0, 0), PURPLE)]);
}

#[test]
fn visible_pixels_come_in_scan_order() {
    let red = Rgb::new(200, 0, 0);
    let img = RasterImage::new(
        3,
        2,
        grid(3, 2, &[(2, 0, PURPLE), (0, 1, red), (1, 1, PURPLE)]),
    )
    .unwrap();
    let visible: Vec<_> = img.visible_pixels().collect();
    assert_eq!(
        visible,
        vec![
            (Pixel::new(2, 0), PURPLE),
            (Pixel::new(0, 1), red),
            (Pixel::new(1, 1), PURPLE),
        ]
    );
}

#[test]
fn converts_decoded_rgb8_buffers() {
    let mut buf = image::RgbImage::new(2, 2);
    buf.put_pixel(1, 0, image::Rgb([128, 32, 192]));
    let img = RasterImage::from_rgb8(&buf).unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 2);
    assert_eq!(img.background(), BG);
    assert_eq!(img.get(1, 0), PURPLE);
}
