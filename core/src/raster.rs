use std::collections::HashSet;

use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use imageproc::region_labelling::{Connectivity, connected_components};

use crate::config::GoboConfig;
use crate::error::Result;
use crate::petal::PetalOutline;
use crate::utils::Point2;

// Blank single-channel canvas
pub fn new_canvas(size: u32, background: u8) -> GrayImage {
    GrayImage::from_pixel(size, size, Luma([background]))
}

/// Fill the closed `outline` as one solid region, no anti-aliasing.
///
/// Vertices are snapped to the pixel grid. Repeated neighbours (and a final
/// vertex equal to the first) are dropped because the polygon filler rejects
/// an explicitly closed ring. Fewer than three distinct vertices draw nothing.
pub fn fill_polygon(canvas: &mut GrayImage, outline: &[Point2], intensity: u8) {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(outline.len());
    for p in outline {
        let (x, y) = p.round();
        let q = Point::new(x, y);
        if poly.last() != Some(&q) {
            poly.push(q);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    draw_polygon_mut(canvas, &poly, Luma([intensity]));
}

// Render one flower gobo
pub fn render_flower(points: u32, config: &GoboConfig) -> Result<GrayImage> {
    let outline = PetalOutline::new(points, config)?.points();
    let mut canvas = new_canvas(config.canvas_size, config.background);
    fill_polygon(&mut canvas, &outline, config.fill);
    Ok(canvas)
}

// Number of 8-connected regions that differ from the background
pub fn count_regions(image: &GrayImage, background: u8) -> usize {
    let labels = connected_components(image, Connectivity::Eight, Luma([background]));
    labels
        .pixels()
        .map(|p| p[0])
        .filter(|&l| l != 0)
        .collect::<HashSet<u32>>()
        .len()
}
