// Renders 3..=8 pointed flowers side by side into one contact sheet
use gobo_core::{GoboConfig, render_flower};
use image::{GrayImage, imageops};
use std::path::Path;

fn main() {
    let config = GoboConfig::with_canvas_size(128);
    let counts: Vec<u32> = (3..=8).collect();
    let tile = config.canvas_size;

    let mut sheet = GrayImage::new(tile * counts.len() as u32, tile);
    for (i, &points) in counts.iter().enumerate() {
        let flower = render_flower(points, &config).unwrap();
        imageops::replace(&mut sheet, &flower, (i as u32 * tile) as i64, 0);
    }

    let path = Path::new("flower_sheet.png");
    sheet.save(path).unwrap();
    println!("Saved {:?}", path);
}
