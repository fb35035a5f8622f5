// Prints the radius of one lobe of a 5-pointed flower, tip to tip
use gobo_core::{GoboConfig, PetalOutline};
use std::f64::consts::TAU;

fn main() {
    let config = GoboConfig::default();
    let outline = PetalOutline::new(5, &config).unwrap();
    let lobe = TAU / outline.lobes() as f64;

    println!(
        "outer {:.2}  inner {:.2}",
        outline.outer_radius(),
        outline.inner_radius()
    );
    for step in 0..=12 {
        let angle = lobe * step as f64 / 12.0;
        let r = outline.radius(angle);
        // crude bar so the easing is visible in a terminal
        let bar = "#".repeat((r / 2.0) as usize);
        println!("{:>6.1}° {:>7.2} {}", angle.to_degrees(), r, bar);
    }
}
