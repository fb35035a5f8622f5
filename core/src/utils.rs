// A point in canvas space; y grows downwards like image rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    // Distance to another point, used to read radii back off an outline
    pub fn distance(&self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    // Nearest pixel-grid coordinate
    pub fn round(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

// Shoelace area of a closed outline; positive when the points turn clockwise on screen
pub fn polygon_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}
