#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Angle in radians of the vector pointing from `self` to `other`.
    pub fn angle_to(&self, other: &Point2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` units away along `heading` (radians, 0 points along +x).
    pub fn offset_along(&self, heading: f32, distance: f32) -> Point2 {
        Point2::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }

    /// Wrap both coordinates onto a torus of the given size, so the result
    /// lies in `[0, width) x [0, height)`.
    pub fn wrapped(&self, width: f32, height: f32) -> Point2 {
        Point2::new(wrap_coordinate(self.x, width), wrap_coordinate(self.y, height))
    }
}

fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);

    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}
