use num::Float;

// Adapted from [nannou](https://docs.rs/nannou/0.15.0/src/nannou/math.rs.html#42)
pub fn map_range<T: Float>(val: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    (val - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// `map_range` with `val` clamped into the input range first.
pub fn map_range_clamped<T: Float>(val: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    map_range(val.max(in_min).min(in_max), in_min, in_max, out_min, out_max)
}
