/// Convert `x` (in the `x_min..x_max` range) to the `out_min..out_max`
/// range, clamping out-of-range input to the nearest output edge.
///
/// The output range may be inverted (`out_min > out_max`), which maps
/// low input onto the high end of the output.
pub fn remap_to_range(x: f32, x_min: f32, x_max: f32, out_min: f32, out_max: f32) -> f32 {
    if x < x_min {
        return out_min;
    }
    if x > x_max {
        return out_max;
    }
    let ratio = (x - x_min) / (x_max - x_min);
    out_min + ratio * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_maps_to_output_midpoint() {
        let value = remap_to_range(0.5, 0.0, 1.0, -1.5, 1.5);
        assert!(value.abs() < 0.0001);
    }

    #[test]
    fn input_outside_range_clamps_to_edges() {
        assert!((remap_to_range(-0.2, 0.0, 1.0, 10.0, 20.0) - 10.0).abs() < 0.0001);
        assert!((remap_to_range(1.7, 0.0, 1.0, 10.0, 20.0) - 20.0).abs() < 0.0001);
    }

    #[test]
    fn inverted_output_range_maps_top_to_high_edge() {
        assert!((remap_to_range(0.0, 0.0, 1.0, 45.0, -25.0) - 45.0).abs() < 0.0001);
        assert!((remap_to_range(1.0, 0.0, 1.0, 45.0, -25.0) + 25.0).abs() < 0.0001);
        assert!((remap_to_range(0.5, 0.0, 1.0, 45.0, -25.0) - 10.0).abs() < 0.0001);
    }
}
