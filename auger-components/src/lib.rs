//! Design calculations for biomass screw conveyors.
//!
//! The [`conveyor`] module holds the sizing pipeline itself; [`report`]
//! serializes a finished design to the fixed CSV summary, and
//! [`schematic`] lays out the rotated two-flight profile sketch for
//! renderers.

pub mod conveyor;
pub mod report;
pub mod schematic;

/// Rounds to two decimal places, the resolution used throughout the
/// sizing correlations and the design summary.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round_to_hundredths;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_hundredths(0.694_881), 0.69);
        assert_eq!(round_to_hundredths(0.695_001), 0.7);
        assert_eq!(round_to_hundredths(1.200_000_000_000_000_2), 1.2);
    }
}
