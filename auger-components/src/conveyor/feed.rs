//! Feed normalization: mass feed rate to volumetric feed rate.

use auger_core::Component;
use thiserror::Error;
use uom::si::{
    f64::{MassDensity, MassRate},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour,
};

/// Cubic feet per cubic meter.
///
/// Pinned to the value the sizing correlations were tabulated with;
/// do not replace it with a higher-precision conversion.
const CUBIC_FEET_PER_CUBIC_METER: f64 = 35.3147;

/// Volumetric feed rate in cubic feet per hour.
///
/// Every downstream correlation (screw selection brackets, the drive
/// power formula) is tabulated against this quantity in this unit, so
/// it is carried as a plain scalar rather than a dimensioned rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VolumetricFeed(f64);

impl VolumetricFeed {
    #[must_use]
    pub const fn new(cubic_feet_per_hour: f64) -> Self {
        Self(cubic_feet_per_hour)
    }

    #[must_use]
    pub const fn cubic_feet_per_hour(self) -> f64 {
        self.0
    }
}

/// Error returned when a design request holds an unusable quantity.
///
/// The volumetric conversion is undefined at zero bulk density, so the
/// normalizer rejects non-positive densities even though range-clamped
/// callers can never produce one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("bulk density must be greater than zero (got {bulk_density_kg_per_m3} kg/m³)")]
pub struct InvalidInputError {
    pub bulk_density_kg_per_m3: f64,
}

/// Input to the [`FeedNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedInput {
    pub feed_rate: MassRate,
    pub bulk_density: MassDensity,
}

/// Converts a mass feed rate and bulk density into volumetric feed.
pub struct FeedNormalizer;

impl Component for FeedNormalizer {
    type Input = FeedInput;
    type Output = VolumetricFeed;
    type Error = InvalidInputError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let density = input.bulk_density.get::<kilogram_per_cubic_meter>();
        if density <= 0.0 {
            return Err(InvalidInputError {
                bulk_density_kg_per_m3: density,
            });
        }

        let feed_rate = input.feed_rate.get::<kilogram_per_hour>();
        Ok(VolumetricFeed::new(
            feed_rate / density * CUBIC_FEET_PER_CUBIC_METER,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn input(feed_rate_kg_per_hr: f64, bulk_density_kg_per_m3: f64) -> FeedInput {
        FeedInput {
            feed_rate: MassRate::new::<kilogram_per_hour>(feed_rate_kg_per_hr),
            bulk_density: MassDensity::new::<kilogram_per_cubic_meter>(bulk_density_kg_per_m3),
        }
    }

    #[test]
    fn converts_rice_husk_reference_case() {
        let feed = FeedNormalizer.call(input(100.0, 180.0)).unwrap();

        assert_relative_eq!(
            feed.cubic_feet_per_hour(),
            100.0 / 180.0 * 35.3147,
            epsilon = 1e-9
        );
    }

    #[test]
    fn density_equal_to_feed_rate_gives_one_cubic_meter_per_hour() {
        let feed = FeedNormalizer.call(input(250.0, 250.0)).unwrap();

        assert_relative_eq!(feed.cubic_feet_per_hour(), 35.3147, epsilon = 1e-9);
    }

    #[test]
    fn rejects_zero_bulk_density() {
        let error = FeedNormalizer.call(input(100.0, 0.0)).unwrap_err();

        assert_eq!(
            error.to_string(),
            "bulk density must be greater than zero (got 0 kg/m³)"
        );
    }

    #[test]
    fn rejects_negative_bulk_density() {
        assert!(FeedNormalizer.call(input(100.0, -5.0)).is_err());
    }
}
