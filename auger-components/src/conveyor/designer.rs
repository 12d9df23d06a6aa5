//! The composed design pipeline.

use std::ops::RangeInclusive;

use auger_core::Component;
use uom::si::{
    angle::degree,
    f64::{Angle, Length, MassDensity, MassRate, Power, Ratio},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour,
    ratio::percent,
};

use crate::conveyor::{
    feed::{FeedInput, FeedNormalizer, InvalidInputError, VolumetricFeed},
    material::Material,
    power::required_power,
    sizing::{FlightThickness, ScrewDiameter},
};

/// Operating ranges enforced by range-aware shells.
///
/// The calculator itself trusts its inputs; shells without
/// range-enforcing widgets should build requests through
/// [`DesignRequest::clamped`], which applies these bounds.
pub const FEED_RATE_RANGE_KG_PER_HR: RangeInclusive<f64> = 1.0..=500.0;
pub const BULK_DENSITY_RANGE_KG_PER_M3: RangeInclusive<f64> = 50.0..=1000.0;
pub const MOISTURE_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const INCLINE_RANGE_DEG: RangeInclusive<f64> = 0.0..=45.0;

/// A complete set of feed parameters for one design pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    pub biomass: String,
    pub feed_rate: MassRate,
    pub bulk_density: MassDensity,
    pub moisture: Ratio,
    pub incline: Angle,
}

impl DesignRequest {
    /// Builds a request from raw scalars, clamping each to its
    /// operating range.
    #[must_use]
    pub fn clamped(
        biomass: impl Into<String>,
        feed_rate_kg_per_hr: f64,
        bulk_density_kg_per_m3: f64,
        moisture_pct: f64,
        incline_deg: f64,
    ) -> Self {
        Self {
            biomass: biomass.into(),
            feed_rate: MassRate::new::<kilogram_per_hour>(clamp_to(
                &FEED_RATE_RANGE_KG_PER_HR,
                feed_rate_kg_per_hr,
            )),
            bulk_density: MassDensity::new::<kilogram_per_cubic_meter>(clamp_to(
                &BULK_DENSITY_RANGE_KG_PER_M3,
                bulk_density_kg_per_m3,
            )),
            moisture: Ratio::new::<percent>(clamp_to(&MOISTURE_RANGE_PCT, moisture_pct)),
            incline: Angle::new::<degree>(clamp_to(&INCLINE_RANGE_DEG, incline_deg)),
        }
    }
}

impl Default for DesignRequest {
    /// The rice husk reference case.
    fn default() -> Self {
        Self::clamped("rice husk", 100.0, 180.0, 15.0, 20.0)
    }
}

fn clamp_to(range: &RangeInclusive<f64>, value: f64) -> f64 {
    value.clamp(*range.start(), *range.end())
}

/// The derived conveyor design.
///
/// Recomputed in full on every pass; a design is never mutated after
/// it is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrewDesign {
    pub screw_diameter: ScrewDiameter,
    pub pitch: Length,
    pub shaft_diameter: Length,
    pub flight_thickness: FlightThickness,
    pub material: Material,
    pub power: Power,
}

/// A request paired with its derived volumetric feed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub request: DesignRequest,
    pub feed: VolumetricFeed,
}

/// First pipeline stage: derives the volumetric feed via
/// [`FeedNormalizer`] and carries the request forward.
pub struct Normalizer;

impl Component for Normalizer {
    type Input = DesignRequest;
    type Output = NormalizedRequest;
    type Error = InvalidInputError;

    fn call(&self, request: Self::Input) -> Result<Self::Output, Self::Error> {
        let feed = FeedNormalizer.call(FeedInput {
            feed_rate: request.feed_rate,
            bulk_density: request.bulk_density,
        })?;

        Ok(NormalizedRequest { request, feed })
    }
}

/// Second pipeline stage: maps a normalized request onto a complete
/// design.
///
/// Shares the normalizer's error type so the stages chain; this stage
/// itself never fails.
pub struct Sizer;

impl Component for Sizer {
    type Input = NormalizedRequest;
    type Output = ScrewDesign;
    type Error = InvalidInputError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let NormalizedRequest { request, feed } = input;
        let screw = ScrewDiameter::for_feed(feed);

        Ok(ScrewDesign {
            screw_diameter: screw,
            pitch: screw.pitch(),
            shaft_diameter: screw.shaft_diameter(),
            flight_thickness: screw.flight_thickness(),
            material: Material::recommend(&request.biomass, request.moisture),
            power: required_power(feed, request.bulk_density, request.incline),
        })
    }
}

/// The full design pipeline as a reusable component.
#[must_use]
pub fn designer()
-> impl Component<Input = DesignRequest, Output = ScrewDesign, Error = InvalidInputError> {
    Normalizer.chain(Sizer)
}

/// One-shot convenience over [`designer()`].
///
/// ```
/// use auger_components::conveyor::{DesignRequest, ScrewDiameter, compute_design};
///
/// let design = compute_design(DesignRequest::default()).unwrap();
/// assert_eq!(design.screw_diameter, ScrewDiameter::FourInch);
/// ```
///
/// # Errors
///
/// Returns [`InvalidInputError`] if the request's bulk density is not
/// positive.
pub fn compute_design(request: DesignRequest) -> Result<ScrewDesign, InvalidInputError> {
    designer().call(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::inch;

    #[test]
    fn clamped_applies_operating_ranges() {
        let request = DesignRequest::clamped("pine wood", 5000.0, 10.0, 120.0, 90.0);

        assert_relative_eq!(
            request.feed_rate.get::<kilogram_per_hour>(),
            500.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            request.bulk_density.get::<kilogram_per_cubic_meter>(),
            50.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(request.moisture.get::<percent>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(request.incline.get::<degree>(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn clamped_keeps_in_range_values() {
        let request = DesignRequest::clamped("corn stover", 250.0, 420.0, 40.0, 12.0);

        assert_relative_eq!(
            request.feed_rate.get::<kilogram_per_hour>(),
            250.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            request.bulk_density.get::<kilogram_per_cubic_meter>(),
            420.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pipeline_produces_the_reference_design() {
        let design = compute_design(DesignRequest::default()).unwrap();

        assert_eq!(design.screw_diameter, ScrewDiameter::FourInch);
        assert_relative_eq!(design.pitch.get::<inch>(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(design.shaft_diameter.get::<inch>(), 1.2, epsilon = 1e-12);
        assert_eq!(design.flight_thickness, FlightThickness::QuarterInch);
        assert_eq!(design.material, Material::Stainless304);
    }

    #[test]
    fn zero_bulk_density_is_rejected_before_sizing() {
        let request = DesignRequest {
            bulk_density: MassDensity::new::<kilogram_per_cubic_meter>(0.0),
            ..DesignRequest::default()
        };

        assert!(compute_design(request).is_err());
    }
}
