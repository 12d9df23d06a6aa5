//! Screw geometry: diameter selection and the dimensions derived from it.

use uom::si::{f64::Length, length::inch};

use crate::{conveyor::feed::VolumetricFeed, round_to_hundredths};

/// Ratio of shaft diameter to screw diameter.
const SHAFT_DIAMETER_RATIO: f64 = 0.3;

/// Largest screw, in inches, that takes the thinner flight plate.
const THIN_FLIGHT_MAX_DIAMETER_IN: f64 = 6.0;

/// Catalog screw sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrewDiameter {
    FourInch,
    SixInch,
    NineInch,
    TwelveInch,
}

/// Stock flight plate gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightThickness {
    QuarterInch,
    ThreeEighthsInch,
}

impl ScrewDiameter {
    /// Selects the smallest catalog screw able to carry the given feed.
    ///
    /// Bracket upper bounds are exclusive: a feed of exactly 1000 cfh
    /// already selects the 6 in screw.
    #[must_use]
    pub fn for_feed(feed: VolumetricFeed) -> Self {
        let cfh = feed.cubic_feet_per_hour();
        if cfh < 1000.0 {
            Self::FourInch
        } else if cfh < 2000.0 {
            Self::SixInch
        } else if cfh < 4000.0 {
            Self::NineInch
        } else {
            Self::TwelveInch
        }
    }

    #[must_use]
    pub const fn inches(self) -> f64 {
        match self {
            Self::FourInch => 4.0,
            Self::SixInch => 6.0,
            Self::NineInch => 9.0,
            Self::TwelveInch => 12.0,
        }
    }

    #[must_use]
    pub fn diameter(self) -> Length {
        Length::new::<inch>(self.inches())
    }

    /// Pitch equals the screw diameter (standard-pitch flighting).
    #[must_use]
    pub fn pitch(self) -> Length {
        self.diameter()
    }

    /// Shaft diameter, rounded to hundredths of an inch.
    #[must_use]
    pub fn shaft_diameter(self) -> Length {
        Length::new::<inch>(round_to_hundredths(SHAFT_DIAMETER_RATIO * self.inches()))
    }

    /// Flight plate gauge for this screw size.
    #[must_use]
    pub fn flight_thickness(self) -> FlightThickness {
        if self.inches() <= THIN_FLIGHT_MAX_DIAMETER_IN {
            FlightThickness::QuarterInch
        } else {
            FlightThickness::ThreeEighthsInch
        }
    }
}

impl FlightThickness {
    #[must_use]
    pub const fn inches(self) -> f64 {
        match self {
            Self::QuarterInch => 0.25,
            Self::ThreeEighthsInch => 0.375,
        }
    }

    #[must_use]
    pub fn thickness(self) -> Length {
        Length::new::<inch>(self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn selects_screw_by_feed_bracket() {
        let cases = [
            (0.0, ScrewDiameter::FourInch),
            (999.999, ScrewDiameter::FourInch),
            (1000.0, ScrewDiameter::SixInch),
            (1999.999, ScrewDiameter::SixInch),
            (2000.0, ScrewDiameter::NineInch),
            (3999.999, ScrewDiameter::NineInch),
            (4000.0, ScrewDiameter::TwelveInch),
            (25_000.0, ScrewDiameter::TwelveInch),
        ];

        for (cfh, expected) in cases {
            assert_eq!(
                ScrewDiameter::for_feed(VolumetricFeed::new(cfh)),
                expected,
                "feed of {cfh} cfh"
            );
        }
    }

    #[test]
    fn pitch_equals_diameter() {
        for screw in [
            ScrewDiameter::FourInch,
            ScrewDiameter::SixInch,
            ScrewDiameter::NineInch,
            ScrewDiameter::TwelveInch,
        ] {
            assert_eq!(screw.pitch(), screw.diameter());
        }
    }

    #[test]
    fn shaft_diameter_is_three_tenths_of_screw() {
        let cases = [
            (ScrewDiameter::FourInch, 1.2),
            (ScrewDiameter::SixInch, 1.8),
            (ScrewDiameter::NineInch, 2.7),
            (ScrewDiameter::TwelveInch, 3.6),
        ];

        for (screw, expected_in) in cases {
            assert_relative_eq!(
                screw.shaft_diameter().get::<inch>(),
                expected_in,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn small_screws_take_the_thinner_flight() {
        assert_eq!(
            ScrewDiameter::FourInch.flight_thickness(),
            FlightThickness::QuarterInch
        );
        assert_eq!(
            ScrewDiameter::SixInch.flight_thickness(),
            FlightThickness::QuarterInch
        );
        assert_eq!(
            ScrewDiameter::NineInch.flight_thickness(),
            FlightThickness::ThreeEighthsInch
        );
        assert_eq!(
            ScrewDiameter::TwelveInch.flight_thickness(),
            FlightThickness::ThreeEighthsInch
        );
    }
}
