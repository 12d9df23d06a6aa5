//! Geometry for the rotated two-flight profile sketch.
//!
//! The sketch shows each flight as a circle with a concentric shaft
//! circle, the whole profile rotated by the incline angle about the
//! top of the screw radius at the inlet end. This module computes the
//! layout as plain data so any renderer (plotting widget, SVG writer)
//! can draw it.

use uom::si::{angle::radian, f64::Angle, length::inch};

use crate::conveyor::ScrewDesign;

/// Number of flight cross-sections in the sketch.
const NUM_FLIGHTS: usize = 2;

/// A circle in the sketch plane; coordinates and radius in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

/// One flight cross-section and its shaft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightProfile {
    pub flight: Circle,
    pub shaft: Circle,
}

/// The laid-out sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct SchematicLayout {
    pub flights: Vec<FlightProfile>,
    /// Drawing bounds `[x_min, x_max, y_min, y_max]`, in inches.
    pub bounds: [f64; 4],
}

impl SchematicLayout {
    /// Lays out the sketch for a design at the given incline.
    ///
    /// Flight `i` sits at `x = i * pitch + pitch / 2` on the horizontal
    /// centerline `y = d / 2` before the profile is rotated by the
    /// negated incline about the pivot `(0, d / 2)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(design: &ScrewDesign, incline: Angle) -> Self {
        let diameter = design.screw_diameter.inches();
        let screw_radius = diameter / 2.0;
        let shaft_radius = design.shaft_diameter.get::<inch>() / 2.0;
        let pitch = design.pitch.get::<inch>();

        let (sin, cos) = (-incline.get::<radian>()).sin_cos();
        let pivot = [0.0, screw_radius];

        let flights = (0..NUM_FLIGHTS)
            .map(|index| {
                let x = index as f64 * pitch + pitch / 2.0;
                let center = rotate_about([x, screw_radius], pivot, sin, cos);
                FlightProfile {
                    flight: Circle {
                        center,
                        radius: screw_radius,
                    },
                    shaft: Circle {
                        center,
                        radius: shaft_radius,
                    },
                }
            })
            .collect();

        let length = NUM_FLIGHTS as f64 * pitch;
        Self {
            flights,
            bounds: [-diameter, length + diameter, -diameter, 3.0 * diameter],
        }
    }
}

fn rotate_about(point: [f64; 2], pivot: [f64; 2], sin: f64, cos: f64) -> [f64; 2] {
    let dx = point[0] - pivot[0];
    let dy = point[1] - pivot[1];
    [
        pivot[0] + dx * cos - dy * sin,
        pivot[1] + dx * sin + dy * cos,
    ]
}
