//! CSV export of a design pass.

use uom::si::{
    angle::degree, length::inch, mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour, power::horsepower, ratio::percent,
};

use crate::{
    conveyor::{DesignRequest, ScrewDesign},
    round_to_hundredths,
};

/// Renders the fixed `Parameter,Value` design summary.
///
/// The schema is one header row plus eleven data rows: the five request
/// parameters followed by the six design results, in the order shown
/// on the summary page.
#[must_use]
pub fn design_summary_csv(request: &DesignRequest, design: &ScrewDesign) -> String {
    let rows = [
        ("Biomass Type", request.biomass.clone()),
        (
            "Feed Rate (kg/hr)",
            format_quantity(request.feed_rate.get::<kilogram_per_hour>()),
        ),
        (
            "Bulk Density (kg/m³)",
            format_quantity(request.bulk_density.get::<kilogram_per_cubic_meter>()),
        ),
        (
            "Moisture Content (%)",
            format_quantity(request.moisture.get::<percent>()),
        ),
        (
            "Inclination Angle (°)",
            format_quantity(request.incline.get::<degree>()),
        ),
        (
            "Screw Diameter (inch)",
            format_quantity(design.screw_diameter.inches()),
        ),
        ("Pitch (inch)", format_quantity(design.pitch.get::<inch>())),
        (
            "Shaft Diameter (inch)",
            format_quantity(design.shaft_diameter.get::<inch>()),
        ),
        (
            "Flight Thickness (inch)",
            format_quantity(design.flight_thickness.inches()),
        ),
        ("Material", design.material.to_string()),
        (
            "Power Requirement (HP)",
            format!("{:.2}", design.power.get::<horsepower>()),
        ),
    ];

    let mut csv = String::from("Parameter,Value\n");
    for (parameter, value) in rows {
        csv.push_str(parameter);
        csv.push(',');
        csv.push_str(&value);
        csv.push('\n');
    }
    csv
}

/// Formats a quantity the way the input widgets displayed it: rounded
/// to hundredths, integral values without a decimal point.
///
/// Rounding first also scrubs the last-place noise that unit
/// round-trips leave on values like `15 %` or `1.2 in`.
fn format_quantity(value: f64) -> String {
    let value = round_to_hundredths(value);
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
