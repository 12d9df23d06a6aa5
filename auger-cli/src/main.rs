//! Command line shell for the screw conveyor designer.
//!
//! Reads feed parameters from flags or a JSON request file, clamps them
//! to the documented operating ranges, and prints the resulting design.
//! Optionally writes the CSV design summary and an SVG rendering of the
//! rotated profile sketch.
//!
//! # Usage
//! auger-cli --biomass "rice husk" --feed-rate 100 --bulk-density 180 \
//!           --moisture 15 --incline 20 --csv design.csv --svg sketch.svg

use std::{env, fs, path::PathBuf, process};

use anyhow::{Context, Result, bail};
use auger_components::{
    conveyor::{DesignRequest, ScrewDesign, compute_design},
    report::design_summary_csv,
    schematic::SchematicLayout,
};
use serde::Deserialize;
use serde_json::json;
use uom::si::{angle::degree, length::inch, power::horsepower};

/// Raw request scalars, named after the design summary parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    biomass_type: String,
    feed_rate_kg_per_hr: f64,
    bulk_density_kg_per_m3: f64,
    moisture_content_pct: f64,
    incline_angle_deg: f64,
}

impl Default for RawRequest {
    /// The rice husk reference case.
    fn default() -> Self {
        Self {
            biomass_type: "rice husk".to_string(),
            feed_rate_kg_per_hr: 100.0,
            bulk_density_kg_per_m3: 180.0,
            moisture_content_pct: 15.0,
            incline_angle_deg: 20.0,
        }
    }
}

impl RawRequest {
    fn into_request(self) -> DesignRequest {
        DesignRequest::clamped(
            self.biomass_type,
            self.feed_rate_kg_per_hr,
            self.bulk_density_kg_per_m3,
            self.moisture_content_pct,
            self.incline_angle_deg,
        )
    }
}

#[derive(Debug, Default)]
struct Options {
    raw: RawRequest,
    csv_path: Option<PathBuf>,
    svg_path: Option<PathBuf>,
    json: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(options) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    let request = options.raw.into_request();
    let design = compute_design(request.clone())?;

    if let Some(path) = &options.csv_path {
        fs::write(path, design_summary_csv(&request, &design))
            .with_context(|| format!("writing CSV summary to {}", path.display()))?;
    }

    if let Some(path) = &options.svg_path {
        let layout = SchematicLayout::new(&design, request.incline);
        fs::write(path, schematic_svg(&layout))
            .with_context(|| format!("writing schematic to {}", path.display()))?;
    }

    if options.json {
        println!("{}", design_json(&request, &design));
    } else {
        print_summary(&request, &design);
    }

    Ok(())
}

/// Parses command line flags; returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();

    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        match flag {
            "--help" | "-h" => return Ok(None),
            "--json" => options.json = true,
            "--input" => {
                let path = flag_value(args, &mut index, flag)?;
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("reading request file {path}"))?;
                options.raw = serde_json::from_str(&contents)
                    .with_context(|| format!("parsing request file {path}"))?;
            }
            "--biomass" => {
                options.raw.biomass_type = flag_value(args, &mut index, flag)?.to_string();
            }
            "--feed-rate" => {
                options.raw.feed_rate_kg_per_hr = numeric_flag_value(args, &mut index, flag)?;
            }
            "--bulk-density" => {
                options.raw.bulk_density_kg_per_m3 = numeric_flag_value(args, &mut index, flag)?;
            }
            "--moisture" => {
                options.raw.moisture_content_pct = numeric_flag_value(args, &mut index, flag)?;
            }
            "--incline" => {
                options.raw.incline_angle_deg = numeric_flag_value(args, &mut index, flag)?;
            }
            "--csv" => {
                options.csv_path = Some(PathBuf::from(flag_value(args, &mut index, flag)?));
            }
            "--svg" => {
                options.svg_path = Some(PathBuf::from(flag_value(args, &mut index, flag)?));
            }
            other => bail!("unknown flag {other} (try --help)"),
        }
        index += 1;
    }

    Ok(Some(options))
}

fn flag_value<'a>(args: &'a [String], index: &mut usize, flag: &str) -> Result<&'a str> {
    *index += 1;
    args.get(*index)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

fn numeric_flag_value(args: &[String], index: &mut usize, flag: &str) -> Result<f64> {
    let value = flag_value(args, index, flag)?;
    value
        .parse()
        .with_context(|| format!("{flag} expects a number, got {value:?}"))
}

fn print_summary(request: &DesignRequest, design: &ScrewDesign) {
    println!("Screw Diameter: {} inch", trim(design.screw_diameter.inches()));
    println!("Pitch: {} inch", trim(design.pitch.get::<inch>()));
    println!(
        "Shaft Diameter: {} inch",
        trim(design.shaft_diameter.get::<inch>())
    );
    println!(
        "Flight Thickness: {} inch",
        trim(design.flight_thickness.inches())
    );
    println!("Material Suggested: {}", design.material);
    println!("Inclination Angle: {}°", trim(request.incline.get::<degree>()));
    println!(
        "Estimated Power Requirement: {:.2} HP",
        design.power.get::<horsepower>()
    );
}

fn design_json(request: &DesignRequest, design: &ScrewDesign) -> String {
    json!({
        "request": {
            "biomass_type": request.biomass.clone(),
            "incline_angle_deg": round2(request.incline.get::<degree>()),
        },
        "design": {
            "screw_diameter_in": design.screw_diameter.inches(),
            "pitch_in": round2(design.pitch.get::<inch>()),
            "shaft_diameter_in": round2(design.shaft_diameter.get::<inch>()),
            "flight_thickness_in": design.flight_thickness.inches(),
            "material": design.material.to_string(),
            "power_hp": round2(design.power.get::<horsepower>()),
        },
    })
    .to_string()
}

/// Scrubs unit round-trip noise and drops the decimal point on
/// integral values, matching the summary page formatting.
fn trim(value: f64) -> String {
    let value = round2(value);
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pixels per inch in the SVG rendering.
const SVG_SCALE: f64 = 20.0;

/// Renders the sketch layout as a standalone SVG document.
fn schematic_svg(layout: &SchematicLayout) -> String {
    let [x_min, x_max, y_min, y_max] = layout.bounds;
    let width = (x_max - x_min) * SVG_SCALE;
    let height = (y_max - y_min) * SVG_SCALE;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" \
         viewBox=\"0 0 {width:.0} {height:.0}\">\n"
    );

    for profile in &layout.flights {
        for (circle, fill, stroke) in [
            (&profile.flight, "lightgrey", "black"),
            (&profile.shaft, "black", "none"),
        ] {
            let cx = (circle.center[0] - x_min) * SVG_SCALE;
            let cy = (y_max - circle.center[1]) * SVG_SCALE;
            let r = circle.radius * SVG_SCALE;
            svg.push_str(&format!(
                "  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" \
                 fill=\"{fill}\" stroke=\"{stroke}\"/>\n"
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn print_help() {
    println!("auger-cli: size a biomass screw conveyor");
    println!();
    println!("Usage: auger-cli [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --input PATH         JSON request file (see below)");
    println!("  --biomass LABEL      biomass type (default: rice husk)");
    println!("  --feed-rate N        feed rate in kg/hr, 1-500 (default: 100)");
    println!("  --bulk-density N     bulk density in kg/m³, 50-1000 (default: 180)");
    println!("  --moisture N         moisture content in %, 0-100 (default: 15)");
    println!("  --incline N          inclination angle in °, 0-45 (default: 20)");
    println!("  --csv PATH           write the design summary CSV");
    println!("  --svg PATH           write the rotated profile sketch as SVG");
    println!("  --json               print the design as JSON instead of text");
    println!("  --help               show this message");
    println!();
    println!("Request file schema:");
    println!("  {{\"biomass_type\": \"rice husk\", \"feed_rate_kg_per_hr\": 100,");
    println!("   \"bulk_density_kg_per_m3\": 180, \"moisture_content_pct\": 15,");
    println!("   \"incline_angle_deg\": 20}}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_to_the_reference_case() {
        let options = parse_args(&[]).unwrap().unwrap();

        assert_eq!(options.raw.biomass_type, "rice husk");
        assert_eq!(options.raw.feed_rate_kg_per_hr, 100.0);
        assert!(!options.json);
    }

    #[test]
    fn flags_override_defaults() {
        let options = parse_args(&args(&[
            "--biomass",
            "corn stover",
            "--feed-rate",
            "250",
            "--incline",
            "30",
            "--json",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(options.raw.biomass_type, "corn stover");
        assert_eq!(options.raw.feed_rate_kg_per_hr, 250.0);
        assert_eq!(options.raw.incline_angle_deg, 30.0);
        assert!(options.json);
    }

    #[test]
    fn help_flag_short_circuits() {
        assert!(parse_args(&args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn missing_value_is_rejected() {
        assert!(parse_args(&args(&["--feed-rate"])).is_err());
    }

    #[test]
    fn svg_contains_a_circle_per_flight_and_shaft() {
        let request = RawRequest::default().into_request();
        let design = compute_design(request.clone()).unwrap();
        let layout = SchematicLayout::new(&design, request.incline);

        let svg = schematic_svg(&layout);
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
