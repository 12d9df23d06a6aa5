//! Material recommendation for the wetted parts.

use std::fmt;

use uom::si::{f64::Ratio, ratio::percent};

/// Label keywords that force a stainless screw regardless of moisture.
const ABRASIVE_FEEDSTOCK_KEYWORDS: [&str; 2] = ["wood", "husk"];

/// Moisture content, in percent, above which plain carbon steel is
/// ruled out.
const WET_FEED_THRESHOLD_PCT: f64 = 25.0;

/// Recommended construction material for screw and trough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Stainless304,
    Stainless316OrCoated,
    MildSteel,
}

impl Material {
    /// Recommends a material from the biomass label and moisture content.
    ///
    /// The rules are ordered: the feedstock keyword rule is checked
    /// first and wins over the moisture rule even for dry feed.
    #[must_use]
    pub fn recommend(biomass: &str, moisture: Ratio) -> Self {
        let label = biomass.to_lowercase();
        if ABRASIVE_FEEDSTOCK_KEYWORDS
            .iter()
            .any(|keyword| label.contains(keyword))
        {
            return Self::Stainless304;
        }

        if moisture.get::<percent>() > WET_FEED_THRESHOLD_PCT {
            Self::Stainless316OrCoated
        } else {
            Self::MildSteel
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stainless304 => "Stainless Steel 304",
            Self::Stainless316OrCoated => "316 SS or Coated Carbon Steel",
            Self::MildSteel => "Mild Steel",
        };
        write!(f, "{name}")
    }
}
