//! The screw conveyor sizing pipeline.
//!
//! A [`DesignRequest`] flows through two stages: the feed normalizer
//! derives the volumetric feed rate, and the sizer maps it onto a
//! complete [`ScrewDesign`]. Both stages are pure components; the
//! composed pipeline is available as [`designer()`] or, for one-shot
//! use, [`compute_design()`].

pub mod designer;
pub mod feed;
pub mod material;
pub mod power;
pub mod sizing;

pub use designer::{
    DesignRequest, NormalizedRequest, Normalizer, ScrewDesign, Sizer, compute_design, designer,
};
pub use feed::{FeedInput, FeedNormalizer, InvalidInputError, VolumetricFeed};
pub use material::Material;
pub use sizing::{FlightThickness, ScrewDiameter};
