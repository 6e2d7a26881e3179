//! Asset tooling for the Flavor Graph recipe app: convert SVG
//! illustrations to JPEG, fetch stock photos and synthesize placeholder
//! thumbnails over a shared asset directory.

pub mod convert;
pub mod error;
pub mod fetch;
pub mod recipes;
pub mod report;
pub mod synth;
pub mod utils;
