//! # chartgeo-engine
//!
//! Chart geometry & scaling engine. Turns labeled numeric series into
//! normalized screen-space geometry: axis domains, per-point coordinates,
//! stacked offsets, path strings, colors, ticks and angular layout.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Tick label formatting (`LabelFormatter`, closures accepted)
//! - Path generation (line, polygon, baseline area)
//!
//! Every function is pure over immutable inputs; nothing here holds state
//! between calls.
//!
//! ## Modules
//!
//! - `domain` - Domain Resolver: label union and y-range
//! - `ticks` - Tick Generator: value and category axis ticks
//! - `normalize` - Series Normalizer: `[0,1]` plane, stacking
//! - `path` - Path Builder: line/area/polygon paths, markers
//! - `sector` - Path Builder: pie/donut sector outlines
//! - `color` - Color Interpolator
//! - `regression` - Regression Estimator
//! - `angle` - Angle Layout
//! - `histogram` - Equal-width binning

pub mod angle;
pub mod color;
pub mod domain;
pub mod histogram;
pub mod normalize;
pub mod path;
pub mod regression;
pub mod sector;
pub mod ticks;

pub use angle::*;
pub use color::*;
pub use domain::*;
pub use histogram::*;
pub use normalize::*;
pub use path::*;
pub use regression::*;
pub use sector::*;
pub use ticks::*;

// Re-export palettes from chartgeo-core for convenience
pub use chartgeo_core::colors;
