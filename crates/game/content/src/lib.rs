//! Data-driven content definitions and loaders.
//!
//! This crate houses the bundled region dataset and provides loaders for RON
//! data files. Content is consumed read-only by the runtime and presentation
//! layers and never appears in session state.
//!
//! All loaders use game-core types directly with serde for RON
//! deserialization.

pub mod loaders;

pub use loaders::RegionLoader;
