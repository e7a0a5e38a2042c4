//! Core transformation building blocks: export parameters, localized
//! timestamp normalization, and the cutoff filter that turns raw rows into
//! records. These are consumed by the high-level `api` module.
pub mod filter;
pub mod params;
pub mod timestamp;
