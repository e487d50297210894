//! karte-core
//!
//! Pure domain types for the Karte home-visit nursing records system.
//! No I/O dependency — this is the shared vocabulary between the AI output
//! structuring pipeline, the browser UI, and the persistence layer.

pub mod models;
