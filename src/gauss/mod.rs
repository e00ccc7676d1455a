//! Gauss-Krüger projection mathematics
//!
//! This module provides the pure projection functions used to convert
//! between geodetic WGS84 coordinates and the Swedish grid systems.

mod kruger;

pub use self::kruger::{geodetic_to_grid, grid_to_geodetic, GridParams};
