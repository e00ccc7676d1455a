//! Unit tests for the CRS modules

mod coordinate_tests;
mod transform_tests;
