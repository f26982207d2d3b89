//! Property tests for the grid simplifier and the lint pipeline.

mod determinism_tests;
mod redundancy_tests;
