//! Unit test suite entry point.

mod catalog_tests;
mod progress_tests;
mod scoring_tests;
mod session_tests;
