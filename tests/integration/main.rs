//! Integration test suite entry point.

mod remote_http_tests;
mod scenario_tests;
