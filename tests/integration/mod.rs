//! Integration tests

pub mod config_tests;
pub mod evaluator_tests;
