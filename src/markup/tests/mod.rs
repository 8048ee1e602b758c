//! Unit tests for the markup module.

mod token_tests;
