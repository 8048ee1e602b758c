//! Unit tests for the command module.

mod parser_tests;
