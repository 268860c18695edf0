//! Unit tests for the playground.

mod comm_tests;
mod data_tests;
mod playground_tests;
mod settings_tests;
mod state_tests;
