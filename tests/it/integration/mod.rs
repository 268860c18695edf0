//! Integration tests for the playground.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod context_menu_flow_tests;
mod preview_server_tests;
mod render_lifecycle_tests;
