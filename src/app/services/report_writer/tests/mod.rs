//! Tests for output assembly

mod progress_tests;
