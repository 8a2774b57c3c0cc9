//! Unit tests for the task board module.

mod board_tests;
