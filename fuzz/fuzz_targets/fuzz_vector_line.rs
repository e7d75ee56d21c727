//! Fuzz target for vector line parsing.
//!
//! Tests that `parse_vector_line` handles arbitrary input without panicking.

#![no_main]

use dc_core::compare::parse_vector_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return Err for malformed input
    let _ = parse_vector_line(data);
});
