#![no_main]

// Harness: parse_compact_count
// Focus: the compact-counter parser never panics and never yields a negative value.

use libfuzzer_sys::fuzz_target;
use rolegate_core::stats::parse_compact_count;

fuzz_target!(|input: &str| {
    if let Some(value) = parse_compact_count(input) {
        assert!(value >= 0.0);
    }
});
