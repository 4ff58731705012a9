#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic; errors are fine, panics are bugs.
    let _ = tin_check::check_with("BE", "00012511119", |_, _| Ok(data));
});
