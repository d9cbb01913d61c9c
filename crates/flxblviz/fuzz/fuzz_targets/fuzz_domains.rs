#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = flxblviz::domains::DomainMap::from_slice(data);
});
