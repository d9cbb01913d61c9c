#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary manifest bytes must decode or fail, never panic
    if let Ok(entries) = flxblviz::manifest::parse_manifest(data) {
        let census = flxblviz::census::Census::from_files(Vec::new());
        let domains = flxblviz::domains::DomainMap::default();
        let when = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset();
        let snapshot = flxblviz::enrich::enrich(entries, &census, when, &domains);
        let _ = std::hint::black_box(snapshot);
    }
});
