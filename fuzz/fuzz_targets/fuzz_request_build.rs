#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (country_code, tin_number) = input;
    // Control characters are not representable in XML 1.0 text.
    if tin_number.chars().any(char::is_control) || country_code.chars().any(char::is_control) {
        return;
    }
    if let Ok(xml) = tin_check::build_request(country_code, tin_number) {
        // Whatever goes in must come back out of a well-formed envelope.
        let doc = tin_check::parse_response(&xml).expect("request must reparse");
        let tin = tin_check::NodePath::new(["checkTin", "tinNumber"]).text(&doc);
        assert_eq!(tin, tin_number.trim());
    }
});
