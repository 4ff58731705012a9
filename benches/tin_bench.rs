use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tin_check::*;

const VALID_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/">
  <env:Header/>
  <env:Body>
    <ns2:checkTinResponse xmlns:ns2="urn:ec.europa.eu:taxud:tin:services:checkTin:types">
      <ns2:countryCode>BE</ns2:countryCode>
      <ns2:tinNumber>00012511119</ns2:tinNumber>
      <ns2:requestDate>2024-06-15+02:00</ns2:requestDate>
      <ns2:validStructure>true</ns2:validStructure>
      <ns2:validSyntax>true</ns2:validSyntax>
    </ns2:checkTinResponse>
  </env:Body>
</env:Envelope>"#;

const FAULT_RESPONSE: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body><soap:Fault>
    <faultcode>soap:Server</faultcode><faultstring>SERVER_BUSY</faultstring>
  </soap:Fault></soap:Body>
</soap:Envelope>"#;

fn bench_build_request(c: &mut Criterion) {
    c.bench_function("build_request", |b| {
        b.iter(|| build_request(black_box("BE"), black_box("00012511119")).unwrap())
    });
}

fn bench_parse_response(c: &mut Criterion) {
    c.bench_function("parse_valid_response", |b| {
        b.iter(|| {
            parse_response(black_box(VALID_RESPONSE)).map(|doc| doc.descendants().count())
        })
    });
}

fn bench_check_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_with");
    group.bench_function("valid", |b| {
        b.iter(|| {
            check_with("BE", "00012511119", |_, _| Ok(Cursor::new(VALID_RESPONSE))).unwrap()
        })
    });
    group.bench_function("fault", |b| {
        b.iter(|| {
            check_with("BE", "00012511119", |_, _| Ok(Cursor::new(FAULT_RESPONSE))).unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_request,
    bench_parse_response,
    bench_check_pipeline
);
criterion_main!(benches);
