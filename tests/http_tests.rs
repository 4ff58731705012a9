#![cfg(feature = "http")]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use tin_check::*;

// ---------------------------------------------------------------------------
// One-shot local HTTP server
// ---------------------------------------------------------------------------

const SERVER_BUSY_FAULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Server</faultcode>
      <faultstring>SERVER_BUSY</faultstring>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

/// Accepts one connection, answers with `status` and `body`, and returns
/// the raw request (head lower-cased, body as sent).
fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/tin", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut head = String::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            head.push_str(&line.to_ascii_lowercase());
        }

        let length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse::<usize>().unwrap())
            .unwrap_or(0);
        let mut request_body = vec![0; length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/xml; charset=utf-8\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        (head, String::from_utf8(request_body).unwrap())
    });

    (url, handle)
}

// ---------------------------------------------------------------------------
// HttpTransport against a real socket
// ---------------------------------------------------------------------------

#[test]
fn fault_body_of_http_500_is_parsed() {
    let (url, server) = serve_once("500 Internal Server Error", SERVER_BUSY_FAULT);
    let config = HttpConfig {
        timeout_secs: Some(10),
        endpoint: Some(url),
        ..HttpConfig::default()
    };

    let result = TinChecker::from_config(&config)
        .unwrap()
        .check("IT", "12345678901")
        .unwrap();

    assert!(result.is_fault);
    assert!(!result.is_valid());
    let fault = result.fault.unwrap();
    assert_eq!(fault.fault_code(), "soap:Server");
    assert_eq!(fault.kind(), FaultKind::ServerBusy);

    let (head, body) = server.join().unwrap();
    assert!(head.starts_with("post /tin http/1.1"));
    assert!(head.contains("content-type: text/xml; charset=utf-8"));
    assert_eq!(body, build_request("IT", "12345678901").unwrap());
}

#[test]
fn wrapped_client_posts_envelope() {
    let ok = r#"<Envelope><Body><checkTinResponse>
        <validSyntax>true</validSyntax><validStructure>true</validStructure>
        <requestDate>2025-03-01+01:00</requestDate>
    </checkTinResponse></Body></Envelope>"#;
    let (url, server) = serve_once("200 OK", ok);

    let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
    let checker = TinChecker::with_transport(HttpTransport::from_client(client).with_endpoint(url));
    let result = checker.check("BE", "00012511119").unwrap();

    assert!(result.is_valid());
    assert_eq!(result.request_date, chrono::NaiveDate::from_ymd_opt(2025, 3, 1));

    let (head, body) = server.join().unwrap();
    assert!(head.contains("content-type: text/xml"));
    assert!(body.contains("<countryCode>BE</countryCode>"));
    assert!(body.contains("<tinNumber>00012511119</tinNumber>"));
}

#[test]
fn non_xml_error_page_is_an_xml_error() {
    let (url, server) = serve_once("503 Service Unavailable", "upstream unavailable");
    let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
    let transport = HttpTransport::from_client(client).with_endpoint(url);

    let err = TinChecker::with_transport(transport)
        .check("FR", "3023217600053")
        .unwrap_err();
    assert!(matches!(err, TinError::Xml(_)));
    server.join().unwrap();
}
