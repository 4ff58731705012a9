//! Client for the European Commission TIN check service.
//!
//! See <https://ec.europa.eu/taxation_customs/tin/>.

use std::io::Read;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::request::build_request;
use super::response::{Extraction, extract};
use super::transport::Transport;
use crate::core::{Fault, NodePath, TinError, parse_response, read_body};

#[cfg(feature = "http")]
use super::transport::{HttpConfig, HttpTransport};

/// SOAP endpoint of the TIN check service.
pub const ENDPOINT: &str = "https://ec.europa.eu/taxation_customs/tin/services/checkTinService";

static VALID_MATCHER: LazyLock<NodePath> = LazyLock::new(|| NodePath::new(["checkTinResponse"]));

static VALID_EXTRACTORS: LazyLock<[NodePath; 3]> = LazyLock::new(|| {
    [
        NodePath::new(["checkTinResponse", "validSyntax"]),
        NodePath::new(["checkTinResponse", "validStructure"]),
        NodePath::new(["checkTinResponse", "requestDate"]),
    ]
});

/// Result of a TIN check.
///
/// When `is_fault` is set, both validity flags are `false` and `fault`
/// carries the service fault if one could be identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The TIN matches the syntax rules of the member state.
    pub valid_syntax: bool,
    /// The TIN matches the structure rules of the member state.
    pub valid_structure: bool,
    pub is_fault: bool,
    pub fault: Option<Fault>,
    /// Date the service processed the request.
    pub request_date: Option<NaiveDate>,
}

impl CheckResult {
    fn from_extraction(extraction: Extraction) -> Self {
        match extraction {
            Extraction::Valid(values) => {
                let value = |i: usize| values.get(i).map(String::as_str).unwrap_or("");
                Self {
                    valid_syntax: value(0) == "true",
                    valid_structure: value(1) == "true",
                    is_fault: false,
                    fault: None,
                    request_date: parse_request_date(value(2)),
                }
            }
            Extraction::Fault { code, string } => Self::faulted(Some(Fault::new(code, string))),
            Extraction::Unmatched => Self::faulted(None),
        }
    }

    fn faulted(fault: Option<Fault>) -> Self {
        Self {
            valid_syntax: false,
            valid_structure: false,
            is_fault: true,
            fault,
            request_date: None,
        }
    }

    /// Both syntax and structure were accepted by the service.
    pub fn is_valid(&self) -> bool {
        !self.is_fault && self.valid_syntax && self.valid_structure
    }
}

/// Parse an `xsd:date`, ignoring any timezone suffix (`2024-01-15+01:00`).
fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    let date = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(e) => {
            warn!(raw, error = %e, "unparseable requestDate in TIN response");
            None
        }
    }
}

/// Check a TIN using a caller-supplied fetch function.
///
/// `fetch` receives the endpoint URL and the SOAP request body and returns
/// the raw response body. It is not called when an argument is empty.
///
/// # Errors
///
/// [`TinError::MissingArgument`] for an empty country code or TIN,
/// [`TinError::Xml`] if the response is not well-formed UTF-8 XML or nests
/// deeper than [`MAX_DEPTH`](crate::core::MAX_DEPTH), and whatever
/// `fetch` itself returns.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let body = r#"<Envelope><Body><checkTinResponse>
///     <validSyntax>true</validSyntax><validStructure>true</validStructure>
/// </checkTinResponse></Body></Envelope>"#;
///
/// let result = tin_check::check_with("BE", "00012511119", |_endpoint, _request| {
///     Ok(Cursor::new(body))
/// })?;
/// assert!(result.is_valid());
/// # Ok::<(), tin_check::TinError>(())
/// ```
pub fn check_with<F, R>(
    country_code: &str,
    tin_number: &str,
    fetch: F,
) -> Result<CheckResult, TinError>
where
    F: FnOnce(&str, &str) -> Result<R, TinError>,
    R: Read,
{
    // Rejects empty arguments before the transport is touched.
    let request = build_request(country_code, tin_number)?;

    // TINs are personal data; only the country is logged.
    debug!(country_code, endpoint = ENDPOINT, "sending checkTin request");
    let body = read_body(fetch(ENDPOINT, &request)?)?;
    debug!(bytes = body.len(), "received checkTin response");
    let doc = parse_response(&body)?;

    let extraction = extract(&doc, &VALID_MATCHER, VALID_EXTRACTORS.as_slice());
    Ok(CheckResult::from_extraction(extraction))
}

/// Check a TIN with a one-off default HTTP transport.
///
/// `country_code` is the 2-letter code used by the service. Note that
/// Greece is `EL`, not `GR`.
///
/// # Errors
///
/// See [`check_with`]; HTTP failures surface as [`TinError::Http`].
#[cfg(feature = "http")]
pub fn check(country_code: &str, tin_number: &str) -> Result<CheckResult, TinError> {
    let transport = HttpTransport::new(&HttpConfig::default())?;
    check_with(country_code, tin_number, |endpoint, body| {
        transport.post(endpoint, body)
    })
}

/// A reusable checker bound to one transport.
#[derive(Debug, Clone)]
pub struct TinChecker<T> {
    transport: T,
}

impl<T: Transport> TinChecker<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// See [`check_with`].
    pub fn check(&self, country_code: &str, tin_number: &str) -> Result<CheckResult, TinError> {
        check_with(country_code, tin_number, |endpoint, body| {
            self.transport.post(endpoint, body)
        })
    }
}

#[cfg(feature = "http")]
impl TinChecker<HttpTransport> {
    /// Checker using [`HttpTransport`] with default settings.
    pub fn new() -> Result<Self, TinError> {
        Self::from_config(&HttpConfig::default())
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, TinError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}
