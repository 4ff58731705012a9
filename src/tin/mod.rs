//! TIN checks against the EU TIN web service, plus offline format helpers.
//!
//! # Example
//!
//! ```ignore
//! use tin_check::tin::*;
//!
//! // Remote check (blocking, requires network)
//! let result = check("IT", "RSSMRA80A01H501U")?;
//! if let Some(fault) = &result.fault {
//!     eprintln!("service fault: {fault} ({})", fault.kind());
//! }
//!
//! // Offline Portuguese NIF check
//! assert!(validate_nif_pt("129792659").is_ok());
//! ```

mod checker;
mod format;
mod request;
mod response;
mod transport;

#[cfg(feature = "http")]
pub use checker::check;
pub use checker::{CheckResult, ENDPOINT, TinChecker, check_with};
pub use format::{PT_FINAL_CONSUMER_NIF, validate_nif_pt, validate_taxpayer_nif_pt};
pub use request::{SOAP_ENV_NAMESPACE, TIN_TYPES_NAMESPACE, build_request, request_template};
pub use response::{Extraction, extract};
#[cfg(feature = "http")]
pub use transport::{HttpConfig, HttpTransport};
pub use transport::Transport;
