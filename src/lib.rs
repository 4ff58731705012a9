//! # tin-check
//!
//! Client for the European Commission TIN check web service
//! (<https://ec.europa.eu/taxation_customs/tin/>).
//!
//! A check sends a SOAP `checkTin` request carrying a country code and a
//! tax identification number, and turns the response into a
//! [`CheckResult`]: either the syntax/structure verdict of the member
//! state, or the SOAP fault the service returned instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use tin_check::{FaultKind, check_with};
//!
//! let fault = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
//!   <soap:Body><soap:Fault>
//!     <faultcode>soap:Server</faultcode><faultstring>INVALID_INPUT</faultstring>
//!   </soap:Fault></soap:Body>
//! </soap:Envelope>"#;
//!
//! let result = check_with("XX", "123", |_, _| Ok(Cursor::new(fault))).unwrap();
//! assert!(result.is_fault);
//! assert_eq!(result.fault.unwrap().kind(), FaultKind::InvalidInput);
//! ```
//!
//! The transport is pluggable: pass any closure to [`check_with`], or
//! implement [`Transport`] and use a [`TinChecker`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `http` (default) | Blocking `reqwest` transport, [`check`] and `TinChecker::new` |

pub mod core;
pub mod tin;

/// Parser behind [`parse_response`] and [`extract`].
pub use roxmltree;

// Re-export the public API at crate root for convenience
pub use crate::core::*;
pub use crate::tin::*;
