//! SOAP fault model for the TIN service.
//!
//! The service reports business errors as SOAP faults whose `faultstring`
//! carries a symbolic error name (e.g. `INVALID_INPUT`). The set of names is
//! not versioned by the service, so unknown values map to [`FaultKind::Other`]
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known fault strings returned by the TIN service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultKind {
    /// The country code or TIN was rejected as input.
    InvalidInput,
    /// The member state holds no information for this TIN.
    NoInformation,
    /// The service or the member state back-end is down.
    ServiceUnavailable,
    /// Too many concurrent requests.
    ServerBusy,
    /// The member state did not answer in time.
    Timeout,
    /// Any fault string not listed above, including an empty one.
    #[default]
    Other,
}

impl FaultKind {
    /// Map a raw fault string onto a kind. Never fails.
    pub fn from_fault_string(s: &str) -> Self {
        match s.trim() {
            "INVALID_INPUT" => Self::InvalidInput,
            "NO_INFORMATION" => Self::NoInformation,
            "SERVICE_UNAVAILABLE" => Self::ServiceUnavailable,
            "SERVER_BUSY" => Self::ServerBusy,
            "TIMEOUT" => Self::Timeout,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::NoInformation => "NO_INFORMATION",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServerBusy => "SERVER_BUSY",
            Self::Timeout => "TIMEOUT",
            Self::Other => "OTHER",
        }
    }

    /// Whether the same request may succeed later without changing the input.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable | Self::ServerBusy | Self::Timeout
        )
    }
}

impl From<&str> for FaultKind {
    fn from(s: &str) -> Self {
        Self::from_fault_string(s)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault returned by the service in place of a check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    fault_code: String,
    fault_string: String,
    kind: FaultKind,
}

impl Fault {
    pub fn new(fault_code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        let fault_string = fault_string.into();
        let kind = FaultKind::from_fault_string(&fault_string);
        Self {
            fault_code: fault_code.into(),
            fault_string,
            kind,
        }
    }

    /// Raw `faultcode` value, e.g. `soap:Server`.
    pub fn fault_code(&self) -> &str {
        &self.fault_code
    }

    /// Raw `faultstring` value.
    pub fn fault_string(&self) -> &str {
        &self.fault_string
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.fault_code, self.fault_string)
    }
}
