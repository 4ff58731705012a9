//! Transport seam between the SOAP logic and the network.

use std::io::Read;

use crate::core::TinError;

/// Sends a request body to an endpoint and hands back the response body.
///
/// Implementations must return the body even for non-2xx statuses: the
/// TIN service reports faults with HTTP 500 and a SOAP fault payload.
pub trait Transport {
    type Body: Read;

    fn post(&self, endpoint: &str, body: &str) -> Result<Self::Body, TinError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Body = T::Body;

    fn post(&self, endpoint: &str, body: &str) -> Result<Self::Body, TinError> {
        (**self).post(endpoint, body)
    }
}

#[cfg(feature = "http")]
pub use self::http::{HttpConfig, HttpTransport};

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::{Client, Response};
    use reqwest::header::CONTENT_TYPE;
    use serde::{Deserialize, Serialize};
    use tracing::debug;

    use super::Transport;
    use crate::core::TinError;

    /// Settings for [`HttpTransport`].
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct HttpConfig {
        /// Whole-request timeout in seconds. `None` disables the timeout.
        pub timeout_secs: Option<u64>,
        /// Overrides the default `User-Agent` header.
        pub user_agent: Option<String>,
        /// Posts here instead of the endpoint the checker asks for, e.g. a
        /// test double or an internal relay.
        pub endpoint: Option<String>,
    }

    impl Default for HttpConfig {
        fn default() -> Self {
            Self {
                timeout_secs: Some(30),
                user_agent: None,
                endpoint: None,
            }
        }
    }

    impl HttpConfig {
        pub fn timeout(&self) -> Option<Duration> {
            self.timeout_secs.map(Duration::from_secs)
        }
    }

    /// Blocking HTTP transport backed by `reqwest`.
    ///
    /// Must not be used from within an async runtime; wrap the call in
    /// `spawn_blocking` there.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: Client,
        endpoint: Option<String>,
    }

    impl HttpTransport {
        pub fn new(config: &HttpConfig) -> Result<Self, TinError> {
            let mut builder = Client::builder().timeout(config.timeout());
            if let Some(ua) = &config.user_agent {
                builder = builder.user_agent(ua.clone());
            }
            Ok(Self {
                client: builder.build()?,
                endpoint: config.endpoint.clone(),
            })
        }

        /// Wrap an already configured client.
        pub fn from_client(client: Client) -> Self {
            Self {
                client,
                endpoint: None,
            }
        }

        /// Send every request to `endpoint`, whatever the caller passes.
        pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
            self.endpoint = Some(endpoint.into());
            self
        }

        pub fn endpoint(&self) -> Option<&str> {
            self.endpoint.as_deref()
        }
    }

    impl Transport for HttpTransport {
        type Body = Response;

        fn post(&self, endpoint: &str, body: &str) -> Result<Response, TinError> {
            let endpoint = self.endpoint.as_deref().unwrap_or(endpoint);
            let response = self
                .client
                .post(endpoint)
                .header(CONTENT_TYPE, "text/xml; charset=utf-8")
                .body(body.to_owned())
                .send()?;
            debug!(status = %response.status(), endpoint, "TIN service responded");
            Ok(response)
        }
    }

}
