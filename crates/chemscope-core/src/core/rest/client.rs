use super::endpoints::Endpoints;
use super::error::RestError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The single seam between lookup logic and the network.
///
/// One blocking `GET` returning the response body as text. Implementations
/// map non-success statuses to [`RestError::Status`] so callers never see a
/// partial success. Tests substitute canned implementations.
pub trait Transport {
    /// Performs a blocking GET and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and non-success status codes.
    fn get(&self, url: &str) -> Result<String, RestError>;
}

/// Production transport backed by a blocking HTTP client.
///
/// No timeout is configured unless one is supplied; the HTTP library's own
/// default applies, matching the sequential blocking execution model where a
/// slow request simply delays the rest of the pipeline.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the transport, optionally bounding each request's duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Option<Duration>) -> Result<Self, RestError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("chemscope/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, RestError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

/// A compound database client: a transport plus the endpoint builders.
///
/// This is the handle every lookup operation takes. It owns no state beyond
/// the connection pool inside the transport; nothing is cached between calls.
pub struct PugClient {
    transport: Box<dyn Transport>,
    endpoints: Endpoints,
}

impl PugClient {
    /// Creates a client against `endpoints` using the production transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, RestError> {
        Ok(Self {
            transport: Box::new(HttpTransport::new(timeout)?),
            endpoints,
        })
    }

    /// Creates a client with a caller-supplied transport (used by tests).
    pub fn with_transport(transport: Box<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// The endpoint builders this client requests against.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches `url` and deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not match `D`.
    pub fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, RestError> {
        let body = self.transport.get(url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches `url` and returns the raw text body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub fn get_text(&self, url: &str) -> Result<String, RestError> {
        self.transport.get(url)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Route, client_with};
    use super::*;

    #[test]
    fn get_json_decodes_canned_body() {
        #[derive(serde::Deserialize)]
        struct Probe {
            value: u32,
        }

        let client = client_with(vec![("probe", Route::Body(r#"{"value": 7}"#))]);
        let probe: Probe = client.get_json("http://example.test/probe").unwrap();
        assert_eq!(probe.value, 7);
    }

    #[test]
    fn get_json_maps_malformed_body_to_decode_error() {
        let client = client_with(vec![("probe", Route::Body("not json"))]);
        let result: Result<serde_json::Value, _> = client.get_json("http://example.test/probe");
        assert!(matches!(result, Err(RestError::Decode(_))));
    }

    #[test]
    fn non_success_status_surfaces_as_status_error() {
        let client = client_with(vec![("probe", Route::Status(404))]);
        let result = client.get_text("http://example.test/probe");
        match result {
            Err(RestError::Status { status, url }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "http://example.test/probe");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
