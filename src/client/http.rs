//! JSON over HTTP client.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, trace};

use super::{Client, RequestError};
use crate::common::{ItineraryRequest, Response};

/// Default endpoint of the route computation service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1/wps";

/// Posts itinerary requests to a service endpoint.
///
/// No timeout is set on the underlying client, a hung request blocks until
/// the transport gives up.
#[derive(Debug, Clone)]
pub struct HttpClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(url: impl Into<String>) -> Result<Self, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(HttpClient {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Client for HttpClient {
    fn request(&mut self, request: &ItineraryRequest) -> Result<Response, RequestError> {
        trace!(url = %self.url, ?request, "Posting itinerary request");

        let response = self.client.post(&self.url).json(request).send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            debug!(%status, "Service returned an error status");

            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body)? {
            Reply::Exception { exception } => Err(RequestError::Service(exception)),
            Reply::Response(response) => Ok(response),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Reply {
    Exception { exception: ServiceException },
    Response(Response),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Error reported by the service in place of a response.
pub struct ServiceException {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub text: String,
}

impl Display for ServiceException {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}
