//! Request/response client of the route computation service.

mod http;

pub use http::{HttpClient, ServiceException, DEFAULT_SERVICE_URL};

use crate::common::{ItineraryRequest, Response};

/// Submits an [ItineraryRequest] and blocks until the plugin responds.
pub trait Client {
    fn request(&mut self, request: &ItineraryRequest) -> Result<Response, RequestError>;
}

impl<C: Client + ?Sized> Client for &mut C {
    fn request(&mut self, request: &ItineraryRequest) -> Result<Response, RequestError> {
        (**self).request(request)
    }
}

impl<C: Client + ?Sized> Client for Box<C> {
    fn request(&mut self, request: &ItineraryRequest) -> Result<Response, RequestError> {
        (**self).request(request)
    }
}

#[derive(thiserror::Error, Debug)]
/// Transport or server side failure of a single request.
pub enum RequestError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Service exception: {0}")]
    Service(ServiceException),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failures of clients other than [HttpClient].
    #[error("{0}")]
    Other(String),
}
