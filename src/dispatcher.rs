//! Builds and times one itinerary request per trial.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::bench::Config;
use crate::client::{Client, RequestError};
use crate::common::{Cost, ItineraryRequest, PluginOptions, Point, Response};

/// Submits single step itinerary requests to a fixed plugin.
#[derive(Debug)]
pub struct Dispatcher<C> {
    client: C,
    plugin_name: String,
    plugin_options: PluginOptions,
    criteria: Vec<Cost>,
    allowed_transport_modes: Vec<u32>,
}

impl<C: Client> Dispatcher<C> {
    /// Creates a dispatcher for the plugin, options, criteria and transport
    /// modes of `config`.
    pub fn new(client: C, config: &Config) -> Self {
        Dispatcher {
            client,
            plugin_name: config.plugin_name.clone(),
            plugin_options: config.plugin_options.clone(),
            criteria: config.criteria.clone(),
            allowed_transport_modes: config.allowed_transport_modes.clone(),
        }
    }

    /// The request sent for a trial from `origin` to `destination`.
    pub fn itinerary_request(&self, origin: Point, destination: Point) -> ItineraryRequest {
        ItineraryRequest::single_step(
            self.plugin_name.clone(),
            self.plugin_options.clone(),
            origin,
            destination,
        )
        .with_criteria(self.criteria.clone())
        .with_allowed_transport_modes(self.allowed_transport_modes.clone())
    }

    /// Sends the request and returns the response with the wall-clock time
    /// spent in the client call.
    ///
    /// Errors are returned as is, never retried.
    pub fn dispatch(
        &mut self,
        origin: Point,
        destination: Point,
    ) -> Result<(Response, Duration), RequestError> {
        let request = self.itinerary_request(origin, destination);

        let start = Instant::now();
        let result = self.client.request(&request);
        let elapsed = start.elapsed();

        debug!(
            plugin = %self.plugin_name,
            ?origin,
            ?destination,
            ?elapsed,
            ok = result.is_ok(),
            "Itinerary request resolved"
        );

        result.map(|response| (response, elapsed))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}
