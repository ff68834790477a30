//! Trial loop driving sampling, dispatch and recording.

mod config;

use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::client::Client;
use crate::dispatcher::Dispatcher;
use crate::recorder::{Recorder, Sample, Summary, Trial};
use crate::sampler::{RandomSampler, Sampler};
use crate::source::{CoordinateSource, Population};
use crate::{Error, Result};

pub use config::{Config, DEFAULT_DBSTRING, DEFAULT_PLUGIN_NAME, DEFAULT_TRIALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle of a [Benchmark].
pub enum Phase {
    /// Population loaded and sampler seeded, no trial started yet.
    Initializing,
    Running,
    /// Every trial completed.
    Finished,
    /// A trial failed and the run stopped.
    Failed,
}

/// A fixed number of strictly sequential trials against one plugin.
#[derive(Debug)]
pub struct Benchmark<S, C> {
    trials: usize,
    population: Population,
    sampler: S,
    dispatcher: Dispatcher<C>,
    recorder: Recorder,
    phase: Phase,
}

impl<C: Client> Benchmark<RandomSampler<StdRng>, C> {
    /// Loads the population from `source` and seeds the sampler from system entropy.
    pub fn initialize<P>(config: Config, source: &mut P, client: C) -> Result<Self>
    where
        P: CoordinateSource + ?Sized,
    {
        let population = source.load_points()?;

        Ok(Benchmark::new(
            config,
            population,
            RandomSampler::from_entropy(),
            client,
        ))
    }
}

impl<S: Sampler, C: Client> Benchmark<S, C> {
    pub fn new(config: Config, population: Population, sampler: S, client: C) -> Self {
        Benchmark {
            trials: config.trials,
            population,
            sampler,
            dispatcher: Dispatcher::new(client, &config),
            recorder: Recorder::with_capacity(config.trials),
            phase: Phase::Initializing,
        }
    }

    // === Getters ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Measurements of the trials completed so far.
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn into_recorder(self) -> Recorder {
        self.recorder
    }

    // === Public Methods ===

    /// Runs every trial, see [Benchmark::run_with].
    pub fn run(&mut self) -> Result<Summary> {
        self.run_with(|_, _| {})
    }

    /// Runs every trial in order, calling `on_trial` with the zero based index
    /// of each trial once it is recorded.
    ///
    /// The first failing trial moves the benchmark to [Phase::Failed] and its
    /// error is returned. Trials recorded before it stay in [Benchmark::recorder].
    pub fn run_with<F>(&mut self, mut on_trial: F) -> Result<Summary>
    where
        F: FnMut(usize, &Trial),
    {
        if self.phase != Phase::Initializing {
            return Err(Error::NotRunnable(self.phase));
        }

        self.phase = Phase::Running;
        info!(
            trials = self.trials,
            points = self.population.len(),
            "Benchmark running"
        );

        for index in 0..self.trials {
            match self.trial(index) {
                Ok(trial) => on_trial(index, &trial),
                Err(err) => {
                    self.phase = Phase::Failed;
                    error!(
                        trial = index,
                        completed = self.recorder.len(),
                        %err,
                        "Benchmark failed"
                    );

                    return Err(err);
                }
            }
        }

        self.phase = Phase::Finished;

        let summary = self.recorder.summary();
        info!(%summary, "Benchmark finished");

        Ok(summary)
    }

    // === Private Methods ===

    fn trial(&mut self, index: usize) -> Result<Trial> {
        let (origin, destination) = self.sampler.sample_pair(&self.population);
        let sample = Sample::new(origin, destination);

        debug!(
            trial = index,
            ?origin,
            ?destination,
            distance_proxy = sample.distance_proxy,
            "Dispatching itinerary request"
        );

        let (response, roundtrip) =
            self.dispatcher
                .dispatch(origin, destination)
                .map_err(|source| Error::RequestFailed {
                    trial: index,
                    origin,
                    destination,
                    source,
                })?;

        self.recorder
            .record(sample, &response, roundtrip)
            .map_err(|source| Error::MalformedMetrics {
                trial: index,
                origin,
                destination,
                source,
            })
    }
}
