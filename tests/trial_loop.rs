//! End to end runs of the trial loop against stub plugins.
//!
//! Run with: cargo test --test trial_loop

use std::thread;
use std::time::Duration;

use itinerary_bench::{
    Benchmark, Client, Config, Error, ItineraryRequest, Phase, Point, Population, RandomSampler,
    RequestError, Response, Sampler,
};

/// Replays a fixed list of `(origin, destination)` indices.
#[derive(Debug)]
struct Scripted {
    picks: Vec<(usize, usize)>,
    next: usize,
}

impl Scripted {
    fn new(picks: Vec<(usize, usize)>) -> Self {
        Scripted { picks, next: 0 }
    }
}

impl Sampler for Scripted {
    fn sample_pair(&mut self, population: &Population) -> (Point, Point) {
        let (origin, destination) = self.picks[self.next % self.picks.len()];
        self.next += 1;

        (population[origin], population[destination])
    }
}

/// Answers with `time_s` after sleeping `delay`, failing on call number `fail_on` (1 based).
#[derive(Debug)]
struct StubPlugin {
    time_s: &'static str,
    delay: Duration,
    fail_on: Option<usize>,
    calls: usize,
    requests: Vec<ItineraryRequest>,
}

impl StubPlugin {
    fn new(time_s: &'static str, delay: Duration) -> Self {
        StubPlugin {
            time_s,
            delay,
            fail_on: None,
            calls: 0,
            requests: Vec::new(),
        }
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }
}

impl Client for StubPlugin {
    fn request(&mut self, request: &ItineraryRequest) -> Result<Response, RequestError> {
        self.calls += 1;
        self.requests.push(request.clone());

        if self.fail_on == Some(self.calls) {
            return Err(RequestError::Other("connection reset by peer".to_string()));
        }

        thread::sleep(self.delay);

        Ok(Response::with_metrics([("time_s", self.time_s)]))
    }
}

fn population() -> Population {
    Population::new(vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(0.0, 0.0),
    ])
    .unwrap()
}

fn config(trials: usize) -> Config {
    Config {
        trials,
        ..Default::default()
    }
}

#[test]
fn single_trial_measurements() {
    let mut plugin = StubPlugin::new("0.020", Duration::from_millis(50));

    let mut benchmark = Benchmark::new(
        config(1),
        population(),
        Scripted::new(vec![(0, 1)]),
        &mut plugin,
    );

    let mut trials = Vec::new();
    benchmark.run_with(|_, trial| trials.push(*trial)).unwrap();

    let trial = trials[0];
    assert_eq!(trial.origin, Point::new(0.0, 0.0));
    assert_eq!(trial.destination, Point::new(3.0, 4.0));
    assert_eq!(trial.distance_proxy, 25.0);
    assert_eq!(trial.algorithm_time, 0.020);
    assert!(trial.roundtrip_time >= 0.05);
    assert!(trial.roundtrip_time < 1.0);

    drop(benchmark);

    let request = &plugin.requests[0];
    assert_eq!(request.plugin_name, "sample_road_plugin");
    assert_eq!(request.origin, Point::new(0.0, 0.0));
    assert_eq!(request.steps.len(), 1);
    assert_eq!(request.steps[0].destination, Point::new(3.0, 4.0));
}

#[test]
fn failure_on_fifth_trial_keeps_first_four() {
    let mut plugin = StubPlugin::new("0.010", Duration::ZERO).failing_on(5);

    let mut benchmark = Benchmark::new(
        config(100),
        population(),
        Scripted::new(vec![(0, 1), (1, 2), (2, 2), (1, 0), (1, 1)]),
        &mut plugin,
    );

    let err = benchmark.run().unwrap_err();

    match err {
        Error::RequestFailed {
            trial,
            origin,
            destination,
            ..
        } => {
            assert_eq!(trial, 4);
            assert_eq!(origin, Point::new(3.0, 4.0));
            assert_eq!(destination, Point::new(3.0, 4.0));
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert_eq!(benchmark.phase(), Phase::Failed);

    let recorder = benchmark.recorder();
    assert_eq!(recorder.len(), 4);
    assert_eq!(recorder.roundtrip_time().len(), 4);
    assert_eq!(recorder.distance_proxy(), &[25.0, 25.0, 0.0, 25.0]);
    assert!((recorder.total_algorithm_time() - 0.04).abs() < 1e-9);

    let sum: f64 = recorder.roundtrip_time().iter().sum();
    assert!((recorder.total_roundtrip_time() - sum).abs() < 1e-9);

    drop(benchmark);
    assert_eq!(plugin.calls, 5);
}

#[test]
fn error_names_trial_and_points() {
    let plugin = StubPlugin::new("0.010", Duration::ZERO).failing_on(1);

    let mut benchmark = Benchmark::new(
        config(10),
        population(),
        Scripted::new(vec![(0, 1)]),
        plugin,
    );

    let message = benchmark.run().unwrap_err().to_string();

    assert!(message.contains("Trial 0"), "{message}");
    assert!(message.contains("(0, 0)"), "{message}");
    assert!(message.contains("(3, 4)"), "{message}");
}

#[test]
fn seeded_runs_are_repeatable() {
    let run = |seed| {
        let mut benchmark = Benchmark::new(
            config(30),
            population(),
            RandomSampler::seeded(seed),
            StubPlugin::new("0.001", Duration::ZERO),
        );
        benchmark.run().unwrap();
        benchmark.into_recorder().distance_proxy().to_vec()
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn totals_match_sequences_after_every_trial() {
    let mut benchmark = Benchmark::new(
        config(15),
        population(),
        RandomSampler::seeded(2),
        StubPlugin::new("0.003", Duration::from_millis(1)),
    );

    let mut algorithm_sum = 0.0;
    let mut roundtrip_sum = 0.0;
    let mut count = 0;
    let summary = benchmark
        .run_with(|_, trial| {
            algorithm_sum += trial.algorithm_time;
            roundtrip_sum += trial.roundtrip_time;
            count += 1;
        })
        .unwrap();

    assert_eq!(count, 15);
    assert_eq!(summary.trials, 15);
    assert!((summary.total_algorithm_time - algorithm_sum).abs() < 1e-9);
    assert!((summary.total_roundtrip_time - roundtrip_sum).abs() < 1e-9);
    assert!(summary.total_roundtrip_time >= 0.015);
}
