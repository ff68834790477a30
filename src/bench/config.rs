use crate::common::{Cost, PluginOptions};

/// Default number of trials in a run.
pub const DEFAULT_TRIALS: usize = 100;
/// Default plugin to benchmark.
pub const DEFAULT_PLUGIN_NAME: &str = "sample_road_plugin";
/// Default coordinate source, a PostgreSQL connection string.
pub const DEFAULT_DBSTRING: &str = "dbname=tempus_test_db";

#[derive(Debug, Clone, PartialEq)]
/// Benchmark run configuration, fixed for every trial of a run.
pub struct Config {
    /// Number of trials to run.
    ///
    /// Defaults to [DEFAULT_TRIALS]
    pub trials: usize,
    /// Name of the plugin computing itineraries.
    ///
    /// Defaults to [DEFAULT_PLUGIN_NAME]
    pub plugin_name: String,
    /// Options passed to the plugin with every request.
    ///
    /// Defaults to `{"prepare_result": 0}`, so the plugin skips building
    /// the result geometry.
    pub plugin_options: PluginOptions,
    /// Optimizing criteria of every request.
    ///
    /// Defaults to empty, leaving the choice to the plugin.
    pub criteria: Vec<Cost>,
    /// Transport type ids the plugin may use.
    ///
    /// Defaults to empty, leaving the choice to the plugin.
    pub allowed_transport_modes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        let mut plugin_options = PluginOptions::new();
        plugin_options.insert("prepare_result".to_string(), 0.into());

        Self {
            trials: DEFAULT_TRIALS,
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
            plugin_options,
            criteria: Vec::new(),
            allowed_transport_modes: Vec::new(),
        }
    }
}
