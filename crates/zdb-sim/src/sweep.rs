//! Parallel sweeps over request rates.
//!
//! A sweep runs one independent simulation per requested rate, all sharing
//! one routing view.  Rates are given in normalized form: `x = 1` is the
//! critical load at which requested transport distance per unit time equals
//! what a shuttle covering one hop per unit time can serve, i.e. the
//! absolute Poisson rate is `x / (2 ⟨ℓ⟩)` with `⟨ℓ⟩` the mean shortest-path
//! length of the network.
//!
//! Each run draws from its own deterministic RNG stream derived from the
//! sweep seed and the run index, so results are reproducible regardless of
//! how Rayon schedules the runs.

use rayon::prelude::*;

use zdb_core::{NodeId, StreamRng};
use zdb_network::NetworkView;
use zdb_requests::UniformRequests;

use crate::bus::ZeroDetourBus;
use crate::error::SimResult;
use crate::policy::VehiclePolicy;
use crate::record::SimOutput;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Normalized request rates, one run each.
    pub rates: Vec<f64>,
    /// Requests per run.
    pub num_requests: usize,
    /// Master seed; each run derives its own stream from it.
    pub seed: u64,
}

/// Outcome of one run of a sweep.
pub struct RateRun {
    /// The normalized rate this run was driven at.
    pub rate: f64,
    pub output: SimResult<SimOutput>,
}

/// Run the zero-detour scheduler once per configured rate, in parallel.
///
/// A failed run does not abort the sweep; its error is reported in place.
/// The returned vector is in `config.rates` order.
pub fn sweep_request_rates(view: &NetworkView, config: &SweepConfig) -> Vec<RateRun> {
    let mean_path_length = view.mean_shortest_path_length();
    tracing::info!(
        nodes = view.node_count(),
        mode = %view.mode(),
        mean_path_length,
        runs = config.rates.len(),
        "starting rate sweep"
    );

    config
        .rates
        .par_iter()
        .enumerate()
        .map(|(run, &rate)| {
            let output = single_run(view, rate, config.num_requests, config.seed, run);
            if let Err(err) = &output {
                tracing::warn!(rate, run, %err, "run failed");
            }
            RateRun { rate, output }
        })
        .collect()
}

fn single_run(
    view: &NetworkView,
    normalized_rate: f64,
    num_requests: usize,
    seed: u64,
    run: usize,
) -> SimResult<SimOutput> {
    let mut rng = StreamRng::for_run(seed, run as u64);
    let start = NodeId(rng.gen_range(0..view.node_count() as u32));

    let rate = normalized_rate / (2.0 * view.mean_shortest_path_length());
    let requests = UniformRequests::new(view.node_count(), rate, num_requests, rng);

    let bus = ZeroDetourBus::new(view, start);
    let output = bus.run(requests)?;
    tracing::debug!(
        rate = normalized_rate,
        run,
        served = output.requests.len(),
        "run finished"
    );
    Ok(output)
}
