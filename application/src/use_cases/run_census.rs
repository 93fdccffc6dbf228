//! Run Census use case
//!
//! Probes every endpoint concurrently and collects the outcomes.

use crate::config::CensusParams;
use crate::ports::model_inventory::ModelInventoryGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use census_domain::{Endpoint, ProbeError, ProbeResult, ResultSet};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a census run
#[derive(Error, Debug)]
pub enum RunCensusError {
    #[error("No valid URLs to check")]
    NoEndpoints,

    #[error("Probe task for {endpoint} failed: {reason}")]
    ProbeTaskFailed { endpoint: String, reason: String },
}

/// Input for the RunCensus use case
#[derive(Debug, Clone)]
pub struct RunCensusInput {
    /// Endpoints to probe, in input order
    pub endpoints: Vec<Endpoint>,
    /// Fan-out control
    pub params: CensusParams,
}

impl RunCensusInput {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            params: CensusParams::default(),
        }
    }

    pub fn with_params(mut self, params: CensusParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for probing a list of endpoints
pub struct RunCensusUseCase<G: ModelInventoryGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelInventoryGateway + 'static> RunCensusUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCensusInput) -> Result<ResultSet, RunCensusError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Every probe is spawned before any is awaited. Per-endpoint failures
    /// become error reports in the result set; a probe task that panics
    /// aborts the whole run and cancels the remaining probes.
    pub async fn execute_with_progress(
        &self,
        input: RunCensusInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResultSet, RunCensusError> {
        if input.endpoints.is_empty() {
            return Err(RunCensusError::NoEndpoints);
        }

        let total = input.endpoints.len();
        info!(
            "Starting census of {} endpoints (concurrency: {})",
            total,
            input
                .params
                .concurrency
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
        );
        progress.on_census_start(total);

        let limit = input
            .params
            .concurrency
            .map(|n| Arc::new(Semaphore::new(n.clamp(1, Semaphore::MAX_PERMITS))));
        let deadline = input.params.probe_timeout;

        let mut join_set = JoinSet::new();
        let mut launched = Vec::with_capacity(total);

        for (index, endpoint) in input.endpoints.into_iter().enumerate() {
            progress.on_probe_start(&endpoint);

            let gateway = Arc::clone(&self.gateway);
            let limit = limit.clone();
            let task_endpoint = endpoint.clone();

            let handle = join_set.spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = Self::probe(&gateway, &task_endpoint, deadline).await;
                (index, task_endpoint, ProbeResult::from(outcome))
            });
            launched.push((handle.id(), endpoint));
        }

        let mut finished = Vec::with_capacity(total);

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, endpoint, result)) => {
                    progress.on_probe_complete(&endpoint, &result);
                    finished.push((index, endpoint, result));
                }
                Err(e) => {
                    let endpoint = launched
                        .iter()
                        .find(|(id, _)| *id == e.id())
                        .map(|(_, endpoint)| endpoint.to_string())
                        .unwrap_or_default();
                    warn!("Probe task for {} failed: {}", endpoint, e);
                    return Err(RunCensusError::ProbeTaskFailed {
                        endpoint,
                        reason: e.to_string(),
                    });
                }
            }
        }

        finished.sort_by_key(|(index, _, _)| *index);
        let results: ResultSet = finished
            .into_iter()
            .map(|(_, endpoint, result)| (endpoint, result))
            .collect();

        let summary = results.summary();
        info!(
            "Census complete: {} reachable, {} failed, {} models",
            summary.reachable, summary.failed, summary.models
        );
        progress.on_census_complete(&results);

        Ok(results)
    }

    /// One probe, bounded by the optional deadline
    async fn probe(
        gateway: &G,
        endpoint: &Endpoint,
        deadline: Option<Duration>,
    ) -> Result<Vec<String>, ProbeError> {
        debug!("Probing {}", endpoint);

        let outcome = match deadline {
            Some(limit) => tokio::time::timeout(limit, gateway.list_models(endpoint))
                .await
                .unwrap_or(Err(ProbeError::Timeout)),
            None => gateway.list_models(endpoint).await,
        };

        match &outcome {
            Ok(models) => debug!("{} reported {} models", endpoint, models.len()),
            Err(e) => warn!("{} failed ({}): {}", endpoint, e.kind(), e),
        }
        outcome
    }
}
