use tracing::{debug, warn};

use crate::model::RequestState;
use crate::provider::synthetic::{self, RandomSource, ThreadRngSource};
use crate::provider::{ForecastProvider, ForecastQuery};

/// Drives one fetch cycle: Loading, then Ready or Failed.
///
/// State lives here explicitly, not in a global; each load replaces the
/// previous result wholesale. A generation counter guards against a stale
/// completion overwriting the state of a newer load.
pub struct ForecastPresenter {
    provider: Box<dyn ForecastProvider>,
    rng: Box<dyn RandomSource + Send>,
    state: RequestState,
    generation: u64,
}

impl ForecastPresenter {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self::with_random_source(provider, Box::new(ThreadRngSource))
    }

    pub fn with_random_source(
        provider: Box<dyn ForecastProvider>,
        rng: Box<dyn RandomSource + Send>,
    ) -> Self {
        Self {
            provider,
            rng,
            state: RequestState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Fetches the forecast and settles the state.
    ///
    /// Two-tier error policy: a network or HTTP-status failure is absorbed by
    /// substituting demo data (still a Ready state); anything else, such as a
    /// malformed response, becomes Failed. No automatic retry either way.
    pub async fn load_forecast(&mut self, query: &ForecastQuery) -> &RequestState {
        let generation = self.begin_load();
        debug!(generation, label = %query.location_label, "loading forecast");

        let outcome = match self.provider.fetch(query).await {
            Ok(result) => RequestState::Ready(result),
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "provider unreachable, substituting demo data");
                RequestState::Ready(synthetic::generate(query, self.rng.as_mut()))
            }
            Err(err) => RequestState::Failed(err.to_string()),
        };

        self.complete(generation, outcome);
        &self.state
    }

    fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = RequestState::Loading;
        self.generation
    }

    /// Applies a completed fetch only if no newer load has started since it
    /// began.
    fn complete(&mut self, generation: u64, outcome: RequestState) {
        if generation == self.generation {
            self.state = outcome;
        }
    }
}
