//! Fan-out of one availability round.
//!
//! Each selection is probed on its own task. Results are yielded in
//! completion order, and a round always yields exactly one result per
//! selection: a probe task that panics is reported as `Unknown`.

use std::collections::HashMap;
use std::future::Future;

use pickupwatch_core::{ProbeResult, VariantSelection};
use pickupwatch_fulfillment::FulfillmentClient;
use tokio::task::{Id, JoinSet};

/// Probes one selection; never fails, unreachable outcomes become `Unknown`.
pub(crate) trait Prober: Clone + Send + Sync + 'static {
    fn probe(&self, selection: &VariantSelection) -> impl Future<Output = ProbeResult> + Send;
}

impl Prober for FulfillmentClient {
    fn probe(&self, selection: &VariantSelection) -> impl Future<Output = ProbeResult> + Send {
        FulfillmentClient::probe(self, selection)
    }
}

/// One in-flight round. Dropping it aborts every outstanding probe.
pub(crate) struct Round {
    tasks: JoinSet<ProbeResult>,
    pending: HashMap<Id, VariantSelection>,
}

impl Round {
    pub(crate) fn start<P: Prober>(prober: &P, selections: &[VariantSelection]) -> Self {
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::with_capacity(selections.len());
        for selection in selections {
            let prober = prober.clone();
            let owned = selection.clone();
            let handle = tasks.spawn(async move { prober.probe(&owned).await });
            pending.insert(handle.id(), selection.clone());
        }
        Self { tasks, pending }
    }

    /// Next finished probe, or `None` once every selection has reported.
    pub(crate) async fn next(&mut self) -> Option<ProbeResult> {
        match self.tasks.join_next_with_id().await? {
            Ok((id, result)) => {
                self.pending.remove(&id);
                Some(result)
            }
            Err(e) => {
                let selection = self.pending.remove(&e.id())?;
                tracing::error!(
                    variant = %selection.id(),
                    error = %e,
                    "probe task failed"
                );
                Some(ProbeResult::unknown(selection))
            }
        }
    }
}

/// Probes every selection once, handing each result to `on_result` as it
/// completes. Returns how many results were delivered.
pub(crate) async fn poll_round<P, F>(
    prober: &P,
    selections: &[VariantSelection],
    mut on_result: F,
) -> usize
where
    P: Prober,
    F: FnMut(ProbeResult),
{
    let mut round = Round::start(prober, selections);
    let mut delivered = 0;
    while let Some(result) = round.next().await {
        on_result(result);
        delivered += 1;
    }
    delivered
}
