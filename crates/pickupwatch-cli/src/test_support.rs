//! Scripted prober and recording alert sink shared by the CLI unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use pickupwatch_core::{ProbeResult, StoreAvailability, VariantId, VariantSelection};

use crate::alert::{AlertError, AlertSink};
use crate::poller::{poll_round, Prober};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Behavior {
    InStock,
    OutOfStock,
    Panic,
    Hang,
}

#[derive(Clone)]
pub(crate) struct ScriptedProber {
    script: Arc<HashMap<String, Behavior>>,
}

impl ScriptedProber {
    pub(crate) fn new(entries: &[(&str, Behavior)]) -> Self {
        Self {
            script: Arc::new(
                entries
                    .iter()
                    .map(|(id, b)| ((*id).to_string(), *b))
                    .collect(),
            ),
        }
    }
}

impl Prober for ScriptedProber {
    fn probe(&self, selection: &VariantSelection) -> impl Future<Output = ProbeResult> + Send {
        let behavior = self.script.get(selection.id().as_str()).copied();
        let selection = selection.clone();
        async move {
            match behavior {
                Some(Behavior::InStock) => ProbeResult::from_stores(
                    selection,
                    vec![StoreAvailability {
                        store_name: "Taipei 101".to_string(),
                        pickup_quote: "Today".to_string(),
                    }],
                ),
                Some(Behavior::OutOfStock) => ProbeResult::from_stores(selection, Vec::new()),
                Some(Behavior::Panic) => panic!("scripted probe panic"),
                Some(Behavior::Hang) => std::future::pending().await,
                None => ProbeResult::unknown(selection),
            }
        }
    }
}

pub(crate) fn selection(id: &str) -> VariantSelection {
    VariantSelection::new(VariantId::new(id).unwrap(), format!("model {id}"))
}

/// Runs one round and gathers its results in completion order.
pub(crate) async fn collect_round<P: Prober>(
    prober: &P,
    selections: &[VariantSelection],
) -> Vec<ProbeResult> {
    let mut results = Vec::new();
    poll_round(prober, selections, |r| results.push(r)).await;
    results
}

pub(crate) fn sorted_by_id(mut results: Vec<ProbeResult>) -> Vec<ProbeResult> {
    results.sort_by(|a, b| a.selection.id().as_str().cmp(b.selection.id().as_str()));
    results
}

/// Alert sink that remembers every notification and chime.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) notifications: RefCell<Vec<(String, String)>>,
    pub(crate) chimes: RefCell<u32>,
}

impl AlertSink for RecordingSink {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AlertError> {
        self.notifications
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }

    async fn chime(&self) -> Result<(), AlertError> {
        *self.chimes.borrow_mut() += 1;
        Ok(())
    }
}

/// Alert sink whose notifier is always missing.
pub(crate) struct BrokenSink;

impl AlertSink for BrokenSink {
    async fn notify(&self, _title: &str, _message: &str) -> Result<(), AlertError> {
        Err(AlertError::Spawn {
            program: "notify-send",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    async fn chime(&self) -> Result<(), AlertError> {
        Err(AlertError::Spawn {
            program: "afplay",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}
