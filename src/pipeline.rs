//! Analysis pipeline
//!
//! Coordinates a whole run: fans out one classification per declared
//! dependency with bounded concurrency, keeps the verdicts in declaration
//! order, and folds the summary counters once all verdicts are in.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::changelog::{NoteLocator, ReleaseNoteLocator};
use crate::classify::Classifier;
use crate::domain::{DependencyDeclaration, DependencyVerdict, RunSummary};
use crate::error::RegistryError;
use crate::progress::Progress;
use crate::registry::{HttpClient, NpmRegistry, Registry};

/// Default concurrency limit for registry requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Everything a run produced
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// One verdict per declared dependency, in declaration order
    pub verdicts: Vec<DependencyVerdict>,
    /// Counters folded from the verdicts
    pub summary: RunSummary,
}

/// Coordinates classification of a whole manifest
pub struct Pipeline {
    registry: Box<dyn Registry>,
    locator: Box<dyn NoteLocator>,
    classifier: Classifier,
    semaphore: Arc<Semaphore>,
}

impl Pipeline {
    /// Creates a pipeline talking to the given registry base URL
    pub fn new(
        registry_url: &str,
        stale_after_months: f64,
        concurrency: usize,
    ) -> Result<Self, RegistryError> {
        let client = HttpClient::new()?;
        Ok(Self::with_components(
            Box::new(NpmRegistry::with_base_url(client.clone(), registry_url)),
            Box::new(ReleaseNoteLocator::new(client)),
            Classifier::new(stale_after_months),
            concurrency,
        ))
    }

    /// Creates a pipeline from its parts (for testing)
    pub fn with_components(
        registry: Box<dyn Registry>,
        locator: Box<dyn NoteLocator>,
        classifier: Classifier,
        concurrency: usize,
    ) -> Self {
        Self {
            registry,
            locator,
            classifier,
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Analyzes every declaration and returns the ordered report
    ///
    /// Classifications run concurrently up to the configured limit, but the
    /// report lists verdicts in the order the dependencies were declared.
    pub async fn run(
        &self,
        declarations: &[DependencyDeclaration],
        show_progress: bool,
    ) -> RunReport {
        let mut progress = Progress::new(show_progress);
        progress.start(declarations.len() as u64, "Checking dependencies");

        let futures = declarations.iter().map(|declaration| {
            let progress = &progress;
            async move {
                let _permit = self.semaphore.acquire().await.unwrap();
                progress.set_message(&format!("Checking {}", declaration.name));
                debug!("analyzing {}", declaration);
                let verdict = self
                    .classifier
                    .classify(declaration, self.registry.as_ref(), self.locator.as_ref())
                    .await;
                progress.inc();
                verdict
            }
        });

        let verdicts = join_all(futures).await;
        progress.finish_and_clear();

        let summary = RunSummary::from_verdicts(&verdicts);
        RunReport { verdicts, summary }
    }
}
