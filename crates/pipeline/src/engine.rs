//! Pipeline orchestration
//!
//! The engine owns the catalog, the threshold store, the inference backend,
//! and the latest committed run. A run is a pure function of (catalog,
//! thresholds, backend); the engine serializes runs with a generation
//! counter so a stale run can never overwrite a newer one, and recomputes
//! the derived views on every commit.

use catalog::Catalog;

use crate::analysis::{AnalysisOutcome, AnalysisResult, CandidateAnalysis, Stage2Outcome};
use crate::inference::{InferenceBackend, SyntheticInference};
use crate::stage1::evaluate_stage1;
use crate::stage2::evaluate_stage2;
use crate::thresholds::{ThresholdSet, ThresholdStore};
use crate::views::{matches_search, sort_rows, DerivedViews, SortKey, SortOrder, StatusSummary, ViewKind};

/// Token for a started run
///
/// Captures the generation number and a threshold snapshot at start time;
/// committing with an old ticket is a no-op, which is how a newer run
/// supersedes an unfinished one.
#[derive(Debug, Clone, Copy)]
pub struct RunTicket {
    /// Generation number of this run
    pub generation: u64,
    /// Thresholds frozen at run start
    pub thresholds: ThresholdSet,
}

/// Candidate-evaluation pipeline orchestrator
pub struct Engine<B: InferenceBackend = SyntheticInference> {
    catalog: Catalog,
    backend: B,
    store: ThresholdStore,
    outcomes: Vec<AnalysisOutcome>,
    views: DerivedViews,
    generation: u64,
    committed: u64,
    active_view: ViewKind,
    search: String,
    sort_key: SortKey,
    sort_order: SortOrder,
}

impl Engine<SyntheticInference> {
    /// Create an engine over a catalog with the synthetic backend and
    /// default thresholds, and run the pipeline once
    pub fn new(catalog: Catalog) -> Self {
        Self::with_backend(catalog, SyntheticInference::new())
    }
}

impl<B: InferenceBackend> Engine<B> {
    /// Create an engine with an explicit backend and run the pipeline once
    ///
    /// Catalog load is a trigger: the initial run happens here, so a fresh
    /// engine already has consistent views.
    pub fn with_backend(catalog: Catalog, backend: B) -> Self {
        let mut engine = Self {
            catalog,
            backend,
            store: ThresholdStore::new(),
            outcomes: Vec::new(),
            views: DerivedViews::default(),
            generation: 0,
            committed: 0,
            active_view: ViewKind::All,
            search: String::new(),
            sort_key: SortKey::Name,
            sort_order: SortOrder::Ascending,
        };
        engine.run_now();
        engine
    }

    /// The catalog this engine evaluates
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current thresholds
    pub fn thresholds(&self) -> ThresholdSet {
        self.store.current()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Update the ESI gate; invalid input is rejected and the prior value
    /// retained
    pub fn set_esi_threshold(&mut self, value: f64) -> bool {
        self.store.set_esi(value)
    }

    /// Update the signal gate
    pub fn set_signal_threshold(&mut self, value: f64) -> bool {
        self.store.set_signal(value)
    }

    /// Update the habitability gate
    pub fn set_habitability_threshold(&mut self, value: f64) -> bool {
        self.store.set_habitability(value)
    }

    /// Settle pending threshold writes
    ///
    /// Any number of writes since the last commit coalesce into at most one
    /// pipeline run. Returns whether a run happened. The host drives the
    /// settling interval (a debounce timer in the browser).
    pub fn commit(&mut self) -> bool {
        if self.store.take_dirty() {
            self.run_now();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Run the full pipeline synchronously and commit the result
    pub fn run_now(&mut self) {
        let ticket = self.begin_run();
        let outcomes = Self::evaluate(&self.catalog, &ticket.thresholds, &self.backend);
        self.commit_run(ticket, outcomes);
    }

    /// Start a run, freezing the current thresholds
    ///
    /// Hosts that evaluate off the main path use this with
    /// [`Engine::evaluate`] and [`Engine::commit_run`]; starting another run
    /// before committing supersedes this one.
    pub fn begin_run(&mut self) -> RunTicket {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "pipeline run started");
        RunTicket {
            generation: self.generation,
            thresholds: self.store.current(),
        }
    }

    /// Evaluate every candidate against thresholds
    ///
    /// Pure: no engine state is touched, each candidate draws from its own
    /// reseeded generator, and stage 2 runs exactly for stage-1 survivors.
    /// Evaluations are mutually independent, so a host may partition this
    /// work across tasks without affecting any output bit.
    pub fn evaluate(
        catalog: &Catalog,
        thresholds: &ThresholdSet,
        backend: &B,
    ) -> Vec<AnalysisOutcome> {
        if !backend.is_available() {
            tracing::warn!("inference backend unavailable; run degraded");
            return vec![AnalysisOutcome::Unavailable; catalog.len()];
        }
        catalog
            .iter()
            .map(|record| {
                let stage1 = evaluate_stage1(record, thresholds, backend);
                let stage2 = if stage1.passed {
                    Stage2Outcome::Evaluated(evaluate_stage2(record, thresholds, backend))
                } else {
                    Stage2Outcome::NotRun
                };
                AnalysisOutcome::Complete(AnalysisResult { stage1, stage2 })
            })
            .collect()
    }

    /// Commit a finished run unless a newer one has started
    ///
    /// Returns whether the run was committed. Only the most recently started
    /// run may commit; anything older is discarded.
    pub fn commit_run(&mut self, ticket: RunTicket, outcomes: Vec<AnalysisOutcome>) -> bool {
        if ticket.generation < self.generation {
            tracing::info!(
                generation = ticket.generation,
                newest = self.generation,
                "discarded superseded pipeline run"
            );
            return false;
        }
        self.views = DerivedViews::compute(&outcomes);
        self.outcomes = outcomes;
        self.committed = ticket.generation;
        tracing::info!(
            generation = ticket.generation,
            total = self.views.total(),
            stage1_passed = self.views.stage1_passed_count(),
            shortlisted = self.views.shortlist_count(),
            "pipeline run committed"
        );
        true
    }

    /// Generation of the latest committed run
    pub fn committed_generation(&self) -> u64 {
        self.committed
    }

    /// Outcomes of the latest committed run, in catalog order
    pub fn outcomes(&self) -> &[AnalysisOutcome] {
        &self.outcomes
    }

    // =========================================================================
    // View-layer surface
    // =========================================================================

    /// Select the active view
    pub fn set_active_view(&mut self, kind: ViewKind) {
        self.active_view = kind;
    }

    /// The active view
    pub fn active_view(&self) -> ViewKind {
        self.active_view
    }

    /// Set the free-text search query (applies to the active view only)
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Set the sort key and direction
    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.sort_key = key;
        self.sort_order = order;
    }

    /// Rows of the active view with search and sort applied
    pub fn rows(&self) -> Vec<CandidateAnalysis> {
        let mut rows: Vec<CandidateAnalysis> = self
            .views
            .indices(self.active_view)
            .into_iter()
            .filter(|&i| matches_search(&self.catalog.records()[i].name, &self.search))
            .map(|i| self.row(i))
            .collect();
        sort_rows(&mut rows, self.sort_key, self.sort_order);
        rows
    }

    /// Rows of any view in catalog order, without search or sort
    pub fn view_rows(&self, kind: ViewKind) -> Vec<CandidateAnalysis> {
        self.views
            .indices(kind)
            .into_iter()
            .map(|i| self.row(i))
            .collect()
    }

    /// Detail payload for one candidate
    pub fn detail(&self, name: &str) -> Option<CandidateAnalysis> {
        self.catalog.index_of(name).map(|i| self.row(i))
    }

    /// Status-bar summary of the latest committed run
    pub fn status(&self) -> StatusSummary {
        StatusSummary {
            total: self.views.total(),
            stage1_passed_count: self.views.stage1_passed_count(),
            stage2_evaluated_count: self.views.stage2_evaluated_count(),
            shortlist_count: self.views.shortlist_count(),
            degraded: matches!(self.outcomes.first(), Some(AnalysisOutcome::Unavailable)),
        }
    }

    fn row(&self, index: usize) -> CandidateAnalysis {
        CandidateAnalysis {
            record: self.catalog.records()[index].clone(),
            outcome: self.outcomes[index].clone(),
        }
    }
}
