//! Per-phase outcome accounting.
//!
//! The pipeline never aborts on a failed item, so the report is the only
//! place the caller can see how much of the source guild actually made it
//! across.

/// Outcome of one item inside a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Created,
    Deleted,
    /// The item was given up on; the phase continued without it.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: &'static str,
    pub created: usize,
    pub deleted: usize,
    pub skipped: usize,
}

impl PhaseReport {
    pub fn new(phase: &'static str) -> Self {
        Self {
            phase,
            created: 0,
            deleted: 0,
            skipped: 0,
        }
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Created => self.created += 1,
            ItemOutcome::Deleted => self.deleted += 1,
            ItemOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Aggregated results for a whole run, one entry per phase in pipeline order.
#[derive(Debug, Default, Clone)]
pub struct CloneReport {
    pub phases: Vec<PhaseReport>,
}

impl CloneReport {
    pub fn push(&mut self, phase: PhaseReport) {
        self.phases.push(phase);
    }

    pub fn phase(&self, name: &str) -> Option<&PhaseReport> {
        self.phases.iter().find(|phase| phase.phase == name)
    }

    pub fn total_created(&self) -> usize {
        self.phases.iter().map(|phase| phase.created).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.phases.iter().map(|phase| phase.skipped).sum()
    }
}
