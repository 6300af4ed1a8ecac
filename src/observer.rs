//! Step observer trait for monitoring rope updates.

/// Trait for observing rope simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation sweep over the chain.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when edge `(index, index + 1)` is too short to correct.
    fn on_degenerate_edge(&mut self, _index: usize) {}

    /// Called when an update is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts solver events; handy in tests and for frame diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub integrations: usize,
    pub sweeps: usize,
    pub degenerate_edges: usize,
    pub steps: usize,
}

impl StepObserver for StepStats {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.sweeps += 1;
    }

    fn on_degenerate_edge(&mut self, _index: usize) {
        self.degenerate_edges += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
