//! Iteration counting and lifecycle-event dispatch.
//!
//! [`IterationManager`] decouples a solver's loop from progress reporting:
//! any number of observers (logging, convergence diagnostics, tests) can
//! watch a solve without the solver knowing about them. Dispatch is
//! synchronous, on the calling thread, in registration order — there is no
//! event queue. A listener that returns an error unwinds the solve; that is
//! the only cancellation mechanism.

use crate::error::SolverError;
use crate::solver::event::SolverEvent;

/// Observer of the four solver lifecycle events.
///
/// All methods default to no-ops so implementors override only what they
/// need. The event borrows the solver's working vectors and is valid only
/// for the duration of the callback; copy out anything retained.
pub trait IterationListener<T> {
    /// Fired once per solve, after the initial residual is available.
    fn initialization_performed(&mut self, _e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        Ok(())
    }

    /// Fired at the top of each loop pass, before the update step.
    fn iteration_started(&mut self, _e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        Ok(())
    }

    /// Fired after each update step, with the updated solution and residual.
    fn iteration_performed(&mut self, _e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        Ok(())
    }

    /// Fired exactly once on successful convergence. Not fired when the
    /// iteration budget is exhausted.
    fn termination_performed(&mut self, _e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        Ok(())
    }
}

/// Opaque handle identifying a registered listener.
///
/// Boxed trait objects are not comparable, so removal goes through the
/// token returned by [`IterationManager::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

/// Tracks the iteration count of a single solver instance, enforces its
/// maximum-iteration bound, and fans lifecycle events out to listeners.
///
/// The counter is reset at the start of every solve; listeners persist
/// across solves until explicitly removed.
pub struct IterationManager<T> {
    max_iterations: usize,
    iterations: usize,
    next_id: usize,
    listeners: Vec<(ListenerId, Box<dyn IterationListener<T>>)>,
}

impl<T> IterationManager<T> {
    /// Create a manager with an immutable iteration cap. `max_iterations`
    /// must be strictly positive.
    pub fn new(max_iterations: usize) -> Self {
        assert!(max_iterations > 0, "max_iterations must be positive");
        Self {
            max_iterations,
            iterations: 0,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// The configured iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Iteration count since the last reset.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Register a listener. It receives future events only; earlier events
    /// are not replayed. The same listener may be registered twice, in
    /// which case it is invoked twice per event.
    pub fn add_listener(&mut self, listener: Box<dyn IterationListener<T>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Deregister a listener. Removing an id that is not registered is a
    /// no-op.
    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    /// Reset the counter to zero at the start of a solve.
    pub fn reset_iteration_count(&mut self) {
        self.iterations = 0;
    }

    /// Advance the counter, failing once the cap would be exceeded. This is
    /// the sole termination-by-exhaustion path: solvers propagate the error
    /// without firing a termination event.
    pub fn increment_iteration_count(&mut self) -> Result<(), SolverError> {
        if self.iterations >= self.max_iterations {
            return Err(SolverError::IterationLimitExceeded(self.max_iterations));
        }
        self.iterations += 1;
        Ok(())
    }

    pub fn fire_initialization_event(&mut self, e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        for (_, listener) in self.listeners.iter_mut() {
            listener.initialization_performed(e)?;
        }
        Ok(())
    }

    pub fn fire_iteration_started_event(&mut self, e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        for (_, listener) in self.listeners.iter_mut() {
            listener.iteration_started(e)?;
        }
        Ok(())
    }

    pub fn fire_iteration_performed_event(&mut self, e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        for (_, listener) in self.listeners.iter_mut() {
            listener.iteration_performed(e)?;
        }
        Ok(())
    }

    pub fn fire_termination_event(&mut self, e: &SolverEvent<'_, T>) -> Result<(), SolverError> {
        for (_, listener) in self.listeners.iter_mut() {
            listener.termination_performed(e)?;
        }
        Ok(())
    }
}
