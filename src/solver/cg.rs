//! Preconditioned Conjugate Gradient per Saad §9.2, for symmetric
//! positive-definite operators.
//!
//! The loop is driven through an [`IterationManager`]: initialization,
//! iteration-started, iteration-performed and termination events fire
//! synchronously with a borrowed snapshot of the current solution and
//! residual. The stopping test uses the recurrence-updated residual, so
//! after many iterations it can drift from the true residual b − A·x
//! (loss of orthogonality of the search directions); that is a property
//! of CG, not a defect.

use crate::core::traits::{InnerProduct, LinearOperator};
use crate::error::SolverError;
use crate::preconditioner::Preconditioner;
use crate::solver::event::SolverEvent;
use crate::solver::{IterativeLinearSolver, check_parameters};
use crate::utils::convergence::{Convergence, SolveStats};
use crate::utils::iteration::IterationManager;
use num_traits::Float;

/// Conjugate Gradient solver for A·x = b with A symmetric positive
/// definite, optionally preconditioned.
pub struct ConjugateGradient<T> {
    manager: IterationManager<T>,
    conv: Convergence<T>,
    check: bool,
}

impl<T: Float> ConjugateGradient<T> {
    /// Create a solver stopping once ‖r‖ ≤ `delta`·‖b‖ or failing after
    /// `max_iterations` counter increments (initialization consumes the
    /// first). With `check` enabled, loss of positive definiteness of the
    /// operator or the preconditioner is detected during the loop.
    ///
    /// `max_iterations` must be strictly positive and `delta` non-negative.
    pub fn new(max_iterations: usize, delta: T, check: bool) -> Self {
        assert!(delta >= T::zero(), "delta must be non-negative");
        Self {
            manager: IterationManager::new(max_iterations),
            conv: Convergence { delta },
            check,
        }
    }

    /// Whether positive-definiteness checking is enabled.
    pub fn checks_positive_definiteness(&self) -> bool {
        self.check
    }
}

impl<T> IterativeLinearSolver<T> for ConjugateGradient<T>
where
    T: Float + Send + Sync,
{
    fn iteration_manager(&mut self) -> &mut IterationManager<T> {
        &mut self.manager
    }

    fn solve_in_place<M>(
        &mut self,
        a: &M,
        m: Option<&dyn Preconditioner<T>>,
        b: &[T],
        x0: &mut [T],
    ) -> Result<SolveStats<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        check_parameters(a, m, b, x0)?;
        let n = b.len();
        let ip = ();
        let rmax = self.conv.threshold(ip.norm(b));

        self.manager.reset_iteration_count();
        // Initialization consumes the first increment, so the counter is 1
        // when the initialization event fires.
        self.manager.increment_iteration_count()?;

        // r = b - A·x0
        let mut q = vec![T::zero(); n];
        a.matvec(x0, &mut q);
        let mut r: Vec<T> = b.iter().zip(&q).map(|(&bi, &qi)| bi - qi).collect();
        let mut rnorm = ip.norm(&r);

        let evt = SolverEvent::new(self.manager.iterations(), x0, &r, b, rnorm);
        self.manager.fire_initialization_event(&evt)?;
        if rnorm <= rmax {
            self.manager.fire_termination_event(&evt)?;
            return Ok(SolveStats {
                iterations: self.manager.iterations(),
                final_residual: rnorm,
                converged: true,
            });
        }

        let mut z = vec![T::zero(); n];
        if let Some(m) = m {
            m.solve(&r, &mut z)?;
        } else {
            z.copy_from_slice(&r);
        }
        let mut p = z.clone();
        let mut rho = ip.dot(&r, &z);

        loop {
            // May fail with the exhaustion error before the iteration-started
            // event for the overflowing iteration; no termination event fires
            // on that path.
            self.manager.increment_iteration_count()?;
            let evt = SolverEvent::new(self.manager.iterations(), x0, &r, b, rnorm);
            self.manager.fire_iteration_started_event(&evt)?;

            // rho = r·z with z = M⁻¹·r turns negative only when the
            // preconditioner is not positive definite.
            if self.check && rho <= T::zero() {
                return Err(SolverError::NonPositiveDefiniteOperator);
            }
            a.matvec(&p, &mut q);
            let pq = ip.dot(&p, &q);
            if self.check && pq <= T::zero() {
                return Err(SolverError::NonPositiveDefiniteOperator);
            }
            let alpha = rho / pq;
            for (xi, &pi) in x0.iter_mut().zip(&p) {
                *xi = *xi + alpha * pi;
            }
            for (ri, &qi) in r.iter_mut().zip(&q) {
                *ri = *ri - alpha * qi;
            }
            rnorm = ip.norm(&r);

            let evt = SolverEvent::new(self.manager.iterations(), x0, &r, b, rnorm);
            self.manager.fire_iteration_performed_event(&evt)?;
            if rnorm <= rmax {
                self.manager.fire_termination_event(&evt)?;
                return Ok(SolveStats {
                    iterations: self.manager.iterations(),
                    final_residual: rnorm,
                    converged: true,
                });
            }

            if let Some(m) = m {
                m.solve(&r, &mut z)?;
            } else {
                z.copy_from_slice(&r);
            }
            let rho_next = ip.dot(&r, &z);
            let beta = rho_next / rho;
            for (pi, &zi) in p.iter_mut().zip(&z) {
                *pi = zi + beta * *pi;
            }
            rho = rho_next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple dense matrix type exercising the operator abstraction without
    // pulling in faer.
    struct DenseMat {
        data: Vec<Vec<f64>>,
    }

    impl LinearOperator<f64> for DenseMat {
        fn nrows(&self) -> usize {
            self.data.len()
        }
        fn ncols(&self) -> usize {
            self.data[0].len()
        }
        fn matvec(&self, x: &[f64], y: &mut [f64]) {
            for (yi, row) in y.iter_mut().zip(&self.data) {
                *yi = row.iter().zip(x).map(|(a, b)| a * b).sum();
            }
        }
    }

    #[test]
    fn cg_solves_simple_spd() {
        // SPD system: [[4,1],[1,3]] x = [1,2]
        let a = DenseMat { data: vec![vec![4.0, 1.0], vec![1.0, 3.0]] };
        let b = vec![1.0, 2.0];
        let mut solver = ConjugateGradient::new(20, 1e-10, true);
        let x = solver.solve(&a, &b).unwrap();
        let expected = [0.09090909090909091, 0.6363636363636364];
        for (xi, ei) in x.iter().zip(&expected) {
            assert!((xi - ei).abs() < 1e-8, "xi = {}, expected = {}", xi, ei);
        }
    }

    #[test]
    fn cg_in_place_reaches_residual_tolerance() {
        // A = [[4,1,0],[1,3,1],[0,1,2]], b = A·[1,2,3]
        let a = DenseMat {
            data: vec![
                vec![4.0, 1.0, 0.0],
                vec![1.0, 3.0, 1.0],
                vec![0.0, 1.0, 2.0],
            ],
        };
        let x_true = [1.0, 2.0, 3.0];
        let mut b = vec![0.0; 3];
        a.matvec(&x_true, &mut b);
        let mut x = vec![0.0; 3];
        let mut solver = ConjugateGradient::new(100, 1e-10, true);
        let stats = solver.solve_in_place(&a, None, &b, &mut x).unwrap();
        assert!(stats.converged);
        let mut ax = vec![0.0; 3];
        a.matvec(&x, &mut ax);
        let res_norm = b
            .iter()
            .zip(&ax)
            .map(|(bi, axi)| (bi - axi).powi(2))
            .sum::<f64>()
            .sqrt();
        let b_norm = b.iter().map(|bi| bi * bi).sum::<f64>().sqrt();
        assert!(res_norm <= 1e-10 * b_norm, "final residual = {:e}", res_norm);
    }

    #[test]
    fn non_positive_definite_operator_detected() {
        let a = DenseMat { data: vec![vec![-1.0, 2.0], vec![3.0, 4.0]] };
        let b = vec![-1.0, -1.0];
        let mut solver = ConjugateGradient::new(10, 0.0, true);
        match solver.solve(&a, &b) {
            Err(SolverError::NonPositiveDefiniteOperator) => {}
            other => panic!("expected NonPositiveDefiniteOperator, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn iteration_limit_is_fatal_but_retryable() {
        // Tridiagonal SPD system too large to solve in 2 increments.
        let n = 8;
        let mut data = vec![vec![0.0; n]; n];
        for i in 0..n {
            data[i][i] = 2.0;
            if i > 0 {
                data[i][i - 1] = -1.0;
                data[i - 1][i] = -1.0;
            }
        }
        let a = DenseMat { data };
        let b = vec![1.0; n];
        let mut solver = ConjugateGradient::new(2, 1e-12, true);
        let err = solver.solve(&a, &b).unwrap_err();
        assert!(err.is_retryable());
        match err {
            SolverError::IterationLimitExceeded(2) => {}
            other => panic!("expected IterationLimitExceeded, got {:?}", other),
        }
        // Re-invoking with a larger budget succeeds.
        let mut solver = ConjugateGradient::new(100, 1e-12, true);
        assert!(solver.solve(&a, &b).is_ok());
    }
}
