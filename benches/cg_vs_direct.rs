use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use itersolve::{ConjugateGradient, IterativeLinearSolver, Jacobi};

fn bench_cg_vs_faer(c: &mut Criterion) {
    let n = 200;
    // SPD tridiagonal system
    let a = Mat::from_fn(n, n, |i, j| {
        if i == j {
            2.0
        } else if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    });
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let m = Jacobi::from_operator(&a).unwrap();

    c.bench_function("itersolve CG", |ben| {
        let mut solver = ConjugateGradient::new(10000, 1e-10, false);
        ben.iter(|| {
            let _x = solver.solve(black_box(&a), black_box(&b)).unwrap();
        })
    });

    c.bench_function("itersolve CG jacobi", |ben| {
        let mut solver = ConjugateGradient::new(10000, 1e-10, false);
        ben.iter(|| {
            let _x = solver
                .solve_preconditioned(black_box(&a), black_box(&m), black_box(&b))
                .unwrap();
        })
    });

    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(a.as_ref());
            let mut y = b.clone();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

criterion_group!(benches, bench_cg_vs_faer);
criterion_main!(benches);
