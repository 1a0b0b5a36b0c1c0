//! Tests for the in-place wavefront Gauss-Seidel sweep.
//!
//! The central property: for any worker count and column-block count, `N`
//! wavefront sweeps produce the same grid as `N` serial row-major
//! Gauss-Seidel sweeps. Also covered are boundary preservation, the fixed
//! point, monotone residuals on a Laplace problem, and `f32` grids.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relaxa::parallel::WorkerPool;
use relaxa::sweep::{self, serial};
use relaxa::{Grid, SweepContext, SweepKind, SweepOptions};

fn random_grid(sizex: usize, sizey: usize, seed: u64) -> Grid<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(sizex, sizey, |_, _| rng.gen_range(-1.0..1.0)).unwrap()
}

/// Run `sweeps` serial Gauss-Seidel sweeps and return the grid and residuals.
fn serial_run(mut u: Grid<f64>, sweeps: usize) -> (Grid<f64>, Vec<f64>) {
    let (sizex, sizey) = (u.sizex(), u.sizey());
    let residuals = (0..sweeps)
        .map(|_| serial::gauss_seidel(u.as_mut_slice(), sizex, sizey).unwrap())
        .collect();
    (u, residuals)
}

/// Wavefront sweeps match the serial order for 1, 2, 8 and 64 workers.
#[test]
fn matches_serial_across_worker_counts() {
    let (sizex, sizey, sweeps) = (37, 53, 4);
    let start = random_grid(sizex, sizey, 11);
    let (expected, expected_res) = serial_run(start.clone(), sweeps);

    for workers in [1, 2, 8, 64] {
        let pool = WorkerPool::new(workers).unwrap();
        let mut u = start.clone();
        for &want in &expected_res {
            let res = sweep::gauss_seidel(&pool, u.as_mut_slice(), sizex, sizey, 20).unwrap();
            assert_relative_eq!(res, want, max_relative = 1e-12);
        }
        for (a, b) in u.as_slice().iter().zip(expected.as_slice()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}

/// Column-block count only changes the pipeline shape, never the result.
#[test]
fn block_count_does_not_change_result() {
    let (sizex, sizey) = (30, 30);
    let start = random_grid(sizex, sizey, 5);
    let (expected, _) = serial_run(start.clone(), 2);
    let pool = WorkerPool::new(4).unwrap();

    for blocks in [1, 2, 7, 20, 29, 100] {
        let mut u = start.clone();
        for _ in 0..2 {
            sweep::gauss_seidel(&pool, u.as_mut_slice(), sizex, sizey, blocks).unwrap();
        }
        assert_eq!(u, expected, "mismatch with {blocks} blocks");
    }
}

/// Boundary cells keep their values through many sweeps.
#[test]
fn boundary_untouched() {
    let start = random_grid(19, 24, 2);
    let mut u = start.clone();
    let mut ctx = SweepContext::new(SweepKind::InPlaceGaussSeidel, SweepOptions::new().with_workers(3)).unwrap();
    for _ in 0..5 {
        ctx.gauss_seidel(u.as_mut_slice(), 19, 24).unwrap();
    }
    assert!(u.boundary_eq(&start));
    assert_ne!(u, start);
}

/// Once converged, further sweeps report a zero residual and change nothing.
#[test]
fn fixed_point_is_stable() {
    let start = Grid::from_fn(16, 16, |i, j| 2.0 * i as f64 - j as f64).unwrap();
    let mut u = start.clone();
    let mut ctx = SweepContext::new(SweepKind::InPlaceGaussSeidel, SweepOptions::new().with_workers(4)).unwrap();
    for _ in 0..3 {
        let res = ctx.gauss_seidel(u.as_mut_slice(), 16, 16).unwrap();
        assert!(res < 1e-24, "residual {res}");
    }
    assert_eq!(u, start);
}

/// Laplace problem with a hot top edge: residuals never increase.
#[test]
fn residual_non_increasing_on_laplace() {
    let (sizex, sizey) = (24, 24);
    let mut u = Grid::<f64>::from_fn(sizex, sizey, |i, _| if i == 0 { 100.0 } else { 0.0 }).unwrap();
    let mut ctx = SweepContext::new(SweepKind::InPlaceGaussSeidel, SweepOptions::new().with_workers(4)).unwrap();
    let mut last = f64::INFINITY;
    for _ in 0..200 {
        let res = ctx.gauss_seidel(u.as_mut_slice(), sizex, sizey).unwrap();
        assert!(res <= last, "residual grew from {last} to {res}");
        last = res;
    }
    assert!(last < 1.0);
}

/// Single-precision grids run through the same kernel.
#[test]
fn single_precision_grid() {
    let mut par = Grid::<f32>::with_boundary(10, 12, 1.0).unwrap();
    let mut ser = par.clone();
    let pool = WorkerPool::new(3).unwrap();
    let r_par = sweep::gauss_seidel(&pool, par.as_mut_slice(), 10, 12, 20).unwrap();
    let r_ser = serial::gauss_seidel(ser.as_mut_slice(), 10, 12).unwrap();
    assert_eq!(par, ser);
    assert_eq!(r_par, r_ser);
}

/// The one-shot free function uses the ambient worker count.
#[test]
fn free_function_matches_serial() {
    let start = random_grid(21, 21, 9);
    let mut u = start.clone();
    let res = relaxa::gauss_seidel_sweep(u.as_mut_slice(), 21, 21).unwrap();
    let (expected, expected_res) = serial_run(start, 1);
    assert_eq!(u, expected);
    assert_eq!(res, expected_res[0]);
}
