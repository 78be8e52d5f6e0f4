use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyStore, NVec2};
use crate::simulation::step::advance;

/// Helper to build a deterministic population of size `n` packed into the
/// default world, so that a good share of pairs start out overlapping
fn make_store(n: usize, params: &Parameters) -> BodyStore {
    let mut store = BodyStore::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * params.world_width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * params.world_height,
        );
        let radius = 5.0 + (i % 30) as f64;

        if let Ok(id) = store.create(x, radius) {
            if let Some(b) = store.get_mut(id) {
                b.velocity = NVec2::new((i_f * 0.7).cos() * 200.0, (i_f * 0.3).sin() * 200.0);
            }
        }
    }

    store
}

/// Time `advance` for a range of population sizes
/// Paste output directly into excel to graph
pub fn bench_step() {
    let params = Parameters::default();
    let dt = 1.0 / 60.0;

    println!("N,ms_per_step,pairs_per_step");

    for n in [10, 20, 40, 80, 160, 320, 640, 1280] {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 160 { 200 } else { 20 };

        let mut store = make_store(n, &params);

        // Warm up
        advance(&mut store, dt, &params);

        let mut pairs = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            pairs += advance(&mut store, dt, &params).colliding_pairs;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.1}", n, ms, pairs as f64 / steps as f64);
    }
}
