use std::time::Instant;

use crate::configuration::config::ClothConfig;
use crate::simulation::cloth::Cloth;

/// Helper to build a square cloth `n` particles per side. The physical
/// size scales with `n` so the particle spacing (and with it the collision
/// radius) stays the same across sizes.
fn make_cloth(n: u32, self_collision: bool) -> Cloth {
    let cfg = ClothConfig {
        width_num: n,
        height_num: n,
        width: 0.16 * n as f32,
        height: 0.16 * n as f32,
        ..ClothConfig::default()
    };

    let mut cloth = Cloth::new(&cfg).expect("benchmark config is valid");
    cloth.set_self_collisions(self_collision);
    cloth
}

/// Time `advance` per step at a range of grid sizes, with and without the
/// O(n^2) self-collision pass.
pub fn bench_advance() {
    // Different grid sizes to test
    let ns = [8, 16, 32, 64];
    let steps = 50;
    let dt = 0.01f32;

    for n in ns {
        let mut sphere_only = make_cloth(n, false);
        let mut with_self = make_cloth(n, true);

        // Warm up
        sphere_only.advance(0.0, dt);
        with_self.advance(0.0, dt);

        // Time the sphere-only stepping
        let mut time = 0.0f64;
        let t0 = Instant::now();
        for _ in 0..steps {
            sphere_only.advance(time, dt);
            time += f64::from(dt);
        }
        let dt_sphere = t0.elapsed().as_secs_f64() / steps as f64;

        // Time stepping with the pairwise pass enabled
        let mut time = 0.0f64;
        let t1 = Instant::now();
        for _ in 0..steps {
            with_self.advance(time, dt);
            time += f64::from(dt);
        }
        let dt_self = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:2}x{:2} ({:4} particles), sphere only = {:8.6} s/step, self-collision = {:8.6} s/step",
            n,
            n,
            n * n,
            dt_sphere,
            dt_self
        );
    }
}

/// Benchmark `advance` over a sweep of grid sizes.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_advance_curve() {
    println!("n,particles,sphere_ms,self_ms");

    // Steps of 4 to give a smoother graph
    for n in (8..=64).step_by(4) {
        // Small grids: average over more steps to smooth noise
        // Large grids: fewer steps to keep the pairwise pass affordable
        let steps = if n <= 24 { 50 } else { 10 };
        let dt = 0.01f32;

        let mut sphere_only = make_cloth(n, false);
        let mut with_self = make_cloth(n, true);

        let mut time = 0.0f64;
        let t0 = Instant::now();
        for _ in 0..steps {
            sphere_only.advance(time, dt);
            time += f64::from(dt);
        }
        let ms_sphere = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut time = 0.0f64;
        let t1 = Instant::now();
        for _ in 0..steps {
            with_self.advance(time, dt);
            time += f64::from(dt);
        }
        let ms_self = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{},{:.6},{:.6}", n, n * n, ms_sphere, ms_self);
    }
}
