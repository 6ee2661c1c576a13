//! Build a fully-wired particle grid from a cloth configuration
//!
//! Takes a `ClothConfig` (YAML-facing) and produces the runtime collections
//! the facade owns:
//! - the particle arena, row-major with the grid centered on the origin in
//!   its rest plane
//! - the five spring families (structural both ways, bend both ways, shear
//!   in both diagonal directions)
//!
//! Also applies corner anchoring and the symmetry-breaking seed impulse,
//! and validates the configuration before any allocation.

use crate::configuration::config::{ClothConfig, ConfigError};

use super::states::{Particle, Spring, Vec3};

/// The four addressable grid corners.
///
/// Particle coordinates are referred to like pixels in an image: X
/// increases with the column index. "Top" corners sit on the row with the
/// numerically largest row index, "bottom" corners on row zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Flat index of the particle at `(col, row)` in a grid `width_num` across.
/// The grid is a one-dimensional vector representing two dimensions, so
/// this is the only place the mapping lives.
pub fn particle_index(col: usize, row: usize, width_num: usize) -> usize {
    col + row * width_num
}

/// Flat index of the given corner.
pub fn corner_index(corner: Corner, width_num: usize, height_num: usize) -> usize {
    match corner {
        Corner::TopLeft => particle_index(0, height_num - 1, width_num),
        Corner::TopRight => particle_index(width_num - 1, height_num - 1, width_num),
        Corner::BottomLeft => particle_index(0, 0, width_num),
        Corner::BottomRight => particle_index(width_num - 1, 0, width_num),
    }
}

/// Generate the particle grid and spring set described by `cfg`.
///
/// Validation happens before anything is allocated, so a failed build has
/// no side effects. Spring generation order is deterministic (family by
/// family, outer column loop, inner row loop), which makes repeated builds
/// from the same configuration bit-for-bit identical.
pub fn build_grid(cfg: &ClothConfig) -> Result<(Vec<Particle>, Vec<Spring>), ConfigError> {
    cfg.validate()?;

    let width_num = cfg.width_num as usize;
    let height_num = cfg.height_num as usize;

    let spacing_x = cfg.width / cfg.width_num as f32;
    let spacing_y = cfg.height / cfg.height_num as f32;

    // half the smaller inter-particle spacing, so default-positioned
    // neighbors do not start out overlapping
    let radius = 0.5 * spacing_x.min(spacing_y);

    // particles in row-major order, grid centered on the origin
    let mut particles = Vec::with_capacity(width_num * height_num);
    let mut count: u32 = 0;
    for row in 0..height_num {
        for col in 0..width_num {
            let x = col as f32 * spacing_x - cfg.width / 2.0;
            let y = row as f32 * spacing_y - cfg.height / 2.0;
            particles.push(Particle::new(count, cfg.mass, radius, Vec3::new(x, y, 0.0)));
            count += 1;
        }
    }

    let mut springs: Vec<Spring> = Vec::new();
    {
        let mut add_spring = |x1: usize, y1: usize, x2: usize, y2: usize| {
            springs.push(Spring::new(
                particle_index(x1, y1, width_num),
                particle_index(x2, y2, width_num),
                cfg.spring_constant,
                cfg.damping_constant,
                &particles,
            ));
        };

        // horizontal structural springs
        for x in 0..width_num - 1 {
            for y in 0..height_num {
                add_spring(x, y, x + 1, y);
            }
        }

        // vertical structural springs
        for x in 0..width_num {
            for y in 0..height_num - 1 {
                add_spring(x, y, x, y + 1);
            }
        }

        // horizontal bend springs skip two particles; they only exist once
        // the grid is more than three particles across
        if width_num > 3 {
            for x in 0..width_num - 3 {
                for y in 0..height_num {
                    add_spring(x, y, x + 3, y);
                }
            }
        }

        // vertical bend springs
        if height_num > 3 {
            for x in 0..width_num {
                for y in 0..height_num - 3 {
                    add_spring(x, y, x, y + 3);
                }
            }
        }

        // top-left to bottom-right shear springs
        for x in 0..width_num - 1 {
            for y in 0..height_num - 1 {
                add_spring(x, y, x + 1, y + 1);
            }
        }

        // top-right to bottom-left shear springs; start from column 1 as
        // these extend backwards along the x axis
        for x in 1..width_num {
            for y in 0..height_num - 1 {
                add_spring(x, y, x - 1, y + 1);
            }
        }
    }

    if cfg.anchored_top_left {
        particles[corner_index(Corner::TopLeft, width_num, height_num)].anchored = true;
    }
    if cfg.anchored_top_right {
        particles[corner_index(Corner::TopRight, width_num, height_num)].anchored = true;
    }
    if cfg.anchored_bottom_left {
        particles[corner_index(Corner::BottomLeft, width_num, height_num)].anchored = true;
    }
    if cfg.anchored_bottom_right {
        particles[corner_index(Corner::BottomRight, width_num, height_num)].anchored = true;
    }

    // queue an arbitrary force on the center particle so initial movement
    // is not confined to the rest plane
    let center = particle_index(width_num / 2, height_num / 2, width_num);
    particles[center].add_force(Vec3::new(-0.5, -0.5, -0.5));

    Ok((particles, springs))
}
