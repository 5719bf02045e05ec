//! Classification: trace a single evolution of a finished pattern and
//! produce an order-independent fingerprint of its interaction with the
//! background.

use crate::{universe::Grid, world::World};

/// One interaction event noticed while classifying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifyEvent {
    /// The pattern first started to differ from the background.
    InteractionBegan { gen: u32 },
    /// The pattern settled back to matching the background.
    InteractionEnded { gen: u32 },
}

/// The result of classifying a fully-determined pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifyReport {
    pub events: Vec<ClassifyEvent>,
    pub first_active_gen: Option<u32>,
    pub last_active_gen: Option<u32>,
    /// An order-independent fingerprint of every generation's deviation
    /// from the background, stable under relabelling of tiles.
    pub hash: u64,
}

const HASH_MULTIPLIER: u64 = 0xabcdef13;

/// Classifies the evolving universe, assuming every cell in every
/// generation is already fully determined (no [`crate::cells::Cell`]
/// uncertainty left).
///
/// Walks generations 0 up to the last one that still differs from the
/// background, logging activity transitions, then folds every deviating
/// cell of the final generation into an order-independent hash.
pub fn classify(world: &mut World) -> ClassifyReport {
    let mut events = Vec::new();
    let mut first_active_gen = None;
    let mut last_active_gen = None;
    let mut was_active = false;

    let max_gen = world.max_gen();
    let mut last_touched = 0;
    for gen in 0..=max_gen {
        world.evolve_up_to(gen);
        let differs = world.evolving[gen as usize].n_active > 0;
        if differs {
            last_touched = gen;
            last_active_gen = Some(gen);
            if first_active_gen.is_none() {
                first_active_gen = Some(gen);
            }
        }
        if differs && !was_active {
            events.push(ClassifyEvent::InteractionBegan { gen });
        } else if !differs && was_active {
            events.push(ClassifyEvent::InteractionEnded { gen });
        }
        was_active = differs;
    }

    let hash = hash_deviations(&world.evolving[last_touched as usize].grid, &world.static_grid);

    ClassifyReport {
        events,
        first_active_gen,
        last_active_gen,
        hash,
    }
}

/// Hashes every cell that differs from the background in an order that
/// does not depend on scan direction: each differing cell contributes
/// `(value, prior value, x, y)` folded by XOR, so summing them in any
/// order gives the same result.
fn hash_deviations(gen: &Grid, stable: &Grid) -> u64 {
    let dims = gen.dims;
    let mut hash = 0u64;
    for y in 0..dims.height {
        for x in 0..dims.width {
            let cell = gen.get(x, y);
            let background = stable.get(x, y);
            if cell != background {
                let (b0, b1) = cell.bits();
                let (s0, s1) = background.bits();
                let mut mix = (b0 as u64) | ((b1 as u64) << 1) | ((s0 as u64) << 2) | ((s1 as u64) << 3);
                mix ^= (x as u64) << 16;
                mix ^= (y as u64) << 32;
                hash ^= mix.wrapping_mul(HASH_MULTIPLIER);
            }
        }
    }
    hash
}
