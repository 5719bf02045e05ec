//! The world: the static background, the forbidden mask, the filter, and
//! the chain of evolving generations, all tied together.

use log::trace;

use crate::{
    cells::Cell,
    config::Params,
    flags::GenFlags,
    kernel,
    search::PruneCounters,
    universe::{Dims, Generation, Grid},
};

/// Everything the search operates on.
pub struct World {
    pub dims: Dims,
    pub params: Params,
    /// The still-life background. Generation 0 of `evolving` mirrors this
    /// grid except where the input pattern perturbs it (`On`/`Off` cells
    /// not present in the background).
    pub static_grid: Grid,
    /// Cells (marked `On`) that must never deviate from the background.
    pub forbidden_grid: Grid,
    /// Required pattern for each generation, if any; `None` entries place
    /// no constraint on that generation.
    pub filter: Vec<Option<Grid>>,
    /// One entry per generation from 0 up to the computed bound.
    pub evolving: Vec<Generation>,
    /// Stack of extra on-cells committed so far, in commit order. Capped
    /// at [`ONLIST_CAPACITY`].
    pub onlist: Vec<(i32, i32)>,
    /// Running tally of why branches were cut off, reset at the start of
    /// every [`World::search`](crate::search) call.
    pub counters: PruneCounters,
}

/// Matches the historical fixed-size on-cell stack; committing beyond this
/// many extra on-cells is itself a kind of complexity-limit violation.
pub const ONLIST_CAPACITY: usize = 1024;

impl World {
    pub fn new(
        dims: Dims,
        static_grid: Grid,
        forbidden_grid: Grid,
        evolving_gen0: Grid,
        filter: Vec<Option<Grid>>,
        mut params: Params,
    ) -> Self {
        params.finalize();
        let max_gens = params.max_gens(filter.len() as u32);

        let mut evolving = Vec::with_capacity(max_gens as usize + 1);
        evolving.push(Generation {
            gen: 0,
            grid: evolving_gen0,
            flags: GenFlags::CHANGED,
            n_active: 0,
        });
        for gen in 1..=max_gens {
            evolving.push(Generation::new(gen, dims));
        }

        World {
            dims,
            params,
            static_grid,
            forbidden_grid,
            filter,
            evolving,
            onlist: Vec::new(),
            counters: PruneCounters::default(),
        }
    }

    pub fn max_gen(&self) -> u32 {
        self.evolving.len() as u32 - 1
    }

    /// Re-derives generation 0's flags directly from its grid contents;
    /// unlike every later generation, it is never stepped by the kernel.
    fn refresh_gen0_flags(&mut self) {
        let grid = &self.evolving[0].grid;
        let stable = &self.static_grid;
        let mut flags = GenFlags::empty();
        let mut n_active = 0u32;
        for y in 0..self.dims.height {
            for x in 0..self.dims.width {
                let cell = grid.get(x, y);
                let stable_cell = stable.get(x, y);
                // A known cell disagreeing with a known background bit, not
                // merely a tri-state mismatch — see kernel.rs.
                let differs_from_stable = match (cell.known(), stable_cell.known()) {
                    (Some(a), Some(b)) => a != b,
                    _ => false,
                };
                if cell.is_uncertain() {
                    flags |= GenFlags::HAS_UNKNOWN_CELLS;
                }
                if cell.is_on() {
                    flags |= GenFlags::HAS_ON_CELLS;
                }
                if differs_from_stable {
                    flags |= GenFlags::IS_LIVE;
                }
                if cell != stable_cell {
                    flags |= GenFlags::DIFFERS_FROM_PREVIOUS;
                }
                if differs_from_stable {
                    flags |= GenFlags::DIFFERS_FROM_STABLE;
                    n_active += 1;
                }
                if let Some(Some(filter)) = self.filter.first() {
                    if let (Some(want), Some(have)) = (filter.get(x, y).known(), cell.known()) {
                        if want != have {
                            flags |= GenFlags::FILTER_MISMATCH;
                        }
                    }
                }
                if self.forbidden_grid.get(x, y).is_on() && differs_from_stable {
                    flags |= GenFlags::IN_FORBIDDEN_REGION;
                }
            }
        }
        flags |= GenFlags::DIFFERS_FROM_2PREV;
        self.evolving[0].flags = flags;
        self.evolving[0].n_active = n_active;
    }

    /// Re-steps `gen` (which must be >= 1) from generation `gen - 1`.
    fn step(&mut self, gen: u32) {
        let filter = self.filter.get(gen as usize).and_then(|f| f.as_ref());
        let (new_grid, flags, n_active) = kernel::evolve_generation(
            &self.evolving[gen as usize - 1].grid,
            &self.static_grid,
            &self.forbidden_grid,
            filter,
            if gen >= 2 {
                Some(&self.evolving[gen as usize - 2].grid)
            } else {
                None
            },
        );
        let slot = &mut self.evolving[gen as usize];
        slot.grid = new_grid;
        slot.flags = flags;
        slot.n_active = n_active;
        trace!("evolved generation {gen}: flags={flags:?} n_active={n_active}");
    }

    /// Evolves every `CHANGED` generation from 0 up to (and including)
    /// `ceiling`, clearing `CHANGED` as it goes. Stops early if a
    /// generation still has unknown cells, matching the two-pass boundary
    /// walk the search driver performs.
    ///
    /// Returns the first generation (if any) up to `ceiling` with
    /// unknown cells remaining.
    pub fn evolve_up_to(&mut self, ceiling: u32) -> Option<u32> {
        for gen in 0..=ceiling.min(self.max_gen()) {
            if self.evolving[gen as usize].flags.contains(GenFlags::CHANGED) {
                if gen == 0 {
                    self.refresh_gen0_flags();
                } else {
                    self.step(gen);
                }
                self.evolving[gen as usize]
                    .flags
                    .remove(GenFlags::CHANGED);
            }
            if self.evolving[gen as usize]
                .flags
                .contains(GenFlags::HAS_UNKNOWN_CELLS)
            {
                return Some(gen);
            }
        }
        None
    }

    /// Finds the first generation (scanning from 0) that still has
    /// unknown cells, evolving anything `CHANGED` along the way.
    pub fn first_unknown_gen(&mut self) -> Option<u32> {
        self.evolve_up_to(self.max_gen())
    }

    /// Commits a value to a background cell: both the static grid and
    /// generation 0 of the evolving universe, which must always agree on
    /// background cells.
    pub fn commit_cell(&mut self, x: i32, y: i32, value: Cell) {
        self.static_grid.set(x, y, value);
        self.evolving[0].grid.set(x, y, value);
        for gen in &mut self.evolving {
            gen.flags.insert(GenFlags::CHANGED);
        }
    }

    /// The previously committed value of `(x, y)`, read from the static
    /// background (generation 0 always mirrors it there).
    pub fn static_cell(&self, x: i32, y: i32) -> Cell {
        self.static_grid.get(x, y)
    }
}
