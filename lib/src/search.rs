//! The search driver: a depth-first choice-and-recurse over the unknown
//! background cells, pruned by the acceptance criteria in
//! [`crate::config::Params`].

use log::{debug, info};

use crate::{
    cells::{Cell, Coord},
    complexity::{self, ComplexResult},
    flags::GenFlags,
    world::{World, ONLIST_CAPACITY},
};

/// Why each recursive branch was cut off, tallied across a whole search.
#[derive(Clone, Debug, Default)]
pub struct PruneCounters {
    pub unstable_background: u64,
    pub too_many_flipped_cells: u64,
    pub first_activation_too_late: u64,
    pub first_activation_too_early: u64,
    pub reactivation_too_late: u64,
    pub filter_mismatch: u64,
    pub forbidden: u64,
    pub stayed_active_too_long: u64,
    pub no_continuation_found: u64,
    pub too_many_added_oncells: u64,
    pub new_oncells_not_allowed: u64,
    pub complexity_failed_locally: u64,
    pub complexity_failed_globally: u64,
    pub solutions_found: u64,
}

impl PruneCounters {
    pub fn total_pruned(&self) -> u64 {
        self.unstable_background
            + self.too_many_flipped_cells
            + self.first_activation_too_late
            + self.first_activation_too_early
            + self.reactivation_too_late
            + self.filter_mismatch
            + self.forbidden
            + self.stayed_active_too_long
            + self.no_continuation_found
            + self.too_many_added_oncells
            + self.new_oncells_not_allowed
            + self.complexity_failed_locally
            + self.complexity_failed_globally
    }
}

/// A cell's position, one offset the search tried against the static
/// background, then `(0, 0)` itself: the fixed priority order
/// `choose_cell` walks when looking for a predecessor.
const CHOICE_OFFSETS: [Coord; 9] = {
    let mut offsets = [(0, 0); 9];
    offsets[0] = (0, 0);
    // Const-eval can't call into ORTHOGONAL_THEN_DIAGONAL's iterator, so
    // this mirrors it by hand; kept in sync by the doc comment there.
    offsets[1] = (1, 0);
    offsets[2] = (0, 1);
    offsets[3] = (-1, 0);
    offsets[4] = (0, -1);
    offsets[5] = (-1, -1);
    offsets[6] = (-1, 1);
    offsets[7] = (1, -1);
    offsets[8] = (1, 1);
    offsets
};

enum ScanOutcome {
    NeedChoice {
        gen: u32,
        allow_new_oncells: bool,
        next_sol_gen: u32,
    },
    Pruned,
}

impl World {
    /// Runs the search to exhaustion (or until every branch is pruned),
    /// calling `on_solution` for every accepted catalyst found.
    ///
    /// Returns the prune-counter tally for the whole run.
    pub fn search(&mut self, mut on_solution: impl FnMut(&World, u32)) -> PruneCounters {
        self.counters = PruneCounters::default();
        self.recurse(0, &mut on_solution);
        self.counters.clone()
    }

    fn recurse(&mut self, first_next_sol_gen: u32, on_solution: &mut dyn FnMut(&World, u32)) {
        if crate::kernel::verify_static_is_stable(&self.static_grid).is_err() {
            self.counters.unstable_background += 1;
            return;
        }

        match self.scan(first_next_sol_gen, on_solution) {
            ScanOutcome::Pruned => {}
            ScanOutcome::NeedChoice {
                gen,
                allow_new_oncells,
                next_sol_gen,
            } => self.choose_cell(gen, allow_new_oncells, next_sol_gen, on_solution),
        }
    }

    /// Evolves every generation from 0 forward, applying the pruning
    /// predicates in their fixed order, until either an unresolved
    /// generation is found (time to choose a cell) or some predicate cuts
    /// the branch off.
    fn scan(
        &mut self,
        mut first_next_sol_gen: u32,
        on_solution: &mut dyn FnMut(&World, u32),
    ) -> ScanOutcome {
        let params = self.params.clone();
        let mut first_active_gen: Option<u32> = None;
        let mut stabilized = false;
        let mut stabilized_gen = 0u32;
        let mut stabilization_yielded = false;

        for gen in 0..=self.max_gen() {
            if self.evolve_up_to(gen).is_some() {
                let allow_new_oncells = gen <= params.max_reactivation_gen || !stabilized;
                return ScanOutcome::NeedChoice {
                    gen,
                    allow_new_oncells,
                    next_sol_gen: first_next_sol_gen,
                };
            }

            let generation = &self.evolving[gen as usize];
            let n_active = generation.n_active;
            let differs_from_stable = generation.flags.contains(GenFlags::DIFFERS_FROM_STABLE);
            let filter_mismatch = generation.flags.contains(GenFlags::FILTER_MISMATCH);
            let forbidden_hit = generation.flags.contains(GenFlags::IN_FORBIDDEN_REGION);

            if n_active > params.max_flipped_cells_in_activation {
                self.counters.too_many_flipped_cells += 1;
                return ScanOutcome::Pruned;
            }
            if first_active_gen.is_none() && gen > params.max_first_activation_gen {
                self.counters.first_activation_too_late += 1;
                return ScanOutcome::Pruned;
            }
            if first_active_gen.is_none() && differs_from_stable {
                if gen < params.min_activation_gen {
                    self.counters.first_activation_too_early += 1;
                    return ScanOutcome::Pruned;
                }
                first_active_gen = Some(gen);
            }

            if first_active_gen.is_some() && n_active == 0 && !stabilized {
                stabilized = true;
                stabilized_gen = gen;
                stabilization_yielded = false;
            }

            if stabilized && differs_from_stable {
                if gen > params.max_reactivation_gen {
                    self.counters.reactivation_too_late += 1;
                    return ScanOutcome::Pruned;
                }
                first_active_gen = Some(gen);
                stabilized = false;
                stabilization_yielded = false;
            }

            if filter_mismatch {
                self.counters.filter_mismatch += 1;
                return ScanOutcome::Pruned;
            }
            if forbidden_hit {
                self.counters.forbidden += 1;
                return ScanOutcome::Pruned;
            }
            if let Some(first_active) = first_active_gen {
                if gen >= first_active + params.max_active_gens_in_a_row && n_active > 0 {
                    self.counters.stayed_active_too_long += 1;
                    return ScanOutcome::Pruned;
                }
            }

            if stabilized && !stabilization_yielded {
                let mut accept_gen =
                    stabilized_gen + params.inactive_gens_at_accept.saturating_sub(1);
                if params.active_plus_inactive_gens_at_accept != 0 {
                    if let Some(first_active) = first_active_gen {
                        accept_gen = accept_gen.min(
                            first_active + params.active_plus_inactive_gens_at_accept - 1,
                        );
                    }
                }
                if !self.filter.is_empty() {
                    accept_gen = accept_gen.max(self.filter.len() as u32 - 1);
                }

                if gen >= accept_gen {
                    stabilization_yielded = true;
                }
                if gen == accept_gen && gen >= first_next_sol_gen {
                    self.counters.solutions_found += 1;
                    info!("solution accepted at generation {gen}");
                    on_solution(self, gen);
                    if params.continue_after_accept {
                        first_next_sol_gen = gen + 1;
                    } else {
                        return ScanOutcome::Pruned;
                    }
                }
            }

            if gen > params.max_reactivation_gen && stabilized && stabilization_yielded {
                self.counters.no_continuation_found += 1;
                return ScanOutcome::Pruned;
            }
        }

        ScanOutcome::Pruned
    }

    /// Finds the first still-unknown cell of generation `gen` (scanning
    /// row-major), resolves it against the static background, and
    /// recurses once with it set `On` and once with it set `Off`,
    /// restoring it to [`Cell::UnknownStable`] on the way back out of
    /// each branch.
    fn choose_cell(
        &mut self,
        gen: u32,
        allow_new_oncells: bool,
        first_next_sol_gen: u32,
        on_solution: &mut dyn FnMut(&World, u32),
    ) {
        let dims = self.dims;
        let mut found = None;
        'search: for y in 0..dims.height {
            for x in 0..dims.width {
                if !self.evolving[gen as usize].grid.get(x, y).is_uncertain() {
                    continue;
                }
                for (dx, dy) in CHOICE_OFFSETS {
                    let (px, py) = (x + dx, y + dy);
                    if !dims.contains(px, py) {
                        continue;
                    }
                    if self.static_cell(px, py).may_be_chosen() {
                        found = Some((px, py));
                        break 'search;
                    }
                }
            }
        }

        let (x, y) = match found {
            Some(coord) => coord,
            None => {
                debug!("generation {gen} reports unknown cells but none could be resolved");
                return;
            }
        };

        if dims.is_boundary(x, y) {
            debug!("cell ({x}, {y}) lies on the tile boundary; wraparound is unsupported");
            return;
        }

        let mirrors = self.params.symmetry.mirror(x, y);
        let mirror_coords: Vec<Coord> = mirrors.into_iter().flatten().collect();
        for &(mx, my) in &mirror_coords {
            if !self.static_cell(mx, my).may_be_chosen() {
                debug!("input region is asymmetric at ({mx}, {my})");
                return;
            }
        }

        if allow_new_oncells {
            if self.onlist.len() + mirror_coords.len()
                <= (self.params.max_added_static_oncells as usize).min(ONLIST_CAPACITY)
            {
                self.onlist.extend_from_slice(&mirror_coords);
                match complexity::test_complexity(
                    &self.onlist,
                    self.params.max_local_areas,
                    self.params.max_local_complexity,
                    self.params.max_global_complexity,
                ) {
                    ComplexResult::Ok => {
                        for &(mx, my) in &mirror_coords {
                            self.commit_cell(mx, my, Cell::On);
                        }
                        self.recurse(first_next_sol_gen, on_solution);
                        for &(mx, my) in &mirror_coords {
                            self.commit_cell(mx, my, Cell::UnknownStable);
                        }
                    }
                    ComplexResult::FailedLocally => {
                        self.counters.complexity_failed_locally += 1;
                    }
                    ComplexResult::FailedGlobally => {
                        self.counters.complexity_failed_globally += 1;
                    }
                }
                self.onlist
                    .truncate(self.onlist.len() - mirror_coords.len());
            } else {
                self.counters.too_many_added_oncells += 1;
            }
        } else {
            self.counters.new_oncells_not_allowed += 1;
        }

        for &(mx, my) in &mirror_coords {
            self.commit_cell(mx, my, Cell::Off);
        }
        self.recurse(first_next_sol_gen, on_solution);
        for &(mx, my) in &mirror_coords {
            self.commit_cell(mx, my, Cell::UnknownStable);
        }
    }
}
