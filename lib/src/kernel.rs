//! The tri-state B3/S23 evolution step.
//!
//! Each cell's successor is derived from how many of its 8 neighbours are
//! known alive and how many are still uncertain: if every way of resolving
//! the uncertain ones agrees on whether the standard birth/survival rule
//! fires, the successor is known; otherwise it stays [`Cell::Unknown`].

use crate::{
    cells::{Cell, NEIGHBOURS},
    flags::GenFlags,
    universe::Grid,
};

/// Reads a cell, treating anything outside the grid as permanently
/// [`Cell::Off`] — there is no support for periodic or `B0` boundary
/// conditions here.
fn cell_or_off(grid: &Grid, x: i32, y: i32) -> Cell {
    if grid.dims.contains(x, y) {
        grid.get(x, y)
    } else {
        Cell::Off
    }
}

/// The standard B3/S23 totalistic rule, generalised over an uncertain self
/// state and an uncertain live-neighbour count.
///
/// `on_count` is the number of neighbours known alive; `unknown_count` is
/// the number still uncertain (each may resolve either way). Returns the
/// successor state: known only if every resolution of the uncertain
/// neighbours and self state agrees.
pub fn life_successor(self_state: Cell, on_count: u32, unknown_count: u32) -> Cell {
    let self_values: &[bool] = match self_state.known() {
        Some(v) => &[v],
        None => &[false, true],
    };

    let mut possible_on = false;
    let mut possible_off = false;
    for &alive in self_values {
        for k in 0..=unknown_count {
            let n = on_count + k;
            let born_or_survives = if alive { n == 2 || n == 3 } else { n == 3 };
            if born_or_survives {
                possible_on = true;
            } else {
                possible_off = true;
            }
            if possible_on && possible_off {
                return Cell::Unknown;
            }
        }
    }
    match (possible_on, possible_off) {
        (true, false) => Cell::On,
        (false, true) => Cell::Off,
        _ => unreachable!("at least one resolution always exists"),
    }
}

/// Counts known-alive and uncertain neighbours of `(x, y)` in `grid`.
fn neighbour_counts(grid: &Grid, x: i32, y: i32) -> (u32, u32) {
    let mut on_count = 0;
    let mut unknown_count = 0;
    for (dx, dy) in NEIGHBOURS {
        match cell_or_off(grid, x + dx, y + dy) {
            Cell::On => on_count += 1,
            Cell::Off => {}
            Cell::UnknownStable | Cell::Unknown => unknown_count += 1,
        }
    }
    (on_count, unknown_count)
}

/// `true` if the 3x3 neighbourhood of `(x, y)` (including the cell itself)
/// in `grid` is cell-for-cell identical to the same neighbourhood in
/// `stable`.
fn nbhd_matches_stable(grid: &Grid, stable: &Grid, x: i32, y: i32) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if cell_or_off(grid, x + dx, y + dy) != cell_or_off(stable, x + dx, y + dy) {
                return false;
            }
        }
    }
    true
}

/// `true` if any cell in the 3x3 neighbourhood of `(x, y)` (including
/// itself) is alive in `stable`.
fn borders_stable_on_cell(stable: &Grid, x: i32, y: i32) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if cell_or_off(stable, x + dx, y + dy).is_on() {
                return true;
            }
        }
    }
    false
}

/// Steps one generation of the evolving universe.
///
/// `prev` is the generation being stepped, and also the value the
/// `DIFFERS_FROM_PREVIOUS` flag compares against. `stable` is the static
/// background; `forbidden` marks cells (as [`Cell::On`]) that may never
/// deviate from the background; `filter` is the optional required pattern
/// for this generation; `two_prev` is the generation two steps back (used
/// only to derive `DIFFERS_FROM_2PREV`, which is also set when there is no
/// such generation).
///
/// Returns the stepped grid, the aggregate flags, and the number of cells
/// active relative to the background.
pub fn evolve_generation(
    prev: &Grid,
    stable: &Grid,
    forbidden: &Grid,
    filter: Option<&Grid>,
    two_prev: Option<&Grid>,
) -> (Grid, GenFlags, u32) {
    let dims = prev.dims;
    let mut out = Grid::new(dims, Cell::Off);
    let mut flags = GenFlags::empty();
    let mut n_active = 0u32;

    for y in 0..dims.height {
        for x in 0..dims.width {
            let (on_count, unknown_count) = neighbour_counts(prev, x, y);
            let raw = life_successor(prev.get(x, y), on_count, unknown_count);

            // Cells whose neighbourhood is untouched by anything unusual
            // must stay exactly as the background says, or floating
            // uncertainty could slowly erode it generation after generation.
            let cell = if nbhd_matches_stable(prev, stable, x, y) {
                stable.get(x, y)
            } else {
                raw
            };
            out.set(x, y, cell);

            let stable_cell = stable.get(x, y);
            // Only a *known* cell disagreeing with a *known* background bit
            // counts as a real divergence; `bellman.c`'s was0now1/was1now0
            // terms are both gated on the output (and background) bit being
            // resolved, not merely non-identical tri-state values.
            let differs_from_stable = match (cell.known(), stable_cell.known()) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            };

            if differs_from_stable && borders_stable_on_cell(stable, x, y) {
                n_active += 1;
                flags |= GenFlags::DIFFERS_FROM_STABLE;
            }

            if cell.is_uncertain() {
                flags |= GenFlags::HAS_UNKNOWN_CELLS;
            }
            if cell.is_on() {
                flags |= GenFlags::HAS_ON_CELLS;
            }
            if differs_from_stable {
                flags |= GenFlags::IS_LIVE;
            }

            if forbidden.get(x, y).is_on() && differs_from_stable {
                flags |= GenFlags::IN_FORBIDDEN_REGION;
            }

            if let Some(filter) = filter {
                if let (Some(want), Some(have)) = (filter.get(x, y).known(), cell.known()) {
                    if want != have {
                        flags |= GenFlags::FILTER_MISMATCH;
                    }
                }
            }

            if cell != prev.get(x, y) {
                flags |= GenFlags::DIFFERS_FROM_PREVIOUS;
            }

            let differs_from_2prev = match two_prev {
                Some(g) => cell != g.get(x, y),
                None => true,
            };
            if differs_from_2prev {
                flags |= GenFlags::DIFFERS_FROM_2PREV;
            }
        }
    }

    (out, flags, n_active)
}

/// Checks that the static background is internally consistent: stepping it
/// with itself as its own predecessor must never force a cell to a known
/// value other than what the background already commits to.
///
/// An uncertain raw result is not a conflict — only a known-vs-known
/// mismatch is.
pub fn verify_static_is_stable(stable: &Grid) -> Result<(), Vec<(i32, i32)>> {
    let dims = stable.dims;
    let mut bad = Vec::new();
    for y in 0..dims.height {
        for x in 0..dims.width {
            let (on_count, unknown_count) = neighbour_counts(stable, x, y);
            let raw = life_successor(stable.get(x, y), on_count, unknown_count);
            if let (Some(raw_known), Some(committed)) = (raw.known(), stable.get(x, y).known()) {
                if raw_known != committed {
                    bad.push((x, y));
                }
            }
        }
    }
    if bad.is_empty() {
        Ok(())
    } else {
        Err(bad)
    }
}
