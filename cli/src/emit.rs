//! Writing accepted solutions to disk and printing search progress.

use std::{
    fs::File,
    io::{self, Write},
    time::Instant,
};

use bellman_lib::{cells::Cell, search::PruneCounters, world::World};
use log::info;

/// Writes one accepted solution to `result<NNNNNN>.out` (or the `-4`
/// suffixed legacy name, if `old-result-naming` is set), mirroring the
/// header/body layout the original tool produced.
pub fn write_solution(world: &World, gen: u32, index: u64) -> io::Result<()> {
    let name = if world.params.old_result_naming {
        format!("result{index:06}-4.out")
    } else {
        format!("result{index:06}.out")
    };
    let mut file = File::create(&name)?;

    writeln!(file, "#S min-activation-gen {}", world.params.min_activation_gen)?;
    writeln!(
        file,
        "#S max-first-activation-gen {}",
        world.params.max_first_activation_gen
    )?;
    writeln!(file, "#S max-reactivation-gen {}", world.params.max_reactivation_gen)?;
    writeln!(
        file,
        "#S max-active-gens-in-a-row {}",
        world.params.max_active_gens_in_a_row
    )?;
    writeln!(file, "#S inactive-gens-at-accept {}", world.params.inactive_gens_at_accept)?;
    writeln!(
        file,
        "#S active-plus-inactive-gens-at-accept {}",
        world.params.active_plus_inactive_gens_at_accept
    )?;
    writeln!(
        file,
        "#S continue-after-accept {}",
        world.params.continue_after_accept as u32
    )?;
    writeln!(
        file,
        "#S max-added-static-oncells {}",
        world.params.max_added_static_oncells
    )?;
    writeln!(
        file,
        "#S max-flipped-cells-in-activation {}",
        world.params.max_flipped_cells_in_activation
    )?;
    writeln!(file, "#S max-local-complexity {}", world.params.max_local_complexity)?;
    writeln!(file, "#S max-local-areas {}", world.params.max_local_areas)?;
    writeln!(
        file,
        "#S min-local-area-separation-squared {}",
        world.params.min_local_area_separation_squared
    )?;
    writeln!(file, "#S max-global-complexity {}", world.params.max_global_complexity)?;
    writeln!(file, "#C Solution accepted at generation {gen}")?;

    writeln!(file, "#P 0 0")?;
    let dims = world.dims;
    let gen0 = &world.evolving[0].grid;
    for y in 0..dims.height {
        let mut line = String::with_capacity(dims.width as usize);
        for x in 0..dims.width {
            let ch = if gen0.get(x, y).is_on() {
                '@'
            } else if world.static_cell(x, y).is_on() {
                '*'
            } else if world.static_cell(x, y).is_uncertain() {
                '?'
            } else {
                '.'
            };
            line.push(ch);
        }
        writeln!(file, "{line}")?;
    }

    info!("wrote {name}");
    Ok(())
}

/// Throttled progress printer: prints the running prune-counter tally at
/// most once every `interval`.
pub struct StatusPrinter {
    last_printed: Instant,
    interval: std::time::Duration,
}

impl StatusPrinter {
    pub fn new(interval: std::time::Duration) -> Self {
        StatusPrinter {
            last_printed: Instant::now(),
            interval,
        }
    }

    pub fn maybe_print(&mut self, counters: &PruneCounters) {
        if self.last_printed.elapsed() >= self.interval {
            print_counters(counters);
            self.last_printed = Instant::now();
        }
    }
}

impl Default for StatusPrinter {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(10))
    }
}

fn print_counters(counters: &PruneCounters) {
    info!(
        "solutions={} pruned={} (unstable={} too_many_flipped={} \
         first_act_late={} first_act_early={} reactivation_late={} \
         filter={} forbidden={} stayed_active_long={} no_continuation={} \
         too_many_oncells={} new_oncells_disallowed={} complexity_local={} \
         complexity_global={})",
        counters.solutions_found,
        counters.total_pruned(),
        counters.unstable_background,
        counters.too_many_flipped_cells,
        counters.first_activation_too_late,
        counters.first_activation_too_early,
        counters.reactivation_too_late,
        counters.filter_mismatch,
        counters.forbidden,
        counters.stayed_active_too_long,
        counters.no_continuation_found,
        counters.too_many_added_oncells,
        counters.new_oncells_not_allowed,
        counters.complexity_failed_locally,
        counters.complexity_failed_globally,
    );
}

/// Formats one generation of the evolving universe for `-c` classify
/// output, `.`/`O`/`?` per cell.
pub fn format_generation(world: &World, gen: u32) -> String {
    let dims = world.dims;
    let grid = &world.evolving[gen as usize].grid;
    let mut out = String::new();
    for y in 0..dims.height {
        for x in 0..dims.width {
            let ch = match grid.get(x, y) {
                Cell::Off => '.',
                Cell::On => 'O',
                Cell::UnknownStable | Cell::Unknown => '?',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
