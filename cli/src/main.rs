mod args;
mod emit;
mod parse;

use std::{fs::File, io::BufReader, process::exit};

use args::Args;
use log::{error, info};

fn main() {
    let args = Args::parse_args();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            error!("could not open {}: {e}", args.input.display());
            exit(1);
        }
    };

    let parsed = match parse::read_pattern(BufReader::new(file), args.width, args.height) {
        Ok(p) => p,
        Err(e) => {
            error!("failed to parse {}: {e}", args.input.display());
            exit(1);
        }
    };

    let mut world = bellman_lib::World::new(
        parsed.dims,
        parsed.static_grid,
        parsed.forbidden_grid,
        parsed.evolving_gen0,
        parsed.filter,
        parsed.params,
    );

    if args.classify {
        let report = bellman_lib::classify::classify(&mut world);
        println!("hash: {:016x}", report.hash);
        println!("first-active-gen: {:?}", report.first_active_gen);
        println!("last-active-gen: {:?}", report.last_active_gen);
        for event in &report.events {
            println!("{event:?}");
        }
        return;
    }

    if let Err(bad) = bellman_lib::kernel::verify_static_is_stable(&world.static_grid) {
        error!("static background is not stable at {} cell(s)", bad.len());
        exit(1);
    }

    let mut solution_index = 0u64;
    let counters = world.search(|world, gen| {
        if let Err(e) = emit::write_solution(world, gen, solution_index) {
            error!("failed to write solution: {e}");
        }
        solution_index += 1;
    });

    info!(
        "search finished: {} solution(s), {} branch(es) pruned",
        counters.solutions_found,
        counters.total_pruned()
    );
    if counters.solutions_found == 0 {
        eprintln!("Not found.");
        exit(1);
    }
}
