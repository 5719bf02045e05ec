use bellman_lib::{
    cells::Cell,
    config::{Params, Symmetry},
    universe::{Dims, Grid},
    world::World,
};

fn empty_world(width: i32, height: i32, params: Params) -> World {
    let dims = Dims::new(width, height);
    let static_grid = Grid::new(dims, Cell::Off);
    let forbidden_grid = Grid::new(dims, Cell::Off);
    let evolving_gen0 = Grid::new(dims, Cell::Off);
    World::new(dims, static_grid, forbidden_grid, evolving_gen0, Vec::new(), params)
}

#[test]
fn empty_background_finds_nothing_to_fix() {
    let mut world = empty_world(8, 8, Params::default());
    let counters = world.search(|_, _| panic!("an all-dead universe is already a still life"));
    assert_eq!(counters.solutions_found, 0);
}

#[test]
fn activation_before_min_activation_gen_is_pruned() {
    let dims = Dims::new(8, 8);
    let mut static_grid = Grid::new(dims, Cell::Off);
    for &(x, y) in &[(3, 3), (3, 4), (4, 3), (4, 4)] {
        static_grid.set(x, y, Cell::On);
    }
    let forbidden_grid = Grid::new(dims, Cell::Off);
    let mut evolving_gen0 = static_grid.clone();
    // The perturbation differs from the background already at generation
    // 0, which is earlier than the default `min_activation_gen` of 2.
    evolving_gen0.set(3, 3, Cell::Off);

    let mut world = World::new(
        dims,
        static_grid,
        forbidden_grid,
        evolving_gen0,
        Vec::new(),
        Params::default(),
    );
    let counters = world.search(|_, _| panic!("no solution should be reachable"));
    assert_eq!(counters.solutions_found, 0);
    assert!(counters.first_activation_too_early > 0);
}

#[test]
fn unstable_background_is_rejected_immediately() {
    // A single isolated on-cell is not a still life: it dies next
    // generation, so the "background" itself is already inconsistent.
    let dims = Dims::new(8, 8);
    let mut static_grid = Grid::new(dims, Cell::Off);
    static_grid.set(4, 4, Cell::On);
    let forbidden_grid = Grid::new(dims, Cell::Off);
    let evolving_gen0 = static_grid.clone();

    let mut world = World::new(
        dims,
        static_grid,
        forbidden_grid,
        evolving_gen0,
        Vec::new(),
        Params::default(),
    );
    let counters = world.search(|_, _| panic!("no solution should be reachable"));
    assert_eq!(counters.solutions_found, 0);
    assert!(counters.unstable_background > 0);
}

#[test]
fn unimplemented_diagonal_symmetry_is_rejected() {
    let mut params = Params::default();
    let err = params.set("symmetry-diag", "0").unwrap_err();
    assert!(matches!(err, bellman_lib::Error::UnimplementedSymmetry(_)));
}

#[test]
fn legacy_parameter_aliases_apply_the_documented_offset() {
    let mut params = Params::default();
    params.set("repair-interval", "5").unwrap();
    assert_eq!(params.max_active_gens_in_a_row, 6);
    params.set("stable-interval", "3").unwrap();
    assert_eq!(params.inactive_gens_at_accept, 4);
}

#[test]
fn max_reactivation_gen_defaults_from_first_activation_gen() {
    let mut params = Params::default();
    params.set("max-first-activation-gen", "20").unwrap();
    params.finalize();
    assert_eq!(params.max_reactivation_gen, 20 + 12);
}

#[test]
fn explicit_max_reactivation_gen_is_not_overridden() {
    let mut params = Params::default();
    params.set("max-reactivation-gen", "40").unwrap();
    params.finalize();
    assert_eq!(params.max_reactivation_gen, 40);
}

#[test]
fn symmetry_mirror_is_identity_on_the_axis() {
    let sym = Symmetry::HorizOdd(10);
    let mirrors = sym.mirror(3, 5);
    assert_eq!(mirrors[0], Some((3, 5)));
    assert_eq!(mirrors[1], None);
}

#[test]
fn symmetry_mirror_produces_two_positions_off_axis() {
    let sym = Symmetry::VertEven(7);
    let mirrors = sym.mirror(2, 1);
    assert_eq!(mirrors[0], Some((2, 1)));
    assert_eq!(mirrors[1], Some((5, 1)));
}
