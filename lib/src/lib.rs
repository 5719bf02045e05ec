/*!
__bellman__ is a still-life and catalyst search engine for Conway's Game
of Life (rule B3/S23).

Given a still-life background, a perturbation applied to it at generation
0, and a set of bounds on how the perturbation is allowed to play out, it
searches for ways to fill in the background's undetermined cells so that
the perturbation eventually settles back into a (possibly different)
still life, without the background ever becoming unstable along the way.

This is the library crate; the `bellman` binary wraps it with a Life
1.05-style pattern reader, a solution writer, and a command-line driver.

# Example

```rust
use bellman_lib::{cells::Cell, config::Params, universe::{Dims, Grid}, world::World};

let dims = Dims::new(6, 6);
let static_grid = Grid::new(dims, Cell::Off);
let forbidden_grid = Grid::new(dims, Cell::Off);
let evolving_gen0 = Grid::new(dims, Cell::Off);

let mut world = World::new(dims, static_grid, forbidden_grid, evolving_gen0, Vec::new(), Params::default());
let counters = world.search(|_world, _gen| {});
assert_eq!(counters.solutions_found, 0);
```
*/

pub mod cells;
pub mod classify;
pub mod complexity;
pub mod config;
pub mod error;
pub mod flags;
pub mod kernel;
pub mod search;
pub mod universe;
pub mod world;

pub use cells::Cell;
pub use config::{Params, Symmetry};
pub use error::Error;
pub use search::PruneCounters;
pub use universe::{Dims, Generation, Grid};
pub use world::World;
