//! Reading the Life 1.05 dialect (with extensions) bellman's input files
//! use: `#P`/`#S`/`#C` header lines, an optional `#F`-delimited filter
//! block, and a pattern block using `.`/`*`/`@`/`?`/`!` per-cell
//! characters.

use std::io::BufRead;

use bellman_lib::{
    cells::Cell,
    config::Params,
    universe::{Dims, Grid},
};

/// Everything [`read_pattern`] extracts from an input file, ready to hand
/// to [`bellman_lib::world::World::new`].
pub struct ParsedPattern {
    pub dims: Dims,
    pub static_grid: Grid,
    pub evolving_gen0: Grid,
    pub forbidden_grid: Grid,
    pub filter: Vec<Option<Grid>>,
    pub params: Params,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Pattern,
    Filter,
}

/// Parses a whole input file.
///
/// `#P x y` opens a pattern block at that top-left offset; `#F gen`
/// opens a filter block for the given generation; `#S name value` sets a
/// parameter; `#C` lines are comments and ignored. Everything else is
/// parsed as either pattern or filter rows, one character per cell.
pub fn read_pattern(
    reader: impl BufRead,
    width: i32,
    height: i32,
) -> Result<ParsedPattern, bellman_lib::Error> {
    let dims = Dims::new(width, height);
    let mut static_grid = Grid::new(dims, Cell::UnknownStable);
    let mut evolving_gen0 = Grid::new(dims, Cell::UnknownStable);
    let mut forbidden_grid = Grid::new(dims, Cell::Off);
    let mut filter: Vec<Option<Grid>> = Vec::new();
    let mut params = Params::default();

    let mut block = Block::None;
    let mut origin = (0i32, 0i32);
    let mut row = 0i32;
    let mut filter_gen = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|e| bellman_lib::Error::Io(e.to_string()))?;
        if let Some(rest) = line.strip_prefix("#P") {
            let mut parts = rest.split_whitespace();
            let x: i32 = parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| bellman_lib::Error::MalformedPattern("bad #P line".into()))?;
            let y: i32 = parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| bellman_lib::Error::MalformedPattern("bad #P line".into()))?;
            block = Block::Pattern;
            origin = (x, y);
            row = 0;
            continue;
        }
        if let Some(rest) = line.strip_prefix("#F") {
            filter_gen = rest
                .trim()
                .parse()
                .map_err(|_| bellman_lib::Error::MalformedPattern("bad #F line".into()))?;
            while filter.len() <= filter_gen {
                filter.push(None);
            }
            filter[filter_gen] = Some(Grid::new(dims, Cell::Unknown));
            block = Block::Filter;
            origin = (0, 0);
            row = 0;
            continue;
        }
        if let Some(rest) = line.strip_prefix("#S") {
            let mut parts = rest.trim().splitn(2, char::is_whitespace);
            let name = parts
                .next()
                .ok_or_else(|| bellman_lib::Error::MalformedPattern("bad #S line".into()))?;
            let value = parts
                .next()
                .ok_or_else(|| bellman_lib::Error::MalformedPattern("bad #S line".into()))?
                .trim();
            params.set(name, value)?;
            continue;
        }
        if line.starts_with("#C") || line.starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match block {
            Block::None => {}
            Block::Pattern => {
                for (col, ch) in line.chars().enumerate() {
                    let x = origin.0 + col as i32;
                    let y = origin.1 + row;
                    if !dims.contains(x, y) {
                        continue;
                    }
                    let (stable, evolving, forbidden) = match ch {
                        '.' => (Cell::Off, Cell::Off, Cell::Off),
                        '*' => (Cell::On, Cell::On, Cell::Off),
                        '@' => (Cell::Off, Cell::On, Cell::Off),
                        '?' => (Cell::UnknownStable, Cell::UnknownStable, Cell::Off),
                        '!' => (Cell::Off, Cell::Off, Cell::On),
                        _ => continue,
                    };
                    static_grid.set(x, y, stable);
                    evolving_gen0.set(x, y, evolving);
                    forbidden_grid.set(x, y, forbidden);
                }
                row += 1;
            }
            Block::Filter => {
                let grid = filter[filter_gen].as_mut().unwrap();
                for (col, ch) in line.chars().enumerate() {
                    let x = origin.0 + col as i32;
                    let y = origin.1 + row;
                    if !dims.contains(x, y) {
                        continue;
                    }
                    match ch {
                        '*' => grid.set(x, y, Cell::On),
                        '.' | ' ' => grid.set(x, y, Cell::Off),
                        _ => {}
                    }
                }
                row += 1;
            }
        }
    }

    params.finalize();

    Ok(ParsedPattern {
        dims,
        static_grid,
        evolving_gen0,
        forbidden_grid,
        filter,
        params,
    })
}
