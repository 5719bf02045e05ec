//! Search configuration: symmetry constraints and the tunable bounds that
//! drive the pruning predicates in [`crate::search`].

use std::fmt::{self, Formatter};

use crate::error::Error;

/// Symmetry constraints on the cells the search is allowed to choose.
///
/// `Diag` and `DiagInverse` are reserved names from the parameter-line
/// grammar; they parse but always reject with
/// [`Error::UnimplementedSymmetry`] (see DESIGN.md's Open Questions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Symmetry {
    /// No symmetry constraint at all.
    #[default]
    None,
    /// Mirror symmetry across a horizontal axis at an odd half-integer row.
    HorizOdd(i32),
    /// Mirror symmetry across a horizontal axis at an even half-integer row.
    HorizEven(i32),
    /// Mirror symmetry across a vertical axis at an odd half-integer column.
    VertOdd(i32),
    /// Mirror symmetry across a vertical axis at an even half-integer column.
    VertEven(i32),
}

impl Symmetry {
    /// Returns the mirror position(s) of `(x, y)` under this symmetry.
    ///
    /// The first entry is always `(x, y)` itself; the second is `None`
    /// unless the symmetry produces a distinct mirror image.
    pub fn mirror(self, x: i32, y: i32) -> [Option<(i32, i32)>; 2] {
        match self {
            Symmetry::None => [Some((x, y)), None],
            Symmetry::HorizOdd(ofs) | Symmetry::HorizEven(ofs) => {
                let my = ofs - y;
                if my == y {
                    [Some((x, y)), None]
                } else {
                    [Some((x, y)), Some((x, my))]
                }
            }
            Symmetry::VertOdd(ofs) | Symmetry::VertEven(ofs) => {
                let mx = ofs - x;
                if mx == x {
                    [Some((x, y)), None]
                } else {
                    [Some((x, y)), Some((mx, y))]
                }
            }
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Symmetry::None => write!(f, "none"),
            Symmetry::HorizOdd(o) => write!(f, "symmetry-horiz-odd {}", o / 2),
            Symmetry::HorizEven(o) => write!(f, "symmetry-horiz-even {}", (o - 1) / 2),
            Symmetry::VertOdd(o) => write!(f, "symmetry-vert-odd {}", o / 2),
            Symmetry::VertEven(o) => write!(f, "symmetry-vert-even {}", (o - 1) / 2),
        }
    }
}

/// Extra generations allowed for reactivation when `max-reactivation-gen`
/// is not set explicitly, added to `max-first-activation-gen`.
pub const DEFAULT_MIN_EXTRA_GENS_TO_ALLOW_REACTIVATION: u32 = 12;

/// Cap on `max-local-areas`.
pub const MAX_MAX_LOCAL_AREAS: u32 = 16;

/// Cells the complexity test allows for free in a local box before scoring
/// its size.
pub const LOCAL_COMPLEXITY_FREE_CELLS: u32 = 4;

/// Cells the complexity test allows for free in the single global box.
pub const GLOBAL_COMPLEXITY_FREE_CELLS: u32 = 9;

/// Every tunable bound from the parameter-line grammar, plus the legacy
/// aliases the parser still has to accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub min_activation_gen: u32,
    pub max_first_activation_gen: u32,
    pub max_reactivation_gen: u32,
    /// Whether `max-reactivation-gen` was set explicitly, as opposed to
    /// derived from `max_first_activation_gen` by [`Params::finalize`].
    pub explicit_max_reactivation_gen: bool,
    pub max_active_gens_in_a_row: u32,
    pub inactive_gens_at_accept: u32,
    pub active_plus_inactive_gens_at_accept: u32,
    pub continue_after_accept: bool,
    pub max_added_static_oncells: u32,
    pub max_flipped_cells_in_activation: u32,
    pub max_local_complexity: u32,
    pub max_local_areas: u32,
    pub min_local_area_separation_squared: u32,
    pub max_global_complexity: u32,
    pub old_result_naming: bool,
    pub symmetry: Symmetry,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            min_activation_gen: 2,
            max_first_activation_gen: 17,
            max_reactivation_gen: 17 + DEFAULT_MIN_EXTRA_GENS_TO_ALLOW_REACTIVATION,
            explicit_max_reactivation_gen: false,
            max_active_gens_in_a_row: 12,
            inactive_gens_at_accept: 6,
            active_plus_inactive_gens_at_accept: 0,
            continue_after_accept: false,
            max_added_static_oncells: 32,
            max_flipped_cells_in_activation: 8,
            max_local_complexity: 1023,
            max_local_areas: 1,
            min_local_area_separation_squared: 10,
            max_global_complexity: 1023,
            old_result_naming: false,
            symmetry: Symmetry::None,
        }
    }
}

impl Params {
    /// Sets one named `#S` parameter, including legacy aliases.
    ///
    /// `repair-interval` and `stable-interval` carry a `+1` offset from
    /// their modern equivalents, because they historically counted
    /// transitions rather than generations.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let raw: u32 = value
            .parse()
            .map_err(|_| Error::InvalidParameterValue(name.to_string(), value.to_string()))?;

        macro_rules! ranged {
            ($field:expr, $min:expr, $max:expr, $add:expr) => {{
                if raw < $min || raw > $max {
                    return Err(Error::ParameterOutOfRange {
                        name: name.to_string(),
                        min: $min,
                        max: $max,
                    });
                }
                $field = raw + $add;
                return Ok(());
            }};
        }

        match name {
            "first-encounter" => ranged!(self.min_activation_gen, 0, 1023, 0),
            "last-encounter" => ranged!(self.max_first_activation_gen, 0, 1023, 0),
            "repair-interval" => ranged!(self.max_active_gens_in_a_row, 0, 1022, 1),
            "stable-interval" => ranged!(self.inactive_gens_at_accept, 0, 1022, 1),
            "max-live" => ranged!(self.max_added_static_oncells, 0, 1023, 0),
            "max-active" => ranged!(self.max_flipped_cells_in_activation, 0, 1023, 0),

            "min-activation-gen" => ranged!(self.min_activation_gen, 0, 1023, 0),
            "max-first-activation-gen" => ranged!(self.max_first_activation_gen, 0, 1023, 0),
            "max-reactivation-gen" => {
                if raw > 1023 {
                    return Err(Error::ParameterOutOfRange {
                        name: name.to_string(),
                        min: 0,
                        max: 1023,
                    });
                }
                self.max_reactivation_gen = raw;
                self.explicit_max_reactivation_gen = true;
                Ok(())
            }
            "max-active-gens-in-a-row" => ranged!(self.max_active_gens_in_a_row, 1, 1023, 0),
            "inactive-gens-at-accept" => ranged!(self.inactive_gens_at_accept, 1, 1023, 0),
            "active-plus-inactive-gens-at-accept" => {
                ranged!(self.active_plus_inactive_gens_at_accept, 0, 1023, 0)
            }
            "continue-after-accept" => {
                self.continue_after_accept = parse_bool_param(name, value)?;
                Ok(())
            }
            "max-added-static-oncells" => ranged!(self.max_added_static_oncells, 0, 1023, 0),
            "max-flipped-cells-in-activation" => {
                ranged!(self.max_flipped_cells_in_activation, 0, 1023, 0)
            }
            "max-local-complexity" => ranged!(self.max_local_complexity, 0, 1023, 0),
            "max-local-areas" => ranged!(self.max_local_areas, 1, MAX_MAX_LOCAL_AREAS, 0),
            "min-local-area-separation-squared" => {
                ranged!(self.min_local_area_separation_squared, 0, 8191, 0)
            }
            "max-global-complexity" => ranged!(self.max_global_complexity, 0, 1023, 0),
            "old-result-naming" => {
                self.old_result_naming = parse_bool_param(name, value)?;
                Ok(())
            }
            "symmetry-horiz-odd" => {
                self.symmetry = Symmetry::HorizOdd(raw as i32 * 2);
                Ok(())
            }
            "symmetry-horiz-even" => {
                self.symmetry = Symmetry::HorizEven(raw as i32 * 2 + 1);
                Ok(())
            }
            "symmetry-vert-odd" => {
                self.symmetry = Symmetry::VertOdd(raw as i32 * 2);
                Ok(())
            }
            "symmetry-vert-even" => {
                self.symmetry = Symmetry::VertEven(raw as i32 * 2 + 1);
                Ok(())
            }
            "symmetry-diag" | "symmetry-diag-inverse" => {
                Err(Error::UnimplementedSymmetry(name.to_string()))
            }
            _ => Err(Error::UnknownParameter(name.to_string())),
        }
    }

    /// Finalises derived fields once the whole input file has been read.
    pub fn finalize(&mut self) {
        if !self.explicit_max_reactivation_gen {
            self.max_reactivation_gen =
                self.max_first_activation_gen + DEFAULT_MIN_EXTRA_GENS_TO_ALLOW_REACTIVATION;
        }
        if self.active_plus_inactive_gens_at_accept < 2 {
            self.active_plus_inactive_gens_at_accept = 0;
        }
    }

    /// The number of generations the evolving universe is ever
    /// instantiated for.
    pub fn max_gens(&self, filter_n_gens: u32) -> u32 {
        let mut max_gens = self.max_reactivation_gen
            + self.max_active_gens_in_a_row
            + self.inactive_gens_at_accept;
        if self.active_plus_inactive_gens_at_accept != 0 {
            max_gens = max_gens.min(
                self.max_reactivation_gen
                    + (self.max_active_gens_in_a_row + 1)
                        .max(self.active_plus_inactive_gens_at_accept),
            );
        }
        max_gens.max(filter_n_gens + 1)
    }
}

fn parse_bool_param(name: &str, value: &str) -> Result<bool, Error> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(Error::ParameterOutOfRange {
            name: name.to_string(),
            min: 0,
            max: 1,
        }),
    }
}
