//! The complexity test that bounds how sprawling the added static cells of
//! a catalyst are allowed to get.

use crate::{
    cells::Coord,
    config::{GLOBAL_COMPLEXITY_FREE_CELLS, LOCAL_COMPLEXITY_FREE_CELLS},
};

/// Outcome of [`test_complexity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexResult {
    Ok,
    FailedLocally,
    FailedGlobally,
}

/// A growable bounding box over committed on-cells, used both for the
/// local-area test (several small boxes, a few free cells each) and the
/// single global test (one big box, more free cells).
#[derive(Clone, Copy, Debug)]
pub struct ComplexBox {
    xon: i32,
    xoff: i32,
    yon: i32,
    yoff: i32,
    oncnt: u32,
}

impl ComplexBox {
    /// A box with nothing in it yet. `xoff`/`yoff` are exclusive upper
    /// bounds, so an empty box has `xoff < xon`.
    pub fn empty() -> Self {
        ComplexBox {
            xon: 0,
            xoff: -1,
            yon: 0,
            yoff: -1,
            oncnt: 0,
        }
    }

    fn score(xon: i32, xoff: i32, yon: i32, yoff: i32, oncnt: u32, free_cells: u32) -> u32 {
        let width = (xoff - xon).max(0) as u32;
        let height = (yoff - yon).max(0) as u32;
        let big = width.max(height);
        let short = width.min(height);
        oncnt.saturating_sub(free_cells) + 2 * big + short
    }

    /// Tries to add `(x, y)` to this box. Succeeds (and commits the cell)
    /// only if the resulting score stays within `compl_limit`; otherwise
    /// the box is left unchanged.
    pub fn try_add(&mut self, x: i32, y: i32, compl_limit: u32, free_cells: u32) -> bool {
        let (xon, xoff, yon, yoff) = if self.xon > self.xoff {
            (x, x + 1, y, y + 1)
        } else {
            (
                self.xon.min(x),
                self.xoff.max(x + 1),
                self.yon.min(y),
                self.yoff.max(y + 1),
            )
        };
        let oncnt = self.oncnt + 1;

        if Self::score(xon, xoff, yon, yoff, oncnt, free_cells) <= compl_limit {
            self.xon = xon;
            self.xoff = xoff;
            self.yon = yon;
            self.yoff = yoff;
            self.oncnt = oncnt;
            true
        } else {
            false
        }
    }
}

/// Tests whether `onlist` (the full set of committed extra on-cells, in
/// the order they were added) still fits the complexity bounds.
///
/// Every cell must fit into one of up to `max_local_areas` independent
/// local boxes (the first box that accepts it wins); separately, all
/// cells together must fit into a single global box. Both tests are
/// re-run from scratch over the whole list each time, since there is no
/// incremental way to undo a `ComplexBox` that rejected a cell another
/// box later accepted.
pub fn test_complexity(
    onlist: &[Coord],
    max_local_areas: u32,
    max_local_complexity: u32,
    max_global_complexity: u32,
) -> ComplexResult {
    let mut local_boxes = vec![ComplexBox::empty(); max_local_areas as usize];
    for &(x, y) in onlist {
        let accepted = local_boxes
            .iter_mut()
            .any(|b| b.try_add(x, y, max_local_complexity, LOCAL_COMPLEXITY_FREE_CELLS));
        if !accepted {
            return ComplexResult::FailedLocally;
        }
    }

    let mut global_box = ComplexBox::empty();
    for &(x, y) in onlist {
        if !global_box.try_add(x, y, max_global_complexity, GLOBAL_COMPLEXITY_FREE_CELLS) {
            return ComplexResult::FailedGlobally;
        }
    }

    ComplexResult::Ok
}
