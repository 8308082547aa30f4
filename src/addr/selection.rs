use super::{Addr, Range};
use rangemap::RangeInclusiveSet;

//===========================================================================//

/// A possibly non-contiguous set of address ranges, such as a user's
/// selection in a disassembly listing.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    ranges: RangeInclusiveSet<Addr>,
}

impl Selection {
    /// Returns an empty selection.
    pub fn new() -> Selection {
        Selection { ranges: RangeInclusiveSet::new() }
    }

    /// Returns a selection covering all of the given ranges.  Overlapping
    /// or adjacent ranges are merged.
    pub fn from_ranges<I: IntoIterator<Item = Range>>(ranges: I) -> Selection {
        let mut selection = Selection::new();
        for range in ranges {
            selection.add(range);
        }
        selection
    }

    /// Adds a range of addresses to the selection.
    pub fn add(&mut self, range: Range) {
        self.ranges.insert(range.into());
    }

    /// Returns true if no addresses are selected.
    pub fn is_empty(&self) -> bool {
        self.ranges.iter().next().is_none()
    }

    /// Returns true if `addr` lies within any of the selected ranges.
    pub fn contains(&self, addr: Addr) -> bool {
        self.ranges.contains(&addr)
    }

    /// Returns the lowest selected address, or `None` if the selection is
    /// empty.
    pub fn min(&self) -> Option<Addr> {
        self.ranges().next().map(Range::start)
    }

    /// Returns the highest selected address, or `None` if the selection is
    /// empty.  Note that this bound is inclusive.
    pub fn max(&self) -> Option<Addr> {
        self.ranges().last().map(Range::end)
    }

    /// Returns the (merged) selected ranges, in ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = Range> + '_ {
        self.ranges.iter().filter_map(|range| Range::try_from(range).ok())
    }
}

impl From<Range> for Selection {
    fn from(range: Range) -> Selection {
        Selection::from_ranges([range])
    }
}

//===========================================================================//


//===========================================================================//
