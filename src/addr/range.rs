use super::{Addr, AddrParseError};
use std::fmt;
use std::ops;
use std::str::FromStr;

//===========================================================================//

/// Represents a nonempty, inclusive range of instruction addresses.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Range {
    pub(super) first: Addr,
    pub(super) last: Addr,
}

impl Range {
    /// A range that covers all possible addresses.
    pub const FULL: Range = Range { first: Addr::MIN, last: Addr::MAX };

    /// Returns an address range that contains `first`, `last`, and all
    /// addresses in between.
    ///
    /// Panics if `last < first`.
    pub fn with_bounds(first: Addr, last: Addr) -> Range {
        assert!(first <= last);
        Range { first, last }
    }

    /// Returns the first address in the range.
    pub fn start(self) -> Addr {
        self.first
    }

    /// Returns the last address in the range.
    pub fn end(self) -> Addr {
        self.last
    }

    /// Returns true if this range contains `addr`.
    pub fn contains(self, addr: Addr) -> bool {
        (self.first..=self.last).contains(&addr)
    }
}

impl From<Range> for ops::RangeInclusive<Addr> {
    fn from(value: Range) -> ops::RangeInclusive<Addr> {
        value.first..=value.last
    }
}

impl TryFrom<&ops::RangeInclusive<Addr>> for Range {
    type Error = ();

    fn try_from(value: &ops::RangeInclusive<Addr>) -> Result<Range, ()> {
        let first = *value.start();
        let last = *value.end();
        if first <= last { Ok(Range { first, last }) } else { Err(()) }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl FromStr for Range {
    type Err = String;

    /// Parses either a single hex address, or two hex addresses separated by
    /// a hyphen (e.g. `0100-01ff`), which are both included in the range.
    fn from_str(string: &str) -> Result<Range, String> {
        let (first, last) = match string.split_once('-') {
            Some((first, last)) => (
                first.trim().parse::<Addr>().map_err(|e| e.to_string())?,
                last.trim().parse::<Addr>().map_err(|e| e.to_string())?,
            ),
            None => {
                let addr = string
                    .trim()
                    .parse::<Addr>()
                    .map_err(|e: AddrParseError| e.to_string())?;
                (addr, addr)
            }
        };
        if first > last {
            return Err(format!(
                "range start {first} is after range end {last}"
            ));
        }
        Ok(Range { first, last })
    }
}

//===========================================================================//


//===========================================================================//
