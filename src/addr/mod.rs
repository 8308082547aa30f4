//! Types for representing instruction addresses and selections of them.

#[allow(clippy::module_inception)]
mod addr;
mod range;
mod selection;

pub use addr::{Addr, AddrParseError};
pub use range::Range;
pub use selection::Selection;

//===========================================================================//
