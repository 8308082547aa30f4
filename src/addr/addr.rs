use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

//===========================================================================//

/// Represents the address of an instruction within a disassembly listing.
///
/// Addresses are opaque to everything except ordering; the listing decides
/// what a given address value means (byte or word offset, address space).
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd,
)]
pub struct Addr(pub(super) u32);

impl Addr {
    /// The smallest address value (0).
    pub const MIN: Addr = Addr(0);

    /// The largest address value.
    pub const MAX: Addr = Addr(!0);

    /// Returns the address as a `u32`.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u16> for Addr {
    fn from(value: u16) -> Addr {
        Addr(value.into())
    }
}

impl From<u32> for Addr {
    fn from(value: u32) -> Addr {
        Addr(value)
    }
}

impl From<Addr> for u32 {
    fn from(value: Addr) -> u32 {
        value.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:04x}", self.0)
    }
}

impl fmt::LowerHex for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.fmt(f)
    }
}

impl FromStr for Addr {
    type Err = AddrParseError;

    /// Parses a hexadecimal address, with an optional `0x` or `$` prefix.
    fn from_str(string: &str) -> Result<Addr, AddrParseError> {
        let digits = string
            .strip_prefix("0x")
            .or_else(|| string.strip_prefix("0X"))
            .or_else(|| string.strip_prefix('$'))
            .unwrap_or(string);
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(AddrParseError::Empty(string.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Addr)
            .map_err(|err| AddrParseError::Invalid(string.to_string(), err))
    }
}

impl rangemap::StepLite for Addr {
    fn add_one(&self) -> Addr {
        Addr(self.0 + 1)
    }

    fn sub_one(&self) -> Addr {
        Addr(self.0 - 1)
    }
}

//===========================================================================//

/// An error encountered while parsing an [`Addr`] from a string.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AddrParseError {
    /// The string contained no hex digits.
    #[error("missing hex digits in address {0:?}")]
    Empty(String),
    /// The string was not a valid 32-bit hex number.
    #[error("invalid address {0:?}: {1}")]
    Invalid(String, ParseIntError),
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{Addr, AddrParseError};

    #[test]
    fn addr_display() {
        assert_eq!(Addr::from(0x12u16).to_string(), "0012");
        assert_eq!(Addr::from(0x1234u16).to_string(), "1234");
        assert_eq!(Addr::from(0x12345u32).to_string(), "12345");
        assert_eq!(format!("{:#x}", Addr::from(0xabcu16)), "0xabc");
    }

    #[test]
    fn addr_from_str() {
        assert_eq!("0100".parse(), Ok(Addr::from(0x100u16)));
        assert_eq!("0x1f".parse(), Ok(Addr::from(0x1fu16)));
        assert_eq!("$BEEF".parse(), Ok(Addr::from(0xbeefu16)));
        assert_eq!("ffffffff".parse(), Ok(Addr::MAX));
        assert!(matches!("0x".parse::<Addr>(), Err(AddrParseError::Empty(_))));
        assert!(matches!(
            "-10".parse::<Addr>(),
            Err(AddrParseError::Empty(_))
        ));
        assert!(matches!(
            "12g4".parse::<Addr>(),
            Err(AddrParseError::Invalid(_, _))
        ));
        assert!(matches!(
            "100000000".parse::<Addr>(),
            Err(AddrParseError::Invalid(_, _))
        ));
    }

    #[test]
    fn addr_ordering() {
        assert!(Addr::MIN < Addr::from(1u16));
        assert!(Addr::from(0xffffu16) < Addr::from(0x10000u32));
        assert!(Addr::from(0x10000u32) < Addr::MAX);
    }
}

//===========================================================================//
