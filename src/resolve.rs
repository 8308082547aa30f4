//! Facilities for resolving a decoded AVR instruction to its description.

use crate::addr::Addr;
use crate::desc::DescriptionTable;
use crate::listing::Instruction;
use std::fmt;
use thiserror::Error;

//===========================================================================//

/// How an indirect load or store instruction changes its index register.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddrMode {
    /// The index register is left unchanged (or the instruction isn't an
    /// indirect load/store at all).
    Plain,
    /// The index register is incremented after the memory access.
    PostIncrement,
    /// The index register is decremented before the memory access.
    PreDecrement,
}

//===========================================================================//

/// The key used to look up an instruction's description: its base mnemonic,
/// plus the addressing mode for mnemonics that have several variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CanonicalKey<'a> {
    /// The base mnemonic, as reported by the disassembler.
    pub base: &'a str,
    /// The addressing mode variant.
    pub mode: AddrMode,
}

impl<'a> CanonicalKey<'a> {
    /// Returns a key for the given base mnemonic with no addressing mode
    /// variant.
    pub fn plain(base: &'a str) -> CanonicalKey<'a> {
        CanonicalKey { base, mode: AddrMode::Plain }
    }
}

impl fmt::Display for CanonicalKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.mode {
            AddrMode::Plain => f.write_str(self.base),
            AddrMode::PostIncrement => write!(f, "{}+", self.base),
            AddrMode::PreDecrement => write!(f, "-{}", self.base),
        }
    }
}

//===========================================================================//

/// Determines the canonical key for a decoded instruction.
///
/// Only `ld`, `st`, and `lpm` have addressing mode variants.  The
/// disassembler doesn't report their markers consistently: the
/// post-increment `+` of `ld` arrives as a separator after the second
/// operand, while every other marker is embedded in a two-character operand
/// (`X+`, `-Y`).
pub fn classify(instr: &dyn Instruction) -> CanonicalKey<'_> {
    let base = instr.mnemonic();
    let mode = match base {
        "ld" => {
            if instr.separator_after(1) == Some('+') {
                AddrMode::PostIncrement
            } else if let Some(['-', _]) = marker_operand(instr, 1) {
                AddrMode::PreDecrement
            } else {
                AddrMode::Plain
            }
        }
        "st" => match marker_operand(instr, 0) {
            Some([_, '+']) => AddrMode::PostIncrement,
            Some(['-', _]) => AddrMode::PreDecrement,
            _ => AddrMode::Plain,
        },
        "lpm" => match marker_operand(instr, 0) {
            Some([_, '+']) => AddrMode::PostIncrement,
            _ => AddrMode::Plain,
        },
        _ => AddrMode::Plain,
    };
    CanonicalKey { base, mode }
}

/// Returns the characters of the operand at `index` if it is exactly two
/// characters long, the only length at which an addressing mode marker is
/// recognized.
fn marker_operand(
    instr: &dyn Instruction,
    index: usize,
) -> Option<[char; 2]> {
    let mut chars = instr.operand(index)?.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => Some([first, second]),
        _ => None,
    }
}

//===========================================================================//

/// A description to attach as the end-of-line comment at an address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Annotation {
    /// The address of the annotated instruction.
    pub addr: Addr,
    /// The description of the instruction.
    pub text: &'static str,
}

//===========================================================================//

/// An error encountered while resolving an instruction's description.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ResolveError {
    /// The instruction's canonical key has no entry in the description
    /// table.
    #[error("no description for mnemonic {key:?} at address {addr}")]
    UnmappedMnemonic {
        /// The address of the instruction.
        addr: Addr,
        /// The canonical key that was looked up.
        key: String,
    },
}

//===========================================================================//

/// Resolves decoded instructions to annotations using a description table.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'t> {
    table: &'t DescriptionTable,
}

impl<'t> Resolver<'t> {
    /// Returns a resolver that uses the given table.
    pub fn new(table: &'t DescriptionTable) -> Resolver<'t> {
        Resolver { table }
    }

    /// Determines the description of a single instruction.
    pub fn resolve(
        &self,
        instr: &dyn Instruction,
    ) -> Result<Annotation, ResolveError> {
        let addr = instr.addr();
        let key = classify(instr).to_string();
        match self.table.lookup(&key) {
            Some(text) => Ok(Annotation { addr, text }),
            None => Err(ResolveError::UnmappedMnemonic { addr, key }),
        }
    }
}

impl Resolver<'static> {
    /// Returns a resolver that uses the AVR description table.
    pub fn avr() -> Resolver<'static> {
        Resolver::new(DescriptionTable::avr())
    }
}

//===========================================================================//


//===========================================================================//
