//! The table of human-readable descriptions for AVR instruction mnemonics.

use std::collections::HashMap;
use std::sync::LazyLock;

//===========================================================================//

/// Descriptions of AVR instructions, keyed by canonical mnemonic.
///
/// Indirect loads and stores whose addressing mode changes the index
/// register get their own keys, marked with a trailing `+` (post-increment)
/// or a leading `-` (pre-decrement).  Descriptions are taken from the
/// ATmega328P datasheet's instruction set summary.
const AVR_DESCRIPTIONS: &[(&str, &str)] = &[
    // Arithmetic and logic instructions
    ("add", "Add two registers without carry"),
    ("adc", "Add two registers with carry"),
    ("adiw", "Add immediate to word"),
    ("sub", "Subtract two registers"),
    ("subi", "Subtract constant from register"),
    ("sbc", "Subtract two registers with carry"),
    ("sbci", "Subtract constant from register with carry"),
    ("sbiw", "Subtract immediate from word"),
    ("and", "Logical AND registers"),
    ("andi", "Logical AND register and constant"),
    ("or", "Logical OR registers"),
    ("ori", "Logical OR register and constant"),
    ("eor", "Exclusive or registers"),
    ("com", "Ones complement"),
    ("neg", "Twos complement"),
    ("sbr", "Set bit(s) in register"),
    ("cbr", "Clear bit(s) in register"),
    ("inc", "Increment"),
    ("dec", "Decrement"),
    ("tst", "Test for zero or minus"),
    ("clr", "Clear register"),
    ("ser", "Set register"),
    ("mul", "Multiply unsigned"),
    ("muls", "Multiply signed"),
    ("mulsu", "Multiply signed with unsigned"),
    ("fmul", "Fractional multiply unsigned"),
    ("fmuls", "Fractional multiply signed"),
    ("fmulsu", "Fractional multiply signed with unsigned"),

    // Branch instructions
    ("rjmp", "Relative jump"),
    ("ijmp", "Indirect jump to (Z)"),
    ("jmp", "Direct jump"),
    ("rcall", "Relative subroutine call"),
    ("icall", "Indirect call to (Z)"),
    ("call", "Direct subroutine call"),
    ("eijmp", "Extended indirect jump to (Z)"),
    ("eicall", "Extended indirect call to (Z)"),
    ("ret", "Subroutine return"),
    ("reti", "Interrupt return"),
    ("cpse", "Compare, skip if equal"),
    ("cp", "Compare"),
    ("cpc", "Compare with carry"),
    ("cpi", "Compare Register with immediate"),
    ("sbrc", "Skip if bit in register cleared"),
    ("sbrs", "Skip if bit in register set"),
    ("sbic", "Skip if bit in I/O register cleared"),
    ("sbis", "Skip if bit in I/O register set"),
    ("brbs", "Branch if status flag set"),
    ("brbc", "Branch if status flag cleared"),
    ("breq", "Branch if equal"),
    ("brne", "Branch if not equal"),
    ("brcs", "Branch if carry set"),
    ("brcc", "Branch if carry cleared"),
    ("brsh", "Branch if same or higher"),
    ("brlo", "Branch if lower"),
    ("brmi", "Branch if minus"),
    ("brpl", "Branch if plus"),
    ("brge", "Branch if greater or equal, signed"),
    ("brlt", "Branch if less than, signed"),
    ("brhs", "Branch if half carry flag set"),
    ("brhc", "Branch if half carry flag cleared"),
    ("brts", "Branch if T flag set"),
    ("brtc", "Branch if T flag cleared"),
    ("brvs", "Branch if overflow flag set"),
    ("brvc", "Branch if overflow flag cleared"),
    ("brie", "Branch if interrupt enabled"),
    ("brid", "Branch if interrupt disabled"),

    // Bit and bit-test instructions
    ("sbi", "Set bit in I/O register"),
    ("cbi", "Clear bit in I/O register"),
    ("lsl", "Logical shift left"),
    ("lsr", "Logical shift right"),
    ("rol", "Rotate left through carry"),
    ("ror", "Rotate right through carry"),
    ("asr", "Arithmetic shift right"),
    ("swap", "Swap nibbles"),
    ("bset", "Set flag"),
    ("bclr", "Clear flag"),
    ("bst", "Bit store from register to T"),
    ("bld", "Bit load from T to register"),
    ("sec", "Set carry"),
    ("clc", "Clear carry"),
    ("sen", "Set negative flag"),
    ("cln", "Clear negative flag"),
    ("sez", "Set zero flag"),
    ("clz", "Clear zero flag"),
    ("sei", "Global interrupt enable"),
    ("cli", "Global interrupt disable"),
    ("ses", "Set signed test flag"),
    ("cls", "Clear signed test flag"),
    ("sev", "Set twos-complement overflow"),
    ("clv", "Clear twos-complement overflow"),
    ("set", "Set T in SREG"),
    ("clt", "Clear T in SREG"),
    ("seh", "Set half carry flag"),
    ("clh", "Clear half carry flag"),

    // Data transfer instructions
    ("mov", "Move between registers"),
    ("movw", "Copy register word"),
    ("ldi", "Load immediate"),
    ("ld", "Load indirect"),
    ("ld+", "Load indirect and post-increment"),
    ("-ld", "Load indirect and pre-decrement"),
    ("ldd", "Load indirect with displacement"),
    ("lds", "Load direct from SRAM"),
    ("st", "Store indirect"),
    ("st+", "Store indirect and post-increment"),
    ("-st", "Store indirect and pre-decrement"),
    ("std", "Store indirect with displacement"),
    ("sts", "Store direct from SRAM"),
    ("lpm", "Load program memory"),
    ("lpm+", "Load program memory and post-increment"),
    ("spm", "Store program memory"),
    ("elpm", "Extended load program memory"),
    ("xch", "Exchange register with (Z)"),
    ("las", "Load and set bits at (Z)"),
    ("lac", "Load and clear bits at (Z)"),
    ("lat", "Load and toggle bits at (Z)"),
    ("in", "In from I/O location"),
    ("out", "Out to I/O location"),
    ("push", "Push register on stack"),
    ("pop", "Pop register from stack"),

    // MCU control instructions
    ("nop", "No operation"),
    ("sleep", "Sleep"),
    ("wdr", "Watchdog reset"),
    ("break", "Break"),
    ("des", "Data encryption round"),
];

static AVR_TABLE: LazyLock<DescriptionTable> = LazyLock::new(|| {
    DescriptionTable::from_entries(AVR_DESCRIPTIONS.iter().copied())
});

//===========================================================================//

/// An immutable mapping from canonical mnemonic keys to one-line
/// descriptions.
#[derive(Clone, Debug)]
pub struct DescriptionTable {
    entries: HashMap<&'static str, &'static str>,
}

impl DescriptionTable {
    /// Returns the table of descriptions for the AVR instruction set.  The
    /// table is built on first use and shared thereafter.
    pub fn avr() -> &'static DescriptionTable {
        &AVR_TABLE
    }

    /// Builds a table from arbitrary `(key, description)` pairs.  If a key
    /// appears more than once, the last description wins.
    pub fn from_entries<I>(entries: I) -> DescriptionTable
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        DescriptionTable { entries: entries.into_iter().collect() }
    }

    /// Returns the description for the given canonical key, or `None` if the
    /// table has no entry for it.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Returns true if the table has an entry for the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in the table, sorted by key.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<(&'static str, &'static str)> =
            self.entries.iter().map(|(&key, &desc)| (key, desc)).collect();
        entries.sort_unstable();
        entries
    }
}

//===========================================================================//


//===========================================================================//
