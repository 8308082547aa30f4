//! The boundary between annotation logic and the disassembly listing that
//! supplies decoded instructions and stores comments.

mod comments;
mod program;

pub use comments::Comments;
pub use program::{DecodedInstruction, Program};

use crate::addr::Addr;

//===========================================================================//

/// A single instruction that has already been decoded by a disassembler.
pub trait Instruction {
    /// Returns the address of this instruction.
    fn addr(&self) -> Addr;

    /// Returns the base mnemonic of this instruction, as reported by the
    /// disassembler (e.g. `"ld"`), before any addressing-mode
    /// disambiguation.
    fn mnemonic(&self) -> &str;

    /// Returns the number of operands this instruction has.
    fn num_operands(&self) -> usize;

    /// Returns the textual representation of the operand at the given index,
    /// or `None` if there is no such operand.
    fn operand(&self, index: usize) -> Option<&str>;

    /// Returns the first separator character that the disassembler reported
    /// immediately after the operand at the given index, if any.  Only that
    /// first character is exposed; any further separator text after the
    /// same operand is not visible through this method.
    ///
    /// Some disassemblers report punctuation such as a post-increment `+`
    /// as a separator following an operand rather than as part of the
    /// operand's own text.
    fn separator_after(&self, index: usize) -> Option<char>;
}

//===========================================================================//

/// A disassembly listing that can be walked in ascending address order.
pub trait Listing {
    /// Returns the instruction that starts exactly at `addr`, if any.
    fn instruction_at(&self, addr: Addr) -> Option<&dyn Instruction>;

    /// Returns the first instruction that starts strictly after `addr`, if
    /// any.
    fn instruction_after(&self, addr: Addr) -> Option<&dyn Instruction>;

    /// Returns the instruction that follows `instr` in program order, if
    /// any.
    fn next_instruction(
        &self,
        instr: &dyn Instruction,
    ) -> Option<&dyn Instruction> {
        self.instruction_after(instr.addr())
    }
}

//===========================================================================//

/// A destination for end-of-line comments.
pub trait AnnotationSink {
    /// Sets the end-of-line comment at the given address, replacing any
    /// comment that was already there.
    fn set_eol_comment(&mut self, addr: Addr, text: &str);
}

//===========================================================================//
