use super::{Comments, Instruction, Listing};
use crate::addr::Addr;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

//===========================================================================//

const COMMENT_COLUMN: usize = 32;

//===========================================================================//

#[derive(Clone, Debug, Eq, PartialEq)]
struct Operand {
    text: String,
    separator: String,
}

//===========================================================================//

/// An instruction decoded by a disassembler, stored in memory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedInstruction {
    addr: Addr,
    mnemonic: String,
    operands: Vec<Operand>,
}

impl DecodedInstruction {
    /// Creates an instruction with the given address and mnemonic, and no
    /// operands.
    pub fn new(addr: Addr, mnemonic: &str) -> DecodedInstruction {
        DecodedInstruction {
            addr,
            mnemonic: mnemonic.to_string(),
            operands: Vec::new(),
        }
    }

    /// Appends an operand with the given text.
    pub fn with_operand(mut self, text: &str) -> DecodedInstruction {
        self.push_operand(text);
        self
    }

    /// Appends separator text after the most recently added operand.
    ///
    /// Panics if the instruction has no operands yet.
    pub fn with_separator(mut self, separator: &str) -> DecodedInstruction {
        assert!(!self.operands.is_empty());
        self.push_separator(separator);
        self
    }

    pub(crate) fn push_operand(&mut self, text: &str) {
        self.operands.push(Operand {
            text: text.to_string(),
            separator: String::new(),
        });
    }

    /// Appends separator text after the last operand.  Returns false (and
    /// does nothing) if there are no operands yet.
    pub(crate) fn push_separator(&mut self, separator: &str) -> bool {
        match self.operands.last_mut() {
            Some(operand) => {
                operand.separator.push_str(separator);
                true
            }
            None => false,
        }
    }
}

impl Instruction for DecodedInstruction {
    fn addr(&self) -> Addr {
        self.addr
    }

    fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    fn num_operands(&self) -> usize {
        self.operands.len()
    }

    fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(|operand| operand.text.as_str())
    }

    fn separator_after(&self, index: usize) -> Option<char> {
        self.operands.get(index)?.separator.chars().next()
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(&self.mnemonic)?;
        if !self.operands.is_empty() {
            f.write_str(" ")?;
        }
        let num_operands = self.operands.len();
        for (index, operand) in self.operands.iter().enumerate() {
            f.write_str(&operand.text)?;
            for chr in operand.separator.chars() {
                if chr == ',' {
                    f.write_str(",")?;
                } else {
                    write!(f, " {chr}")?;
                }
            }
            if index + 1 < num_operands {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

//===========================================================================//

/// An in-memory disassembly listing, holding decoded instructions keyed by
/// address.
#[derive(Clone, Debug, Default)]
pub struct Program {
    instructions: BTreeMap<Addr, DecodedInstruction>,
}

impl Program {
    /// Returns an empty listing.
    pub fn new() -> Program {
        Program { instructions: BTreeMap::new() }
    }

    /// Adds an instruction to the listing.  If there was already an
    /// instruction at that address, it is replaced and returned.
    pub fn insert(
        &mut self,
        instr: DecodedInstruction,
    ) -> Option<DecodedInstruction> {
        self.instructions.insert(instr.addr, instr)
    }

    /// Returns the instruction at the given address, if any.
    pub fn get(&self, addr: Addr) -> Option<&DecodedInstruction> {
        self.instructions.get(&addr)
    }

    /// Returns the number of instructions in the listing.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the listing has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns an iterator over the instructions in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = &DecodedInstruction> + '_ {
        self.instructions.values()
    }

    /// Renders the listing as text, one instruction per line, with any
    /// end-of-line comments appended.
    pub fn format(&self, comments: &Comments) -> String {
        let mut output = String::new();
        for instr in self.instructions.values() {
            let line = format!("{}: {}", instr.addr, instr);
            match comments.get(instr.addr) {
                Some(comment) => {
                    let width = COMMENT_COLUMN.max(line.len() + 1);
                    output.push_str(&format!("{line:<width$}; {comment}\n"));
                }
                None => {
                    output.push_str(&line);
                    output.push('\n');
                }
            }
        }
        output
    }
}

impl Listing for Program {
    fn instruction_at(&self, addr: Addr) -> Option<&dyn Instruction> {
        self.instructions.get(&addr).map(|instr| instr as &dyn Instruction)
    }

    fn instruction_after(&self, addr: Addr) -> Option<&dyn Instruction> {
        self.instructions
            .range((Bound::Excluded(addr), Bound::Unbounded))
            .next()
            .map(|(_, instr)| instr as &dyn Instruction)
    }
}

impl FromIterator<DecodedInstruction> for Program {
    fn from_iter<I: IntoIterator<Item = DecodedInstruction>>(
        iter: I,
    ) -> Program {
        let mut program = Program::new();
        for instr in iter {
            program.insert(instr);
        }
        program
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{DecodedInstruction, Program};
    use crate::addr::Addr;
    use crate::listing::{AnnotationSink, Comments, Instruction, Listing};

    fn instr(addr: u16, mnemonic: &str) -> DecodedInstruction {
        DecodedInstruction::new(Addr::from(addr), mnemonic)
    }

    #[test]
    fn operands_and_separators() {
        let ld = instr(0x100, "ld")
            .with_operand("r24")
            .with_separator(",")
            .with_operand("X")
            .with_separator("+");
        assert_eq!(ld.mnemonic(), "ld");
        assert_eq!(ld.num_operands(), 2);
        assert_eq!(ld.operand(0), Some("r24"));
        assert_eq!(ld.operand(1), Some("X"));
        assert_eq!(ld.operand(2), None);
        assert_eq!(ld.separator_after(0), Some(','));
        assert_eq!(ld.separator_after(1), Some('+'));
        assert_eq!(ld.separator_after(2), None);
        assert_eq!(ld.to_string(), "ld r24, X +");
    }

    #[test]
    fn separator_after_reports_first_character() {
        let ld = instr(0x100, "ld")
            .with_operand("r24")
            .with_separator(",")
            .with_operand("X")
            .with_separator("+")
            .with_separator(",");
        assert_eq!(ld.separator_after(1), Some('+'));
        let st = instr(0x100, "st")
            .with_operand("X")
            .with_separator(",+")
            .with_operand("r0");
        assert_eq!(st.separator_after(0), Some(','));
    }

    #[test]
    fn display_embedded_marker() {
        let st = instr(0x100, "st")
            .with_operand("-Y")
            .with_separator(",")
            .with_operand("r0");
        assert_eq!(st.separator_after(1), None);
        assert_eq!(st.to_string(), "st -Y, r0");
        assert_eq!(instr(0x100, "nop").to_string(), "nop");
    }

    #[test]
    #[should_panic]
    fn separator_without_operand() {
        let _ = instr(0x100, "ld").with_separator("+");
    }

    #[test]
    fn listing_navigation() {
        let program: Program = [instr(0x104, "ret"), instr(0x100, "nop")]
            .into_iter()
            .collect();
        assert_eq!(program.len(), 2);
        assert!(program.instruction_at(Addr::from(0x102u16)).is_none());
        let first = program.instruction_at(Addr::from(0x100u16)).unwrap();
        assert_eq!(first.mnemonic(), "nop");
        let second = program.next_instruction(first).unwrap();
        assert_eq!(second.addr(), Addr::from(0x104u16));
        assert!(program.next_instruction(second).is_none());
        assert_eq!(
            program.instruction_after(Addr::from(0x101u16)).unwrap().addr(),
            Addr::from(0x104u16)
        );
        assert!(program.instruction_after(Addr::from(0x104u16)).is_none());
        assert!(Program::new().is_empty());
    }

    #[test]
    fn format_with_comments() {
        let program: Program = [
            instr(0x100, "nop"),
            instr(0x102, "mov")
                .with_operand("r0")
                .with_separator(",")
                .with_operand("r1"),
        ]
        .into_iter()
        .collect();
        let mut comments = Comments::new();
        comments
            .set_eol_comment(Addr::from(0x102u16), "Move between registers");
        assert_eq!(
            program.format(&comments),
            "0100: nop\n\
             0102: mov r0, r1                ; Move between registers\n"
        );
    }
}

//===========================================================================//
