//! Annotates disassembled AVR instructions with human-readable descriptions.

#![warn(missing_docs)]

pub mod addr;
pub mod desc;
pub mod listing;
pub mod parse;
pub mod resolve;
pub mod walk;
