//! Facilities for annotating every instruction under a cursor or selection.

use crate::addr::{Addr, Selection};
use crate::listing::{AnnotationSink, Instruction, Listing};
use crate::resolve::{ResolveError, Resolver};

//===========================================================================//

/// The outcome of annotating a cursor position or selection.
///
/// An instruction whose mnemonic has no description is skipped (leaving its
/// existing comment untouched) and recorded in `failures`; the walk then
/// continues with the next instruction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WalkReport {
    /// The number of instructions visited, including those in gaps between
    /// selected ranges.
    pub visited: usize,
    /// The number of instructions that received a comment.
    pub annotated: usize,
    /// Instructions that could not be annotated, in address order.
    pub failures: Vec<ResolveError>,
}

impl WalkReport {
    /// Returns true if every instruction that should have been annotated
    /// was.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn annotate(
        &mut self,
        instr: &dyn Instruction,
        resolver: &Resolver<'_>,
        sink: &mut dyn AnnotationSink,
    ) {
        match resolver.resolve(instr) {
            Ok(annotation) => {
                sink.set_eol_comment(annotation.addr, annotation.text);
                self.annotated += 1;
            }
            Err(error) => self.failures.push(error),
        }
    }
}

//===========================================================================//

/// Annotates the instructions in `selection` if there is one, or else the
/// single instruction at `cursor`.
pub fn annotate(
    listing: &dyn Listing,
    sink: &mut dyn AnnotationSink,
    resolver: &Resolver<'_>,
    cursor: Addr,
    selection: Option<&Selection>,
) -> WalkReport {
    match selection {
        Some(selection) => {
            annotate_selection(listing, sink, resolver, selection)
        }
        None => annotate_cursor(listing, sink, resolver, cursor),
    }
}

/// Annotates the instruction that starts at `cursor`.  Does nothing if no
/// instruction starts there.
pub fn annotate_cursor(
    listing: &dyn Listing,
    sink: &mut dyn AnnotationSink,
    resolver: &Resolver<'_>,
    cursor: Addr,
) -> WalkReport {
    let mut report = WalkReport::default();
    if let Some(instr) = listing.instruction_at(cursor) {
        report.visited += 1;
        report.annotate(instr, resolver, sink);
    }
    report
}

/// Annotates the selected instructions, in ascending address order.
///
/// The walk starts at the first instruction at or after the selection's
/// lowest address and stops before reaching the selection's highest
/// address; an instruction that starts exactly at that highest address is
/// not annotated.  Instructions in gaps between selected ranges are stepped
/// over without being annotated.
pub fn annotate_selection(
    listing: &dyn Listing,
    sink: &mut dyn AnnotationSink,
    resolver: &Resolver<'_>,
    selection: &Selection,
) -> WalkReport {
    let mut report = WalkReport::default();
    let (Some(min), Some(max)) = (selection.min(), selection.max()) else {
        return report;
    };
    let mut current = listing
        .instruction_at(min)
        .or_else(|| listing.instruction_after(min));
    while let Some(instr) = current {
        if instr.addr() >= max {
            break;
        }
        report.visited += 1;
        if selection.contains(instr.addr()) {
            report.annotate(instr, resolver, sink);
        }
        current = listing.next_instruction(instr);
    }
    report
}

//===========================================================================//


//===========================================================================//
