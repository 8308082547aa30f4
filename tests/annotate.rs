use avrnote::addr::{Addr, Range, Selection};
use avrnote::desc::DescriptionTable;
use avrnote::listing::{Comments, Program};
use avrnote::parse::parse_listing;
use avrnote::resolve::{ResolveError, Resolver};
use avrnote::walk::{self, WalkReport};

//===========================================================================//

const LISTING: &str = "\
; copy a string from program memory into SRAM
0100: ldi r30, 0x00
0102: ldi r31, 0x02
0104: ldi r26, 0x00
0106: ldi r27, 0x01
0108: lpm r0, Z+
010a: lpm Z+
010c: st X+, r0
010e: ld r24, X +
0110: ld r25, -X
0112: st -Y, r25
0114: ld r1, Y
0116: tst r0
0118: brne .-18
011a: ret
";

fn load() -> Program {
    parse_listing(LISTING).unwrap()
}

fn addr(value: u16) -> Addr {
    Addr::from(value)
}

fn range(first: u16, last: u16) -> Range {
    Range::with_bounds(addr(first), addr(last))
}

fn annotate_all(resolver: &Resolver<'_>, program: &Program) -> Comments {
    let mut comments = Comments::new();
    let report = walk::annotate_selection(
        program,
        &mut comments,
        resolver,
        &Selection::from(Range::FULL),
    );
    assert!(report.is_complete(), "{:?}", report.failures);
    comments
}

//===========================================================================//

#[test]
fn annotate_whole_listing() {
    let program = load();
    let comments = annotate_all(&Resolver::avr(), &program);
    assert_eq!(comments.len(), program.len());
    let expected = [
        (0x0100, "Load immediate"),
        (0x0108, "Load program memory"),
        (0x010a, "Load program memory and post-increment"),
        (0x010c, "Store indirect and post-increment"),
        (0x010e, "Load indirect and post-increment"),
        (0x0110, "Load indirect and pre-decrement"),
        (0x0112, "Store indirect and pre-decrement"),
        (0x0114, "Load indirect"),
        (0x0116, "Test for zero or minus"),
        (0x0118, "Branch if not equal"),
        (0x011a, "Subroutine return"),
    ];
    for (address, text) in expected {
        assert_eq!(comments.get(addr(address)), Some(text), "at {address:x}");
    }
}

#[test]
fn formatted_output() {
    let program = load();
    let mut comments = Comments::new();
    walk::annotate_selection(
        &program,
        &mut comments,
        &Resolver::avr(),
        &Selection::from(range(0x010c, 0x0112)),
    );
    let output = program.format(&comments);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[5], "010a: lpm Z+");
    assert_eq!(
        lines[6],
        "010c: st X+, r0                 ; Store indirect and post-increment"
    );
    assert_eq!(
        lines[7],
        "010e: ld r24, X +               ; Load indirect and post-increment"
    );
    assert_eq!(
        lines[8],
        "0110: ld r25, -X                ; Load indirect and pre-decrement"
    );
    assert_eq!(lines[9], "0112: st -Y, r25");
}

#[test]
fn non_contiguous_selection() {
    let program = load();
    let mut comments = Comments::new();
    let selection =
        Selection::from_ranges([range(0x0100, 0x0103), range(0x0110, 0x0118)]);
    let report = walk::annotate_selection(
        &program,
        &mut comments,
        &Resolver::avr(),
        &selection,
    );
    let annotated: Vec<Addr> = comments.iter().map(|(a, _)| a).collect();
    assert_eq!(
        annotated,
        [0x100, 0x102, 0x110, 0x112, 0x114, 0x116].map(addr).to_vec()
    );
    // 0x0118 is the selection's last address, so it's never annotated.
    assert_eq!(comments.get(addr(0x0118)), None);
    assert_eq!(report.visited, 12);
    assert_eq!(report.annotated, 6);
}

#[test]
fn cursor_annotation() {
    let program = load();
    let mut comments = Comments::new();
    let report = walk::annotate(
        &program,
        &mut comments,
        &Resolver::avr(),
        addr(0x0110),
        None,
    );
    assert_eq!(
        report,
        WalkReport { visited: 1, annotated: 1, failures: vec![] }
    );
    assert_eq!(
        comments.iter().collect::<Vec<_>>(),
        vec![(addr(0x0110), "Load indirect and pre-decrement")]
    );
}

#[test]
fn reduced_table_reports_failures() {
    let program = load();
    let entries = DescriptionTable::avr()
        .entries()
        .into_iter()
        .filter(|&(key, _)| key != "ld+" && key != "ret");
    let table = DescriptionTable::from_entries(entries);
    let mut comments = Comments::new();
    let report = walk::annotate_selection(
        &program,
        &mut comments,
        &Resolver::new(&table),
        &Selection::from(Range::FULL),
    );
    assert_eq!(
        report.failures,
        vec![
            ResolveError::UnmappedMnemonic {
                addr: addr(0x010e),
                key: "ld+".to_string(),
            },
            ResolveError::UnmappedMnemonic {
                addr: addr(0x011a),
                key: "ret".to_string(),
            },
        ]
    );
    assert_eq!(report.annotated, program.len() - 2);
    assert_eq!(comments.get(addr(0x010e)), None);
    assert_eq!(
        comments.get(addr(0x0110)),
        Some("Load indirect and pre-decrement")
    );
}

#[test]
fn reannotating_is_idempotent() {
    let program = load();
    let resolver = Resolver::avr();
    let mut comments = annotate_all(&resolver, &program);
    let before: Vec<(Addr, String)> =
        comments.iter().map(|(a, t)| (a, t.to_string())).collect();
    assert_eq!(comments.overwritten(), 0);
    walk::annotate_selection(
        &program,
        &mut comments,
        &resolver,
        &Selection::from(range(0x0100, 0x011a)),
    );
    let after: Vec<(Addr, String)> =
        comments.iter().map(|(a, t)| (a, t.to_string())).collect();
    assert_eq!(after, before);
    // Every instruction below 0x011a was annotated a second time.
    assert_eq!(comments.overwritten(), program.len() - 1);
}

//===========================================================================//
