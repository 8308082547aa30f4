use avrnote::addr::{Addr, Range, Selection};
use avrnote::desc::DescriptionTable;
use avrnote::listing::Comments;
use avrnote::parse::parse_listing;
use avrnote::resolve::Resolver;
use avrnote::walk;
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;

//===========================================================================//

macro_rules! invalid_data {
    ($e:expr) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         $e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         format!($fmt, $($arg)+)))
    };
}

//===========================================================================//

#[derive(Parser)]
#[clap(author, about, long_about = None, version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Adds instruction descriptions as end-of-line comments to a listing.
    Annotate {
        /// The disassembly listing file to annotate.
        listing: PathBuf,
        /// Annotates only the instruction at this (hex) address.
        #[clap(long, value_name = "ADDR", conflicts_with = "select")]
        at: Option<Addr>,
        /// Annotates instructions in this range of (hex) addresses, e.g.
        /// 0100-01ff.  May be given more than once.  With neither this nor
        /// --at, the whole listing is annotated.
        #[clap(long, value_name = "RANGE")]
        select: Vec<Range>,
    },
    /// Prints the description for each given mnemonic key (e.g. ld+).
    Describe {
        /// The canonical mnemonic keys to look up.
        #[clap(required = true)]
        keys: Vec<String>,
    },
    /// Prints every mnemonic key and its description.
    Table,
}

//===========================================================================//

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Annotate { listing, at, select } => {
            let source = fs::read_to_string(&listing)?;
            let program = match parse_listing(&source) {
                Ok(program) => program,
                Err(errors) => {
                    for error in &errors {
                        eprintln!("{}:{}", listing.display(), error);
                    }
                    invalid_data!("{} error(s) in listing", errors.len());
                }
            };
            let resolver = Resolver::avr();
            let mut comments = Comments::new();
            let report = match at {
                Some(addr) => walk::annotate_cursor(
                    &program,
                    &mut comments,
                    &resolver,
                    addr,
                ),
                None => {
                    let selection = if select.is_empty() {
                        Selection::from(Range::FULL)
                    } else {
                        Selection::from_ranges(select)
                    };
                    walk::annotate_selection(
                        &program,
                        &mut comments,
                        &resolver,
                        &selection,
                    )
                }
            };
            print!("{}", program.format(&comments));
            for failure in &report.failures {
                eprintln!("warning: {failure}");
            }
            if !report.is_complete() {
                invalid_data!(
                    "{} instruction(s) could not be annotated",
                    report.failures.len()
                );
            }
        }
        Command::Describe { keys } => {
            let table = DescriptionTable::avr();
            let mut unknown = Vec::<String>::new();
            for key in keys {
                match table.lookup(&key) {
                    Some(desc) => println!("{key}: {desc}"),
                    None => unknown.push(key),
                }
            }
            if !unknown.is_empty() {
                invalid_data!("unknown mnemonic(s): {}", unknown.join(", "));
            }
        }
        Command::Table => {
            for (key, desc) in DescriptionTable::avr().entries() {
                println!("{key:<6} {desc}");
            }
        }
    }
    Ok(())
}

//===========================================================================//
