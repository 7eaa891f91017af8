use std::io::{self, Write};
use std::path::Path;

use wordbook_core::{DictionaryStats, Entry, ModifierPositionError};

const RULE: &str = "       |";
const INDENT: &str = "        ";

pub fn introduction(out: &mut impl Write, stats: DictionaryStats) -> io::Result<()> {
    writeln!(out, "====== DICTIONARY 340 RUST =====")?;
    writeln!(out, "------ Keywords: {}", stats.keywords)?;
    writeln!(out, "------ Definitions: {}", stats.definitions)?;
    writeln!(out)
}

pub fn search_prompt(out: &mut impl Write, count: usize) -> io::Result<()> {
    write!(out, "Search [{count}]: ")?;
    out.flush()
}

pub fn manual(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{INDENT}PARAMETER HOW-TO,  please enter:")?;
    writeln!(
        out,
        "{INDENT}1. A search key -then 2. An optional part of speech -then"
    )?;
    writeln!(
        out,
        "{INDENT}3. An optional 'distinct' -then 4. An optional 'reverse'"
    )?;
    writeln!(out, "{RULE}")
}

pub fn not_found(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{INDENT}<NOT FOUND> To be considered for the next release. Thank you."
    )?;
    writeln!(out, "{RULE}")
}

pub fn thank_you(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "-----THANK YOU-----")
}

pub fn parameter_error(out: &mut impl Write, err: &ModifierPositionError) -> io::Result<()> {
    let ordinal = err.ordinal();

    writeln!(out, "{RULE}")?;
    for expected in err.expected {
        writeln!(
            out,
            "{INDENT}<The entered {ordinal} parameter '{}' is NOT {expected}.>",
            err.token
        )?;
    }
    writeln!(
        out,
        "{INDENT}<The entered {ordinal} parameter '{}' was disregarded.>",
        err.token
    )?;
    writeln!(
        out,
        "{INDENT}<The {ordinal} parameter should be {}.>",
        err.expected_list()
    )?;
    writeln!(out, "{RULE}")
}

pub fn entries(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    for entry in entries {
        writeln!(out, "{INDENT}{entry}")?;
    }
    writeln!(out, "{RULE}")
}

pub fn path_request(out: &mut impl Write) -> io::Result<()> {
    write!(out, "Please enter relative path to data file to load\n> ")?;
    out.flush()
}

pub fn open_error(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "! Opening data file... {}", path.display())?;
    writeln!(out, "<!>ERROR<!> ===> File could not be opened.")?;
    writeln!(out, "<!>ERROR<!> ===> Provided file path: {}", path.display())?;
    write!(out, "<!>Enter the CORRECT data file path\n> ")?;
    out.flush()
}

pub fn loaded(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "! Loading data...")?;
    writeln!(out, "! Loading completed...")?;
    writeln!(out, "! Closing data file... {}", path.display())?;
    writeln!(out)
}
