//! Human-readable program listing (feature: "listing")

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::parser::parse_command;

/// Write one listing row per source line: number, canonical command, source text.
pub fn write_listing<W: Write>(source: &str, mut w: W) -> io::Result<()> {
    writeln!(w, "Program Listing:")?;
    writeln!(w, "Line  Command           Source")?;
    writeln!(w, "{}", "-".repeat(50))?;
    for (i, line) in source.lines().enumerate() {
        let parsed = match parse_command(line) {
            Ok(command) => command.to_string(),
            Err(e) => format!("ERROR: {}", e),
        };
        writeln!(w, "{:>4}: {:<17} {}", i + 1, parsed, line.trim())?;
    }
    Ok(())
}

pub fn print_listing(source: &str) -> io::Result<()> {
    write_listing(source, io::stdout().lock())
}

pub fn save_listing(source: &str, filename: impl AsRef<Path>) -> io::Result<()> {
    write_listing(source, File::create(filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_rows() {
        let mut out = Vec::new();
        write_listing("A<-101\n; hi\nH <- 1\nP <- A^B", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("   1: A <- 00000101"));
        assert!(rows[0].ends_with("A<-101"));
        assert!(rows[1].starts_with("   2: ;"));
        assert!(rows[2].contains("ERROR: malformed destination"));
        assert!(rows[3].starts_with("   4: P <- A ^ B"));
    }
}
