//! Text output for query results and schema listings.
//!
//! Every function writes to the sink it is handed; nothing here touches
//! stdout directly, so tests can capture output byte for byte.

use std::io::{self, Write};

use crate::schema::{ClusterMetadata, KeyspaceMetadata, RowSet};

/// One `name:  value` line per cell, rows back to back.
pub fn render_rows<W: Write>(out: &mut W, rows: &RowSet) -> io::Result<()> {
    for row in &rows.rows {
        for (column, value) in rows.columns.iter().zip(row) {
            writeln!(out, "{}:  {}", column.name, value)?;
        }
    }
    Ok(())
}

pub fn render_keyspaces<W: Write>(out: &mut W, meta: &ClusterMetadata) -> io::Result<()> {
    writeln!(out)?;
    for name in meta.keyspaces.keys() {
        write!(out, "{name}  ")?;
    }
    writeln!(out)
}

pub fn render_keyspace_tables<W: Write>(out: &mut W, keyspace: &KeyspaceMetadata) -> io::Result<()> {
    let header = format!("Keyspace {}", keyspace.name);
    writeln!(out)?;
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;
    for table in keyspace.tables.keys() {
        writeln!(out, "{table}")?;
    }
    Ok(())
}

pub fn render_all_tables<W: Write>(out: &mut W, meta: &ClusterMetadata) -> io::Result<()> {
    for keyspace in meta.keyspaces.values() {
        render_keyspace_tables(out, keyspace)?;
    }
    Ok(())
}
