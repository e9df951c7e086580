use std::collections::BTreeMap;
use std::fmt;

/// A single cell returned by the cluster, detached from the driver's types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Tuple(Vec<Value>),
    // Types without a dedicated variant (dates, durations, UDTs, ...) keep
    // the driver's own textual form.
    Other(String),
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::BigInt(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Double(x) => write!(f, "{x}"),
            Value::Text(s) | Value::Other(s) => f.write_str(s),
            Value::Blob(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Value::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Value::Set(items) => {
                f.write_str("{")?;
                write_joined(f, items)?;
                f.write_str("}")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                f.write_str(")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub r#type: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// Result of one query: a shared column layout and the rows aligned with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Statements such as `USE` or `INSERT` produce no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn first_value(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.first())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableMetadata {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyspaceMetadata {
    pub name: String,
    pub tables: BTreeMap<String, TableMetadata>,
}

impl KeyspaceMetadata {
    pub fn new<I, T>(name: impl Into<String>, tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tables = tables
            .into_iter()
            .map(|t| {
                let name = t.into();
                (name.clone(), TableMetadata { name })
            })
            .collect();
        Self {
            name: name.into(),
            tables,
        }
    }
}

/// Point-in-time view of the cluster's keyspaces, ordered by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterMetadata {
    pub keyspaces: BTreeMap<String, KeyspaceMetadata>,
}

impl ClusterMetadata {
    pub fn insert(&mut self, keyspace: KeyspaceMetadata) {
        self.keyspaces.insert(keyspace.name.clone(), keyspace);
    }

    pub fn keyspace(&self, name: &str) -> Option<&KeyspaceMetadata> {
        self.keyspaces.get(name)
    }
}

impl FromIterator<KeyspaceMetadata> for ClusterMetadata {
    fn from_iter<I: IntoIterator<Item = KeyspaceMetadata>>(iter: I) -> Self {
        let mut meta = ClusterMetadata::default();
        for ks in iter {
            meta.insert(ks);
        }
        meta
    }
}
