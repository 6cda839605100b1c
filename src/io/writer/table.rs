/*! In-memory tables.

A [Table] is a list of typed [Column]s and of [Row]s of [Value]s.
Each row carries an explicit index that is persisted as the `index` column,
so that tables referencing each other do not depend on write order.

Typed records implement [Record] and are converted with [Table::from_records].
!*/
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let v = match self {
            Value::Null => ValueRef::Null,
            Value::Integer(i) => ValueRef::Integer(*i),
            Value::Real(r) => ValueRef::Real(*r),
            Value::Text(t) => ValueRef::Text(t.as_bytes()),
        };
        Ok(ToSqlOutput::Borrowed(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Real,
    Text,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
        }
    }

    /// Infer the narrowest type that fits every non-empty cell.
    ///
    /// Columns with only empty cells are [SqlType::Text].
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ty: Option<SqlType> = None;
        for cell in cells.into_iter().filter(|c| !c.is_empty()) {
            let cell_ty = if cell.parse::<i64>().is_ok() {
                SqlType::Integer
            } else if cell.parse::<f64>().is_ok() {
                SqlType::Real
            } else {
                return SqlType::Text;
            };

            ty = match (ty, cell_ty) {
                (Some(SqlType::Real), _) | (_, SqlType::Real) => Some(SqlType::Real),
                _ => Some(SqlType::Integer),
            };
        }
        ty.unwrap_or(SqlType::Text)
    }

    /// Convert a raw cell to a [Value] of this type. Empty cells are [Value::Null].
    pub fn parse(&self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        match self {
            SqlType::Integer => cell
                .parse::<i64>()
                .map_or_else(|_| Value::from(cell), Value::Integer),
            SqlType::Real => cell
                .parse::<f64>()
                .map_or_else(|_| Value::from(cell), Value::Real),
            SqlType::Text => Value::from(cell),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
}

impl Column {
    pub fn new(name: &str, sql_type: SqlType) -> Self {
        Self {
            name: name.to_string(),
            sql_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: i64,
    pub values: Vec<Value>,
}

/// A typed record that maps to a table row.
pub trait Record {
    fn columns() -> Vec<Column>;
    fn values(&self) -> Vec<Value>;

    /// Explicit row identifier. Defaults to the row position.
    fn index(&self) -> Option<i64> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(pos, record)| Row {
                index: record.index().unwrap_or(pos as i64),
                values: record.values(),
            })
            .collect();

        Self {
            columns: R::columns(),
            rows,
        }
    }

    /// Append a row, indexed by its position.
    pub fn push(&mut self, values: Vec<Value>) -> Result<(), Error> {
        let index = self.rows.len() as i64;
        self.push_indexed(index, values)
    }

    pub fn push_indexed(&mut self, index: i64, values: Vec<Value>) -> Result<(), Error> {
        if values.len() != self.columns.len() {
            return Err(Error::Custom(format!(
                "row {} has {} values, expected {}",
                index,
                values.len(),
                self.columns.len()
            )));
        }
        self.rows.push(Row { index, values });
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// (rows, columns), index column excluded.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}
