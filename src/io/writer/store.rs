/*! SQLite destination store.

Tables are always written through [Store::replace_table],
which drops any table of the same name and recreates it from a [Table] in a single transaction.
!*/
use std::path::Path;

use log::{debug, info};
use rusqlite::{params_from_iter, Connection};

use crate::error::Error;

use super::table::{Table, Value};

/// Quote an SQL identifier.
fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Owns the connection to the destination database.
///
/// The connection is released when the store is dropped.
/// Use [Store::close] to get eventual closing errors.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, Error> {
        debug!("opening store at {:?}", path);
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// In-memory store, mostly for testing.
    pub fn open_in_memory() -> Result<Self, Error> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Replace table `name` with the content of `table`.
    ///
    /// Returns the number of written rows.
    pub fn replace_table(&mut self, name: &str, table: &Table) -> Result<usize, Error> {
        let table_name = quote(name);

        let mut definitions = vec![format!("{} INTEGER PRIMARY KEY", quote("index"))];
        definitions.extend(
            table
                .columns()
                .iter()
                .map(|c| format!("{} {}", quote(&c.name), c.sql_type.as_sql())),
        );

        let placeholders = vec!["?"; table.columns().len() + 1].join(", ");
        let insert = format!("INSERT INTO {} VALUES ({})", table_name, placeholders);

        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {}", table_name), [])?;
        tx.execute(
            &format!("CREATE TABLE {} ({})", table_name, definitions.join(", ")),
            [],
        )?;

        {
            let mut stmt = tx.prepare(&insert)?;
            for row in table.rows() {
                let index = Value::Integer(row.index);
                stmt.execute(params_from_iter(
                    std::iter::once(&index).chain(row.values.iter()),
                ))?;
            }
        }
        tx.commit()?;

        let (nb_rows, nb_cols) = table.shape();
        info!("[{}] wrote {} rows, {} columns", name, nb_rows, nb_cols);
        Ok(nb_rows)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn close(self) -> Result<(), Error> {
        self.conn.close().map_err(|(_, e)| Error::from(e))
    }
}
