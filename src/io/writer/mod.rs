/*!
# Table writing

Pipelines build [Table]s, either from typed [Record]s or cell by cell,
and write them with [Store::replace_table].

Every table is fully replaced on each write: the previous table of the same name is dropped
and the new one is created and filled in a single transaction.
!*/
pub mod store;
pub mod table;

pub use store::Store;
pub use table::{Column, Record, Row, SqlType, Table, Value};
