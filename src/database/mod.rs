//! This module acts as a central hub for all storage logic. The engine works
//! on a synchronous [`store::KeyValueStore`]; `init` and `kv` move snapshots of
//! it in and out of SQLite.

pub mod init;
pub mod kv;
pub mod store;
