use rusqlite::{params, Connection, OptionalExtension};

use log::{debug, info};
use std::path::Path;

/// Named save slots kept in a single SQLite table.
pub struct Storage {
    connection: Connection,
}

const SCHEMA: &str = "create table if not exists saves (
    slot text primary key,
    data text not null
);";

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        let path = path.as_ref();
        info!("Open save storage {}", path.display());
        Self::setup(Connection::open(path)?)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::setup(Connection::open_in_memory()?)
    }

    fn setup(connection: Connection) -> rusqlite::Result<Self> {
        connection.execute_batch(SCHEMA)?;
        Ok(Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn read_slot(&self, slot: &str) -> rusqlite::Result<Option<String>> {
        self.connection
            .query_row("select data from saves where slot = ?", [slot], |row| {
                row.get(0)
            })
            .optional()
    }

    pub fn write_slot(&self, slot: &str, data: &str) -> rusqlite::Result<()> {
        self.connection.execute(
            "insert into saves (slot, data) values (?1, ?2)
            on conflict(slot) do update set data = excluded.data",
            params![slot, data],
        )?;
        debug!("Write {} bytes to slot {}", data.len(), slot);
        Ok(())
    }

    /// Returns false if there was nothing to erase.
    pub fn erase_slot(&self, slot: &str) -> rusqlite::Result<bool> {
        let affected = self
            .connection
            .execute("delete from saves where slot = ?", [slot])?;
        Ok(affected > 0)
    }
}
