use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

use crate::Database;
use crate::models::GuestRow;

impl Database {
    pub fn insert_guest(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        message: &str,
        created_at: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO guests (id, first_name, last_name, message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, first_name, last_name, message, created_at],
            )?;
            Ok(())
        })
    }

    /// All guests, newest first.
    pub fn list_guests(&self) -> Result<Vec<GuestRow>> {
        self.with_conn(query_guests)
    }

    pub fn get_guest(&self, id: &str) -> Result<Option<GuestRow>> {
        self.with_conn(|conn| query_guest_by_id(conn, id))
    }

    /// Returns true when a row was actually removed.
    pub fn delete_guest(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM guests WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }
}

fn query_guests(conn: &Connection) -> Result<Vec<GuestRow>> {
    // rowid breaks ties for rows created within the same timestamp tick
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, message, created_at
         FROM guests
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(GuestRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                message: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_guest_by_id(conn: &Connection, id: &str) -> Result<Option<GuestRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, message, created_at
         FROM guests
         WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(GuestRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                message: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}
