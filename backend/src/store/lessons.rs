//! The ordered lesson store.
//!
//! Lessons live in per-(semester, subject) partitions; the `ord` column is
//! the zero-based display position and stays contiguous across successful
//! operations. All mutations take the caller's `Session` and require the
//! admin role here, at the operation boundary, not only in the UI.
//!
//! Concurrency notes
//! - `create` computes the new position with a count-then-insert inside one
//!   transaction, so two concurrent creates cannot observe the same count.
//! - `reorder` writes the whole batch in one transaction: it commits fully
//!   or not at all, which is what keeps the contiguity invariant from ever
//!   being visible half-updated.
//! - `remove` does not renumber survivors; callers follow up with `reorder`.

use common::model::lesson::Lesson;
use common::model::user::Role;
use rusqlite::{params, Connection};
use std::collections::HashSet;
use uuid::Uuid;

use crate::auth::Session;
use crate::error::ApiError;

fn require_admin(caller: &Session) -> Result<(), ApiError> {
    if caller.role == Role::Admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// All lessons of one partition, `ord` ascending. An empty partition is an
/// empty vec, not an error. `rowid` breaks ties so repeated listings agree.
pub fn list(conn: &Connection, semester: &str, subject: &str) -> Result<Vec<Lesson>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT id, semester, subject, title, url, ord FROM lessons
         WHERE semester = ?1 AND subject = ?2
         ORDER BY ord ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![semester, subject], |row| {
        Ok(Lesson {
            id: row.get(0)?,
            semester: row.get(1)?,
            subject: row.get(2)?,
            title: row.get(3)?,
            url: row.get(4)?,
            order: row.get(5)?,
        })
    })?;
    let mut lessons = Vec::new();
    for lesson in rows {
        lessons.push(lesson?);
    }
    Ok(lessons)
}

/// Appends a lesson to the end of its partition and returns the stored
/// record with its assigned id and position.
pub fn create(
    conn: &mut Connection,
    caller: &Session,
    semester: &str,
    subject: &str,
    title: &str,
    url: &str,
) -> Result<Lesson, ApiError> {
    require_admin(caller)?;
    if title.trim().is_empty() || url.trim().is_empty() {
        return Err(ApiError::Validation(
            "title and url must not be empty".to_string(),
        ));
    }

    let tx = conn.transaction()?;
    let count: u32 = tx.query_row(
        "SELECT COUNT(*) FROM lessons WHERE semester = ?1 AND subject = ?2",
        params![semester, subject],
        |row| row.get(0),
    )?;
    let lesson = Lesson {
        id: Uuid::new_v4().to_string(),
        semester: semester.to_string(),
        subject: subject.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        order: count,
    };
    tx.execute(
        "INSERT INTO lessons (id, semester, subject, title, url, ord)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            lesson.id,
            lesson.semester,
            lesson.subject,
            lesson.title,
            lesson.url,
            lesson.order
        ],
    )?;
    tx.commit()?;
    Ok(lesson)
}

/// Deletes one lesson by id. Surviving positions are left untouched.
pub fn remove(conn: &Connection, caller: &Session, id: &str) -> Result<(), ApiError> {
    require_admin(caller)?;
    let affected = conn.execute("DELETE FROM lessons WHERE id = ?1", params![id])?;
    if affected == 0 {
        return Err(ApiError::NotFound(format!("lesson {}", id)));
    }
    Ok(())
}

/// Persists the given full sequence for one partition: each record's new
/// position is its index in the slice, written as one atomic batch. The
/// client-supplied `order` fields are ignored; only the sequence counts.
/// The sequence must cover the whole partition, otherwise the skipped
/// records would keep stale positions and contiguity would be lost.
pub fn reorder(conn: &mut Connection, caller: &Session, lessons: &[Lesson]) -> Result<(), ApiError> {
    require_admin(caller)?;
    if lessons.is_empty() {
        return Err(ApiError::Validation("nothing to reorder".to_string()));
    }
    let semester = &lessons[0].semester;
    let subject = &lessons[0].subject;
    let mut seen = HashSet::new();
    for lesson in lessons {
        if &lesson.semester != semester || &lesson.subject != subject {
            return Err(ApiError::Validation(
                "all lessons must belong to one partition".to_string(),
            ));
        }
        if !seen.insert(lesson.id.as_str()) {
            return Err(ApiError::Validation(format!(
                "duplicate lesson id {}",
                lesson.id
            )));
        }
    }

    let tx = conn.transaction()?;
    let stored: u32 = tx.query_row(
        "SELECT COUNT(*) FROM lessons WHERE semester = ?1 AND subject = ?2",
        params![semester, subject],
        |row| row.get(0),
    )?;
    if stored as usize != lessons.len() {
        return Err(ApiError::Validation(format!(
            "sequence has {} lessons but the partition holds {}",
            lessons.len(),
            stored
        )));
    }
    for (idx, lesson) in lessons.iter().enumerate() {
        let affected = tx.execute(
            "UPDATE lessons SET ord = ?1 WHERE id = ?2 AND semester = ?3 AND subject = ?4",
            params![idx as u32, lesson.id, semester, subject],
        )?;
        if affected == 0 {
            // Dropping the uncommitted transaction rolls every update back.
            return Err(ApiError::NotFound(format!("lesson {}", lesson.id)));
        }
    }
    tx.commit()?;
    Ok(())
}
