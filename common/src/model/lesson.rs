use serde::{Deserialize, Serialize};

/// One piece of course material: a titled external link, positioned inside
/// its (semester, subject) partition by the zero-based `order` field.
///
/// `id` is assigned by the backend store on creation and never changes.
/// Within a partition the store keeps `order` values contiguous (`0..n`);
/// the frontend relies on that when it renumbers after a drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String, // UUID
    pub semester: String,
    pub subject: String,
    pub title: String,
    pub url: String,
    pub order: u32,
}

/// Stable move of one element: removes the lesson at `source`, reinserts it
/// at `target`, and renumbers every `order` field by its new index. The
/// relative order of all other lessons is preserved.
///
/// Returns `None` when the move is a no-op (`source == target`) or either
/// index is out of bounds, so callers can skip the persistence round trip.
pub fn reordered(lessons: &[Lesson], source: usize, target: usize) -> Option<Vec<Lesson>> {
    if source == target || source >= lessons.len() || target >= lessons.len() {
        return None;
    }
    let mut next = lessons.to_vec();
    let moved = next.remove(source);
    next.insert(target, moved);
    for (idx, lesson) in next.iter_mut().enumerate() {
        lesson.order = idx as u32;
    }
    Some(next)
}
