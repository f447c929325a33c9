//! Component state for the lesson list, including the optimistic-update
//! primitives.
//!
//! Every optimistic operation follows the same two-phase shape: a `begin_*`
//! method applies the new list synchronously and hands back the exact
//! pre-operation snapshot. The async persistence call owns that snapshot and
//! returns it in its settle message, so a late failure restores the state
//! captured by *that* operation rather than whatever a shared "previous"
//! variable happens to hold by then.

use common::model::lesson::{reordered, Lesson};

pub struct LessonList {
    /// Local cache of the partition, always kept in display order with
    /// `order` fields matching indices.
    pub lessons: Vec<Lesson>,
    pub loaded: bool,
    pub load_failed: bool,
    /// Index the current drag gesture started from, if any.
    pub drag_from: Option<usize>,
    /// Add-material modal state.
    pub modal_open: bool,
    pub new_title: String,
    pub new_url: String,
    pub saving: bool,
}

impl LessonList {
    pub fn new() -> Self {
        Self {
            lessons: Vec::new(),
            loaded: false,
            load_failed: false,
            drag_from: None,
            modal_open: false,
            new_title: String::new(),
            new_url: String::new(),
            saving: false,
        }
    }

    /// Applies a drag move optimistically. Returns the pre-move snapshot to
    /// close over in the persistence call, or `None` when the gesture is a
    /// no-op (same index, out of bounds).
    pub fn begin_move(&mut self, source: usize, target: usize) -> Option<Vec<Lesson>> {
        let next = reordered(&self.lessons, source, target)?;
        Some(std::mem::replace(&mut self.lessons, next))
    }

    /// Removes the lesson at `index` optimistically and renumbers the
    /// survivors. Returns the removed lesson and the pre-delete snapshot.
    pub fn begin_delete(&mut self, index: usize) -> Option<(Lesson, Vec<Lesson>)> {
        if index >= self.lessons.len() {
            return None;
        }
        let mut next = self.lessons.clone();
        let removed = next.remove(index);
        for (idx, lesson) in next.iter_mut().enumerate() {
            lesson.order = idx as u32;
        }
        let previous = std::mem::replace(&mut self.lessons, next);
        Some((removed, previous))
    }

    /// Rolls the visible list back to a snapshot captured by `begin_move` or
    /// `begin_delete`.
    pub fn restore(&mut self, previous: Vec<Lesson>) {
        self.lessons = previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, order: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            semester: "1年前期".to_string(),
            subject: "数学1".to_string(),
            title: format!("第{}回", order + 1),
            url: format!("http://example.com/{}", id),
            order,
        }
    }

    fn loaded(ids: &[&str]) -> LessonList {
        let mut list = LessonList::new();
        list.lessons = ids
            .iter()
            .enumerate()
            .map(|(idx, id)| lesson(id, idx as u32))
            .collect();
        list.loaded = true;
        list
    }

    #[test]
    fn failed_reorder_restores_the_exact_snapshot() {
        let mut list = loaded(&["a", "b", "c"]);
        let original = list.lessons.clone();

        let previous = list.begin_move(0, 2).expect("move applies");
        assert_ne!(list.lessons, original);

        // Simulated persistence failure.
        list.restore(previous);
        assert_eq!(list.lessons, original);
    }

    #[test]
    fn failed_delete_restores_the_exact_snapshot() {
        let mut list = loaded(&["a", "b", "c"]);
        let original = list.lessons.clone();

        let (removed, previous) = list.begin_delete(1).expect("delete applies");
        assert_eq!(removed.id, "b");
        assert_eq!(list.lessons.len(), 2);
        assert_eq!(
            list.lessons.iter().map(|l| l.order).collect::<Vec<_>>(),
            [0, 1]
        );

        list.restore(previous);
        assert_eq!(list.lessons, original);
    }

    #[test]
    fn each_operation_reverts_against_its_own_snapshot() {
        let mut list = loaded(&["a", "b", "c"]);
        let state_before_first = list.lessons.clone();

        // First gesture applies, its persistence call still in flight.
        let first_snapshot = list.begin_move(0, 1).unwrap();
        // Second gesture applies on top of the first.
        let _second_snapshot = list.begin_move(1, 2).unwrap();

        // The first operation's late failure reverts to the state it
        // captured, not to the intermediate state the second one saw.
        list.restore(first_snapshot);
        assert_eq!(list.lessons, state_before_first);
    }

    #[test]
    fn noop_gestures_leave_state_untouched() {
        let mut list = loaded(&["a", "b"]);
        let original = list.lessons.clone();
        assert!(list.begin_move(1, 1).is_none());
        assert!(list.begin_move(5, 0).is_none());
        assert!(list.begin_delete(9).is_none());
        assert_eq!(list.lessons, original);
    }
}
