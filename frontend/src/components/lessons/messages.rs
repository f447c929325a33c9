use common::model::lesson::Lesson;

pub enum Msg {
    Loaded(Vec<Lesson>),
    LoadFailed,
    DragStart(usize),
    Drop(usize),
    DragEnd,
    OpenModal,
    CloseModal,
    SetTitle(String),
    SetUrl(String),
    Submit,
    Created(Lesson),
    CreateFailed,
    Delete(usize),
    /// Settle message of an in-flight reorder. Carries the snapshot that
    /// exact operation captured so a late failure reverts correctly.
    ReorderSettled { ok: bool, previous: Vec<Lesson> },
    /// Same discipline for optimistic deletes.
    DeleteSettled { ok: bool, previous: Vec<Lesson> },
}
