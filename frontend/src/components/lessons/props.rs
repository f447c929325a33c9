use common::model::user::Role;
use yew::prelude::*;

/// Properties for one subject's lesson list. The parent keys the component
/// on (semester, subject) so a term change remounts it with a fresh cache.
#[derive(Properties, PartialEq, Clone)]
pub struct LessonListProps {
    pub semester: String,
    pub subject: String,
    /// Drag handles, delete buttons, and the add modal render only for
    /// admins. The backend re-checks the role on every mutation.
    pub role: Role,
}
