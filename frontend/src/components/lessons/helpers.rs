use common::model::lesson::Lesson;
use common::model::terms;
use gloo_console::error;
use gloo_net::http::Request;

pub use crate::components::toast::show_toast;

/// Opaque document identifier for a lesson: `folder-subject-n.pdf`, where
/// `n` is the one-based position and `folder` the term's storage directory.
/// `None` when the lesson's semester is not a known term, in which case no
/// document link is shown.
pub fn document_name(lesson: &Lesson) -> Option<String> {
    let folder = terms::folder_for(&lesson.semester)?;
    Some(format!(
        "{}-{}-{}.pdf",
        folder,
        lesson.subject,
        lesson.order + 1
    ))
}

/// Persists a full new sequence for one partition. Returns whether the
/// store committed the batch.
pub async fn post_reorder(lessons: &[Lesson]) -> bool {
    match Request::post("/api/lessons/reorder")
        .json(lessons)
        .unwrap()
        .send()
        .await
    {
        Ok(resp) => resp.status() == 200,
        Err(err) => {
            error!("reorder request failed:", err.to_string());
            false
        }
    }
}

/// Deletes one lesson and renumbers the survivors with a follow-up reorder.
/// Both calls must succeed for the optimistic removal to stick.
pub async fn delete_and_renumber(id: &str, survivors: &[Lesson]) -> bool {
    let deleted = match Request::delete(&format!("/api/lessons/{}", id)).send().await {
        Ok(resp) => resp.status() == 200,
        Err(err) => {
            error!("delete request failed:", err.to_string());
            false
        }
    };
    if !deleted {
        return false;
    }
    if survivors.is_empty() {
        return true;
    }
    post_reorder(survivors).await
}
