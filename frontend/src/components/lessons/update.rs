//! Update function for the lesson list, Elm style: receives the state, the
//! context, and a message, mutates, and returns whether to re-render.
//!
//! The drag-reorder and delete branches are the optimistic two-phase flow:
//! apply the change synchronously, move the captured snapshot into the
//! persistence future, and settle with either a success toast or an exact
//! rollback plus a failure toast. Overlapping operations are allowed; each
//! settle message carries its own snapshot.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::CreateLessonRequest;

use super::helpers::{delete_and_renumber, post_reorder, show_toast};
use super::messages::Msg;
use super::state::LessonList;

pub fn update(component: &mut LessonList, ctx: &Context<LessonList>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(lessons) => {
            component.lessons = lessons;
            component.loaded = true;
            component.load_failed = false;
            true
        }
        Msg::LoadFailed => {
            component.loaded = true;
            component.load_failed = true;
            true
        }
        Msg::DragStart(index) => {
            component.drag_from = Some(index);
            false
        }
        Msg::DragEnd => {
            component.drag_from = None;
            false
        }
        Msg::Drop(target) => {
            let Some(source) = component.drag_from.take() else {
                return false;
            };
            let Some(previous) = component.begin_move(source, target) else {
                return false;
            };

            let next = component.lessons.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let ok = post_reorder(&next).await;
                link.send_message(Msg::ReorderSettled { ok, previous });
            });
            true
        }
        Msg::ReorderSettled { ok, previous } => {
            if ok {
                show_toast("並び順を保存しました");
                false
            } else {
                component.restore(previous);
                show_toast("並び順を保存できませんでした");
                true
            }
        }
        Msg::Delete(index) => {
            let Some((removed, previous)) = component.begin_delete(index) else {
                return false;
            };

            let survivors = component.lessons.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let ok = delete_and_renumber(&removed.id, &survivors).await;
                link.send_message(Msg::DeleteSettled { ok, previous });
            });
            true
        }
        Msg::DeleteSettled { ok, previous } => {
            if ok {
                show_toast("教材を削除しました");
                false
            } else {
                component.restore(previous);
                show_toast("教材を削除できませんでした");
                true
            }
        }
        Msg::OpenModal => {
            component.modal_open = true;
            true
        }
        Msg::CloseModal => {
            component.modal_open = false;
            true
        }
        Msg::SetTitle(title) => {
            component.new_title = title;
            false
        }
        Msg::SetUrl(url) => {
            component.new_url = url;
            false
        }
        Msg::Submit => {
            if component.new_title.trim().is_empty() || component.new_url.trim().is_empty() {
                show_toast("タイトルとURLを入力してください");
                return false;
            }
            component.saving = true;

            let payload = CreateLessonRequest {
                semester: ctx.props().semester.clone(),
                subject: ctx.props().subject.clone(),
                title: component.new_title.clone(),
                url: component.new_url.clone(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::post("/api/lessons")
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(resp) if resp.status() == 200 => match resp.json().await {
                        Ok(lesson) => link.send_message(Msg::Created(lesson)),
                        Err(_) => link.send_message(Msg::CreateFailed),
                    },
                    _ => link.send_message(Msg::CreateFailed),
                }
            });
            true
        }
        Msg::Created(lesson) => {
            component.lessons.push(lesson);
            component.saving = false;
            component.modal_open = false;
            component.new_title.clear();
            component.new_url.clear();
            show_toast("教材を追加しました");
            true
        }
        Msg::CreateFailed => {
            component.saving = false;
            component.modal_open = false;
            show_toast("教材を追加できませんでした");
            true
        }
    }
}
