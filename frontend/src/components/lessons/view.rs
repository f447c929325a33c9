//! View rendering for the lesson list.
//!
//! Rows are plain flex divs. For admins each row gets a draggable handle
//! and a delete button; the row body is a drop target. Non-admins get a
//! spacer where the handle would be so rows line up either way.

use common::model::lesson::Lesson;
use web_sys::{DragEvent, HtmlInputElement, InputEvent, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::document_name;
use super::messages::Msg;
use super::state::LessonList;

pub fn view(component: &LessonList, ctx: &Context<LessonList>) -> Html {
    let link = ctx.link();
    let is_admin = ctx.props().role.is_admin();

    if !component.loaded {
        return html! { <p class="lesson-loading">{ "読み込み中…" }</p> };
    }
    if component.load_failed {
        return html! { <p class="lesson-load-error">{ "教材を読み込めませんでした" }</p> };
    }

    html! {
        <div class="lesson-list">
            { for component
                .lessons
                .iter()
                .enumerate()
                .map(|(idx, lesson)| lesson_row(link, idx, lesson, is_admin)) }
            {
                if is_admin {
                    build_add_controls(component, link)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

fn lesson_row(link: &Scope<LessonList>, idx: usize, lesson: &Lesson, is_admin: bool) -> Html {
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::Drop(idx)
    });

    let handle = if is_admin {
        let ondragstart = link.callback(move |_: DragEvent| Msg::DragStart(idx));
        let ondragend = link.callback(|_: DragEvent| Msg::DragEnd);
        html! {
            <div class="drag-handle" draggable="true" {ondragstart} {ondragend}>{ "⠿" }</div>
        }
    } else {
        html! { <div class="drag-spacer"></div> }
    };

    html! {
        <div class="lesson-row" {ondragover} {ondrop}>
            { handle }
            <a class="lesson-link" href={lesson.url.clone()} target="_blank" rel="noopener noreferrer">
                <button class="lesson-title">{ &lesson.title }</button>
            </a>
            {
                match document_name(lesson) {
                    Some(name) => html! {
                        <a
                            class="lesson-pdf"
                            href={format!("/api/files/{}", name)}
                            target="_blank"
                        >
                            { "PDF" }
                        </a>
                    },
                    None => Html::default(),
                }
            }
            {
                if is_admin {
                    let onclick = link.callback(move |_| Msg::Delete(idx));
                    html! { <button class="lesson-delete" {onclick}>{ "削除" }</button> }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

/// The add-material button and, when open, the modal with title/URL inputs.
fn build_add_controls(component: &LessonList, link: &Scope<LessonList>) -> Html {
    let modal = if component.modal_open {
        let ontitle = link.callback(|e: InputEvent| {
            Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onurl = link.callback(|e: InputEvent| {
            Msg::SetUrl(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        html! {
            <div class="modal-overlay" onclick={link.callback(|_| Msg::CloseModal)}>
                <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <h3>{ "教材を追加" }</h3>
                    <label>{ "教材のタイトル" }</label>
                    <input value={component.new_title.clone()} oninput={ontitle} />
                    <label>{ "教材のURL" }</label>
                    <input value={component.new_url.clone()} oninput={onurl} />
                    <button
                        class="modal-submit"
                        disabled={component.saving}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if component.saving { "追加中…" } else { "追加" } }
                    </button>
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <>
            <button class="lesson-add" onclick={link.callback(|_| Msg::OpenModal)}>{ "＋" }</button>
            { modal }
        </>
    }
}
