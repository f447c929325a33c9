//! Lesson list for one (semester, subject) partition: root module wiring the
//! Yew `Component` implementation with submodules for state, update logic,
//! and view rendering.
//!
//! Responsibilities
//! - Load the partition's materials once on first render.
//! - Optimistic drag-reorder and delete with exact rollback (see `update`).
//! - Admin-only add-material modal.
//!
//! The in-memory list is a cache of the store's partition; parents key this
//! component on (semester, subject) so navigating terms remounts it and the
//! cache is replaced wholesale.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LessonListProps;
pub use state::LessonList;

use common::model::lesson::Lesson;

impl Component for LessonList {
    type Message = Msg;
    type Properties = LessonListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LessonList::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            let link = ctx.link().clone();
            let semester = ctx.props().semester.clone();
            let subject = ctx.props().subject.clone();
            spawn_local(async move {
                let url = format!("/api/lessons/{}/{}", semester, subject);
                match Request::get(&url).send().await {
                    Ok(resp) if resp.status() == 200 => match resp.json::<Vec<Lesson>>().await {
                        Ok(lessons) => link.send_message(Msg::Loaded(lessons)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }
}
