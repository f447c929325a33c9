//! Subject grid for one academic term: a card per subject, each hosting its
//! own lesson list. Keying the lists on (term, subject) makes a term change
//! remount them, so every local cache is replaced wholesale on navigation.

use yew::prelude::*;

use common::model::terms;
use common::model::user::Role;

use crate::components::lessons::LessonList;

#[derive(Properties, PartialEq, Clone)]
pub struct TermPageProps {
    pub term: String,
    pub role: Role,
}

pub struct TermPage;

impl Component for TermPage {
    type Message = ();
    type Properties = TermPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let subjects = terms::subjects_for(&props.term);

        html! {
            <div class="term-page">
                <h1>{ format!("{} の科目とコマを選択", props.term) }</h1>
                <div class="subject-grid">
                    { for subjects.iter().map(|subject| {
                        html! {
                            <div class="subject-card" key={format!("{}-{}", props.term, subject)}>
                                <h2>{ *subject }</h2>
                                <LessonList
                                    key={format!("{}-{}", props.term, subject)}
                                    semester={props.term.clone()}
                                    subject={subject.to_string()}
                                    role={props.role}
                                />
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
