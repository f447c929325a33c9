//! Root component: probes the session on first render, then shows either
//! the login form or the term navigation plus subject grid.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::terms::TERMS;
use common::model::user::SessionInfo;

use crate::components::login_form::LoginForm;
use crate::components::term_page::TermPage;

pub enum Msg {
    SessionChecked(Option<SessionInfo>),
    LoggedIn(SessionInfo),
    Logout,
    LoggedOut,
    SelectTerm(String),
}

pub struct App {
    /// False until the `/api/auth/me` probe settles; a loader shows until then.
    checked: bool,
    session: Option<SessionInfo>,
    term: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            checked: false,
            session: None,
            term: TERMS[0].display.to_string(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChecked(session) => {
                self.checked = true;
                self.session = session;
                true
            }
            Msg::LoggedIn(info) => {
                self.session = Some(info);
                true
            }
            Msg::Logout => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let _ = Request::post("/api/auth/logout").send().await;
                    link.send_message(Msg::LoggedOut);
                });
                false
            }
            Msg::LoggedOut => {
                self.session = None;
                true
            }
            Msg::SelectTerm(term) => {
                if self.term == term {
                    return false;
                }
                self.term = term;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if !self.checked {
            return html! { <div class="app-loading">{ "読み込み中…" }</div> };
        }

        let Some(session) = &self.session else {
            return html! { <LoginForm on_login={link.callback(Msg::LoggedIn)} /> };
        };

        html! {
            <div class="app-root">
                <header class="app-header">
                    <nav class="term-nav">
                        { for TERMS.iter().map(|term| {
                            let display = term.display.to_string();
                            let onclick = link.callback(move |_| Msg::SelectTerm(display.clone()));
                            let class = if term.display == self.term {
                                "term-btn active"
                            } else {
                                "term-btn"
                            };
                            html! { <button {class} {onclick}>{ term.display }</button> }
                        }) }
                    </nav>
                    <div class="session-info">
                        <span>{ &session.username }</span>
                        <button onclick={link.callback(|_| Msg::Logout)}>{ "ログアウト" }</button>
                    </div>
                </header>
                <TermPage term={self.term.clone()} role={session.role} />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let session = match Request::get("/api/auth/me").send().await {
                    Ok(resp) if resp.status() == 200 => resp.json::<SessionInfo>().await.ok(),
                    _ => None,
                };
                link.send_message(Msg::SessionChecked(session));
            });
        }
    }
}
