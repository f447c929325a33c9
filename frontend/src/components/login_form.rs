//! Username/password login form shown when no session cookie is valid.

use gloo_net::http::Request;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::user::SessionInfo;
use common::requests::LoginRequest;

use crate::components::toast::show_toast;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Succeeded(SessionInfo),
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Fired with the authenticated identity once the backend accepts the
    /// credentials and has set the session cookie.
    pub on_login: Callback<SessionInfo>,
}

pub struct LoginForm {
    username: String,
    password: String,
    busy: bool,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.username.trim().is_empty() || self.password.is_empty() {
                    show_toast("ユーザー名とパスワードを入力してください");
                    return false;
                }
                self.busy = true;

                let payload = LoginRequest {
                    username: self.username.clone(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match Request::post("/api/auth/login")
                        .json(&payload)
                        .unwrap()
                        .send()
                        .await
                    {
                        Ok(resp) if resp.status() == 200 => match resp.json().await {
                            Ok(info) => link.send_message(Msg::Succeeded(info)),
                            Err(_) => link.send_message(Msg::Failed),
                        },
                        _ => link.send_message(Msg::Failed),
                    }
                });
                true
            }
            Msg::Succeeded(info) => {
                self.busy = false;
                ctx.props().on_login.emit(info);
                true
            }
            Msg::Failed => {
                self.busy = false;
                show_toast("ユーザー名またはパスワードが違います");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onusername = link.callback(|e: InputEvent| {
            Msg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onpassword = link.callback(|e: InputEvent| {
            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        // Enter in the password field submits, like a real form.
        let onkeydown = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(Msg::Submit)
        });

        html! {
            <div class="login-root">
                <h1>{ "ログイン" }</h1>
                <label>{ "ユーザー名" }</label>
                <input value={self.username.clone()} oninput={onusername} />
                <label>{ "パスワード" }</label>
                <input
                    type="password"
                    value={self.password.clone()}
                    oninput={onpassword}
                    {onkeydown}
                />
                <button disabled={self.busy} onclick={link.callback(|_| Msg::Submit)}>
                    { if self.busy { "確認中…" } else { "ログイン" } }
                </button>
            </div>
        }
    }
}
