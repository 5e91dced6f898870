//! Login Page

use blog_core::api::LoginRequest;
use blog_core::validation::{validate_login, LoginErrors};
use blog_core::Route;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (errors, set_errors) = signal(LoginErrors::default());
    let (api_error, set_api_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let found = validate_login(&user, &pass);
        let valid = found.is_empty();
        set_errors.set(found);
        set_api_error.set(None);
        if !valid {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let request = LoginRequest {
                username: user.trim().to_string(),
                password: pass,
            };
            match ctx.api().login(&request).await {
                Ok(response) => {
                    let session = ctx.login(&request.username, response);
                    ctx.navigate(Route::after_login(&session));
                }
                Err(e) => {
                    log::info!("login rejected for {}: {}", request.username, e);
                    set_api_error.set(Some(e.user_message("Invalid username or password")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <div class="logo">"Logoipsum"</div>

                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        class="input"
                        placeholder="Input username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    {move || errors.get().username.map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                <label class="field">
                    <span>"Password"</span>
                    <div class="password-row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            class="input"
                            placeholder="Input password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || errors.get().password.map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                {move || api_error.get().map(|m| view! { <p class="form-error">{m}</p> })}

                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    "Login"
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href=Route::Register.href()>"Register"</a>
                </p>
            </form>
        </div>
    }
}
