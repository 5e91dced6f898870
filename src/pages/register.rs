//! Register Page

use blog_core::validation::{validate_register, RegisterErrors};
use blog_core::{Role, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app, ToastKind};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (errors, set_errors) = signal(RegisterErrors::default());
    let (api_error, set_api_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_api_error.set(None);
        let request = match validate_register(&username.get_untracked(), &password.get_untracked(), &role.get_untracked()) {
            Ok(request) => {
                set_errors.set(RegisterErrors::default());
                request
            }
            Err(found) => {
                set_errors.set(found);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api().register(&request).await {
                Ok(()) => {
                    log::info!("registered {} as {}", request.username, request.role.as_str());
                    ctx.notify(ToastKind::Success, "Registration successful! Please login.");
                    ctx.navigate(Route::Login);
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    set_api_error.set(Some(e.user_message("Registration failed")));
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
                    <input
                        type="password"
                        class="input"
                        placeholder="Input password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || errors.get().password.map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                <label class="field">
                    <span>"Role"</span>
                    <select
                        class="select"
                        prop:value=move || role.get()
                        on:change=move |ev| set_role.set(event_target_value(&ev))
                    >
                        <option value="">"Select Role"</option>
                        {[Role::User, Role::Admin]
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                            .collect_view()}
                    </select>
                    {move || errors.get().role.map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                {move || api_error.get().map(|m| view! { <p class="form-error">{m}</p> })}

                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    "Register"
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href=Route::Login.href()>"Login"</a>
                </p>
            </form>
        </div>
    }
}
