use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::paths::{AppRoute, FORGOT_PASSWORD_PATH};
use crate::shared::components::field_error;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use crate::system::auth::context::{do_login, use_auth};

fn login_schema() -> Validator {
    Validator::new()
        .field("email", "Email", &[Rule::Required, Rule::Email])
        .field("password", "Password", &[Rule::Required])
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let errors = login_schema().validate(|field| match field {
            "email" => email.get_untracked(),
            "password" => password.get_untracked(),
            _ => String::new(),
        });
        let has_errors = !errors.is_empty();
        field_errors.set(errors);
        if has_errors {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        spawn_local(async move {
            match do_login(set_auth_state, email_val, password_val).await {
                Ok(role) => {
                    set_is_loading.set(false);
                    navigate(&AppRoute::home_for(role).path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" id="login--system" data-page-category="system">
            <div class="login-box">
                <h1>"MBKC"</h1>
                <h2>"Sign in to the management system"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@mbkc.vn"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error(field_errors, "email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error(field_errors, "password")}
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="login-box__footer">
                    <a href=FORGOT_PASSWORD_PATH>"Forgot password?"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_schema() {
        let errors = login_schema().validate(|field| match field {
            "email" => "kitchen@mbkc".to_string(),
            _ => String::new(),
        });
        assert_eq!(errors.first("email"), Some("Email must be a valid email"));
        assert_eq!(errors.first("password"), Some("Password is required"));
    }
}
