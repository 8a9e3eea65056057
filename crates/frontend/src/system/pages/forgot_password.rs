use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::paths::LOGIN_PATH;
use crate::shared::components::field_error;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use crate::system::auth::api::request_password_reset;

fn forgot_password_schema() -> Validator {
    Validator::new().field("email", "Email", &[Rule::Required, Rule::Email])
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (sent_to, set_sent_to) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let errors = forgot_password_schema().validate(|field| match field {
            "email" => email.get_untracked(),
            _ => String::new(),
        });
        let has_errors = !errors.is_empty();
        field_errors.set(errors);
        if has_errors {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let email_val = email.get_untracked().trim().to_string();
        spawn_local(async move {
            match request_password_reset(email_val.clone()).await {
                Ok(()) => {
                    log::info!("password reset code requested");
                    set_sent_to.set(Some(email_val));
                }
                Err(e) => {
                    log::warn!("password reset request failed: {}", e);
                    set_error_message.set(Some(e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container" id="forgot_password--system" data-page-category="system">
            <div class="login-box">
                <h1>"MBKC"</h1>
                <h2>"Forgot password"</h2>

                <Show
                    when=move || sent_to.get().is_some()
                    fallback=move || {
                        view! {
                            <p>"Enter your email and we will send you a confirmation code."</p>

                            <Show when=move || error_message.get().is_some()>
                                <div class="error-message">
                                    {move || error_message.get().unwrap_or_default()}
                                </div>
                            </Show>

                            <form on:submit=on_submit novalidate>
                                <div class="form-group">
                                    <label for="email">"Email address"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                        disabled=move || is_loading.get()
                                    />
                                    {field_error(field_errors, "email")}
                                </div>

                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || is_loading.get()
                                >
                                    {move || if is_loading.get() { "Sending..." } else { "Send email" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <div class="success-message">
                        {move || {
                            format!(
                                "A confirmation code was sent to {}. Check your email!",
                                sent_to.get().unwrap_or_default(),
                            )
                        }}
                    </div>
                </Show>

                <p class="login-box__footer">
                    "Back to " <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forgot_password_schema() {
        let errors = forgot_password_schema().validate(|_| String::new());
        assert_eq!(errors.first("email"), Some("Email is required"));

        let errors = forgot_password_schema().validate(|_| "cashier@mbkc".to_string());
        assert_eq!(errors.first("email"), Some("Email must be a valid email"));

        let errors = forgot_password_schema().validate(|_| " cashier@mbkc.vn ".to_string());
        assert!(errors.is_empty());
    }
}
