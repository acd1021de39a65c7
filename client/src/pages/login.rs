//! Login screen mounted at `/`.
//!
//! The form only checks that its fields are filled in before moving on to
//! the dashboard. No credentials leave the browser and no session is kept.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

/// Validated login form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Reasons a login form submission is rejected. `Display` is the message
/// shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginInputError {
    #[error("Ingresa tu correo electrónico.")]
    MissingEmail,
    #[error("El correo electrónico no es válido.")]
    InvalidEmail,
    #[error("Ingresa tu contraseña.")]
    MissingPassword,
}

/// Check raw form values. The email is trimmed; the password is kept as typed.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginInput, LoginInputError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginInputError::MissingEmail);
    }
    if !looks_like_email(email) {
        return Err(LoginInputError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(LoginInputError::MissingPassword);
    }
    Ok(LoginInput { email: email.to_owned(), password: password.to_owned() })
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn accepted_log_line(input: &LoginInput) -> String {
    format!("login form accepted for {}, opening {}", input.email, AppRoute::Dashboard.path())
}

/// Login page: email + password form that continues to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => {
                message.set(None);
                #[cfg(feature = "hydrate")]
                log::debug!("{}", accepted_log_line(&input));
                #[cfg(not(feature = "hydrate"))]
                let _ = input;
                navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
            }
            Err(e) => message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Coworking"</h1>
                <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="tu@correo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Iniciar sesión"
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
