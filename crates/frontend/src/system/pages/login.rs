use contracts::system::navigation::{DASHBOARD_PATH, PUBLIC_ROOT};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::{use_session, AuthError, SessionPhase};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    // an authenticated session has nothing to do here
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let SessionPhase::Authenticated(record) = session.phase() {
            log::debug!("{} is signed in, leaving the login page", record.identifier);
            navigate(
                DASHBOARD_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let ok = session.login(&username.get_untracked(), &password.get_untracked());
        if !ok {
            set_password.set(String::new());
            set_error_message.set(Some(AuthError::InvalidCredentials.to_string()));
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"BPFeedback"</h1>
                <h2>"Iniciar Sesión"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            id="username"
                            placeholder="Usuario o Email"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || session.is_resolving()
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            id="password"
                            placeholder="Contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || session.is_resolving()
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || session.is_resolving()
                    >
                        "Acceder"
                    </button>
                </form>

                <div class="login-links">
                    <a href=PUBLIC_ROOT>"Visitar BPFeedback"</a>
                </div>

                <div class="login-info">
                    <p>"Usuarios de prueba:"</p>
                    <p><strong>"hr_manager@bpdata.com"</strong>" / password123"</p>
                    <p><strong>"hr_analyst@bpdata.com"</strong>" / password123"</p>
                    <p><strong>"viewer@bpdata.com"</strong>" / password123"</p>
                    <p><strong>"admin"</strong>" / admin"</p>
                </div>
            </div>
        </div>
    }
}
