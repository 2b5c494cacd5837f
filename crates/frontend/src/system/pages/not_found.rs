use contracts::system::navigation::{DASHBOARD_PATH, PUBLIC_ROOT};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"404"</h1>
                <h2>"Página no encontrada"</h2>
                <p>"La dirección solicitada no existe."</p>
                <div class="login-links">
                    <a href=DASHBOARD_PATH>"Ir al panel"</a>
                    " · "
                    <a href=PUBLIC_ROOT>"Ir a la plataforma"</a>
                </div>
            </div>
        </div>
    }
}
