use crate::web::Link;
use leptos::prelude::*;
use zorro_client::AppRoute;

#[component]
fn StatusPage(code: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">{code}</h1>
                <p class="text-xl">{message}</p>
                <Link to=AppRoute::Dashboard class="btn btn-primary">
                    "Volver al inicio"
                </Link>
            </div>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! { <StatusPage code="403" message="No tienes permiso para ver esta página" /> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <StatusPage code="404" message="Página no encontrada" /> }
}
