use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, TextField};
use crate::web::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zorro_client::screens::login::LoginScreen;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let return_to = router.current().get_untracked().return_to;
    let screen = RwSignal::new(LoginScreen::new(return_to));
    let app_name = auth.app_name();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credenciales) = screen.try_update(|s| s.prepare_submit()).flatten() else {
            return;
        };
        let destino = screen.with_untracked(|s| s.destino());
        let service = auth.auth();
        spawn_local(async move {
            // 成功后由认证服务导航
            let result = service.login_to(&credenciales, destino).await;
            screen.update(|s| s.complete_submit(&result));
        });
    };

    let loading = move || screen.with(|s| s.loading);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{app_name}</h1>
                    <p class="text-base-content/70">"Inicia sesión para continuar"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.error.clone())) />

                        <TextField
                            label="Usuario"
                            value=Signal::derive(move || screen.with(|s| s.form.username.clone()))
                            on_input=move |v| screen.update(|s| s.form.username = v)
                            error=Signal::derive(move || screen.with(|s| s.field_error("username")))
                        />
                        <TextField
                            label="Contraseña"
                            input_type="password"
                            value=Signal::derive(move || screen.with(|s| s.form.password.clone()))
                            on_input=move |v| screen.update(|s| s.form.password = v)
                            error=Signal::derive(move || screen.with(|s| s.field_error("password")))
                        />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary w-full" disabled=loading>
                                {move || if loading() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "Iniciar sesión".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
