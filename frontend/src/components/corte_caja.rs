use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, Spinner};
use crate::components::crud;
use crate::components::layout::PageHeader;
use leptos::prelude::*;
use zorro_client::screens::corte_caja::CorteCajaScreen;

#[component]
pub fn CorteCajaPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(CorteCajaScreen::new());

    let on_buscar = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.buscar(&*api).await;
            s
        });
        screen.update(|s| s.loading = true);
    };

    let resumen = move || screen.with(|s| s.resumen());

    view! {
        <PageHeader title="Corte de caja" subtitle="Ventas por cajero en un día." />

        <form class="card bg-base-100 shadow-xl" on:submit=on_buscar>
            <div class="card-body flex-row items-end gap-4">
                <fieldset class="fieldset">
                    <legend class="fieldset-legend">"Fecha"</legend>
                    <input
                        type="date"
                        class="input input-bordered"
                        prop:value=move || screen.with(|s| s.fecha.clone())
                        on:input=move |ev| screen.update(|s| s.fecha = event_target_value(&ev))
                    />
                </fieldset>
                <button type="submit" class="btn btn-primary" disabled=move || screen.with(|s| s.loading)>
                    "Consultar"
                </button>
            </div>
        </form>

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.error.clone())) />

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-title">"Cajeros"</div>
                <div class="stat-value">{move || resumen().cajeros}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Facturas"</div>
                <div class="stat-value text-primary">{move || resumen().facturas}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Total vendido"</div>
                <div class="stat-value text-success">{move || format!("${}", resumen().vendido)}</div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0 overflow-x-auto">
                <Show when=move || !screen.with(|s| s.loading) fallback=Spinner>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Cajero"</th>
                                <th>"Facturas"</th>
                                <th>"Total vendido"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen
                                    .with(|s| s.filas.clone())
                                    .into_iter()
                                    .map(|fila| {
                                        let cajero = if fila.usuario.is_empty() {
                                            format!("Usuario #{}", fila.usuario_id)
                                        } else {
                                            fila.usuario
                                        };
                                        view! {
                                            <tr>
                                                <td class="font-medium">{cajero}</td>
                                                <td>{fila.numero_facturas}</td>
                                                <td>{format!("${}", fila.total_vendido)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
