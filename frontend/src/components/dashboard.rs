use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, NivelBadge, Spinner};
use crate::components::crud;
use crate::components::layout::PageHeader;
use leptos::prelude::*;
use zorro_client::screens::dashboard::DashboardScreen;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(DashboardScreen::new());

    let load = move || {
        let api = auth.api();
        screen.update(|s| s.begin_load());
        crud::run(screen, move |mut s| async move {
            s.load(&*api).await;
            s
        });
    };

    // 初始加载
    load();

    // 统计数据的派生值
    let total_productos = move || screen.with(|s| s.total_productos());
    let total_bajo = move || screen.with(|s| s.inventario_bajo().len());
    let total_agotados = move || screen.with(|s| s.total_agotados());
    let loading = move || screen.with(|s| s.loading);

    let saludo = move || {
        auth.identity
            .with(|u| u.as_ref().map(|u| format!("Hola, {}", u.nombre)))
            .unwrap_or_default()
    };

    view! {
        <PageHeader title="Dashboard" subtitle=saludo()>
            <button on:click=move |_| load() disabled=loading class="btn btn-ghost">
                "Actualizar"
            </button>
        </PageHeader>

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.error.clone())) />

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-title">"Productos"</div>
                <div class="stat-value text-primary">{total_productos}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Inventario bajo"</div>
                <div class="stat-value text-warning">{total_bajo}</div>
                <div class="stat-desc">"Cantidad actual ≤ mínimo requerido"</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Agotados"</div>
                <div class="stat-value text-error">{total_agotados}</div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="p-6 pb-2">
                    <h3 class="card-title">"Inventario bajo"</h3>
                    <p class="text-base-content/70 text-sm">"Productos que necesitan reabastecerse."</p>
                </div>
                <Show when=move || !loading() fallback=Spinner>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Producto"</th>
                                    <th>"Actual"</th>
                                    <th>"Mínimo"</th>
                                    <th>"Estado"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || total_bajo() == 0>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            "Todo el inventario está en niveles adecuados."
                                        </td>
                                    </tr>
                                </Show>
                                {move || {
                                    screen.with(|s| {
                                        s.inventario_bajo()
                                            .into_iter()
                                            .map(|inv| {
                                                let nombre = s.nombre_producto(inv);
                                                let actual = inv.cantidad_actual.to_string();
                                                let minimo = inv.minimo_requerido.to_string();
                                                let nivel = inv.nivel();
                                                view! {
                                                    <tr>
                                                        <td class="font-medium">{nombre}</td>
                                                        <td>{actual}</td>
                                                        <td>{minimo}</td>
                                                        <td><NivelBadge nivel=nivel /></td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}
