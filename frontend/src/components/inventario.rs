use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, NivelBadge, Spinner, TextField};
use crate::components::crud::{self, FormModal};
use crate::components::layout::PageHeader;
use crate::web::browser_confirm;
use leptos::prelude::*;
use zorro_client::screens::inventario::InventarioScreen;

#[component]
pub fn InventarioPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(InventarioScreen::new());

    // 先加载商品，再按出现过的供应商 id 并发查询名称
    {
        let api = auth.api();
        screen.update(|s| s.begin_load());
        crud::run(screen, move |mut s| async move {
            s.load(&*api).await;
            s
        });
    }

    let on_submit = move |_: ()| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.submit_ajuste(&*api).await;
            s
        });
    };

    let on_delete = move |id: i64| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.delete(&*api, id, &browser_confirm).await;
            s
        });
    };

    let ajuste_field = move |label: &'static str,
                             campo: &'static str,
                             get: fn(&InventarioScreen) -> String,
                             set: fn(&mut InventarioScreen, String)| {
        view! {
            <TextField
                label=label
                input_type="number"
                step="0.01"
                value=Signal::derive(move || screen.with(get))
                on_input=move |v| screen.update(|s| set(s, v))
                error=Signal::derive(move || screen.with(|s| s.field_error(campo)))
            />
        }
    };

    view! {
        <PageHeader title="Inventario" subtitle="Existencias por producto." />

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.productos.error.clone())) />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0 overflow-x-auto">
                <Show when=move || !screen.with(|s| s.productos.loading) fallback=Spinner>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Producto"</th>
                                <th>"Proveedor"</th>
                                <th>"Actual"</th>
                                <th>"Inicial"</th>
                                <th>"Mínimo"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen.with(|s| {
                                    s.productos
                                        .items
                                        .iter()
                                        .map(|producto| {
                                            let id = producto.id;
                                            let proveedor = s.nombre_proveedor(producto.proveedor_id).to_string();
                                            let inv = producto.inventario.as_ref();
                                            let actual = inv.map(|i| i.cantidad_actual.to_string()).unwrap_or_else(|| "-".into());
                                            let inicial = inv.map(|i| i.cantidad_inicial.to_string()).unwrap_or_else(|| "-".into());
                                            let minimo = inv.map(|i| i.minimo_requerido.to_string()).unwrap_or_else(|| "-".into());
                                            let nivel = InventarioScreen::nivel(producto);
                                            let ajustar = producto.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-medium">{producto.nombre.clone()}</td>
                                                    <td>{proveedor}</td>
                                                    <td>{actual}</td>
                                                    <td>{inicial}</td>
                                                    <td>{minimo}</td>
                                                    <td>{nivel.map(|nivel| view! { <NivelBadge nivel=nivel /> })}</td>
                                                    <td class="flex gap-2 justify-end">
                                                        <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.open_ajuste(&ajustar))>
                                                            "Ajustar"
                                                        </button>
                                                        <button class="btn btn-sm btn-ghost text-error" on:click=move |_| on_delete(id)>
                                                            "Eliminar"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>

        <FormModal
            title=Signal::derive(move || {
                screen.with(|s| {
                    let id = s.ajuste.as_ref().map(|a| a.producto_id).unwrap_or_default();
                    let nombre = s.productos.find(id).map(|p| p.nombre.clone()).unwrap_or_default();
                    format!("Ajustar inventario: {nombre}")
                })
            })
            open=Signal::derive(move || screen.with(|s| s.ajuste.is_some()))
            submitting=Signal::derive(|| false)
            on_submit=on_submit
            on_close=move |_| screen.update(|s| s.close_ajuste())
        >
            {ajuste_field(
                "Cantidad actual",
                "cantidad_actual",
                |s| s.ajuste.as_ref().map(|a| a.form.cantidad_actual.clone()).unwrap_or_default(),
                |s, v| if let Some(a) = s.ajuste.as_mut() { a.form.cantidad_actual = v },
            )}
            {ajuste_field(
                "Cantidad inicial",
                "cantidad_inicial",
                |s| s.ajuste.as_ref().map(|a| a.form.cantidad_inicial.clone()).unwrap_or_default(),
                |s, v| if let Some(a) = s.ajuste.as_mut() { a.form.cantidad_inicial = v },
            )}
            {ajuste_field(
                "Mínimo requerido",
                "minimo_requerido",
                |s| s.ajuste.as_ref().map(|a| a.form.minimo_requerido.clone()).unwrap_or_default(),
                |s, v| if let Some(a) = s.ajuste.as_mut() { a.form.minimo_requerido = v },
            )}
        </FormModal>
    }
}

