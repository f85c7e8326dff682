//! 发票页面：列表、搜索、详情与新建/编辑表单

use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, FieldError, Spinner, Toast, parse_id};
use crate::components::crud::{self, FormModal};
use crate::components::layout::PageHeader;
use leptos::prelude::*;
use zorro_client::screens::FormMode;
use zorro_client::screens::facturas::FacturasScreen;
use zorro_shared::Factura;
use zorro_shared::date::formato_largo;

#[component]
pub fn FacturasPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(FacturasScreen::new());
    let notification = RwSignal::new(None::<String>);

    // 初始加载
    {
        let api = auth.api();
        screen.update(|s| s.crud.state.begin_load());
        crud::run(screen, move |mut s| async move {
            s.load(&*api).await;
            s
        });
    }

    // 新建时按用户名查出当前用户并预先选中
    let on_nueva = move |_| {
        let api = auth.api();
        let username = auth.username();
        crud::run(screen, move |mut s| async move {
            s.open_form(&*api, username.as_deref()).await;
            s
        });
    };

    let on_submit = move |_: ()| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            if let Some(factura) = s.submit(&*api).await {
                notification.set(Some(format!("Factura #{} guardada", factura.id)));
            }
            s
        });
        screen.update(|s| s.crud.submitting = true);
    };

    let on_ver = move |factura: Factura| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.ver_detalles(&*api, &factura).await;
            s
        });
    };

    let buscar = move |por_cliente: bool| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            if por_cliente {
                s.buscar_por_cliente(&*api).await;
            } else {
                s.buscar_por_usuario(&*api).await;
            }
            s
        });
    };

    let on_reset = move |_| {
        let api = auth.api();
        screen.update(|s| s.crud.state.begin_load());
        crud::run(screen, move |mut s| async move {
            s.reset_filtros(&*api).await;
            s
        });
    };

    view! {
        <Toast notification=notification />

        <PageHeader title="Facturas" subtitle="Ventas registradas y su detalle.">
            <button class="btn btn-primary" on:click=on_nueva>"Nueva factura"</button>
        </PageHeader>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body flex-col md:flex-row gap-4">
                <div class="join">
                    <input
                        class="input input-bordered join-item"
                        placeholder="Nombre del cliente"
                        prop:value=move || screen.with(|s| s.busqueda_cliente.clone())
                        on:input=move |ev| screen.update(|s| s.busqueda_cliente = event_target_value(&ev))
                    />
                    <button class="btn join-item" on:click=move |_| buscar(true)>"Buscar"</button>
                </div>
                <div class="join">
                    <input
                        class="input input-bordered join-item"
                        placeholder="Usuario"
                        prop:value=move || screen.with(|s| s.busqueda_usuario.clone())
                        on:input=move |ev| screen.update(|s| s.busqueda_usuario = event_target_value(&ev))
                    />
                    <button class="btn join-item" on:click=move |_| buscar(false)>"Buscar"</button>
                </div>
                <button class="btn btn-ghost" on:click=on_reset>"Limpiar filtros"</button>
            </div>
        </div>

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.crud.state.error.clone())) />

        <DetalleFactura screen=screen />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0 overflow-x-auto">
                <Show when=move || !screen.with(|s| s.crud.state.loading) fallback=Spinner>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Fecha"</th>
                                <th>"Cliente"</th>
                                <th>"Usuario"</th>
                                <th>"Total"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen.with(|s| {
                                    s.crud
                                        .items()
                                        .iter()
                                        .map(|factura| {
                                            let id = factura.id;
                                            let cliente = s.nombre_cliente(factura.cliente_id);
                                            let usuario = s.nombre_usuario(factura.usuario_id);
                                            let ver = factura.clone();
                                            let editar = factura.clone();
                                            view! {
                                                <tr class=(!factura.activa).then_some("opacity-50")>
                                                    <td>{id}</td>
                                                    <td>{formato_largo(&factura.fecha)}</td>
                                                    <td>{cliente}</td>
                                                    <td>{usuario}</td>
                                                    <td>{format!("${}", factura.total)}</td>
                                                    <td>
                                                        {if factura.activa {
                                                            view! { <span class="badge badge-success">"Activa"</span> }
                                                        } else {
                                                            view! { <span class="badge badge-ghost">"Cancelada"</span> }
                                                        }}
                                                    </td>
                                                    <td class="flex gap-1 justify-end">
                                                        <button class="btn btn-sm btn-ghost" on:click=move |_| on_ver(ver.clone())>"Ver"</button>
                                                        <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.open_edicion(&editar))>"Editar"</button>
                                                        <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.cancelar_local(id))>"Cancelar"</button>
                                                        <button class="btn btn-sm btn-ghost text-error" on:click=move |_| crud::delete(screen, |s| &mut s.crud, auth.api(), id)>
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

        <FacturaForm screen=screen on_submit=on_submit />
    }
}

/// 选中发票的明细与发送按钮
#[component]
fn DetalleFactura(screen: RwSignal<FacturasScreen>) -> impl IntoView {
    let auth = use_auth();

    let on_enviar = move |_| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.enviar(&*api).await;
            s
        });
    };

    move || {
        screen.with(|s| {
            let factura = s.seleccionada.as_ref()?;
            let lineas = factura
                .detalles
                .iter()
                .flatten()
                .map(|d| {
                    let nombre = d
                        .producto
                        .as_ref()
                        .map(|p| p.nombre.clone())
                        .unwrap_or_else(|| s.nombre_producto(d.producto_id));
                    view! {
                        <tr>
                            <td>{nombre}</td>
                            <td>{d.cantidad.to_string()}</td>
                            <td>{format!("${}", d.precio_unitario)}</td>
                            <td>{format!("${}", d.subtotal())}</td>
                        </tr>
                    }
                })
                .collect_view();
            let mensaje = s.mensaje.clone();

            Some(view! {
                <div class="card bg-base-100 shadow-xl border border-primary/30">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h3 class="card-title">{format!("Factura #{}", factura.id)}</h3>
                            <span class="text-sm text-base-content/70">{formato_largo(&factura.fecha)}</span>
                        </div>
                        <p>
                            {format!("Cliente: {}", s.nombre_cliente(factura.cliente_id))}
                            " | "
                            {format!("Usuario: {}", s.nombre_usuario(factura.usuario_id))}
                        </p>
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>"Producto"</th>
                                    <th>"Cantidad"</th>
                                    <th>"Precio"</th>
                                    <th>"Subtotal"</th>
                                </tr>
                            </thead>
                            <tbody>{lineas}</tbody>
                        </table>
                        <div class="text-right text-lg font-bold">{format!("Total: ${}", factura.total)}</div>
                        {mensaje.map(|m| view! { <div class="alert alert-info text-sm">{m}</div> })}
                        <div class="card-actions justify-end">
                            <button class="btn btn-outline btn-sm" on:click=on_enviar>"Enviar factura"</button>
                            <button class="btn btn-ghost btn-sm" on:click=move |_| screen.update(|s| s.close_detalles())>"Cerrar"</button>
                        </div>
                    </div>
                </div>
            })
        })
    }
}

/// 新建/编辑表单：客户、用户与明细行
#[component]
fn FacturaForm(
    screen: RwSignal<FacturasScreen>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let editing = move || screen.with(|s| matches!(s.crud.mode, FormMode::Editing(_)));

    let lineas = move || {
        screen.with(|s| {
            s.crud
                .form
                .detalles
                .iter()
                .enumerate()
                .map(|(index, linea)| {
                    let seleccionado = linea.producto_id.map(|id| id.to_string()).unwrap_or_default();
                    let opciones = s
                        .productos
                        .iter()
                        .map(|p| view! { <option value=p.id.to_string()>{p.nombre.clone()}</option> })
                        .collect_view();
                    let error_producto = s.crud.errores.as_ref().and_then(|_| {
                        linea.producto_id.is_none().then(|| "Selecciona un producto.".to_string())
                    });
                    view! {
                        <tr>
                            <td>
                                <select
                                    class="select select-bordered select-sm w-full"
                                    prop:value=seleccionado
                                    on:change=move |ev| screen.update(|s| s.select_producto(index, parse_id(&event_target_value(&ev))))
                                >
                                    <option value="">"Producto"</option>
                                    {opciones}
                                </select>
                                <FieldError error=Signal::stored(error_producto) />
                            </td>
                            <td>
                                <input
                                    type="number"
                                    step="0.01"
                                    class="input input-bordered input-sm w-24"
                                    prop:value=linea.cantidad.clone()
                                    on:change=move |ev| screen.update(|s| {
                                        if let Some(l) = s.crud.form.detalles.get_mut(index) {
                                            l.cantidad = event_target_value(&ev);
                                        }
                                    })
                                />
                            </td>
                            <td>
                                <input
                                    type="number"
                                    step="0.01"
                                    class="input input-bordered input-sm w-28"
                                    prop:value=linea.precio_unitario.clone()
                                    on:change=move |ev| screen.update(|s| {
                                        if let Some(l) = s.crud.form.detalles.get_mut(index) {
                                            l.precio_unitario = event_target_value(&ev);
                                        }
                                    })
                                />
                            </td>
                            <td>{format!("${}", linea.subtotal())}</td>
                            <td>
                                <button type="button" class="btn btn-ghost btn-sm text-error" on:click=move |_| screen.update(|s| s.remove_linea(index))>
                                    "Quitar"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <FormModal
            title=Signal::derive(move || if editing() { "Editar factura".to_string() } else { "Nueva factura".to_string() })
            open=Signal::derive(move || screen.with(|s| s.crud.mode.is_open()))
            submitting=Signal::derive(move || screen.with(|s| s.crud.submitting))
            on_submit=on_submit
            on_close=move |_| screen.update(|s| s.crud.close_form())
        >
            <div class="grid grid-cols-2 gap-4">
                <fieldset class="fieldset">
                    <legend class="fieldset-legend">"Cliente"</legend>
                    <select
                        class="select select-bordered w-full"
                        prop:value=move || screen.with(|s| s.crud.form.cliente_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| screen.update(|s| s.crud.form.cliente_id = parse_id(&event_target_value(&ev)))
                    >
                        <option value="">"Selecciona un cliente"</option>
                        {move || screen.with(|s| {
                            s.clientes
                                .iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.nombre_completo()}</option> })
                                .collect_view()
                        })}
                    </select>
                    <FieldError error=Signal::derive(move || screen.with(|s| s.crud.field_error("cliente_id"))) />
                </fieldset>
                <fieldset class="fieldset">
                    <legend class="fieldset-legend">"Usuario"</legend>
                    <select
                        class="select select-bordered w-full"
                        prop:value=move || screen.with(|s| s.crud.form.usuario_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| screen.update(|s| s.crud.form.usuario_id = parse_id(&event_target_value(&ev)))
                    >
                        <option value="">"Selecciona un usuario"</option>
                        {move || screen.with(|s| {
                            s.usuarios
                                .iter()
                                .map(|u| view! { <option value=u.id.to_string()>{u.nombre.clone()}</option> })
                                .collect_view()
                        })}
                    </select>
                    <FieldError error=Signal::derive(move || screen.with(|s| s.crud.field_error("usuario_id"))) />
                </fieldset>
            </div>

            <table class="table table-sm mt-4">
                <thead>
                    <tr>
                        <th>"Producto"</th>
                        <th>"Cantidad"</th>
                        <th>"Precio unitario"</th>
                        <th>"Subtotal"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{lineas}</tbody>
            </table>
            <FieldError error=Signal::derive(move || screen.with(|s| s.crud.field_error("detalles"))) />

            <div class="flex items-center justify-between mt-2">
                <button type="button" class="btn btn-sm btn-outline" on:click=move |_| screen.update(|s| s.add_linea())>
                    "Agregar producto"
                </button>
                <span class="text-lg font-bold">{move || format!("Total: ${}", screen.with(|s| s.total()))}</span>
            </div>
        </FormModal>
    }
}
