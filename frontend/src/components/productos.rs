use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, FieldError, Spinner, TextField, parse_id};
use crate::components::crud::{self, FormModal};
use crate::components::layout::PageHeader;
use crate::web::{first_file, read_file};
use leptos::prelude::*;
use leptos::task::spawn_local;
use zorro_client::screens::FormMode;
use zorro_client::screens::productos::{ProductosScreen, image_name};

#[component]
pub fn ProductosPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(ProductosScreen::new());

    // 商品与供应商并发加载
    {
        let api = auth.api();
        screen.update(|s| s.crud.state.begin_load());
        crud::run(screen, move |mut s| async move {
            s.load(&*api).await;
            s
        });
    }

    // 保存后如选了新图片，核心层会继续上传并刷新列表
    let on_submit = move |_: ()| {
        let api = auth.api();
        crud::run(screen, move |mut s| async move {
            s.submit(&*api).await;
            s
        });
        screen.update(|s| s.crud.submitting = true);
    };

    let on_image = move |ev: web_sys::Event| {
        let Some(file) = first_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_file(file).await {
                Ok(f) => screen.update(|s| s.select_image(f.name, f.mime, f.bytes)),
                Err(e) => tracing::error!(error = %e, "failed to read image file"),
            }
        });
    };

    let editing = move || screen.with(|s| matches!(s.crud.mode, FormMode::Editing(_)));

    view! {
        <PageHeader title="Productos" subtitle="Catálogo de la tienda.">
            <button class="btn btn-primary" on:click=move |_| screen.update(|s| s.open_form(None))>
                "Nuevo producto"
            </button>
        </PageHeader>

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.crud.state.error.clone())) />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0 overflow-x-auto">
                <Show when=move || !screen.with(|s| s.crud.state.loading) fallback=Spinner>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Nombre"</th>
                                <th>"Descripción"</th>
                                <th>"Precio"</th>
                                <th>"Proveedor"</th>
                                <th>"Imagen"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen.with(|s| {
                                    s.crud
                                        .items()
                                        .iter()
                                        .map(|producto| {
                                            let id = producto.id;
                                            let proveedor = producto
                                                .proveedor
                                                .as_ref()
                                                .map(|p| p.nombre.clone())
                                                .unwrap_or_else(|| s.nombre_proveedor(producto.proveedor_id));
                                            let imagen = image_name(producto.imagen_url.as_deref());
                                            let editar = producto.clone();
                                            view! {
                                                <tr>
                                                    <td>{id}</td>
                                                    <td class="font-medium">{producto.nombre.clone()}</td>
                                                    <td class="max-w-xs truncate">{producto.descripcion.clone()}</td>
                                                    <td>{format!("${}", producto.precio)}</td>
                                                    <td>{proveedor}</td>
                                                    <td class="text-xs">{imagen}</td>
                                                    <td class="flex gap-2 justify-end">
                                                        <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.open_form(Some(&editar)))>
                                                            "Editar"
                                                        </button>
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

        <FormModal
            title=Signal::derive(move || if editing() { "Editar producto".to_string() } else { "Nuevo producto".to_string() })
            open=Signal::derive(move || screen.with(|s| s.crud.mode.is_open()))
            submitting=Signal::derive(move || screen.with(|s| s.crud.submitting))
            on_submit=on_submit
            on_close=move |_| screen.update(|s| s.close_form())
        >
            <TextField
                label="Nombre"
                value=Signal::derive(move || screen.with(|s| s.crud.form.nombre.clone()))
                on_input=move |v| screen.update(|s| s.crud.form.nombre = v)
                error=Signal::derive(move || screen.with(|s| s.crud.field_error("nombre")))
            />
            <TextField
                label="Descripción"
                value=Signal::derive(move || screen.with(|s| s.crud.form.descripcion.clone()))
                on_input=move |v| screen.update(|s| s.crud.form.descripcion = v)
                error=Signal::derive(move || screen.with(|s| s.crud.field_error("descripcion")))
            />
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Precio"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || screen.with(|s| s.crud.form.precio.clone()))
                    on_input=move |v| screen.update(|s| s.crud.form.precio = v)
                    error=Signal::derive(move || screen.with(|s| s.crud.field_error("precio")))
                />
                <TextField
                    label="Cantidad inicial"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || screen.with(|s| s.crud.form.cantidad_inicial.clone()))
                    on_input=move |v| screen.update(|s| s.crud.form.cantidad_inicial = v)
                    error=Signal::derive(move || screen.with(|s| s.crud.field_error("cantidad_inicial")))
                />
            </div>
            <fieldset class="fieldset">
                <legend class="fieldset-legend">"Proveedor"</legend>
                <select
                    class="select select-bordered w-full"
                    prop:value=move || screen.with(|s| s.crud.form.proveedor_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| screen.update(|s| s.crud.form.proveedor_id = parse_id(&event_target_value(&ev)))
                >
                    <option value="">"Selecciona un proveedor"</option>
                    {move || {
                        screen
                            .with(|s| s.proveedores.clone())
                            .into_iter()
                            .map(|p| view! { <option value=p.id.to_string()>{p.nombre}</option> })
                            .collect_view()
                    }}
                </select>
                <FieldError error=Signal::derive(move || screen.with(|s| s.crud.field_error("proveedor_id"))) />
            </fieldset>
            <fieldset class="fieldset">
                <legend class="fieldset-legend">"Imagen"</legend>
                <input type="file" accept="image/*" class="file-input file-input-bordered w-full" on:change=on_image />
                <p class="text-xs text-base-content/60">
                    {move || {
                        screen.with(|s| match &s.imagen {
                            Some(file) => file.file_name.clone(),
                            None => {
                                let actual = s.crud.form.imagen_url.trim();
                                image_name((!actual.is_empty()).then_some(actual))
                            }
                        })
                    }}
                </p>
            </fieldset>
        </FormModal>
    }
}
