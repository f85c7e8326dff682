use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, Spinner, TextField};
use crate::components::crud::{self, FormModal};
use crate::components::layout::PageHeader;
use leptos::prelude::*;
use zorro_client::screens::FormMode;
use zorro_client::screens::proveedores::ProveedoresScreen;

#[component]
pub fn ProveedoresPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(ProveedoresScreen::new());

    crud::load(screen, crud::whole, auth.api());

    let title = move || {
        screen.with(|s| match s.mode {
            FormMode::Editing(_) => "Editar proveedor".to_string(),
            _ => "Nuevo proveedor".to_string(),
        })
    };

    view! {
        <PageHeader title="Proveedores" subtitle="Empresas que surten los productos de la tienda.">
            <button class="btn btn-primary" on:click=move |_| screen.update(|s| s.open_form(None))>
                "Nuevo proveedor"
            </button>
        </PageHeader>

        <ErrorAlert message=Signal::derive(move || screen.with(|s| s.state.error.clone())) />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0 overflow-x-auto">
                <Show when=move || !screen.with(|s| s.state.loading) fallback=Spinner>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Nombre"</th>
                                <th>"Correo"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen
                                    .with(|s| s.items().to_vec())
                                    .into_iter()
                                    .map(|proveedor| {
                                        let id = proveedor.id;
                                        let editar = proveedor.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td class="font-medium">{proveedor.nombre}</td>
                                                <td>{proveedor.correo}</td>
                                                <td class="flex gap-2 justify-end">
                                                    <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.open_form(Some(&editar)))>
                                                        "Editar"
                                                    </button>
                                                    <button class="btn btn-sm btn-ghost text-error" on:click=move |_| crud::delete(screen, crud::whole, auth.api(), id)>
                                                        "Eliminar"
                                                    </button>
                                                </td>
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

        <FormModal
            title=Signal::derive(title)
            open=Signal::derive(move || screen.with(|s| s.mode.is_open()))
            submitting=Signal::derive(move || screen.with(|s| s.submitting))
            on_submit=move |_| crud::submit(screen, crud::whole, auth.api())
            on_close=move |_| screen.update(|s| s.close_form())
        >
            <TextField
                label="Nombre"
                value=Signal::derive(move || screen.with(|s| s.form.nombre.clone()))
                on_input=move |v| screen.update(|s| s.form.nombre = v)
                error=Signal::derive(move || screen.with(|s| s.field_error("nombre")))
            />
            <TextField
                label="Correo"
                input_type="email"
                value=Signal::derive(move || screen.with(|s| s.form.correo.clone()))
                on_input=move |v| screen.update(|s| s.form.correo = v)
                error=Signal::derive(move || screen.with(|s| s.field_error("correo")))
            />
        </FormModal>
    }
}
