use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, FieldError, Spinner, TextField};
use crate::components::crud::{self, FormModal};
use crate::components::layout::PageHeader;
use leptos::prelude::*;
use zorro_client::screens::FormMode;
use zorro_client::screens::usuarios::UsuariosScreen;
use zorro_shared::Usuario;

fn roles_label(usuario: &Usuario) -> String {
    usuario
        .roles
        .iter()
        .map(|r| r.nombre.trim_start_matches("ROLE_").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(UsuariosScreen::new());

    // 用户列表与角色并发加载
    {
        let api = auth.api();
        screen.update(|s| s.crud.state.begin_load());
        crud::run(screen, move |mut s| async move {
            s.load(&*api).await;
            s
        });
    }

    let editing = move || screen.with(|s| matches!(s.crud.mode, FormMode::Editing(_)));

    view! {
        <PageHeader title="Usuarios" subtitle="Cuentas con acceso al sistema y sus roles.">
            <button class="btn btn-primary" on:click=move |_| screen.update(|s| s.crud.open_form(None))>
                "Nuevo usuario"
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
                                <th>"Usuario"</th>
                                <th>"Roles"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                screen
                                    .with(|s| s.crud.items().to_vec())
                                    .into_iter()
                                    .map(|usuario| {
                                        let id = usuario.id;
                                        let roles = roles_label(&usuario);
                                        let editar = usuario.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td class="font-medium">{usuario.nombre}</td>
                                                <td>{usuario.username}</td>
                                                <td><span class="badge badge-outline">{roles}</span></td>
                                                <td class="flex gap-2 justify-end">
                                                    <button class="btn btn-sm btn-ghost" on:click=move |_| screen.update(|s| s.crud.open_form(Some(&editar)))>
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
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>

        <FormModal
            title=Signal::derive(move || if editing() { "Editar usuario".to_string() } else { "Nuevo usuario".to_string() })
            open=Signal::derive(move || screen.with(|s| s.crud.mode.is_open()))
            submitting=Signal::derive(move || screen.with(|s| s.crud.submitting))
            on_submit=move |_| crud::submit(screen, |s| &mut s.crud, auth.api())
            on_close=move |_| screen.update(|s| s.crud.close_form())
        >
            <TextField
                label="Nombre"
                value=Signal::derive(move || screen.with(|s| s.crud.form.nombre.clone()))
                on_input=move |v| screen.update(|s| s.crud.form.nombre = v)
                error=Signal::derive(move || screen.with(|s| s.crud.field_error("nombre")))
            />
            <TextField
                label="Usuario"
                value=Signal::derive(move || screen.with(|s| s.crud.form.username.clone()))
                on_input=move |v| screen.update(|s| s.crud.form.username = v)
                error=Signal::derive(move || screen.with(|s| s.crud.field_error("username")))
            />
            <TextField
                label=if editing() { "Contraseña (vacío = sin cambios)" } else { "Contraseña" }
                input_type="password"
                value=Signal::derive(move || screen.with(|s| s.crud.form.password.clone()))
                on_input=move |v| screen.update(|s| s.crud.form.password = v)
                error=Signal::derive(move || screen.with(|s| s.crud.field_error("password")))
            />
            <fieldset class="fieldset">
                <legend class="fieldset-legend">"Roles"</legend>
                {move || {
                    screen
                        .with(|s| s.roles.clone())
                        .into_iter()
                        .map(|rol| {
                            let nombre = rol.nombre.clone();
                            let checked = {
                                let nombre = nombre.clone();
                                move || screen.with(|s| s.crud.form.has_role(&nombre))
                            };
                            view! {
                                <label class="label cursor-pointer gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary"
                                        prop:checked=checked
                                        on:change=move |_| screen.update(|s| s.crud.form.toggle_role(&rol))
                                    />
                                    <span>{nombre}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
                <FieldError error=Signal::derive(move || screen.with(|s| s.crud.field_error("roles"))) />
            </fieldset>
        </FormModal>
    }
}
