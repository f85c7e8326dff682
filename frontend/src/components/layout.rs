use crate::auth::use_auth;
use crate::web::Link;
use crate::web::use_router;
use leptos::prelude::*;
use zorro_client::AppRoute;

/// 登录后页面的外框：导航栏 + 内容
///
/// 管理员专属的菜单项只对管理员显示（访问控制仍由守卫负责）。
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let app_name = auth.app_name();

    let active = move |route: AppRoute| {
        if router.current().get().route == route {
            "menu-active"
        } else {
            ""
        }
    };

    let menu = move || {
        let is_admin = auth.is_admin();
        AppRoute::MENU
            .into_iter()
            .filter(|r| is_admin || !r.requires_admin())
            .map(|route| {
                view! {
                    <li>
                        <Link to=route class=active(route)>{route.title()}</Link>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-xl">
                <div class="flex-1">
                    <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl">{app_name}</Link>
                </div>
                <div class="flex-none hidden lg:flex">
                    <ul class="menu menu-horizontal px-1">{menu}</ul>
                </div>
                <div class="flex-none gap-2">
                    <span class="badge badge-neutral hidden md:inline-flex">
                        {move || auth.username().unwrap_or_default()}
                        {move || auth.is_admin().then_some(" (admin)")}
                    </span>
                    <button on:click=move |_| auth.logout() class="btn btn-outline btn-error btn-sm">
                        "Cerrar sesión"
                    </button>
                </div>
            </div>
            <main class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">{children()}</main>
        </div>
    }
}

/// 页面标题栏
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <div>
                <h1 class="text-2xl font-bold">{title}</h1>
                {subtitle.map(|s| view! { <p class="text-base-content/70 text-sm">{s}</p> })}
            </div>
            <div class="flex gap-2">{children.map(|c| c())}</div>
        </div>
    }
}
