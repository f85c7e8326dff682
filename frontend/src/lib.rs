//! Abarrotes el Zorro 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（守卫在 `zorro_client::guard` 中）
//! - `auth`: 客户端组装与认证状态
//! - `components`: UI 组件层，页面状态机来自 `zorro_client::screens`

mod auth;
mod components {
    pub mod clientes;
    pub mod common;
    pub mod corte_caja;
    pub mod crud;
    pub mod dashboard;
    pub mod facturas;
    pub mod inventario;
    pub mod layout;
    pub mod login;
    pub mod productos;
    pub mod proveedores;
    pub mod status;
    pub mod usuarios;
}

use crate::auth::init_auth;
use crate::components::clientes::ClientesPage;
use crate::components::corte_caja::CorteCajaPage;
use crate::components::dashboard::DashboardPage;
use crate::components::facturas::FacturasPage;
use crate::components::inventario::InventarioPage;
use crate::components::layout::Shell;
use crate::components::login::LoginPage;
use crate::components::productos::ProductosPage;
use crate::components::proveedores::ProveedoresPage;
use crate::components::status::{NotFoundPage, UnauthorizedPage};
use crate::components::usuarios::UsuariosPage;

use leptos::prelude::*;
use zorro_client::AppRoute;

// 浏览器适配层
// `zorro_client` 只定义抽象（HttpClient / SessionStorage / Navigator / Confirm），
// 这里用 gloo-* 与 web-sys 实现它们。
pub(crate) mod web {
    mod confirm;
    mod file;
    mod http;
    pub mod logging;
    pub mod router;
    mod storage;

    pub use confirm::browser_confirm;
    pub use file::{first_file, read_file};
    pub use http::FetchClient;
    pub use router::{Link, RouterService, use_router};
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

/// 安装日志订阅器（输出到浏览器控制台）
pub fn init_logging() {
    web::logging::init();
}

/// 路由匹配函数
///
/// 登录页与状态页独立渲染，其余页面包在导航外壳中。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Unauthorized => view! { <UnauthorizedPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        AppRoute::Dashboard => view! { <Shell><DashboardPage /></Shell> }.into_any(),
        AppRoute::Productos => view! { <Shell><ProductosPage /></Shell> }.into_any(),
        AppRoute::Inventario => view! { <Shell><InventarioPage /></Shell> }.into_any(),
        AppRoute::Proveedores => view! { <Shell><ProveedoresPage /></Shell> }.into_any(),
        AppRoute::Clientes => view! { <Shell><ClientesPage /></Shell> }.into_any(),
        AppRoute::Facturas => view! { <Shell><FacturasPage /></Shell> }.into_any(),
        AppRoute::Usuarios => view! { <Shell><UsuariosPage /></Shell> }.into_any(),
        AppRoute::CorteCaja => view! { <Shell><CorteCajaPage /></Shell> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 路由服务先于认证服务创建：认证服务通过它导航
    let router = web::RouterService::new();

    // 2. 组装客户端并恢复会话，随后把认证服务挂到路由守卫上
    let auth_ctx = init_auth(router);
    provide_context(auth_ctx);

    // 3. 按当前地址完成首次路由
    router.start();

    view! {
        <Router service=router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
