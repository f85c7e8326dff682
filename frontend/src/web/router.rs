//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫(`zorro_client::guard::resolve`) -> 写入 History -> 更新信号"。
//! 路由服务同时实现 [`Navigator`]，供会话与拦截器在登录/登出/401 时跳转。

use std::rc::Rc;

use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use zorro_client::guard;
use zorro_client::{AppRoute, Navigation, Navigator};

use crate::auth::Auth;

/// 当前浏览器地址
fn current_location() -> Navigation {
    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    Navigation::parse(&path, &search)
}

/// 推送 History 状态
fn push_history_state(url: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(url: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// 浏览器前进/后退：地址栏已经变了，只有被重定向时才改写
    Keep,
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证服务在创建后注入（两者互相引用）。
#[derive(Clone, Copy)]
pub struct RouterService {
    current: RwSignal<Navigation>,
    auth: StoredValue<Option<Rc<Auth>>, LocalStorage>,
}

impl RouterService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(current_location()),
            auth: StoredValue::new_local(None),
        }
    }

    /// 注入认证服务，之后的每次导航都经过守卫
    pub fn attach(&self, auth: Rc<Auth>) {
        self.auth.set_value(Some(auth));
    }

    /// 当前导航（含 returnUrl）
    pub fn current(&self) -> ReadSignal<Navigation> {
        self.current.read_only()
    }

    /// 跳转到菜单中的页面
    pub fn go_to(&self, route: AppRoute) {
        self.route(Navigation::to(route), HistoryMode::Push);
    }

    /// 按当前地址栏完成首次导航
    pub fn start(&self) {
        self.init_popstate_listener();
        self.route(current_location(), HistoryMode::Replace);
    }

    /// **核心方法：导航与守卫**
    fn route(&self, target: Navigation, mode: HistoryMode) {
        let Some(auth) = self.auth.get_value() else {
            self.commit(target, target, mode);
            return;
        };

        let service = *self;
        let mut resolution = Box::pin(async move { guard::resolve(&auth, target).await });

        // 公开页面和本地已有会话时守卫不访问网络，同步完成
        if let Some(resolved) = (&mut resolution).now_or_never() {
            self.commit(target, resolved, mode);
            return;
        }
        spawn_local(async move {
            let resolved = resolution.await;
            service.commit(target, resolved, mode);
        });
    }

    fn commit(&self, requested: Navigation, resolved: Navigation, mode: HistoryMode) {
        let redirected = requested != resolved;
        if redirected {
            tracing::info!(from = %requested.route, to = %resolved.route, "[Router] redirected");
        }

        let url = resolved.to_url();
        match mode {
            HistoryMode::Push => push_history_state(&url),
            HistoryMode::Replace => replace_history_state(&url),
            HistoryMode::Keep if redirected => replace_history_state(&url),
            HistoryMode::Keep => {}
        }
        self.current.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑
            service.route(current_location(), HistoryMode::Keep);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

impl Default for RouterService {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterService {
    fn navigate(&self, target: Navigation) {
        self.route(target, HistoryMode::Push);
    }
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 已注入认证服务的路由服务
    service: RouterService,
    children: Children,
) -> impl IntoView {
    provide_context(service);
    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let route = Memo::new(move |_| router.current().get().route);

    move || matcher(route.get())
}

/// 站内链接：拦截点击，走路由服务而不是整页刷新
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.go_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
