//! 认证模块
//!
//! 组装客户端：fetch 传输 -> 拦截器 -> API 客户端 -> 认证服务。
//! 会话由 `zorro_client::Session` 持有，这里把它的变化镜像到一个信号，
//! 供导航栏等界面响应式读取。

use std::rc::Rc;

use crate::web::{BrowserStorage, FetchClient, RouterService};
use leptos::prelude::*;
use leptos::task::spawn_local;
use zorro_client::{AuthInterceptor, AuthService, ClientConfig, Navigator, Session, ZorroApi};
use zorro_shared::Usuario;

pub type Transport = Rc<AuthInterceptor<FetchClient>>;
pub type Api = ZorroApi<Transport>;
pub type Auth = AuthService<Transport>;

/// 认证上下文
///
/// 客户端对象不是 `Send` 的，放在本地 `StoredValue` 中；上下文本身可复制。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<Rc<Api>, LocalStorage>,
    auth: StoredValue<Rc<Auth>, LocalStorage>,
    /// 当前用户（会话的响应式镜像）
    pub identity: RwSignal<Option<Usuario>>,
}

impl AuthContext {
    pub fn api(&self) -> Rc<Api> {
        self.api.get_value()
    }

    pub fn auth(&self) -> Rc<Auth> {
        self.auth.get_value()
    }

    pub fn app_name(&self) -> String {
        self.api.with_value(|api| api.config().app_name.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.identity.with(|u| u.as_ref().is_some_and(Usuario::is_admin))
    }

    pub fn username(&self) -> Option<String> {
        self.identity.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    /// 注销；导航由认证服务完成
    pub fn logout(&self) {
        let auth = self.auth();
        spawn_local(async move { auth.logout().await });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复会话；数据损坏时由认证服务强制登出。
pub fn init_auth(router: RouterService) -> AuthContext {
    let config = ClientConfig::from_build_env();
    tracing::info!(api = %config.api_base_url, "starting {}", config.app_name);

    let navigator: Rc<dyn Navigator> = Rc::new(router);
    let session = Rc::new(Session::new(Rc::new(BrowserStorage)));
    let transport = Rc::new(AuthInterceptor::new(
        FetchClient,
        config.clone(),
        session.clone(),
        navigator.clone(),
    ));
    let api = ZorroApi::new(config, transport);
    let auth = Rc::new(AuthService::new(api.clone(), session.clone(), navigator));

    let identity = RwSignal::new(None);
    session.subscribe(move |usuario| identity.set(usuario.cloned()));
    auth.restore();
    router.attach(auth.clone());

    AuthContext {
        api: StoredValue::new_local(Rc::new(api)),
        auth: StoredValue::new_local(auth),
        identity,
    }
}
