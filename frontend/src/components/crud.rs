//! 通用增删改查动作
//!
//! 页面状态放在 `RwSignal` 中；异步流程直接调用 `zorro_client::screens` 的方法，
//! 在状态副本上执行，结束后写回信号。

use std::future::Future;
use std::rc::Rc;

use crate::auth::Api;
use crate::web::browser_confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zorro_client::screens::{CrudScreen, FormModel};

/// 页面状态能放进信号的表单
pub trait SignalForm: FormModel<Entity: Send + Sync> + Send + Sync + 'static {}

impl<F> SignalForm for F where F: FormModel<Entity: Send + Sync> + Send + Sync + 'static {}

/// 从页面状态中取出增删改查部分
pub type Lens<S, F> = fn(&mut S) -> &mut CrudScreen<F>;

/// 页面本身就是 `CrudScreen`
pub fn whole<F: FormModel>(screen: &mut CrudScreen<F>) -> &mut CrudScreen<F> {
    screen
}

/// 在信号外的副本上运行核心层的异步流程，完成后整体写回
pub fn run<S, Fut>(screen: RwSignal<S>, task: impl FnOnce(S) -> Fut + 'static)
where
    S: Clone + Send + Sync + 'static,
    Fut: Future<Output = S> + 'static,
{
    let copia = screen.get_untracked();
    spawn_local(async move {
        let terminado = task(copia).await;
        screen.set(terminado);
    });
}

pub fn load<S, F>(screen: RwSignal<S>, lens: Lens<S, F>, api: Rc<Api>)
where
    S: Clone + Send + Sync + 'static,
    F: SignalForm,
{
    screen.update(|s| lens(s).state.begin_load());
    run(screen, move |mut s| async move {
        lens(&mut s).load(&*api).await;
        s
    });
}

/// 提交表单；表单无效时只更新字段错误
pub fn submit<S, F>(screen: RwSignal<S>, lens: Lens<S, F>, api: Rc<Api>)
where
    S: Clone + Send + Sync + 'static,
    F: SignalForm,
{
    run(screen, move |mut s| async move {
        lens(&mut s).submit(&*api).await;
        s
    });
    // 副本已取走，等待期间只在界面上显示提交中
    screen.update(|s| lens(s).submitting = true);
}

/// 确认后删除
pub fn delete<S, F>(screen: RwSignal<S>, lens: Lens<S, F>, api: Rc<Api>, id: i64)
where
    S: Clone + Send + Sync + 'static,
    F: SignalForm,
{
    run(screen, move |mut s| async move {
        lens(&mut s).delete(&*api, id, &browser_confirm).await;
        s
    });
}

/// 表单弹窗的外壳
#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <div class="modal-box max-w-2xl">
                    <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.run(());
                    }>
                        {children()}
                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Guardando..." }.into_any()
                                } else {
                                    "Guardar".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
