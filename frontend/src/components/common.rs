//! 各页面共用的小组件

use leptos::prelude::*;
use zorro_shared::NivelStock;

/// 页面级错误提示
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2">
                <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 右上角的临时通知，3 秒后自动消失
#[component]
pub fn Toast(notification: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move |_| {
        if notification.with(Option::is_some) {
            gloo_timers::callback::Timeout::new(3_000, move || notification.set(None)).forget();
        }
    });

    view! {
        <Show when=move || notification.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-info shadow-lg">
                    <span>{move || notification.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 带标签与字段错误的输入框
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <fieldset class="fieldset">
            <legend class="fieldset-legend">{label}</legend>
            <input
                type=input_type.unwrap_or("text")
                step=step
                class=move || if error.with(Option::is_some) { "input input-bordered input-error w-full" } else { "input input-bordered w-full" }
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </fieldset>
    }
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|msg| view! { <p class="text-error text-xs mt-1">{msg}</p> })
    }
}

/// 从 `<select>` 的值解析 id，空选项为 `None`
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// 库存水平徽章
#[component]
pub fn NivelBadge(nivel: NivelStock) -> impl IntoView {
    let (class, label) = match nivel {
        NivelStock::Suficiente => ("badge badge-success", "Suficiente"),
        NivelStock::Bajo => ("badge badge-warning", "Bajo"),
        NivelStock::Agotado => ("badge badge-error", "Agotado"),
    };
    view! { <span class=class>{label}</span> }
}
