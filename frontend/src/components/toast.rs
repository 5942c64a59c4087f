use leptos::prelude::*;

use crate::notify::{TOAST_DURATION, Toast, ToastKind, use_toaster};

/// 通知渲染层
///
/// 每条通知在出现时安排自动消失，点击可提前关闭。
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success shadow-lg cursor-pointer",
                        ToastKind::Error => "alert alert-error shadow-lg cursor-pointer",
                    };
                    view! {
                        <div class=class role="alert" on:click=move |_| toaster.dismiss(id)>
                            <div class="flex flex-col">
                                <span class="font-semibold">{toast.title}</span>
                                {toast.description.map(|d| view! { <span class="text-sm">{d}</span> })}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
