//! 模态框组件
//!
//! 打开状态由外部信号驱动，原生 `<dialog>` 的 ESC 关闭会回写该信号。

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    /// 用户通过 ESC 或关闭按钮关闭时调用
    #[prop(into)]
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let box_class = if wide {
        "modal-box w-11/12 max-w-4xl"
    } else {
        "modal-box"
    };

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:close=move |_| {
                if open.get_untracked() {
                    on_close.run(());
                }
            }
        >
            <div class=box_class>
                <button
                    type="button"
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                {children()}
            </div>
        </dialog>
    }
}
