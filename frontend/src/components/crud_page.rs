//! 通用后台实体页面
//!
//! 表格、弹窗与按钮布局对所有实体相同，差异由 [`AdminView`] 提供。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::crud::{CrudScreen, Resource};
use crate::notify::use_toaster;
use crate::web::BrowserConfirm;

use super::modal::Modal;

/// 实体页面的展示配置
pub trait AdminView: Resource + Sized {
    /// 页面标题（复数）
    const TITLE: &'static str;
    /// 弹窗标题中的实体名（单数）
    const SINGULAR: &'static str;
    /// 表头，不含 ID 与操作列
    const COLUMNS: &'static [&'static str];

    fn cells(entity: &Self::Entity) -> Vec<AnyView>;

    /// 弹窗中的表单字段
    fn form(screen: CrudScreen<Self>) -> AnyView;

    /// 页面级附加内容（渲染在表格下方），在表格之前构建
    fn extras(_screen: CrudScreen<Self>) -> AnyView {
        ().into_any()
    }

    /// 行内的附加操作按钮
    fn row_actions(_entity: &Self::Entity) -> AnyView {
        ().into_any()
    }
}

/// 纯文本单元格
pub fn text_cell(text: impl Into<String>) -> AnyView {
    let text: String = text.into();
    view! { <span>{text}</span> }.into_any()
}

fn row<R: AdminView>(screen: CrudScreen<R>, entity: R::Entity) -> impl IntoView {
    let id = R::id(&entity);
    let cells = R::cells(&entity)
        .into_iter()
        .map(|cell| view! { <td>{cell}</td> })
        .collect_view();
    let extra = R::row_actions(&entity);

    view! {
        <tr>
            <td class="font-mono text-sm opacity-70">{id}</td>
            {cells}
            <td>
                <div class="flex justify-end gap-2">
                    {extra}
                    <button class="btn btn-ghost btn-sm" on:click=move |_| screen.open_edit(&entity)>
                        "Editar"
                    </button>
                    <button
                        class="btn btn-ghost btn-sm text-error"
                        on:click=move |_| {
                            spawn_local(async move {
                                screen.remove(id, &BrowserConfirm).await;
                            });
                        }
                    >
                        "Eliminar"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// 构建某个实体的完整管理页面
pub fn crud_page<R: AdminView>() -> AnyView {
    let screen = CrudScreen::<R>::new(use_client(), use_toaster());
    let extras = R::extras(screen);

    spawn_local(async move { screen.refresh().await });
    spawn_local(async move { screen.load_lookups().await });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            screen.submit().await;
        });
    };

    let title = Signal::derive(move || {
        let verb = if screen.mode.get().is_edit() {
            "Editar"
        } else {
            "Crear"
        };
        format!("{verb} {}", R::SINGULAR)
    });
    let column_count = R::COLUMNS.len() + 2;
    let is_empty = move || screen.list.with(Vec::is_empty);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{R::TITLE}</h1>
                    <p class="text-base-content/70 text-sm">
                        {move || format!("{} registros", screen.list.with(Vec::len))}
                    </p>
                </div>
                <button class="btn btn-primary gap-2" on:click=move |_| screen.open_create()>
                    "+ Nuevo"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                {R::COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                                <th class="text-right">"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || screen.list_loading.get()>
                                <tr>
                                    <td colspan=column_count.to_string() class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Cargando..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !screen.list_loading.get() && is_empty()>
                                <tr>
                                    <td colspan=column_count.to_string() class="text-center py-8 text-base-content/50">
                                        "No hay registros."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                screen
                                    .list
                                    .get()
                                    .into_iter()
                                    .map(|entity| row::<R>(screen, entity))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            {extras}

            <Modal
                open=Signal::derive(move || screen.dialog_open.get())
                title=title
                on_close=move |_| screen.close()
            >
                <form on:submit=on_submit class="space-y-4">
                    {R::form(screen)}
                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| screen.close()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || screen.submitting.get()>
                            {move || if screen.submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Guardando..." }.into_any()
                            } else {
                                "Guardar".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
    .into_any()
}
