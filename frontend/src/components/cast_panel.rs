use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cast::{ActorType, CastDraft, CastManager};
use crate::components::fields::{Binding, ChoiceField, SelectField, TextField};
use crate::components::modal::Modal;
use crate::web::BrowserConfirm;

/// 某部内容的演职员表弹窗
#[component]
pub fn CastPanel(
    cast: CastManager,
    /// (演员 id, 姓名)
    #[prop(into)]
    actors: Signal<Vec<(i64, String)>>,
) -> impl IntoView {
    let open = Signal::derive(move || cast.target.with(Option::is_some));
    let title = Signal::derive(move || {
        cast.target
            .with(|t| t.as_ref().map(|t| format!("Reparto: {}", t.title)))
            .unwrap_or_default()
    });
    let bind = move |field: &'static str, read: fn(&CastDraft) -> String, write: fn(&mut CastDraft, String)| {
        Binding::new(cast.draft, cast.field_errors, field, read, write)
    };

    let on_add = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            cast.add().await;
        });
    };

    let rows = move || {
        cast.members
            .get()
            .into_iter()
            .map(|member| {
                let actor_id = member.actor_ref_id();
                let name = member
                    .actor
                    .as_ref()
                    .map(|a| a.full_name())
                    .unwrap_or_else(|| "—".to_string());
                let kind = ActorType::label(&member.actor_type).to_string();
                view! {
                    <tr>
                        <td>{name}</td>
                        <td>{member.character}</td>
                        <td>
                            <span class="badge badge-outline">{kind}</span>
                        </td>
                        <td class="text-right">
                            {actor_id
                                .map(|actor_id| {
                                    view! {
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            on:click=move |_| {
                                                spawn_local(async move {
                                                    cast.remove(actor_id, &BrowserConfirm).await;
                                                });
                                            }
                                        >
                                            "Quitar"
                                        </button>
                                    }
                                })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Modal open=open title=title on_close=move |_| cast.close() wide=true>
            <div class="overflow-x-auto">
                <table class="table table-sm w-full">
                    <thead>
                        <tr>
                            <th>"Actor"</th>
                            <th>"Personaje"</th>
                            <th>"Tipo"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || cast.loading.get()>
                            <tr>
                                <td colspan="4" class="text-center">
                                    <span class="loading loading-spinner loading-sm"></span>
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !cast.loading.get() && cast.members.with(Vec::is_empty)>
                            <tr>
                                <td colspan="4" class="text-center text-base-content/50">
                                    "Sin actores en el reparto."
                                </td>
                            </tr>
                        </Show>
                        {rows}
                    </tbody>
                </table>
            </div>

            <div class="divider">"Añadir actor"</div>
            <form on:submit=on_add class="space-y-2">
                <SelectField
                    label="Actor"
                    placeholder="Selecciona un actor"
                    options=actors
                    bind=bind("actor_id", |d| d.actor_id.clone(), |d, v| d.actor_id = v)
                />
                <TextField
                    label="Personaje"
                    bind=bind("character", |d| d.character.clone(), |d, v| d.character = v)
                />
                <ChoiceField
                    label="Tipo"
                    choices=ActorType::CHOICES
                    bind=bind("actor_type", |d| d.actor_type.clone(), |d, v| d.actor_type = v)
                />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| cast.close()>
                        "Cerrar"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        "Añadir"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
