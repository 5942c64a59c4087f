//! 表单输入组件
//!
//! 所有输入框都通过 [`Binding`] 绑定到某个表单状态的一个字段，
//! 同时读取该字段的校验错误。

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::crud::{CrudScreen, Resource};
use crate::images::{EncodedImage, data_url, encode_image};
use crate::notify::use_toaster;
use crate::validation::FieldErrors;
use crate::web::read_first_file;

/// 表单字段绑定：当前值、写回回调、该字段的错误信息
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
    pub error: Signal<Option<String>>,
}

impl Binding {
    pub fn new<F: Send + Sync + 'static>(
        state: RwSignal<F>,
        errors: RwSignal<FieldErrors>,
        field: &'static str,
        read: impl Fn(&F) -> String + Send + Sync + 'static,
        write: impl Fn(&mut F, String) + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: Signal::derive(move || state.with(&read)),
            on_input: Callback::new(move |value: String| {
                state.update(|form| write(form, value));
                errors.update(|errors| {
                    errors.remove(field);
                });
            }),
            error: Signal::derive(move || errors.with(|errors| errors.get(field).cloned())),
        }
    }
}

impl<R: Resource> CrudScreen<R> {
    /// 绑定草稿中的一个字段
    pub fn bind(
        &self,
        field: &'static str,
        read: impl Fn(&R::Draft) -> String + Send + Sync + 'static,
        write: impl Fn(&mut R::Draft, String) + Send + Sync + 'static,
    ) -> Binding {
        Binding::new(self.draft, self.field_errors, field, read, write)
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </label>
            }
        })
    }
}

/// 单行文本输入
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    bind: Binding,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                class=move || {
                    if bind.error.get().is_some() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
                on:input=move |ev| bind.on_input.run(event_target_value(&ev))
                prop:value=move || bind.value.get()
            />
            <FieldError error=bind.error />
        </div>
    }
}

/// 多行文本输入
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    bind: Binding,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <textarea
                placeholder=placeholder
                class="textarea textarea-bordered w-full h-24"
                on:input=move |ev| bind.on_input.run(event_target_value(&ev))
                prop:value=move || bind.value.get()
            ></textarea>
            <FieldError error=bind.error />
        </div>
    }
}

/// 下拉选择；值为字符串形式的 id，`""` 为占位项
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    bind: Binding,
    /// (id, 显示名)
    #[prop(into)]
    options: Signal<Vec<(i64, String)>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| bind.on_input.run(event_target_value(&ev))
                prop:value=move || bind.value.get()
            >
                <option value="" selected=move || bind.value.get().is_empty()>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|(id, name)| (*id, name.clone())
                    children=move |(id, name)| {
                        let value = id.to_string();
                        let current = value.clone();
                        view! {
                            <option value=value selected=move || bind.value.get() == current>
                                {name}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError error=bind.error />
        </div>
    }
}

/// 固定选项的下拉（值即显示名）
#[component]
pub fn ChoiceField(
    #[prop(into)] label: String,
    bind: Binding,
    choices: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| bind.on_input.run(event_target_value(&ev))
                prop:value=move || bind.value.get()
            >
                {choices
                    .iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=*value selected=move || bind.value.get() == *value>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// 复选框组（多选 id）
#[component]
pub fn CheckboxGroup(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    #[prop(into)] selected: Signal<BTreeSet<i64>>,
    #[prop(into)] on_toggle: Callback<i64>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <div class="flex flex-wrap gap-3 p-3 border border-base-300 rounded-box max-h-40 overflow-y-auto">
                <For
                    each=move || options.get()
                    key=|(id, _)| *id
                    children=move |(id, name)| {
                        view! {
                            <label class="label cursor-pointer gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm checkbox-primary"
                                    prop:checked=move || selected.with(|s| s.contains(&id))
                                    on:change=move |_| on_toggle.run(id)
                                />
                                <span class="label-text">{name}</span>
                            </label>
                        }
                    }
                />
            </div>
            {move || {
                error.get().map(|message| {
                    view! {
                        <label class="label">
                            <span class="label-text-alt text-error">{message}</span>
                        </label>
                    }
                })
            }}
        </div>
    }
}

/// 图片上传：读取文件、校验大小、编码为 base64
#[component]
pub fn ImageField(
    #[prop(into)] label: String,
    /// 当前图片 (base64, content type)
    #[prop(into)]
    current: Signal<Option<(String, String)>>,
    #[prop(into)] on_select: Callback<EncodedImage>,
) -> impl IntoView {
    let toaster = use_toaster();
    let max_bytes = use_context::<AppConfig>()
        .unwrap_or_default()
        .max_image_bytes;

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        spawn_local(async move {
            let encoded = match read_first_file(&input).await {
                Ok(Some(file)) => encode_image(&file.bytes, &file.content_type, max_bytes),
                Ok(None) => return,
                Err(err) => Err(err),
            };
            match encoded {
                Ok(image) => on_select.run(image),
                Err(err) => {
                    input.set_value("");
                    toaster.error(&err.to_string(), None);
                }
            }
        });
    };

    let preview = move || {
        current
            .get()
            .and_then(|(data, content_type)| data_url(&data, &content_type))
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <div class="flex items-center gap-4">
                {move || {
                    preview()
                        .map(|src| {
                            view! {
                                <div class="avatar">
                                    <div class="w-16 rounded">
                                        <img src=src />
                                    </div>
                                </div>
                            }
                        })
                }}
                <input
                    type="file"
                    accept="image/*"
                    class="file-input file-input-bordered w-full"
                    on:change=on_change
                />
            </div>
        </div>
    }
}

/// 列表中的缩略图
pub fn thumbnail(data: Option<&str>, content_type: Option<&str>) -> AnyView {
    match data.and_then(|d| data_url(d, content_type.unwrap_or_default())) {
        Some(src) => view! {
            <div class="avatar">
                <div class="w-10 rounded">
                    <img src=src />
                </div>
            </div>
        }
        .into_any(),
        None => view! { <span class="text-base-content/40">"—"</span> }.into_any(),
    }
}
