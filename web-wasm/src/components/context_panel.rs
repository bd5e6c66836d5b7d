//! Ô nhập bối cảnh bài học

use leptos::prelude::*;

#[component]
pub fn ContextPanel<F>(
    context: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <textarea
            class="context-input"
            placeholder="Ví dụ: Bé và mẹ đi siêu thị, Bé tập làm bánh..."
            prop:value=move || context.get()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
