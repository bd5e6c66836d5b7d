//! Danh sách chủ đề gợi ý sau khi phân tích ảnh

use leptos::prelude::*;
use lesson_ai_common::ThemeSuggestion;

#[component]
pub fn ThemeList<F>(
    suggestions: Signal<Vec<ThemeSuggestion>>,
    context: Signal<String>,
    on_apply: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || !suggestions.get().is_empty()>
            <div class="theme-list">
                <p class="theme-list-title">"Chủ đề gợi ý cho bạn:"</p>
                {
                    let on_apply = on_apply.clone();
                    move || {
                        let on_apply = on_apply.clone();
                        suggestions
                            .get()
                            .into_iter()
                            .map(|s| {
                                let on_apply = on_apply.clone();
                                let theme_context = s.context.clone();
                                let is_selected = {
                                    let theme_context = theme_context.clone();
                                    move || context.get() == theme_context
                                };
                                view! {
                                    <button
                                        class="theme-btn"
                                        class:selected=is_selected
                                        on:click=move |_| on_apply(theme_context.clone())
                                    >
                                        {s.title.clone()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }
                }
            </div>
        </Show>
    }
}
