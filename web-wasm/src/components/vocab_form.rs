//! Form 5 dòng từ vựng
//!
//! Mỗi ô sửa trực tiếp vào danh sách của phiên; khi luồng tạo từ vựng
//! đang chạy thì phủ một lớp chờ lên form.

use leptos::prelude::*;
use lesson_ai_common::{VocabField, VocabItem, VOCAB_SLOTS};

#[component]
pub fn VocabForm<F>(
    vocab_list: Signal<Vec<VocabItem>>,
    loading: ReadSignal<bool>,
    on_edit: F,
) -> impl IntoView
where
    F: Fn((usize, VocabField, String)) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="vocab-form">
            <Show when=move || loading.get()>
                <div class="vocab-loading">"Đang soạn bài học..."</div>
            </Show>
            {(0..VOCAB_SLOTS)
                .map(|i| {
                    let on_edit = on_edit.clone();
                    view! { <VocabRow index=i vocab_list=vocab_list on_edit=on_edit /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn VocabRow<F>(
    index: usize,
    vocab_list: Signal<Vec<VocabItem>>,
    on_edit: F,
) -> impl IntoView
where
    F: Fn((usize, VocabField, String)) + 'static + Clone + Send + Sync,
{
    let field_value = move |field: VocabField| {
        vocab_list.with(|list| {
            list.get(index)
                .map(|item| match field {
                    VocabField::Vi => item.vi.clone(),
                    VocabField::En => item.en.clone(),
                    VocabField::Ipa => item.ipa.clone(),
                    VocabField::Sentence => item.sentence.clone(),
                })
                .unwrap_or_default()
        })
    };

    let on_edit_en = on_edit.clone();
    let on_edit_vi = on_edit.clone();
    let on_edit_ipa = on_edit.clone();
    let on_edit_sentence = on_edit;

    view! {
        <div class="vocab-row">
            <input
                class="vocab-input vocab-en"
                placeholder="English"
                prop:value=move || field_value(VocabField::En)
                on:input=move |ev| on_edit_en((index, VocabField::En, event_target_value(&ev)))
            />
            <input
                class="vocab-input"
                placeholder="Nghĩa"
                prop:value=move || field_value(VocabField::Vi)
                on:input=move |ev| on_edit_vi((index, VocabField::Vi, event_target_value(&ev)))
            />
            <input
                class="vocab-input"
                placeholder="IPA"
                prop:value=move || field_value(VocabField::Ipa)
                on:input=move |ev| on_edit_ipa((index, VocabField::Ipa, event_target_value(&ev)))
            />
            <input
                class="vocab-input vocab-sentence"
                placeholder="Câu ví dụ ngắn..."
                prop:value=move || field_value(VocabField::Sentence)
                on:input=move |ev| {
                    on_edit_sentence((index, VocabField::Sentence, event_target_value(&ev)))
                }
            />
        </div>
    }
}
