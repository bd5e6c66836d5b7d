//! Hiển thị kịch bản đã tạo
//!
//! Mỗi cảnh gồm prompt ảnh, prompt video và lời thoại song ngữ; từng
//! khối copy được riêng, hoặc copy cả bộ của một cảnh. Cuối trang là
//! ghi chú và các chủ đề liên quan (bấm vào để làm bối cảnh mới).

use leptos::prelude::*;
use lesson_ai_common::{RelatedSuggestion, Scene, ScriptOutput};

#[component]
pub fn ScriptView<FC, FA>(
    result: Signal<Option<ScriptOutput>>,
    loading: ReadSignal<bool>,
    copied_id: ReadSignal<Option<String>>,
    on_copy: FC,
    on_apply_suggestion: FA,
) -> impl IntoView
where
    FC: Fn((String, String)) + 'static + Clone + Send + Sync,
    FA: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="result-section" class="result-section">
            {move || {
                let on_copy = on_copy.clone();
                let on_apply_suggestion = on_apply_suggestion.clone();
                match result.get() {
                    Some(script) => view! {
                        <div class="script-result">
                            <div class="project-card">
                                <span class="project-badge">"Kịch bản đã sẵn sàng!"</span>
                                <h2 class="project-title">{script.project_title.clone()}</h2>
                                <p class="project-style">{script.global_visual_style.look.clone()}</p>
                            </div>

                            {script
                                .scenes
                                .iter()
                                .enumerate()
                                .map(|(idx, scene)| {
                                    let on_copy = on_copy.clone();
                                    view! {
                                        <SceneCard
                                            scene=scene.clone()
                                            index=idx
                                            copied_id=copied_id
                                            on_copy=on_copy
                                        />
                                    }
                                })
                                .collect_view()}

                            <FinalNotes notes=script.final_notes.clone() />

                            <RelatedList
                                suggestions=script.related_suggestions.clone()
                                on_apply=on_apply_suggestion
                            />
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="result-placeholder">
                            <h3>"Máy tạo kịch bản Ms Ly AI"</h3>
                            <p class="text-muted">
                                {move || {
                                    if loading.get() {
                                        "Đang chuẩn bị những cảnh phim tuyệt vời nhất..."
                                    } else {
                                        "Tải ảnh, chọn chủ đề và xem phép màu xảy ra nhé!"
                                    }
                                }}
                            </p>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn SceneCard<FC>(
    scene: Scene,
    index: usize,
    copied_id: ReadSignal<Option<String>>,
    on_copy: FC,
) -> impl IntoView
where
    FC: Fn((String, String)) + 'static + Clone + Send + Sync,
{
    let dialogue_views = scene
        .dialogue
        .iter()
        .map(|d| {
            let bubble_class = if d.is_mother() { "bubble bubble-mother" } else { "bubble bubble-child" };
            view! {
                <div class=bubble_class>
                    <span class="speaker-badge">{d.display_speaker()}</span>
                    <p>{d.text.clone()}</p>
                </div>
            }
        })
        .collect_view();

    let meta = format!(
        "{} | {} | {}s | {}",
        scene.camera, scene.action, scene.duration_seconds, scene.sfx_ambience
    );

    view! {
        <div class="scene-card">
            <div class="scene-header">
                <span class="scene-number">{scene.scene_number}</span>
                <h3>{scene.vocab.en.clone()}</h3>
                <CopyButton
                    id=format!("all-{}", index)
                    label="COPY CẢ BỘ CÂU LỆNH"
                    text=scene.copy_payload()
                    copied_id=copied_id
                    on_copy=on_copy.clone()
                />
            </div>

            <div class="prompt-grid">
                <div class="prompt-block">
                    <div class="prompt-label">
                        "Prompt Tạo Ảnh"
                        <CopyButton
                            id=format!("img-{}", index)
                            label="Copy"
                            text=scene.image_prompt.clone()
                            copied_id=copied_id
                            on_copy=on_copy.clone()
                        />
                    </div>
                    <p class="prompt-text">{scene.image_prompt.clone()}</p>
                </div>
                <div class="prompt-block">
                    <div class="prompt-label">
                        "Prompt Tạo Video"
                        <CopyButton
                            id=format!("vid-{}", index)
                            label="Copy"
                            text=scene.video_prompt.clone()
                            copied_id=copied_id
                            on_copy=on_copy
                        />
                    </div>
                    <p class="prompt-text">{scene.video_prompt.clone()}</p>
                </div>
            </div>

            <div class="dialogue-section">
                <p class="dialogue-title">"Kịch bản lời thoại (Song ngữ)"</p>
                {dialogue_views}
            </div>

            <p class="scene-meta text-muted">{meta}</p>
        </div>
    }
}

#[component]
fn CopyButton<FC>(
    id: String,
    label: &'static str,
    text: String,
    copied_id: ReadSignal<Option<String>>,
    on_copy: FC,
) -> impl IntoView
where
    FC: Fn((String, String)) + 'static + Clone + Send + Sync,
{
    let id_for_label = id.clone();
    view! {
        <button
            class="btn btn-small btn-copy"
            on:click=move |_| on_copy((id.clone(), text.clone()))
        >
            {move || {
                if copied_id.get().as_deref() == Some(id_for_label.as_str()) {
                    "Đã copy!"
                } else {
                    label
                }
            }}
        </button>
    }
}

#[component]
fn FinalNotes(notes: Vec<String>) -> impl IntoView {
    view! {
        <Show when={
            let is_empty = notes.is_empty();
            move || !is_empty
        }>
            <div class="final-notes">
                <p class="final-notes-title">"Ghi chú"</p>
                <ul>
                    {notes
                        .iter()
                        .map(|note| view! { <li>{note.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}

#[component]
fn RelatedList<FA>(
    suggestions: Vec<RelatedSuggestion>,
    on_apply: FA,
) -> impl IntoView
where
    FA: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when={
            let is_empty = suggestions.is_empty();
            move || !is_empty
        }>
            <div class="related-list">
                <p class="related-title">"Chủ đề tiếp theo cho bé"</p>
                {suggestions
                    .iter()
                    .map(|s| {
                        let on_apply = on_apply.clone();
                        let context = s.context.clone();
                        view! {
                            <div class="related-card">
                                <h4>{s.title.clone()}</h4>
                                <p class="text-muted">{s.description.clone()}</p>
                                <p class="related-vocab">{s.suggested_vocab.join(", ")}</p>
                                <button
                                    class="btn btn-small btn-secondary"
                                    on:click=move |_| on_apply(context.clone())
                                >
                                    "Dùng chủ đề này"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
