//! Component ứng dụng chính - điều phối ba luồng gọi model
//!
//! Ba cờ loading độc lập, một banner lỗi dùng chung. Các luồng không
//! loại trừ lẫn nhau: luồng nào xong thì tự hạ cờ của nó và ghi đè
//! phần dữ liệu của nó, lỗi của luồng này không huỷ luồng kia.

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use lesson_ai_common::{
    LessonSession, VocabField,
    MSG_IMAGE_FAILED, MSG_SCRIPT_FAILED, MSG_VOCAB_FAILED,
};

use crate::api::gemini;
use crate::components::{
    action_buttons::ActionButtons,
    context_panel::ContextPanel,
    error_banner::ErrorBanner,
    header::Header,
    script_view::ScriptView,
    settings_panel::SettingsPanel,
    theme_list::ThemeList,
    upload_area::UploadArea,
    vocab_form::VocabForm,
};

/// Cuộn tới khu kết quả sau khi có kịch bản mới
fn scroll_to_result() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    if let Some(el) = document.get_element_by_id("result-section") {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Component ứng dụng chính
#[component]
pub fn App() -> impl IntoView {
    // trạng thái phiên và các cờ luồng
    let session = RwSignal::new(LessonSession::new());
    let (api_key, set_api_key) = signal(String::new());
    let (analyzing_image, set_analyzing_image) = signal(false);
    let (loading_vocab, set_loading_vocab) = signal(false);
    let (loading_script, set_loading_script) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (copied_id, set_copied_id) = signal(None::<String>);

    // chọn ảnh: lưu data URL rồi phân tích chủ đề luôn
    let on_image_selected = move |data_url: String| {
        session.update(|s| s.set_image(data_url.clone()));
        set_analyzing_image.set(true);
        set_error.set(None);

        let key = api_key.get_untracked();
        spawn_local(async move {
            match gemini::analyze_image_themes(&key, &data_url).await {
                Ok(themes) => session.update(|s| s.set_theme_suggestions(themes)),
                Err(e) => {
                    console::error!(format!("analyze_image_themes: {:?}", e));
                    set_error.set(Some(MSG_IMAGE_FAILED.to_string()));
                }
            }
            set_analyzing_image.set(false);
        });
    };

    let on_image_cleared = move |_: ()| {
        session.update(|s| s.clear_image());
    };

    let on_generate_vocab = move |_: ()| {
        if let Err(msg) = session.with_untracked(|s| s.ensure_context()) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_loading_vocab.set(true);
        set_error.set(None);

        let key = api_key.get_untracked();
        let (context, image) =
            session.with_untracked(|s| (s.context.clone(), s.image.clone()));
        spawn_local(async move {
            match gemini::generate_vocab(&key, &context, image.as_deref()).await {
                Ok(vocabs) => session.update(|s| s.replace_vocab(vocabs)),
                Err(e) => {
                    console::error!(format!("generate_vocab: {:?}", e));
                    set_error.set(Some(MSG_VOCAB_FAILED.to_string()));
                }
            }
            set_loading_vocab.set(false);
        });
    };

    let on_generate_script = move |_: ()| {
        if let Err(msg) = session.with_untracked(|s| s.ensure_vocab()) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_loading_script.set(true);
        set_error.set(None);

        let key = api_key.get_untracked();
        let (vocab_list, context, image) = session.with_untracked(|s| {
            (s.vocab_list.clone(), s.context.clone(), s.image.clone())
        });
        spawn_local(async move {
            match gemini::generate_script(&key, &vocab_list, &context, image.as_deref()).await {
                Ok(script) => {
                    session.update(|s| s.set_result(script));
                    scroll_to_result();
                }
                Err(e) => {
                    console::error!(format!("generate_script: {:?}", e));
                    set_error.set(Some(MSG_SCRIPT_FAILED.to_string()));
                }
            }
            set_loading_script.set(false);
        });
    };

    // chọn chủ đề (gợi ý từ ảnh hoặc chủ đề liên quan)
    let on_apply_theme = move |context: String| {
        session.update(|s| s.apply_theme(&context));
    };

    let on_edit_vocab = move |(index, field, value): (usize, VocabField, String)| {
        session.update(|s| s.edit_vocab(index, field, value));
    };

    // copy một chiều vào clipboard, đánh dấu nút trong 2 giây
    let on_copy = move |(id, text): (String, String)| {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let clipboard = window.navigator().clipboard();
        spawn_local(async move {
            if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                set_copied_id.set(Some(id));
                Timeout::new(2_000, move || set_copied_id.set(None)).forget();
            }
        });
    };

    let on_dismiss_error = move |_: ()| set_error.set(None);

    let on_context_change = move |value: String| {
        session.update(|s| s.context = value);
    };

    let image = Signal::derive(move || session.with(|s| s.image.clone()));
    let context = Signal::derive(move || session.with(|s| s.context.clone()));
    let theme_suggestions =
        Signal::derive(move || session.with(|s| s.theme_suggestions.clone()));
    let vocab_list = Signal::derive(move || session.with(|s| s.vocab_list.clone()));
    let has_context = Signal::derive(move || session.with(|s| s.has_context()));
    let has_vocab = Signal::derive(move || session.with(|s| s.has_vocab()));
    let result = Signal::derive(move || session.with(|s| s.result.clone()));

    view! {
        <div class="container">
            <Header />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <ErrorBanner error=error on_dismiss=on_dismiss_error />

            <section class="panel">
                <h2>"1. Hình ảnh Mẹ & Bé"</h2>
                <UploadArea
                    image=image
                    analyzing=analyzing_image
                    on_image_selected=on_image_selected
                    on_image_cleared=on_image_cleared
                />
                <ThemeList
                    suggestions=theme_suggestions
                    context=context
                    on_apply=on_apply_theme
                />
            </section>

            <section class="panel">
                <h2>"2. Bối cảnh bài học"</h2>
                <ContextPanel context=context on_change=on_context_change />
            </section>

            <section class="panel">
                <h2>"3. Danh sách từ mới"</h2>
                <VocabForm
                    vocab_list=vocab_list
                    loading=loading_vocab
                    on_edit=on_edit_vocab
                />
            </section>

            <ActionButtons
                has_context=has_context
                has_vocab=has_vocab
                loading_vocab=loading_vocab
                loading_script=loading_script
                on_generate_vocab=on_generate_vocab
                on_generate_script=on_generate_script
            />

            <ScriptView
                result=result
                loading=loading_script
                copied_id=copied_id
                on_copy=on_copy
                on_apply_suggestion=on_apply_theme
            />
        </div>
    }
}
