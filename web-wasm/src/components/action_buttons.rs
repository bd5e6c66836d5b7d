//! Hai nút khởi động luồng tạo từ vựng và tạo kịch bản
//!
//! Hai luồng không khoá lẫn nhau: nút này disabled chỉ khi chính
//! luồng của nó đang chạy hoặc chưa đủ dữ liệu vào.

use leptos::prelude::*;

#[component]
pub fn ActionButtons<FV, FS>(
    has_context: Signal<bool>,
    has_vocab: Signal<bool>,
    loading_vocab: ReadSignal<bool>,
    loading_script: ReadSignal<bool>,
    on_generate_vocab: FV,
    on_generate_script: FS,
) -> impl IntoView
where
    FV: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="action-buttons">
            <button
                class="btn btn-secondary"
                disabled=move || loading_vocab.get() || !has_context.get()
                on:click={
                    let on_generate_vocab = on_generate_vocab.clone();
                    move |_| on_generate_vocab(())
                }
            >
                {move || if loading_vocab.get() { "Đang soạn bài học..." } else { "TẠO TỪ VỰNG" }}
            </button>

            <button
                class="btn btn-primary"
                disabled=move || loading_script.get() || !has_vocab.get()
                on:click={
                    let on_generate_script = on_generate_script.clone();
                    move |_| on_generate_script(())
                }
            >
                {move || if loading_script.get() { "Đang tạo kịch bản..." } else { "XUẤT KỊCH BẢN" }}
            </button>
        </div>
    }
}
