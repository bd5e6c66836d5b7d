//! Banner lỗi
//!
//! Chỉ hiện thông báo mới nhất; lỗi đến sau ghi đè lỗi trước.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner<F>(
    error: ReadSignal<Option<String>>,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner">
                <p>{move || error.get().unwrap_or_default()}</p>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(())
                    }
                >
                    "Đóng"
                </button>
            </div>
        </Show>
    }
}
