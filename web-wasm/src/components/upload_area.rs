//! Component chọn ảnh tham chiếu
//!
//! Một ảnh duy nhất, đọc thành data URL bằng FileReader rồi giao lại
//! cho App (App sẽ tự khởi động luồng phân tích chủ đề).

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

#[component]
pub fn UploadArea<FS, FC>(
    image: Signal<Option<String>>,
    analyzing: ReadSignal<bool>,
    on_image_selected: FS,
    on_image_cleared: FC,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_click = {
        let on_image_selected = on_image_selected.clone();
        move |_| {
            let document = match web_sys::window().and_then(|w| w.document()) {
                Some(d) => d,
                None => return,
            };
            let input: web_sys::HtmlInputElement = match document
                .create_element("input")
                .ok()
                .and_then(|el| el.dyn_into().ok())
            {
                Some(input) => input,
                None => return,
            };
            input.set_type("file");
            input.set_accept("image/*");

            let on_image_selected = on_image_selected.clone();
            let input_for_closure = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = input_for_closure.files().and_then(|files| files.get(0)) {
                    read_file(file, on_image_selected.clone());
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <Show
            when=move || image.get().is_some()
            fallback={
                let on_click = on_click.clone();
                move || {
                    let on_click = on_click.clone();
                    view! {
                        <div class="upload-area" on:click=on_click>
                            <div class="upload-icon">"📷"</div>
                            <p>"Tải ảnh đại diện Mẹ & Bé"</p>
                            <p class="text-muted">"Định dạng: JPEG, PNG"</p>
                        </div>
                    }
                }
            }
        >
            <div class="image-preview">
                <img
                    src=move || image.get().unwrap_or_default()
                    alt="Ảnh Mẹ & Bé"
                />
                <button
                    class="btn btn-small btn-tertiary remove-image"
                    on:click={
                        let on_image_cleared = on_image_cleared.clone();
                        move |_| on_image_cleared(())
                    }
                >
                    "Bỏ ảnh"
                </button>
            </div>
        </Show>

        <Show when=move || analyzing.get()>
            <p class="analyzing-indicator">"AI Đang ngắm ảnh..."</p>
        </Show>
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(r) => r,
        Err(_) => return,
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
