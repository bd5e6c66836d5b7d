//! Component header

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Ms Ly AI - Kịch Bản Học Tiếng Anh"</h1>
            <p class="tagline">"Tạo prompt ảnh, prompt video và lời thoại song ngữ cho mẹ và bé"</p>
        </header>
    }
}
