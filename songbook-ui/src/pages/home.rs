//! Landing Page

use leptos::*;

use songbook::views::home::{TAGLINE, TITLE};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="text-center py-12 space-y-6">
            <h1 class="text-4xl font-bold">{TITLE}</h1>
            <img src="/home-image.jpg" alt="Music Logo" class="mx-auto w-72 h-auto" />
            <p class="text-gray-400">{TAGLINE}</p>
        </div>
    }
}
