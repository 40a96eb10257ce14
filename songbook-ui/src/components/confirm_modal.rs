//! Delete Confirmation Dialog
//!
//! Renders a [`PendingDeletion`] with Yes/No buttons.

use leptos::*;

use songbook::PendingDeletion;

#[component]
pub fn ConfirmDialog(
    pending: PendingDeletion,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <h2 class="text-xl font-semibold mb-4">{pending.title()}</h2>
                <p class="text-gray-300 mb-6">{pending.prompt()}</p>

                <div class="flex space-x-3">
                    <button
                        on:click=move |_| on_confirm.call(())
                        disabled=move || busy.get()
                        class="flex-1 px-4 py-3 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if busy.get() { "Deleting..." } else { "Yes" }}
                    </button>
                    <button
                        on:click=move |_| on_cancel.call(())
                        disabled=move || busy.get()
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "No"
                    </button>
                </div>
            </div>
        </div>
    }
}
