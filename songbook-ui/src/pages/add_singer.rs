//! Add Singer Page
//!
//! Name plus comma-separated songs. Submitting a known singer appends only
//! the songs they do not already have.

use leptos::*;

use songbook::{AddSingerForm, SingerApi};

use crate::api::GlooSingerApi;
use crate::state::global::GlobalState;

#[component]
pub fn AddSinger() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(AddSingerForm::default());
    let (submitting, set_submitting) = create_signal(false);

    // Snapshot used for name matching
    create_effect(move |_| {
        spawn_local(async move {
            let result = GlooSingerApi::new().list_singers().await;
            if let Err(e) = &result {
                state.show_error(&e.to_string());
            }
            form.update(|f| f.apply_loaded(result));
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                state.show_error(&e.to_string());
                return;
            }
            None => return,
        };
        set_submitting.set(true);

        spawn_local(async move {
            let result = AddSingerForm::send(&GlooSingerApi::new(), submission).await;
            match form.try_update(|f| f.finish_submit(result)) {
                Some(Ok(outcome)) => state.show_success(outcome.message()),
                Some(Err(e)) => state.show_error(&e.to_string()),
                None => {}
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-3xl font-bold">"Add Singer"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-400 mb-2">"Singer Name"</label>
                    <input
                        type="text"
                        placeholder="Singer Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                               focus:outline-none focus:border-primary-500"
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-400 mb-2">"Songs"</label>
                    <input
                        type="text"
                        placeholder="Songs (comma separated)"
                        prop:value=move || form.with(|f| f.songs.clone())
                        on:input=move |ev| form.update(|f| f.songs = event_target_value(&ev))
                        class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                               focus:outline-none focus:border-primary-500"
                    />
                </div>

                {move || form.with(|f| f.error().map(str::to_string)).map(|error| view! {
                    <p class="text-red-400">{error}</p>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add Singer" }}
                </button>
            </form>
        </div>
    }
}
