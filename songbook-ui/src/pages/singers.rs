//! Singers List Page
//!
//! Lists every singer and their songs. Edit mode reveals delete buttons;
//! each delete goes through a confirmation dialog.

use leptos::*;

use songbook::{Singer, SingerApi, SingerListView};

use crate::api::GlooSingerApi;
use crate::components::{ConfirmDialog, Loading};
use crate::state::global::GlobalState;

#[component]
pub fn SingersList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let list = create_rw_signal(SingerListView::default());
    let (loading, set_loading) = create_signal(true);
    let (deleting, set_deleting) = create_signal(false);

    // Fetch singers on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = GlooSingerApi::new().list_singers().await;
            if let Err(e) = &result {
                state.show_error(&e.to_string());
            }
            list.update(|l| l.apply_loaded(result));
            set_loading.set(false);
        });
    });

    let on_confirm = move |_: ()| {
        let Some(target) = list.with_untracked(|l| l.pending_deletion()) else {
            return;
        };
        set_deleting.set(true);

        spawn_local(async move {
            let result = target.execute(&GlooSingerApi::new()).await;
            match list.try_update(|l| l.finish_deletion(target, result)) {
                Some(Ok(_)) => {
                    if let Some(notice) = list.with_untracked(|l| l.notice().map(str::to_string)) {
                        state.show_success(&notice);
                    }
                }
                Some(Err(e)) => state.show_error(&e.to_string()),
                None => {}
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Singers List"</h1>
                <button
                    on:click=move |_| list.update(|l| l.toggle_edit_mode())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    {move || if list.with(|l| l.is_edit_mode()) { "Exit Edit Mode" } else { "Enter Edit Mode" }}
                </button>
            </div>

            {move || list.with(|l| l.error().map(|e| e.to_string())).map(|error| view! {
                <div class="text-red-400">{error}</div>
            })}

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let (singers, edit_mode) = list.with(|l| (l.singers().to_vec(), l.is_edit_mode()));
                if singers.is_empty() {
                    view! { <p class="text-gray-400">"No singers found."</p> }.into_view()
                } else {
                    view! {
                        <ul class="space-y-4">
                            {singers.into_iter().map(|singer| view! {
                                <SingerCard singer=singer edit_mode=edit_mode list=list />
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}

            {move || list.with(|l| l.modal().pending().cloned()).map(|pending| view! {
                <ConfirmDialog
                    pending=pending
                    busy=deleting
                    on_confirm=on_confirm
                    on_cancel=move |_: ()| list.update(|l| l.cancel())
                />
            })}
        </div>
    }
}

/// One singer with their songs and, in edit mode, delete buttons
#[component]
fn SingerCard(
    singer: Singer,
    edit_mode: bool,
    list: RwSignal<SingerListView>,
) -> impl IntoView {
    let singer_id = singer.id.clone();

    view! {
        <li class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <strong class="text-lg">{singer.name.clone()}</strong>
            <ul class="mt-2 space-y-1">
                {singer.songs.into_iter().map(|song| {
                    let id = singer.id.clone();
                    let label = song.clone();
                    view! {
                        <li class="flex items-center justify-between text-gray-300">
                            <span>{label}</span>
                            {edit_mode.then(|| view! {
                                <button
                                    on:click=move |_| list.update(|l| { l.request_delete_song(&id, &song); })
                                    class="text-sm text-red-400 hover:text-red-300"
                                >
                                    "Delete Song"
                                </button>
                            })}
                        </li>
                    }
                }).collect_view()}
            </ul>
            {edit_mode.then(|| view! {
                <button
                    on:click=move |_| list.update(|l| { l.request_delete_singer(&singer_id); })
                    class="mt-3 px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                >
                    "Delete Singer"
                </button>
            })}
        </li>
    }
}
