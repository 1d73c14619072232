use super::avatar::Avatar;
use super::loading_indicator::LoadingIndicator;
use super::presence_view::{PresenceView, ViewKind};
use super::user_select::UserSelect;
use crate::api;
use crate::model::{option_entries, OptionEntry};
use crate::util::clog;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum Directory {
    Loading,
    Loaded(Vec<OptionEntry>),
    Failed(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let directory = use_state(|| Directory::Loading);
    let selected = use_state(|| None::<u32>);
    let view = use_state(|| ViewKind::PresenceWeekday);

    // One-shot user listing fetch on mount. The selection handler below is
    // live from the first render, independent of this resolving.
    {
        let directory = directory.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_users().await {
                    Ok(records) => {
                        let entries = option_entries(&records);
                        let dropped = records.len() - entries.len();
                        if dropped > 0 {
                            clog(&format!("dropped {dropped} user records with missing fields"));
                        }
                        directory.set(Directory::Loaded(entries));
                    }
                    Err(err) => {
                        clog(&format!("user listing fetch failed: {err}"));
                        directory.set(Directory::Failed(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };

    let selected_entry: Option<OptionEntry> = match &*directory {
        Directory::Loaded(entries) => {
            (*selected).and_then(|id| entries.iter().find(|e| e.value == id).cloned())
        }
        _ => None,
    };

    let nav_button = |kind: ViewKind| -> Html {
        let active = *view == kind;
        let onclick = {
            let view = view.clone();
            Callback::from(move |_| view.set(kind))
        };
        let style = if active {
            "background:#1f6feb; color:#ffffff; border:1px solid #1f6feb; border-radius:6px; padding:5px 12px;"
        } else {
            "background:#161b22; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:5px 12px;"
        };
        html! { <button {onclick} {style}>{ kind.title() }</button> }
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:-apple-system, 'Segoe UI', sans-serif;">
            <header style="display:flex; align-items:center; gap:16px; padding:10px 16px; background:#161b22; border-bottom:1px solid #30363d;">
                <span style="font-size:18px; font-weight:600;">{"Presence analyzer"}</span>
                {
                    match &*directory {
                        Directory::Loading => html! { <LoadingIndicator /> },
                        Directory::Loaded(entries) => html! {
                            <UserSelect
                                entries={entries.clone()}
                                selected={*selected}
                                on_select={on_select.clone()}
                            />
                        },
                        Directory::Failed(err) => html! {
                            <div style="color:#f85149; font-size:13px;">{ format!("Could not load users: {err}") }</div>
                        },
                    }
                }
                <Avatar entry={selected_entry.clone()} />
            </header>
            <nav style="display:flex; gap:8px; padding:12px 16px;">
                { for ViewKind::ALL.iter().map(|kind| nav_button(*kind)) }
            </nav>
            <main style="padding:4px 16px;">
                {
                    match &selected_entry {
                        Some(entry) => html! { <PresenceView user_id={entry.value} kind={*view} /> },
                        None => html! { <div style="opacity:0.7;">{"Select a user to see presence statistics."}</div> },
                    }
                }
            </main>
        </div>
    }
}
