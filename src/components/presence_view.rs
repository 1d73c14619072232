use crate::api;
use crate::model::{StartEndRow, WeekdayRow};
use crate::util::{clog, format_duration, time_of_day};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    PresenceWeekday,
    MeanTimeWeekday,
    StartEnd,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [
        ViewKind::PresenceWeekday,
        ViewKind::MeanTimeWeekday,
        ViewKind::StartEnd,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::PresenceWeekday => "Presence by weekday",
            ViewKind::MeanTimeWeekday => "Mean presence time",
            ViewKind::StartEnd => "Start / end of work",
        }
    }
}

enum Rows {
    Loading,
    Weekday(Vec<WeekdayRow>),
    StartEnd(Vec<StartEndRow>),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct PresenceViewProps {
    pub user_id: u32,
    pub kind: ViewKind,
}

#[function_component(PresenceView)]
pub fn presence_view(props: &PresenceViewProps) -> Html {
    let rows = use_state(|| Rows::Loading);

    // Refetch whenever the selection or the view changes.
    {
        let rows = rows.clone();
        use_effect_with((props.user_id, props.kind), move |&(user_id, kind)| {
            rows.set(Rows::Loading);
            spawn_local(async move {
                let fetched = match kind {
                    ViewKind::PresenceWeekday => {
                        api::fetch_presence_weekday(user_id).await.map(Rows::Weekday)
                    }
                    ViewKind::MeanTimeWeekday => api::fetch_mean_time_weekday(user_id)
                        .await
                        .map(Rows::Weekday),
                    ViewKind::StartEnd => api::fetch_presence_start_end(user_id)
                        .await
                        .map(Rows::StartEnd),
                };
                match fetched {
                    Ok(r) => rows.set(r),
                    Err(err) => {
                        clog(&format!("presence fetch failed for user {user_id}: {err}"));
                        rows.set(Rows::Failed(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*rows {
        Rows::Loading => html! { <div style="opacity:0.7;">{"Loading..."}</div> },
        Rows::Failed(err) => html! {
            <div style="color:#f85149;">{ format!("Could not load presence data: {err}") }</div>
        },
        Rows::Weekday(items) if items.is_empty() => empty_state(),
        Rows::StartEnd(items) if items.is_empty() => empty_state(),
        Rows::Weekday(items) => weekday_table(items),
        Rows::StartEnd(items) => start_end_table(items),
    };

    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:16px; max-width:560px;">
            <div style="font-weight:600; margin-bottom:10px;">{ props.kind.title() }</div>
            { body }
        </div>
    }
}

fn empty_state() -> Html {
    html! { <div style="opacity:0.7;">{"No presence data for this user."}</div> }
}

fn weekday_table(rows: &[WeekdayRow]) -> Html {
    let max = rows.iter().map(|r| r.seconds).fold(0.0_f64, f64::max);
    html! {
        <div style="display:flex; flex-direction:column; gap:6px;">
            { for rows.iter().map(|r| {
                let pct = if max > 0.0 { (r.seconds / max * 100.0).round() } else { 0.0 };
                html! {
                    <div style="display:flex; align-items:center; gap:10px;">
                        <span style="width:36px; opacity:0.85;">{ r.day.clone() }</span>
                        <div style="flex:1; background:#161b22; border:1px solid #30363d; border-radius:4px; height:14px;">
                            <div style={format!("width:{}%; height:100%; background:#58a6ff; border-radius:3px;", pct)}></div>
                        </div>
                        <span style="min-width:70px; text-align:right; font-variant-numeric:tabular-nums;">
                            { format_duration(r.seconds as u64) }
                        </span>
                    </div>
                }
            }) }
        </div>
    }
}

fn start_end_table(rows: &[StartEndRow]) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:6px;">
            { for rows.iter().map(|r| html! {
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style="width:36px; opacity:0.85;">{ r.day.clone() }</span>
                    <span style="font-variant-numeric:tabular-nums;">
                        { format!("{} - {}", time_of_day(r.start_secs), time_of_day(r.end_secs)) }
                    </span>
                </div>
            }) }
        </div>
    }
}
