use crate::model::OptionEntry;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserSelectProps {
    pub entries: Vec<OptionEntry>,
    pub selected: Option<u32>,
    pub on_select: Callback<u32>,
}

#[function_component(UserSelect)]
pub fn user_select(props: &UserSelectProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = select.value().parse::<u32>() {
                on_select.emit(id);
            }
        })
    };
    html! {
        <select
            id="user_id"
            {onchange}
            style="background:#161b22; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:6px 10px; font-size:14px; min-width:220px;"
        >
            <option value="" disabled={true} selected={props.selected.is_none()}>{"Select a user"}</option>
            { for props.entries.iter().map(|e| html! {
                <option value={e.value.to_string()} selected={props.selected == Some(e.value)}>{ e.label.clone() }</option>
            }) }
        </select>
    }
}
