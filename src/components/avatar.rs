use crate::model::OptionEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarProps {
    /// Entry whose avatar to show; `None` before the first selection.
    pub entry: Option<OptionEntry>,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let frame = "width:48px; height:48px; border-radius:8px; border:1px solid #30363d; background:#161b22;";
    match &props.entry {
        Some(e) => html! {
            <img id="avatar" src={e.avatar_uri.clone()} style={format!("{} object-fit:cover;", frame)} />
        },
        None => html! {
            <div style={format!("{} display:flex; align-items:center; justify-content:center; opacity:0.5;", frame)}>{"?"}</div>
        },
    }
}
