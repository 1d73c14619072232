use yew::prelude::*;

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! { <div id="loading" style="padding:6px 10px; font-size:13px; opacity:0.7;">{"Loading users..."}</div> }
}
