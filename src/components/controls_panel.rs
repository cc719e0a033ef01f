use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; margin-top:12px; justify-content:space-between; align-items:center; gap:8px;">
        <button onclick={reset_cb} style="padding:8px 16px; border-radius:999px; border:none; font-size:14px; font-weight:500; cursor:pointer; background:linear-gradient(to right, rgb(59,130,246), rgb(129,140,248)); color:white; box-shadow:0 10px 20px rgba(37,99,235,0.4);">{"Reset"}</button>
        <span style="font-size:12px; color:#64748b;">{"Tip: try moving slowly near the obstacles."}</span>
    </div>}
}
