use yew::prelude::*;

use crate::model::Phase;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub status: AttrValue,
    pub phase: Phase,
}

#[function_component]
pub fn StatusBar(props: &StatusBarProps) -> Html {
    let accent = match props.phase {
        Phase::Won => "rgba(34,197,94,0.7)",
        Phase::Lost => "rgba(239,68,68,0.7)",
        Phase::Idle | Phase::Drawing => "rgba(148,163,184,0.5)",
    };
    html! {
        <div role="status" aria-live="polite"
            style={format!("margin-bottom:12px; padding:8px 12px; border-radius:999px; font-size:14px; background:rgba(15,23,42,0.9); border:1px solid {};", accent)}>
            { props.status.clone() }
        </div>
    }
}
