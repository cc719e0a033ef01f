use super::{board_view::BoardView, controls_panel::ControlsPanel, status_bar::StatusBar};
use crate::config::BoardConfig;
use crate::model::{GameAction, GameState};
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| {
        let cfg = BoardConfig::from_document();
        clog(&format!(
            "board {}x{} with {} obstacles",
            cfg.width,
            cfg.height,
            cfg.obstacles.len()
        ));
        GameState::new(cfg)
    });

    let reset = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::Reset))
    };

    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#0f172a; color:#e5e7eb; font-family:system-ui, -apple-system, BlinkMacSystemFont, sans-serif; padding:16px; box-sizing:border-box;">
            <div style="background:#020617; padding:20px; border-radius:16px; box-shadow:0 20px 40px rgba(0,0,0,0.5); border:1px solid rgba(148,163,184,0.4); max-width:760px; width:100%; box-sizing:border-box;">
                <h1 style="font-size:24px; margin:0 0 4px 0;">{"A → B Path Game"}</h1>
                <p style="margin:0 0 12px 0; font-size:14px; color:#94a3b8;">
                    {"Hold the mouse down inside A, draw a path to B, and don't touch the red blocks."}
                </p>
                <StatusBar status={AttrValue::from(game.status.clone())} phase={game.phase} />
                <BoardView game={game.clone()} />
                <ControlsPanel on_reset={reset} />
            </div>
        </div>
    }
}
