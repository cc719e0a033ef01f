use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::BoardConfig;
use crate::model::{GameAction, GameState};
use crate::render;
use crate::state::{board_point, mouse_client_point, touch_client_point, CanvasSurface};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
}

/// Backing-store size in device pixels for a board drawn at `dpr`.
fn backing_size(cfg: &BoardConfig, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (
        (cfg.width * dpr).round().max(1.0) as u32,
        (cfg.height * dpr).round().max(1.0) as u32,
    )
}

/// Keeps the backing store at board size x devicePixelRatio. Returns the ratio used.
fn sync_canvas_size(canvas: &HtmlCanvasElement, cfg: &BoardConfig) -> f64 {
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0);
    let (target_w, target_h) = backing_size(cfg, dpr);
    if canvas.width() != target_w {
        canvas.set_width(target_w);
    }
    if canvas.height() != target_h {
        canvas.set_height(target_h);
    }
    dpr
}

fn redraw(canvas: &HtmlCanvasElement, game: &GameState) {
    let dpr = sync_canvas_size(canvas, &game.config);
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
    if let Some(ctx) = ctx {
        render::draw(&ctx, game, dpr);
    }
}

fn attach_pointer_listeners(
    canvas: &HtmlCanvasElement,
    surface: CanvasSurface,
    dispatcher: UseReducerDispatcher<GameState>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(8);

    // Mouse
    {
        let surface = surface.clone();
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new(canvas, "mousedown", move |event: &Event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else { return };
            e.prevent_default();
            if let Some(p) = board_point(&surface, Some(mouse_client_point(e))) {
                dispatcher.dispatch(GameAction::Press(p));
            }
        }));
    }
    {
        let surface = surface.clone();
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new(canvas, "mousemove", move |event: &Event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else { return };
            if let Some(p) = board_point(&surface, Some(mouse_client_point(e))) {
                dispatcher.dispatch(GameAction::Move(p));
            }
        }));
    }

    // Touch: non-passive so the page doesn't scroll while drawing.
    {
        let surface = surface.clone();
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new_with_options(
            canvas,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(e) = event.dyn_ref::<TouchEvent>() else { return };
                e.prevent_default();
                if let Some(p) = board_point(&surface, touch_client_point(e)) {
                    dispatcher.dispatch(GameAction::Press(p));
                }
            },
        ));
    }
    {
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new_with_options(
            canvas,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(e) = event.dyn_ref::<TouchEvent>() else { return };
                e.prevent_default();
                if let Some(p) = board_point(&surface, touch_client_point(e)) {
                    dispatcher.dispatch(GameAction::Move(p));
                }
            },
        ));
    }

    // Release / leave
    for kind in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new(canvas, kind, move |_event: &Event| {
            dispatcher.dispatch(GameAction::Release);
        }));
    }

    listeners
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let cfg = props.game.config.clone();
    let game_ref = use_mut_ref(|| props.game.clone());

    // Mount: bind pointer input. Dropping the listeners on unmount detaches them.
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.game.dispatcher();
        let cfg = cfg.clone();
        use_effect_with((), move |_| {
            let listeners = canvas_ref.cast::<HtmlCanvasElement>().map(|canvas| {
                let surface = CanvasSurface::new(canvas.clone().into(), cfg.width, cfg.height);
                attach_pointer_listeners(&canvas, surface, dispatcher)
            });
            move || drop(listeners)
        });
    }

    // Browser zoom / monitor changes alter devicePixelRatio without a state transition.
    {
        let canvas_ref = canvas_ref.clone();
        let game_ref = game_ref.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_event: &Event| {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        let game = game_ref.borrow().clone();
                        redraw(&canvas, &game);
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Refresh the latest handle and redraw whenever the state accepts a transition.
    {
        let canvas_ref = canvas_ref.clone();
        let game_ref = game_ref.clone();
        let game = props.game.clone();
        use_effect_with(props.game.version, move |_| {
            *game_ref.borrow_mut() = game.clone();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                redraw(&canvas, &game);
            }
            || ()
        });
    }

    let style = format!(
        "display:block; width:{}px; max-width:100%; aspect-ratio:{} / {}; touch-action:none; cursor:crosshair;",
        cfg.width, cfg.width, cfg.height
    );
    html! {
        <div style="border-radius:12px; overflow:hidden; border:1px solid rgba(148,163,184,0.5); background:#020617;">
            <canvas ref={canvas_ref} id="board-canvas" style={style}></canvas>
        </div>
    }
}
