mod components;
mod config;
mod geometry;
mod model;
mod render;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
