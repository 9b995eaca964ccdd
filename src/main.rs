mod app;
mod drag;
mod export;
mod ingest;
mod storage;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
