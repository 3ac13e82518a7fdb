use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod showcase;
mod utils;

use pages::portfolio::Portfolio;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Portfolio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Portfolio => html! { <Portfolio /> },
        Route::NotFound => {
            log::info!("Unknown route, redirecting to portfolio");
            html! { <Redirect<Route> to={Route::Portfolio} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting portfolio frontend");
    yew::Renderer::<App>::new().render();
}
