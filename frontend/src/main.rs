use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod portfolio;
mod services;
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod portfolio;
    pub mod contact;
}
mod components {
    pub mod footer;
}

use pages::{
    home::Home,
    about::About,
    services::{AerialMarketing, Inspections, Services},
    portfolio::Portfolio,
    contact::Contact,
};
use components::footer::Footer;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/aerial-marketing")]
    AerialMarketing,
    #[at("/services/inspections")]
    Inspections,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::AerialMarketing => {
            info!("Rendering Aerial Marketing page");
            html! { <AerialMarketing /> }
        },
        Route::Inspections => {
            info!("Rendering Inspections page");
            html! { <Inspections /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let service_links = services::detail_pages()
        .map(|service| html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={service.route()} classes="nav-sublink">
                    {service.title}
                </Link<Route>>
            </div>
        })
        .collect::<Html>();

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"JSSKYLINE"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle mobile menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div class="nav-dropdown">
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Services} classes="nav-link">
                                {"Services"}
                            </Link<Route>>
                        </div>
                        <div class="nav-dropdown__menu">
                            {service_links}
                        </div>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">
                            {"Portfolio"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="btn-primary">
                            {"Get Quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
