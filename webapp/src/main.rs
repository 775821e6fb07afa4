#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

mod common;
use common::config::{AppConfig, read_config};
use common::session::Backend;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod portfolio;
use portfolio::{Portfolio, PortfolioDetail, PortfolioSearch};

mod account;
use account::{Account, Login, ResetPassword, Signup};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[nest("/portfolio")]
            #[layout(Portfolio)]
                #[route("/")]
                PortfolioSearch {},
                #[route("/:item_id")]
                PortfolioDetail { item_id: String },
            #[end_layout]
        #[end_nest]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/reset-password")]
        ResetPassword {},
        #[route("/account")]
        Account {},
}

#[derive(Clone, PartialEq, Props)]
struct ConfigErrorProps {
    message: String,
}

#[component]
fn ConfigError(props: ConfigErrorProps) -> Element {
    rsx! {
        div { class: "config-error", role: "alert",
            h1 { "Stylehaus could not start" }
            p { "The embedded configuration is invalid:" }
            pre { "{props.message}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ShellProps {
    config: AppConfig,
}

// everything below here can assume a config and a connected backend
#[component]
fn Shell(props: ShellProps) -> Element {
    let config = props.config;

    use_context_provider(|| config.clone());
    use_context_provider(|| Backend::connect(&config));

    rsx! {
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        read_config().map_err(|err| {
            error!("failed to read config: {err:#}");
            format!("{err:#}")
        })
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        match config {
            Ok(config) => rsx! {
                Shell { config }
            },
            Err(message) => rsx! {
                ConfigError { message }
            },
        }
    }
}
