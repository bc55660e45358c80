use dioxus::prelude::*;
use directory::HttpUserSource;
use shared_types::{DirectoryConfig, MenuModel};

mod components;
mod state;

use components::DashboardShell;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(DirectoryConfig::default);
    use_context_provider(MenuModel::standard);
    let source = use_hook(|| HttpUserSource::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        DashboardShell { source }
    }
}
