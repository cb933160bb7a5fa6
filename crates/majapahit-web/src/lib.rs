/// Majapahit LMS sidebar widget
///
/// Leptos-based navigation sidebar shared across the static pages of the
/// Majapahit learning platform. Compiled to WebAssembly, loaded on every
/// page, the widget mounts itself into the `#app-sidebar` container and
/// queries the hosted Supabase backend for session and profile data.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod nav;
pub mod types;
pub mod utils;

use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::api::client::SupabaseClient;
use crate::components::sidebar::Sidebar;
use crate::config::SupabaseConfig;
use crate::nav::DEFAULT_ACTIVE_PAGE;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Host page contract: the sidebar renders only where the container
    // exists. Pages without it are left untouched.
    let Some(container) = document.get_element_by_id("app-sidebar") else {
        logging::warn!("no #app-sidebar container on this page, sidebar not mounted");
        return;
    };
    let Ok(container) = container.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let active_page = document
        .body()
        .and_then(|body| body.get_attribute("data-active-page"))
        .unwrap_or_else(|| DEFAULT_ACTIVE_PAGE.to_string());

    // One client handle for the lifetime of the page, injected through
    // context rather than installed as a global.
    let client = SupabaseClient::new(SupabaseConfig::default());

    mount_to(container, move || {
        provide_context(client);
        view! { <Sidebar active_page=active_page/> }
    });
}
