//! Sodai storefront
//!
//! Client-side rendered Leptos app over the `sodai-core` state object:
//! - Bilingual catalog menus, listing pages and live search
//! - Product detail overlay mirrored in browser history
//! - Cart sidebar persisted to `localStorage`
//! - Checkout form posting to the order endpoint

mod app;

use sodai_core::StorefrontConfig;

const CONFIG: &str = include_str!("../storefront.toml");

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = StorefrontConfig::from_toml(CONFIG).unwrap_or_else(|e| {
        leptos::logging::error!("invalid storefront.toml, using defaults: {}", e);
        StorefrontConfig::default()
    });
    if let Err(e) = sodai_observability::init(&config.logging) {
        leptos::logging::error!("logging unavailable: {}", e);
    }

    leptos::mount::mount_to_body(move || {
        use leptos::prelude::*;
        view! { <app::App config=config/> }
    });
}
