use std::rc::Rc;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate, use_params_map, use_query_map};
use leptos_router::path;
use wasm_bindgen::{JsCast, JsValue};

use sodai_cache::{KeyValueStore, MemoryStore};
use sodai_commerce::prelude::*;
use sodai_commerce::view::MenuLink;
use sodai_core::prelude::*;

/// Backing store for persisted preferences and the cart.
type Store = Rc<dyn KeyValueStore>;

/// The page-wide state signal.
type AppState = RwSignal<Storefront<Store>, LocalStorage>;

#[cfg(target_arch = "wasm32")]
fn open_store() -> Store {
    match sodai_cache::LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable, nothing will persist");
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store() -> Store {
    Rc::new(MemoryStore::new())
}

fn report<T>(result: Result<T, StorefrontError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "storefront action failed");
    }
}

fn notify(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        tracing::warn!(error = ?e, "alert failed");
    }
}

/// Mirror a detail-view transition into browser history.
fn apply_history(effect: HistoryEffect) {
    let history = match window().history() {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!(error = ?e, "history unavailable");
            return;
        }
    };
    let result = match effect {
        HistoryEffect::None => Ok(()),
        HistoryEffect::Push { url } => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryEffect::Back => history.back(),
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, "history update failed");
    }
}

fn replace_address(path: &str) {
    let result = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = result {
        tracing::warn!(error = ?e, "failed to strip query string");
    }
}

/// Root component.
#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_meta_context();

    let origin = window().location().origin().unwrap_or_default();
    let state: AppState = RwSignal::new_local(Storefront::load(open_store(), &config));
    let api = StorefrontApi::new(&config.api, &origin);

    let _ = window_event_listener(ev::popstate, move |_| {
        state.update(|s| {
            s.back_navigated();
        });
    });

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Title text="Sodai"/>

        <Router>
            <Startup state=state api=api.clone()/>
            <Header state=state/>
            <main class="page">
                <Routes fallback>
                    <Route path=path!("") view=move || view! { <HomePage state=state/> }/>
                    <Route path=path!("/category/:id") view=move || view! { <ListingPage state=state/> }/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <CartSidebar state=state/>
            <DetailOverlay state=state/>
            <CheckoutModal state=state api=api/>
            <Footer/>
        </Router>
    }
}

/// Loads the catalog once, then opens the product named by `?open_modal=`
/// whenever the query carries one.
#[component]
fn Startup(state: AppState, api: StorefrontApi) -> impl IntoView {
    let query = use_query_map();
    let location = use_location();
    let catalog_ready = RwSignal::new(false);

    spawn_local(async move {
        let fetched = api.fetch_catalog().await;
        state.update(|s| install_catalog(s, fetched));
        catalog_ready.set(true);
    });

    Effect::new(move |_| {
        let requested = query.with(|q| q.get(OPEN_MODAL_PARAM));
        if !catalog_ready.get() {
            return;
        }
        let Some(effects) = state.try_update(|s| open_requested(s, requested.as_deref())) else {
            return;
        };
        if effects.strip_query {
            replace_address(&location.pathname.get_untracked());
        }
        apply_history(effects.history);
    });
}

/// Site header with menus, search and the cart badge.
#[component]
fn Header(state: AppState) -> impl IntoView {
    let cart_count = move || state.with(|s| s.cart().count());

    view! {
        <header class="header">
            <nav class="nav">
                <a href="/" class="logo">"Sodai"</a>
                <CategoryMenus state=state/>
                <LanguageSwitcher state=state/>
                <button class="cart-toggle" on:click=move |_| state.update(|s| s.toggle_cart())>
                    "🛒 " <span class="cart-count">{cart_count}</span>
                </button>
            </nav>
            <SearchBox state=state/>
        </header>
    }
}

#[component]
fn LanguageSwitcher(state: AppState) -> impl IntoView {
    view! {
        <div class="language-switcher">
            {SUPPORTED_LANGUAGES
                .iter()
                .map(|&language| {
                    let selected = move || state.with(|s| s.language() == language);
                    view! {
                        <button
                            class="lang-btn"
                            class:selected=selected
                            on:click=move |_| state.update(|s| s.set_language(language))
                        >
                            {language.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

type Toggles = RwSignal<MenuToggles>;

fn is_open(toggles: Toggles, key: &str, default: bool) -> bool {
    toggles.with(|t| t.is_open(key, default))
}

fn toggle(toggles: Toggles, key: &str, default: bool) {
    toggles.update(|t| {
        t.toggle(key, default);
    });
}

/// One dropdown per top-level category; the current page's is open.
#[component]
fn CategoryMenus(state: AppState) -> impl IntoView {
    let location = use_location();
    let menus = Memo::new(move |_| {
        let path = location.pathname.get();
        state.with(|s| s.menus(&path))
    });
    let toggles: Toggles = RwSignal::new(MenuToggles::new());

    view! {
        <div class="category-menus">
            {move || {
                menus
                    .get()
                    .into_iter()
                    .map(|menu| {
                        let key = menu.category_id.as_str().to_string();
                        let active = menu.active;
                        let open = {
                            let key = key.clone();
                            move || is_open(toggles, &key, active)
                        };
                        let entries = menu
                            .entries
                            .into_iter()
                            .map(|entry| menu_entry(entry, toggles, &menu.category_id))
                            .collect_view();
                        view! {
                            <div class="dropdown" class:open=open>
                                <button class="dropdown-title" on:click=move |_| toggle(toggles, &key, active)>
                                    {menu.title}
                                </button>
                                <ul class="dropdown-menu">{entries}</ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn menu_entry(entry: MenuEntry, toggles: Toggles, category_id: &CategoryId) -> AnyView {
    match entry {
        MenuEntry::Link(link) => view! { <li>{menu_link(link)}</li> }.into_any(),
        MenuEntry::Group { id, label, links } => {
            let key = MenuToggles::group_key(category_id, &id);
            let expanded = {
                let key = key.clone();
                move || is_open(toggles, &key, false)
            };
            view! {
                <li class="menu-group" class:expanded=expanded>
                    <button class="menu-group-title" on:click=move |_| toggle(toggles, &key, false)>
                        {label}
                    </button>
                    <ul class="submenu">
                        {links.into_iter().map(|link| view! { <li>{menu_link(link)}</li> }).collect_view()}
                    </ul>
                </li>
            }
            .into_any()
        }
    }
}

fn menu_link(link: MenuLink) -> impl IntoView {
    view! { <a href=link.href>{link.label}</a> }
}

/// Search box and its live results panel. A click outside the box hides
/// the panel until the next keystroke.
#[component]
fn SearchBox(state: AppState) -> impl IntoView {
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());
    let container = NodeRef::<html::Div>::new();
    let panel_open = RwSignal::new(false);

    let _ = window_event_listener(ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(container.get_untracked())
            .is_some_and(|(node, search)| search.contains(Some(&node)));
        if !inside {
            panel_open.set(false);
        }
    });

    let on_select = Callback::new(move |(subcategory_id, product_id): (SubcategoryId, ProductId)| {
        let path = location.pathname.get_untracked();
        let clicked = state.try_update(|s| s.search_result_clicked(&path, &subcategory_id, &product_id));
        if let Some((navigation, effect)) = clicked {
            match navigation {
                ResultNavigation::OpenInPlace(_) => apply_history(effect),
                ResultNavigation::Navigate(href) => {
                    navigate.with_value(|navigate| navigate(&href, Default::default()))
                }
            }
        }
    });

    view! {
        <div class="search" node_ref=container>
            <input
                type="search"
                class="search-input"
                prop:value=move || state.with(|s| s.search_text().to_string())
                on:input=move |ev| {
                    panel_open.set(true);
                    state.update(|s| s.set_search(event_target_value(&ev)));
                }
            />
            {move || match state.with(|s| s.search_panel()) {
                SearchPanel::Visible { chips, cards, notice } if panel_open.get() => view! {
                    <div class="search-results">
                        <div class="search-chips">
                            {chips
                                .into_iter()
                                .map(|chip| view! {
                                    <a class="chip" href=chip.href on:click=move |_| state.update(|s| s.clear_search())>
                                        {chip.label}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                        {notice.map(|text| view! { <p class="search-notice">{text}</p> })}
                        <div class="product-grid">
                            {cards
                                .into_iter()
                                .map(|card| {
                                    let target = card
                                        .subcategory_id
                                        .clone()
                                        .map(|sub| (sub, card.id.clone()));
                                    let select = Callback::new(move |_: ()| {
                                        if let Some(target) = target.clone() {
                                            on_select.run(target);
                                        }
                                    });
                                    view! { <CardView state=state card=card on_select=select/> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
                _ => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn HomePage(state: AppState) -> impl IntoView {
    view! {
        <section class="home">
            {move || {
                state.with(|s| {
                    s.catalog()
                        .categories()
                        .iter()
                        .map(|category| {
                            let href = category_path(category.id.as_str());
                            let title = s
                                .resolve(&format!("categories.{}.name", category.id))
                                .unwrap_or_else(|| category.name.get(s.language()).to_string());
                            view! { <a class="category-tile" href=href>{title}</a> }
                        })
                        .collect_view()
                })
            }}
        </section>
    }
}

/// A `/category/:id` page. Unknown ids render `NotFound` once the catalog
/// has arrived.
#[component]
fn ListingPage(state: AppState) -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    move || {
        let id = id();
        match state.with(|s| (s.listing(&id), s.catalog().is_empty())) {
            (Some(listing), _) => view! {
                <section class="listing">
                    <h1>{listing.title}</h1>
                    <div class="product-grid">
                        {listing
                            .cards
                            .into_iter()
                            .map(|card| {
                                let product_id = card.id.clone();
                                let select = Callback::new(move |_: ()| {
                                    if let Some(effect) = state.try_update(|s| s.open_detail(&product_id)) {
                                        apply_history(effect);
                                    }
                                });
                                view! { <CardView state=state card=card on_select=select/> }
                            })
                            .collect_view()}
                    </div>
                </section>
            }
            .into_any(),
            (None, true) => ().into_any(),
            (None, false) => view! { <NotFound/> }.into_any(),
        }
    }
}

fn image_view(image: CardImage, class: &'static str) -> AnyView {
    match image {
        CardImage::Picture { src, alt } => view! { <img class=class src=src alt=alt/> }.into_any(),
        CardImage::Placeholder(initial) => view! {
            <div class=format!("{class} placeholder")>{initial.to_string()}</div>
        }
        .into_any(),
    }
}

/// A product card; clicking it anywhere but the action button selects it.
#[component]
fn CardView(state: AppState, card: ProductCard, on_select: Callback<()>) -> impl IntoView {
    let product_id = card.id.clone();
    let is_profile = card.is_profile();
    let add = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.update(|s| report(s.add_product(&product_id, 1)));
    };

    let body = match card.body {
        CardBody::Profile { rating_caption, rating, experience, expertise, action } => view! {
            <div class="card-body profile">
                <p class="rating">{rating_caption}": "{rating}</p>
                {experience.map(|text| view! { <p class="experience">{text}</p> })}
                {expertise.map(|text| view! { <p class="expertise">{text}</p> })}
                <button class="card-action" on:click=add>{action}</button>
            </div>
        }
        .into_any(),
        CardBody::Standard { sale, rating, reviews, action } => view! {
            <div class="card-body">
                {sale.map(|badge| view! { <span class="sale-badge">{badge}</span> })}
                <p class="rating">"⭐ "{rating}" ("{reviews}")"</p>
                <button class="card-action" on:click=add>{action}</button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="product-card" class:profile=is_profile on:click=move |_| on_select.run(())>
            {image_view(card.image, "card-image")}
            <h3 class="card-name">{card.name}</h3>
            <p class="card-price">{card.price.to_string()}</p>
            {body}
        </div>
    }
}

/// Product detail overlay, shown while the detail view is open.
#[component]
fn DetailOverlay(state: AppState) -> impl IntoView {
    let close = move |_: ev::MouseEvent| {
        if let Some(effect) = state.try_update(|s| s.close_detail()) {
            apply_history(effect);
        }
    };
    let confirm = move |_: ev::MouseEvent| {
        if let Some(effect) = state.try_update(|s| s.confirm_detail()) {
            apply_history(effect);
        }
    };

    move || {
        state.with(|s| s.detail_view()).map(|detail| {
            view! {
                <div class="modal-overlay" on:click=close>
                    <div class="modal product-detail" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <button class="modal-close" on:click=close>"×"</button>
                        {image_view(detail.image, "detail-image")}
                        <p class="brand">{detail.brand}</p>
                        <h2>{detail.name}</h2>
                        {detail.rating.map(|rating| view! {
                            <p class="rating">{rating.stars_text()}" ("{rating.reviews}")"</p>
                        })}
                        <p class="price">
                            {detail.price.to_string()}
                            {detail.discount.map(|discount| view! {
                                <del class="original-price">{discount.original.to_string()}</del>
                                <span class="discount">{discount.percent}"% "{discount.label}</span>
                            })}
                        </p>
                        <p class="description">{detail.description}</p>
                        <p class="delivery">{detail.fulfillment_label}" "{detail.delivery_time}</p>
                        <div class="quantity">
                            <button on:click=move |_| state.update(|s| {
                                s.adjust_detail_quantity(-1);
                            })>"-"</button>
                            <span>{detail.quantity}</span>
                            <button on:click=move |_| state.update(|s| {
                                s.adjust_detail_quantity(1);
                            })>"+"</button>
                        </div>
                        <p class="line-total">{detail.line_total.to_string()}</p>
                        <button class="detail-action" on:click=confirm>{detail.action}</button>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn CartSidebar(state: AppState) -> impl IntoView {
    let checkout = move |_: ev::MouseEvent| {
        if let Some(Err(_)) = state.try_update(|s| s.open_checkout()) {
            notify(state.with(|s| s.empty_cart_notice()));
        }
    };

    view! {
        <aside class="cart-sidebar" class:open=move || state.with(|s| s.is_cart_open())>
            <button class="cart-close" on:click=move |_| state.update(|s| s.toggle_cart())>"×"</button>
            {move || {
                let panel = state.with(|s| s.cart_panel());
                view! {
                    <ul class="cart-items">
                        {panel
                            .lines
                            .into_iter()
                            .map(|line| {
                                let id = line.id.clone();
                                view! {
                                    <li class="cart-item">
                                        <span class="cart-item-name">{line.name}</span>
                                        <span class="cart-item-price">{line.price_label}</span>
                                        <button
                                            class="cart-remove"
                                            on:click=move |_| state.update(|s| {
                                                s.remove_from_cart(&id);
                                            })
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="cart-total">{panel.total.to_string()}</p>
                }
            }}
            <button class="checkout-btn" on:click=checkout>"Checkout"</button>
        </aside>
    }
}

/// Checkout form. Submission runs in the background; the button stays
/// disabled until the reply arrives.
#[component]
fn CheckoutModal(state: AppState, api: StorefrontApi) -> impl IntoView {
    let api = StoredValue::new_local(api);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match state.try_update(|s| s.begin_order()) {
            Some(Ok(request)) => request,
            Some(Err(StorefrontError::Commerce(CommerceError::SubmissionInFlight))) | None => return,
            Some(Err(e)) => {
                notify(&e.to_string());
                return;
            }
        };
        let api = api.get_value();
        spawn_local(async move {
            let outcome = api.submit_order(&request).await;
            if let Some(notice) = state.try_update(|s| s.finish_order(&outcome)) {
                notify(&notice);
            }
        });
    };

    let field = move |name: &'static str, read: fn(&CheckoutForm) -> &String, write: fn(&mut CheckoutForm) -> &mut String| {
        view! {
            <input
                name=name
                placeholder=name
                prop:value=move || state.with(|s| read(s.form()).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| *write(s.form_mut()) = value);
                }
            />
        }
    };

    move || {
        state.with(|s| s.is_checkout_open()).then(|| {
            let button = state.with(|s| s.submit_button());
            view! {
                <div class="modal-overlay" on:click=move |_| state.update(|s| s.close_checkout())>
                    <form
                        class="modal checkout-form"
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                        on:submit=submit
                    >
                        <button type="button" class="modal-close" on:click=move |_| state.update(|s| s.close_checkout())>
                            "×"
                        </button>
                        {field("name", |f| &f.name, |f| &mut f.name)}
                        {field("phone", |f| &f.phone, |f| &mut f.phone)}
                        {field("email", |f| &f.email, |f| &mut f.email)}
                        {field("address", |f| &f.address, |f| &mut f.address)}
                        <textarea
                            name="message"
                            prop:value=move || state.with(|s| s.form().message.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.form_mut().message = value);
                            }
                        ></textarea>
                        <button type="submit" class="submit-btn" disabled=button.disabled>
                            {button.label}
                        </button>
                    </form>
                </div>
            }
        })
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© Sodai"</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go Home"</a>
        </div>
    }
}
