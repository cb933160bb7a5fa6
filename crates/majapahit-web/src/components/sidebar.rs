/// Sidebar navigation component
///
/// Renders the role-dependent navigation panel and wires up the account
/// menu, sign-out, and link-press feedback.

use leptos::ev;
use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::client::SupabaseClient;
use crate::api::profiles::fetch_profile;
use crate::auth;
use crate::nav::{next_menu_state, AccountSection, MenuTarget, NavItem, NavView};
use crate::types::{Profile, SessionSnapshot};
use crate::utils::paths::BasePath;

/// Hook to the backend client handle provided at mount.
pub fn use_supabase() -> SupabaseClient {
    use_context::<SupabaseClient>().expect("SupabaseClient must be provided at mount")
}

#[component]
pub fn Sidebar(#[prop(into)] active_page: String) -> impl IntoView {
    let client = use_supabase();

    // Session read plus profile lookup, awaited in order. Any failure
    // degrades to the signed-out or hint-only view; nothing is surfaced.
    let snapshot = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { load_snapshot(&client).await }
        },
    );

    view! {
        {move || {
            snapshot.get().map(|(session, profile)| {
                let path = current_path();
                let nav = NavView::compose(&path, &active_page, session.as_ref(), profile.as_ref());
                view! { <SidebarView nav=nav session=session/> }
            })
        }}
    }
}

async fn load_snapshot(client: &SupabaseClient) -> (Option<SessionSnapshot>, Option<Profile>) {
    let Some(session) = auth::stored_session(client.config()) else {
        return (None, None);
    };

    let profile = match fetch_profile(client, &session.user.id, &session.access_token).await {
        Ok(profile) => profile,
        Err(e) => {
            logging::warn!("profile lookup failed, using session role hint: {}", e);
            None
        }
    };

    (Some(session), profile)
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
fn SidebarView(nav: NavView, session: Option<SessionSnapshot>) -> impl IntoView {
    let base = nav.base;

    let account = match (nav.account, session) {
        (
            AccountSection::SignedIn {
                initial,
                display_name,
            },
            Some(session),
        ) => view! {
            <UserMenu initial=initial display_name=display_name base=base session=session/>
        }
        .into_view(),
        _ => view! { <LoginCta base=base/> }.into_view(),
    };

    view! {
        <aside class="w-[260px] bg-[#FAF9F8] border-r border-[#EDEBE9] flex flex-col pt-6 pb-4 shrink-0">
            <div class="px-6 mb-8">
                <a href=base.join("index.html") class="flex items-center gap-3 group">
                    <img
                        src=base.join("assets/images/logo.png")
                        alt="Logo"
                        class="w-8 h-8 object-contain transition-transform group-hover:scale-110"
                    />
                    <span class="text-sm font-bold text-[#323130] leading-tight group-hover:text-[#0078D4] transition-colors">
                        "Pesantren Teknologi Majapahit"
                    </span>
                </a>
            </div>

            <div class="flex-1 overflow-y-auto px-3 space-y-1">
                <div class="px-3 mb-2 text-caption font-semibold text-[#8A8886] uppercase tracking-wide">
                    "Navigate"
                </div>
                {nav.items
                    .into_iter()
                    .map(|item| {
                        let divider = item
                            .divider_before
                            .then(|| view! { <div class="h-px bg-[#EDEBE9] my-2"></div> });
                        view! {
                            {divider}
                            <NavLink item=item/>
                        }
                    })
                    .collect_view()}
            </div>

            {account}
        </aside>
    }
}

/// A single navigation entry with a short press pulse on activation.
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let (pressed, set_pressed) = create_signal(false);

    let on_click = move |_| {
        set_pressed.set(true);
        gloo_timers::callback::Timeout::new(100, move || set_pressed.set(false)).forget();
    };

    view! {
        <a
            href=item.href
            class="sidebar-link"
            class:active=item.active
            class=("scale-95", move || pressed.get())
            on:click=on_click
        >
            <ion-icon name=item.icon></ion-icon>
            " "
            {item.label}
        </a>
    }
}

#[component]
fn UserMenu(
    initial: char,
    display_name: String,
    base: BasePath,
    session: SessionSnapshot,
) -> impl IntoView {
    let client = use_supabase();
    let (show_menu, set_show_menu) = create_signal(false);

    let trigger_ref = create_node_ref::<Div>();
    let menu_ref = create_node_ref::<Div>();

    // One document-scope listener drives the menu: the trigger toggles it
    // and any click outside both the trigger and the panel dismisses it.
    // Installed for the rest of the page.
    let _dismiss_listener = window_event_listener(ev::click, move |ev| {
        let target = classify_click(&ev, trigger_ref, menu_ref);
        set_show_menu.update(|open| *open = next_menu_state(*open, target));
    });

    let on_sign_out = move |_| {
        let client = client.clone();
        let session = session.clone();
        spawn_local(async move {
            auth::sign_out(&client, &session).await;
            redirect_to(&base.join("index.html"));
        });
    };

    view! {
        <div class="px-3 pt-4 border-t border-[#EDEBE9]">
            <div class="relative">
                <div
                    node_ref=trigger_ref
                    class="flex items-center gap-3 p-2 rounded-md hover:bg-[#F3F2F1] cursor-pointer transition-colors"
                >
                    <div class="w-8 h-8 rounded-full bg-[#0078D4] flex items-center justify-center text-white text-xs font-bold">
                        {initial.to_string()}
                    </div>
                    <div class="flex-1 min-w-0">
                        <div class="text-caption font-semibold truncate">{display_name}</div>
                        <div class="text-caption text-[#8A8886]">"Account"</div>
                    </div>
                    <ion-icon name="chevron-up" class="text-[#8A8886]"></ion-icon>
                </div>

                <div
                    node_ref=menu_ref
                    class="absolute bottom-full left-0 w-full mb-2 p-2 bg-white rounded-lg shadow-xl border border-[#EDEBE9] z-50"
                    class:hidden=move || !show_menu.get()
                >
                    <a
                        href=base.join("settings/index.html")
                        class="block px-3 py-2 text-body rounded-md hover:bg-[#F3F2F1] transition-colors"
                    >
                        <ion-icon name="settings-outline" class="mr-2"></ion-icon>
                        " Pengaturan"
                    </a>
                    <div class="h-px bg-[#EDEBE9] my-2"></div>
                    <button
                        on:click=on_sign_out
                        class="w-full text-left px-3 py-2 text-body rounded-md hover:bg-[#F3F2F1] transition-colors text-red-600"
                    >
                        <ion-icon name="log-out-outline" class="mr-2"></ion-icon>
                        " Keluar"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoginCta(base: BasePath) -> impl IntoView {
    view! {
        <div class="px-3 pt-4 border-t border-[#EDEBE9]">
            <a href=base.join("auth/login.html") class="btn-fluent btn-primary-fluent w-full">
                "Masuk"
            </a>
        </div>
    }
}

fn classify_click(ev: &web_sys::MouseEvent, trigger: NodeRef<Div>, menu: NodeRef<Div>) -> MenuTarget {
    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let Some(target) = target else {
        return MenuTarget::Outside;
    };

    if ref_contains(trigger, &target) {
        MenuTarget::Trigger
    } else if ref_contains(menu, &target) {
        MenuTarget::InsideMenu
    } else {
        MenuTarget::Outside
    }
}

fn ref_contains(node_ref: NodeRef<Div>, target: &web_sys::Node) -> bool {
    node_ref
        .get_untracked()
        .map(|el| el.contains(Some(target)))
        .unwrap_or(false)
}

fn redirect_to(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            logging::error!("navigation after sign-out failed: {:?}", e);
        }
    }
}
