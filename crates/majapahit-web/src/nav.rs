/// Navigation view model
///
/// Pure composition of the sidebar contents from the current location, the
/// active-page hint, and whatever session/profile data the backend returned.
/// Rendering and event wiring live in `components::sidebar`; everything here
/// is DOM-free.

use crate::types::{Profile, Role, SessionSnapshot};
use crate::utils::paths::{resolve_base_path, BasePath};

/// Active-page sentinel used when the host page supplies no hint.
pub const DEFAULT_ACTIVE_PAGE: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub active: bool,
    pub divider_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSection {
    SignedIn { initial: char, display_name: String },
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub base: BasePath,
    pub role: Role,
    pub items: Vec<NavItem>,
    pub account: AccountSection,
}

impl NavView {
    /// Compose the sidebar model for one render.
    ///
    /// Never fails: missing or unusable session/profile data degrades to
    /// the signed-out, student-level view.
    pub fn compose(
        path: &str,
        active_page: &str,
        session: Option<&SessionSnapshot>,
        profile: Option<&Profile>,
    ) -> NavView {
        let role = resolve_role(session, profile);
        let base = resolve_base_path(path);
        let ctx = ItemContext {
            path,
            active_page,
            base,
        };

        let home_target = format!("dashboard/{}/index.html", role.as_str());
        let home_active = path.contains("dashboard") && active_page == DEFAULT_ACTIVE_PAGE;
        let mut items = vec![ctx.item("Home", "home-outline", &home_target, home_active, false)];
        items.extend(role.contributed_items(&ctx));

        NavView {
            base,
            role,
            items,
            account: account_section(session, profile),
        }
    }
}

/// Effective role for this render.
///
/// The authoritative profile wins; the metadata hint on the session token
/// is the fallback; everything else is a student.
pub fn resolve_role(session: Option<&SessionSnapshot>, profile: Option<&Profile>) -> Role {
    if let Some(profile) = profile {
        return profile.role;
    }
    session.and_then(SessionSnapshot::role_hint).unwrap_or_default()
}

/// Per-role link contributions beyond the shared Home entry.
///
/// Keyed on the closed role set so a future role only needs a new match arm.
impl Role {
    fn contributed_items(self, ctx: &ItemContext<'_>) -> Vec<NavItem> {
        match self {
            Role::Instructor => vec![ctx.item(
                "Buat Kelas",
                "add-circle-outline",
                "course/create.html",
                ctx.matches("create", "create-course"),
                true,
            )],
            Role::Student | Role::Admin => vec![
                ctx.item(
                    "Jelajahi",
                    "compass-outline",
                    "course/catalog.html",
                    ctx.matches("catalog", "discover"),
                    false,
                ),
                ctx.item(
                    "Kelas Saya",
                    "library-outline",
                    "course/my_courses.html",
                    ctx.matches("my_courses", "my-courses"),
                    false,
                ),
                ctx.item(
                    "Raport Belajar",
                    "ribbon-outline",
                    "report/index.html",
                    ctx.matches("report", "report"),
                    false,
                ),
            ],
        }
    }
}

struct ItemContext<'a> {
    path: &'a str,
    active_page: &'a str,
    base: BasePath,
}

impl ItemContext<'_> {
    fn item(
        &self,
        label: &'static str,
        icon: &'static str,
        target: &str,
        active: bool,
        divider_before: bool,
    ) -> NavItem {
        NavItem {
            label,
            icon,
            href: self.base.join(target),
            active,
            divider_before,
        }
    }

    /// An item is highlighted when the location mentions its keyword or the
    /// host page forces it through the active-page hint.
    fn matches(&self, keyword: &str, hint: &str) -> bool {
        self.path.contains(keyword) || self.active_page == hint
    }
}

fn account_section(
    session: Option<&SessionSnapshot>,
    profile: Option<&Profile>,
) -> AccountSection {
    let Some(session) = session else {
        return AccountSection::SignedOut;
    };

    let full_name = profile
        .and_then(|p| p.full_name.as_deref())
        .filter(|name| !name.is_empty());

    let display_name = full_name.map(str::to_owned).unwrap_or_else(|| {
        session
            .user
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string()
    });

    let initial = full_name
        .and_then(|name| name.chars().next())
        .or_else(|| session.user.email.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?');

    AccountSection::SignedIn {
        initial,
        display_name,
    }
}

/// What an account-menu click landed on, as seen by the document-level
/// listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Trigger,
    InsideMenu,
    Outside,
}

/// Menu visibility transition: the trigger toggles, clicks inside the panel
/// keep it open, anything else closes it.
pub fn next_menu_state(open: bool, target: MenuTarget) -> bool {
    match target {
        MenuTarget::Trigger => !open,
        MenuTarget::InsideMenu => open,
        MenuTarget::Outside => false,
    }
}
