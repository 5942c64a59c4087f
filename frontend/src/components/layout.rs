//! 页面外框：导航栏、页脚、后台侧栏

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::route::{AdminSection, AppRoute};
use crate::web::router::{Link, use_router};

const NAV_LINKS: [(AppRoute, &str); 4] = [
    (AppRoute::Home, "Inicio"),
    (AppRoute::Search, "Explorar"),
    (AppRoute::Plans, "Planes"),
    (AppRoute::Contact, "Contacto"),
];

#[component]
fn Brand() -> impl IntoView {
    view! {
        <Link to="/" class="flex items-center gap-2">
            <div class="w-8 h-8 rounded-lg bg-primary flex items-center justify-center">
                <span class="font-bold text-primary-content text-sm">"S"</span>
            </div>
            <span class="font-bold text-xl">"StreamVault"</span>
        </Link>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let links = NAV_LINKS
        .into_iter()
        .map(|(route, label)| {
            let path = route.to_path();
            let active = route.clone();
            view! {
                <li>
                    <Link
                        to=path
                        class=if current.get_untracked() == active { "text-primary" } else { "" }
                    >
                        {label}
                    </Link>
                </li>
            }
        })
        .collect_view();

    let admin_menu = move || {
        auth.is_admin().then(|| {
            let items = AdminSection::ALL
                .iter()
                .map(|section| {
                    view! {
                        <li>
                            <Link to=AppRoute::Admin(*section).to_path()>{section.label()}</Link>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="dropdown dropdown-end">
                    <div tabindex="0" role="button" class="btn btn-ghost btn-sm">"Administración"</div>
                    <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                        {items}
                    </ul>
                </div>
            }
        })
    };

    let account = move || {
        let state = auth.state().get();
        match state.session {
            Some(session) => view! {
                <span class="hidden md:inline text-sm text-base-content/70">{session.name}</span>
                <button class="btn btn-outline btn-error btn-sm" on:click=move |_| auth.logout()>
                    "Cerrar sesión"
                </button>
            }
            .into_any(),
            None => view! {
                <Link to="/login" class="btn btn-outline btn-primary btn-sm">
                    "Iniciar Sesión"
                </Link>
                <Link to="/register" class="btn btn-primary btn-sm">
                    "Registrarse"
                </Link>
            }
            .into_any(),
        }
    };

    view! {
        <nav class="navbar bg-base-100 shadow-md sticky top-0 z-40 px-4 lg:px-8">
            <div class="flex-1">
                <Brand />
            </div>
            <ul class="menu menu-horizontal hidden md:flex gap-2">{links}</ul>
            <div class="flex-none flex items-center gap-2">
                {admin_menu}
                {account}
            </div>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer p-10 bg-base-200 text-base-content border-t border-base-300">
            <aside>
                <Brand />
                <p class="text-sm text-base-content/70">
                    "Tu plataforma de streaming favorita. Películas y series sin límites."
                </p>
            </aside>
            <nav>
                <h6 class="footer-title">"Explorar"</h6>
                <Link to="/search" class="link link-hover">"Películas"</Link>
                <Link to="/search" class="link link-hover">"Series"</Link>
            </nav>
            <nav>
                <h6 class="footer-title">"Cuenta"</h6>
                <Link to="/plans" class="link link-hover">"Planes"</Link>
                <Link to="/login" class="link link-hover">"Iniciar Sesión"</Link>
                <Link to="/register" class="link link-hover">"Registrarse"</Link>
            </nav>
            <nav>
                <h6 class="footer-title">"Soporte"</h6>
                <Link to="/contact" class="link link-hover">"Contáctanos"</Link>
            </nav>
        </footer>
    }
}

/// 公共页面外框
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Navbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}

/// 后台页面外框：左侧为实体菜单
#[component]
pub fn AdminLayout(section: AdminSection, children: Children) -> impl IntoView {
    let menu = AdminSection::ALL
        .iter()
        .map(|item| {
            let class = if *item == section { "active" } else { "" };
            view! {
                <li>
                    <Link to=AppRoute::Admin(*item).to_path() class=class>{item.label()}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Navbar />
            <div class="flex flex-1">
                <aside class="w-60 bg-base-100 border-r border-base-300 hidden lg:block">
                    <ul class="menu p-4 gap-1">
                        <li class="menu-title">"Panel de administración"</li>
                        {menu}
                    </ul>
                </aside>
                <main class="flex-1 p-4 md:p-8">{children()}</main>
            </div>
        </div>
    }
}
