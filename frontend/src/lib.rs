//! StreamVault 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 浏览器 API 封装与路由（唯一触碰 `window` 的层）
//! - `api`: 带认证的 REST 客户端
//! - `auth` / `guard`: 会话状态与路由守卫
//! - `crud` / `resources`: 通用实体管理与 11 种后台实体
//! - `catalog`: 目录搜索与详情
//! - `components`: UI 组件层

mod api;
mod auth;
mod cast;
mod catalog;
mod components {
    pub mod cast_panel;
    pub mod contact;
    pub mod crud_page;
    pub mod fields;
    pub mod forgot_password;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod modal;
    pub mod movie_card;
    pub mod movie_detail;
    pub mod not_found;
    pub mod plans;
    pub mod register;
    pub mod search;
    pub mod toast;
}
mod config;
mod crud;
mod forms;
mod guard;
mod images;
#[cfg(test)]
mod mock;
mod notify;
mod request;
mod resources;
mod validation;
pub(crate) mod web;

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::contact::ContactPage;
use crate::components::crud_page::crud_page;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::home::HomePage;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::movie_detail::MovieDetailPage;
use crate::components::not_found::NotFoundPage;
use crate::components::plans::PlansPage;
use crate::components::register::RegisterPage;
use crate::components::search::SearchPage;
use crate::components::toast::ToastHost;
use crate::config::AppConfig;
use crate::guard::{Guard, GuardPolicy};
use crate::notify::Toaster;
use crate::resources::{
    actors::Actors, cities::Cities, content::Contents, customers::Customers,
    departments::Departments, directors::Directors, document_types::DocumentTypes,
    genres::Genres, memberships::Memberships, sexes::Sexes, users::Users,
};
use crate::web::route::{AdminSection, AppRoute};
use crate::web::router::{Router, RouterOutlet};
use crate::web::{BrowserStorage, FetchTransport};

pub use crate::web::init_logging;

fn admin_page(section: AdminSection) -> AnyView {
    match section {
        AdminSection::Departments => crud_page::<Departments>(),
        AdminSection::Cities => crud_page::<Cities>(),
        AdminSection::Genres => crud_page::<Genres>(),
        AdminSection::Sexes => crud_page::<Sexes>(),
        AdminSection::DocumentTypes => crud_page::<DocumentTypes>(),
        AdminSection::Actors => crud_page::<Actors>(),
        AdminSection::Directors => crud_page::<Directors>(),
        AdminSection::Memberships => crud_page::<Memberships>(),
        AdminSection::Content => crud_page::<Contents>(),
        AdminSection::Users => crud_page::<Users>(),
        AdminSection::Customers => crud_page::<Customers>(),
    }
}

/// 路由对应的页面（不含守卫）
fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Plans => view! { <PlansPage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::MovieDetail(id) => view! { <MovieDetailPage id=id /> }.into_any(),
        AppRoute::Admin(section) => view! {
            <AdminLayout section=section>{admin_page(section)}</AdminLayout>
        }
        .into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；受保护的路由包在 [`Guard`] 中。
fn route_matcher(route: AppRoute) -> AnyView {
    match GuardPolicy::for_route(&route) {
        None => page(route),
        Some(policy) => {
            let target = route.clone();
            view! {
                <Guard policy=policy route=route>
                    {page(target.clone())}
                </Guard>
            }
            .into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与 REST 客户端
    let config = AppConfig::from_env();
    let client = ApiClient::new(
        &config.api_base_url,
        Arc::new(FetchTransport),
        Arc::new(BrowserStorage),
    );
    provide_context(config);
    provide_context(client.clone());

    // 2. 通知
    let toaster = Toaster::new();
    provide_context(toaster);

    // 3. 认证上下文：从持久化存储恢复会话
    let auth_ctx = AuthContext::new(client, toaster);
    provide_context(auth_ctx);
    auth_ctx.initialize();

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}
