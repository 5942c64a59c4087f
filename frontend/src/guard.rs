//! 路由守卫
//!
//! 判定逻辑是纯函数 [`evaluate`]，组件 [`Guard`] 只负责把判定结果落到视图与路由上。
//! 会话处于 `Loading` 时只渲染占位内容，既不渲染受保护页面也不重定向。

use leptos::prelude::*;

use crate::auth::{Phase, SessionState, use_auth};
use crate::web::route::{AppRoute, RouteAccess};
use crate::web::router::use_router;

/// 守卫策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// 需要登录
    Authenticated,
    /// 需要登录且为管理员
    Admin,
}

impl GuardPolicy {
    pub fn for_route(route: &AppRoute) -> Option<Self> {
        match route.access() {
            RouteAccess::Public => None,
            RouteAccess::Authenticated => Some(Self::Authenticated),
            RouteAccess::Admin => Some(Self::Admin),
        }
    }
}

/// 一次判定的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 会话尚未就绪
    Pending,
    Permitted,
    /// 未登录：记住原地址后跳转登录页
    RedirectToLogin,
    /// 已登录但不是管理员：静默回到首页
    RedirectHome,
}

pub fn evaluate(policy: GuardPolicy, state: &SessionState) -> GuardOutcome {
    if state.phase == Phase::Loading {
        return GuardOutcome::Pending;
    }
    if !state.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    match policy {
        GuardPolicy::Authenticated => GuardOutcome::Permitted,
        GuardPolicy::Admin if state.is_admin() => GuardOutcome::Permitted,
        GuardPolicy::Admin => GuardOutcome::RedirectHome,
    }
}

/// 随会话变化重新判定的结果
pub fn watch(policy: GuardPolicy, state: ReadSignal<SessionState>) -> Memo<GuardOutcome> {
    Memo::new(move |_| state.with(|s| evaluate(policy, s)))
}

/// 守卫组件
///
/// 每次会话变化都会重新判定；重定向使用 replaceState。
#[component]
pub fn Guard(
    policy: GuardPolicy,
    /// 被保护的路由，用于登录后返回
    route: AppRoute,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let outcome = watch(policy, auth.state());

    Effect::new(move |_| match outcome.get() {
        GuardOutcome::RedirectToLogin => router.redirect_to_login(&route),
        GuardOutcome::RedirectHome => {
            log::info!("{} requires an admin role, redirecting home", route);
            router.replace(&AppRoute::Home.to_path());
        }
        GuardOutcome::Pending | GuardOutcome::Permitted => {}
    });

    move || match outcome.get() {
        GuardOutcome::Permitted => children().into_any(),
        GuardOutcome::Pending => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="ml-3 text-base-content/70">"Cargando..."</span>
            </div>
        }
        .into_any(),
        GuardOutcome::RedirectToLogin | GuardOutcome::RedirectHome => ().into_any(),
    }
}
