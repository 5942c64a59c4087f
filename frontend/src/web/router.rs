//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history / window.location 的操作都集中在此模块。
//! 访问控制不在这里判断，由 `guard::Guard` 在渲染时完成。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 当前地址栏中的路径与查询串，如 `/search?q=x`
fn current_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{path}{search}"))
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 整页跳转，丢弃所有内存状态
pub fn hard_navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("hard navigation to {} failed: {:?}", path, e);
    }
}

/// 被守卫拦截的原始地址，登录成功后取出一次
#[derive(Clone, Copy)]
pub struct ReturnTarget(RwSignal<Option<String>>);

impl ReturnTarget {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn remember(&self, location: String) {
        self.0.set(Some(location));
    }

    /// 取出并清空；没有记录时返回首页
    pub fn take(&self) -> String {
        self.0
            .try_update(Option::take)
            .flatten()
            .unwrap_or_else(|| AppRoute::Home.to_path())
    }
}

impl Default for ReturnTarget {
    fn default() -> Self {
        Self::new()
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    return_to: ReturnTarget,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            return_to: ReturnTarget::new(),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定路径（pushState）
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        log::debug!("navigate {} -> {}", self.current_route.get_untracked(), target);
        push_history_state(path);
        self.set_route.set(target);
    }

    /// 重定向（replaceState，不留下历史记录）
    pub fn replace(&self, path: &str) {
        let target = AppRoute::from_path(path);
        replace_history_state(path);
        self.set_route.set(target);
    }

    /// 记住被拦截的地址（含查询串）并跳转到登录页
    pub fn redirect_to_login(&self, from: &AppRoute) {
        log::info!("access to {} requires a session, redirecting to login", from);
        let location = current_location()
            .filter(|loc| AppRoute::from_path(loc) == *from)
            .unwrap_or_else(|| from.to_path());
        self.return_to.remember(location);
        self.replace(&AppRoute::Login.to_path());
    }

    /// 取出登录后的返回地址，缺省为首页
    pub fn take_return_target(&self) -> String {
        self.return_to.take()
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// 只负责重新解析路由，守卫会在渲染时重新判定。
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            log::debug!("popstate -> {}", target);
            set_route.set(target);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，走 History API 而非整页刷新
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_target_defaults_home_and_is_taken_once() {
        let target = ReturnTarget::new();
        assert_eq!(target.take(), "/");

        target.remember("/search?q=casa".to_string());
        assert_eq!(target.take(), "/search?q=casa");
        assert_eq!(target.take(), "/");
    }
}
