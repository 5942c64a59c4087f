//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其访问级别。

use std::fmt::Display;

/// 后台管理的实体页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Departments,
    Cities,
    Genres,
    Sexes,
    DocumentTypes,
    Actors,
    Directors,
    Memberships,
    Content,
    Users,
    Customers,
}

impl AdminSection {
    pub const ALL: [Self; 11] = [
        Self::Departments,
        Self::Cities,
        Self::Genres,
        Self::Sexes,
        Self::DocumentTypes,
        Self::Actors,
        Self::Directors,
        Self::Memberships,
        Self::Content,
        Self::Users,
        Self::Customers,
    ];

    /// `/admin/` 之后的路径片段
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Departments => "departments",
            Self::Cities => "cities",
            Self::Genres => "genres",
            Self::Sexes => "sex",
            Self::DocumentTypes => "doctypes",
            Self::Actors => "actors",
            Self::Directors => "directors",
            Self::Memberships => "memberships",
            Self::Content => "content",
            Self::Users => "users",
            Self::Customers => "customers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// 导航菜单中的名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Departments => "Departamentos",
            Self::Cities => "Ciudades",
            Self::Genres => "Géneros",
            Self::Sexes => "Sexos",
            Self::DocumentTypes => "Tipos de documento",
            Self::Actors => "Actores",
            Self::Directors => "Directores",
            Self::Memberships => "Membresías",
            Self::Content => "Contenido",
            Self::Users => "Usuarios",
            Self::Customers => "Clientes",
        }
    }
}

/// 路由的访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// 需要登录
    Authenticated,
    /// 需要登录且角色含管理员标记
    Admin,
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    ForgotPassword,
    Contact,
    Plans,
    /// 目录搜索 (需要认证)
    Search,
    /// 内容详情，携带原始 id 片段；未知 id 由页面自行处理
    MovieDetail(String),
    /// 后台实体页面 (需要管理员)
    Admin(AdminSection),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串、片段与末尾斜杠。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/contact" => Self::Contact,
            "/plans" => Self::Plans,
            "/search" => Self::Search,
            _ => {
                if let Some(id) = path.strip_prefix("/movie/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::MovieDetail(id.to_string());
                    }
                }
                path.strip_prefix("/admin/")
                    .and_then(AdminSection::from_slug)
                    .map_or(Self::NotFound, Self::Admin)
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Plans => "/plans".to_string(),
            Self::Search => "/search".to_string(),
            Self::MovieDetail(id) => format!("/movie/{id}"),
            Self::Admin(section) => format!("/admin/{}", section.slug()),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由的访问级别**
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Search | Self::MovieDetail(_) => RouteAccess::Authenticated,
            Self::Admin(_) => RouteAccess::Admin,
            _ => RouteAccess::Public,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_public_and_gated_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/search?q=x"), AppRoute::Search);
        assert_eq!(
            AppRoute::from_path("/movie/42"),
            AppRoute::MovieDetail("42".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/admin/doctypes"),
            AppRoute::Admin(AdminSection::DocumentTypes)
        );
        assert_eq!(AppRoute::from_path("/admin/unknown"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/movie/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn admin_paths_round_trip() {
        for section in AdminSection::ALL {
            let route = AppRoute::Admin(section);
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
            assert_eq!(route.access(), RouteAccess::Admin);
        }
    }

    #[test]
    fn access_levels() {
        assert_eq!(AppRoute::Plans.access(), RouteAccess::Public);
        assert_eq!(AppRoute::NotFound.access(), RouteAccess::Public);
        assert_eq!(
            AppRoute::MovieDetail("1".into()).access(),
            RouteAccess::Authenticated
        );
    }
}
