//! 接口协议定义
//!
//! 后端各资源的路径与 id 放置方式并不统一（有的按路径更新，有的把 id 放进请求体），
//! 这些差异全部集中在本模块的端点表里，调用方不做任何临时判断。

use crate::{LoginRequest, LoginResponse, RegisterRequest};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a fixed endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RegisterRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/users/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// 资源端点表 (Resource Adapter Table)
// =========================================================

/// 更新请求中 id 的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRoute {
    /// `PUT {base}/{id}`，请求体不含 id
    ById,
    /// `PUT {base}/update`，id 写入请求体
    IdInBody,
}

/// 删除请求的路径形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRoute {
    /// `DELETE {base}/{id}`
    ById,
    /// `DELETE {base}/delete/{id}`
    DeleteSegment,
}

/// 单个 CRUD 资源的端点描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEndpoint {
    pub base: &'static str,
    pub update: UpdateRoute,
    pub delete: DeleteRoute,
}

impl ResourceEndpoint {
    pub const fn new(base: &'static str, update: UpdateRoute, delete: DeleteRoute) -> Self {
        Self {
            base,
            update,
            delete,
        }
    }

    pub fn find_all_path(&self) -> String {
        format!("{}/findAll", self.base)
    }

    pub fn create_path(&self) -> String {
        format!("{}/create", self.base)
    }

    pub fn update_path(&self, id: i64) -> String {
        match self.update {
            UpdateRoute::ById => format!("{}/{}", self.base, id),
            UpdateRoute::IdInBody => format!("{}/update", self.base),
        }
    }

    pub fn delete_path(&self, id: i64) -> String {
        match self.delete {
            DeleteRoute::ById => format!("{}/{}", self.base, id),
            DeleteRoute::DeleteSegment => format!("{}/delete/{}", self.base, id),
        }
    }
}

pub const DEPARTMENTS: ResourceEndpoint =
    ResourceEndpoint::new("/api/departaments", UpdateRoute::ById, DeleteRoute::ById);
pub const CITIES: ResourceEndpoint =
    ResourceEndpoint::new("/api/cities", UpdateRoute::ById, DeleteRoute::ById);
pub const FILM_GENRES: ResourceEndpoint = ResourceEndpoint::new(
    "/api/film-genres",
    UpdateRoute::IdInBody,
    DeleteRoute::DeleteSegment,
);
pub const SEXES: ResourceEndpoint =
    ResourceEndpoint::new("/api/sex", UpdateRoute::IdInBody, DeleteRoute::DeleteSegment);
pub const DOCUMENT_TYPES: ResourceEndpoint = ResourceEndpoint::new(
    "/api/document-types",
    UpdateRoute::IdInBody,
    DeleteRoute::DeleteSegment,
);
pub const ACTORS: ResourceEndpoint =
    ResourceEndpoint::new("/api/actors", UpdateRoute::ById, DeleteRoute::ById);
pub const DIRECTORS: ResourceEndpoint =
    ResourceEndpoint::new("/api/directors", UpdateRoute::ById, DeleteRoute::ById);
// 后端路径本身拼写如此
pub const MEMBERSHIPS: ResourceEndpoint = ResourceEndpoint::new(
    "/api/membreships",
    UpdateRoute::IdInBody,
    DeleteRoute::DeleteSegment,
);
pub const AUDIOVISUAL: ResourceEndpoint =
    ResourceEndpoint::new("/api/audiovisual", UpdateRoute::ById, DeleteRoute::ById);
pub const USERS: ResourceEndpoint =
    ResourceEndpoint::new("/api/users", UpdateRoute::ById, DeleteRoute::ById);
pub const CUSTOMERS: ResourceEndpoint =
    ResourceEndpoint::new("/api/customers", UpdateRoute::ById, DeleteRoute::ById);
/// 演员与内容的关联（演职员表），删除使用复合路径，见 [`cast_member_path`]
pub const CAST: ResourceEndpoint =
    ResourceEndpoint::new("/api/actor-audiovisual", UpdateRoute::ById, DeleteRoute::ById);

/// 演职员表条目的删除路径 `{base}/{actorId}/{contentId}`
pub fn cast_member_path(actor_id: i64, content_id: i64) -> String {
    format!("{}/{}/{}", CAST.base, actor_id, content_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_updated_resources_put_to_the_id() {
        assert_eq!(CITIES.update_path(4), "/api/cities/4");
        assert_eq!(AUDIOVISUAL.update_path(9), "/api/audiovisual/9");
        assert_eq!(DEPARTMENTS.delete_path(7), "/api/departaments/7");
    }

    #[test]
    fn body_updated_resources_put_to_update_and_delete_via_segment() {
        assert_eq!(FILM_GENRES.update_path(4), "/api/film-genres/update");
        assert_eq!(MEMBERSHIPS.update_path(1), "/api/membreships/update");
        assert_eq!(SEXES.delete_path(2), "/api/sex/delete/2");
        assert_eq!(DOCUMENT_TYPES.delete_path(3), "/api/document-types/delete/3");
    }

    #[test]
    fn list_and_create_share_one_convention() {
        assert_eq!(ACTORS.find_all_path(), "/api/actors/findAll");
        assert_eq!(CUSTOMERS.create_path(), "/api/customers/create");
        assert_eq!(cast_member_path(5, 11), "/api/actor-audiovisual/5/11");
    }
}
