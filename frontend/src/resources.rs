//! 后台实体配置
//!
//! 每个子模块为一种实体实现 [`Resource`](crate::crud::Resource)（数据与校验）
//! 和 [`AdminView`](crate::components::crud_page::AdminView)（表格列与表单）。

pub mod actors;
pub mod cities;
pub mod content;
pub mod customers;
pub mod departments;
pub mod directors;
pub mod document_types;
pub mod genres;
pub mod memberships;
pub mod sexes;
pub mod users;

use std::collections::BTreeSet;

use streamvault_shared::ApiError;
use streamvault_shared::entities::FilmGenre;

/// 带图片的实体保存失败时的说明
///
/// 403 在附带图片时通常是服务端拒绝了过大的请求体，而不是权限问题。
pub(crate) fn image_failure_message(has_image: bool, err: &ApiError) -> String {
    match (err.is_forbidden(), has_image) {
        (true, true) => "Error 403: El servidor rechazó la imagen. Es posible que el archivo sea \
                         demasiado grande para la configuración del servidor. Intenta con una \
                         imagen más pequeña."
            .to_string(),
        (true, false) => "Error 403: No tienes permisos para realizar esta acción.".to_string(),
        _ => err.message.clone(),
    }
}

/// 可选 id → 下拉框的字符串值
pub(crate) fn id_value(id: Option<i64>) -> String {
    id.filter(|id| *id > 0).map(|id| id.to_string()).unwrap_or_default()
}

pub(crate) fn genre_ids(genres: &[FilmGenre]) -> BTreeSet<i64> {
    genres.iter().map(|g| g.id).collect()
}

pub(crate) fn genre_names(genres: &[FilmGenre]) -> String {
    genres
        .iter()
        .map(|g| g.movie_genre.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn genre_options(genres: &[FilmGenre]) -> Vec<(i64, String)> {
    genres.iter().map(|g| (g.id, g.movie_genre.clone())).collect()
}

#[cfg(test)]
mod tests;
