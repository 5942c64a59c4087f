//! 后端资源实体
//!
//! 字段名与后端 JSON 保持一致（包括其拼写），缺失字段按默认值处理，
//! 以免单条脏数据导致整个列表解析失败。

use crate::IdRef;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub id: i64,
    pub departament_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub departament_id: Option<i64>,
    pub departament_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilmGenre {
    pub id: i64,
    pub movie_genre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sex {
    pub id: i64,
    pub sex_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentType {
    pub id: i64,
    pub initials: String,
    pub document_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Actor {
    pub id: i64,
    pub name_actor: String,
    pub last_name_actor: String,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

impl Actor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name_actor, self.last_name_actor)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Director {
    pub id: i64,
    pub name_director: String,
    pub las_name_director: String,
    pub yearbirth: String,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

impl Director {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name_director, self.las_name_director)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Membership {
    pub id: i64,
    pub membership_name: String,
    pub price: f64,
    pub duration: i64,
    pub description: String,
    pub imagen: Option<String>,
    pub imagen_content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudiovisualContent {
    pub id: i64,
    pub tittle: String,
    pub relase_date: String,
    pub description: String,
    pub duration: i64,
    pub age_rating: f64,
    #[serde(rename = "trailerURL")]
    pub trailer_url: String,
    pub country_production: String,
    pub rating_promedy: f64,
    pub director_id: Option<i64>,
    pub director_name: Option<String>,
    pub film_genres: Vec<FilmGenre>,
}

impl AudiovisualContent {
    /// 从 `relaseDate` 解析上映年份
    ///
    /// 优先按 `YYYY-MM-DD` 解析，失败时退回到前四位数字。
    pub fn release_year(&self) -> Option<i32> {
        let raw = self.relase_date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.year());
        }
        raw.get(..4)
            .filter(|prefix| prefix.chars().all(|c| c.is_ascii_digit()))
            .and_then(|prefix| prefix.parse().ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub activated: bool,
    pub lang_key: Option<String>,
    pub image_url: Option<String>,
    pub authorities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: i64,
    pub document_number: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_las_name: String,
    pub second_last_name: Option<String>,
    pub user: Option<User>,
    pub film_genres: Vec<FilmGenre>,
    pub document_type: Option<DocumentType>,
    pub sex: Option<Sex>,
    pub cities: Option<City>,
}

/// 演职员表条目（演员在某部内容中的角色）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CastMember {
    pub id: Option<i64>,
    pub actor_id: Option<i64>,
    pub audiovisual_content_id: Option<i64>,
    pub character: String,
    pub actor_type: String,
    pub actor: Option<Actor>,
    pub audiovisual_content: Option<IdRef>,
}

impl CastMember {
    /// 条目所属内容的 id（扁平字段或嵌套对象）
    pub fn content_id(&self) -> Option<i64> {
        self.audiovisual_content_id
            .or_else(|| self.audiovisual_content.map(|c| c.id))
    }

    /// 条目对应演员的 id（扁平字段或嵌套对象）
    pub fn actor_ref_id(&self) -> Option<i64> {
        self.actor_id.or_else(|| self.actor.as_ref().map(|a| a.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_uses_backend_field_spelling() {
        let json = r#"{
            "id": 3, "tittle": "Neón Oscuro", "relaseDate": "2024-05-01",
            "duration": 116, "ageRating": 16, "trailerURL": "https://t",
            "ratingPromedy": 8.7, "directorId": 2,
            "filmGenres": [{"id": 1, "movieGenre": "Thriller"}]
        }"#;
        let content: AudiovisualContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.tittle, "Neón Oscuro");
        assert_eq!(content.trailer_url, "https://t");
        assert_eq!(content.director_id, Some(2));
        assert_eq!(content.film_genres[0].movie_genre, "Thriller");
        assert_eq!(content.release_year(), Some(2024));
    }

    #[test]
    fn release_year_falls_back_to_leading_digits() {
        let mut content = AudiovisualContent {
            relase_date: "2025".to_string(),
            ..Default::default()
        };
        assert_eq!(content.release_year(), Some(2025));
        content.relase_date = "soon".to_string();
        assert_eq!(content.release_year(), None);
    }

    #[test]
    fn cast_member_resolves_ids_from_flat_or_nested_fields() {
        let nested: CastMember = serde_json::from_str(
            r#"{"character":"Eva","actor":{"id":5,"nameActor":"Ana"},"audiovisualContent":{"id":9}}"#,
        )
        .unwrap();
        assert_eq!(nested.actor_ref_id(), Some(5));
        assert_eq!(nested.content_id(), Some(9));

        let flat: CastMember =
            serde_json::from_str(r#"{"actorId":6,"audiovisualContentId":10}"#).unwrap();
        assert_eq!(flat.actor_ref_id(), Some(6));
        assert_eq!(flat.content_id(), Some(10));
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let customers: Vec<Customer> =
            serde_json::from_str(r#"[{"id":1,"firstName":"Ana"},{"id":2}]"#).unwrap();
        assert_eq!(customers.len(), 2);
        assert!(customers[1].user.is_none());
        assert!(customers[1].film_genres.is_empty());
    }
}
