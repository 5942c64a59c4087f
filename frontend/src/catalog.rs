//! 目录：搜索、筛选、排序与详情
//!
//! 条目由后端的音视频内容派生；筛选与排序都是纯函数，页面只负责持有状态。

use std::cmp::Ordering;

use leptos::prelude::*;
use streamvault_shared::ApiError;
use streamvault_shared::entities::AudiovisualContent;
use streamvault_shared::protocol::AUDIOVISUAL;

use crate::api::{Access, ApiClient};
use crate::notify::Toaster;

/// 详情页“相关推荐”的数量
pub const RELATED_LIMIT: usize = 4;

/// 目录中的一条内容
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    pub synopsis: String,
    pub genres: Vec<String>,
    pub year: Option<i32>,
    pub duration: String,
    pub rating: f64,
    pub age_rating: f64,
    pub trailer_url: Option<String>,
    pub director: Option<String>,
}

impl From<&AudiovisualContent> for CatalogEntry {
    fn from(content: &AudiovisualContent) -> Self {
        let trailer = content.trailer_url.trim();
        Self {
            id: content.id,
            title: content.tittle.clone(),
            synopsis: content.description.clone(),
            genres: content
                .film_genres
                .iter()
                .map(|g| g.movie_genre.clone())
                .collect(),
            year: content.release_year(),
            duration: duration_label(content.duration),
            rating: content.rating_promedy,
            age_rating: content.age_rating,
            trailer_url: (!trailer.is_empty()).then(|| trailer.to_string()),
            director: content.director_name.clone(),
        }
    }
}

/// 分钟数 → `2h 18min` / `45min`
pub fn duration_label(minutes: i64) -> String {
    let minutes = minutes.max(0);
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}min"),
        (h, m) => format!("{h}h {m:02}min"),
    }
}

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// 评分从高到低
    #[default]
    Rating,
    /// 年份从新到旧
    Year,
    /// 标题 A-Z
    Title,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Rating, SortBy::Year, SortBy::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Year => "year",
            Self::Title => "title",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "year" => Self::Year,
            "title" => Self::Title,
            _ => Self::Rating,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rating => "Popularidad",
            Self::Year => "Año",
            Self::Title => "A-Z",
        }
    }

    fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Year => b.year.cmp(&a.year),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

/// 搜索条件；`None` 表示“全部”
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchFilter {
    pub query: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub sort: SortBy,
}

impl SearchFilter {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let query = self.query.trim().to_lowercase();
        (query.is_empty() || entry.title.to_lowercase().contains(&query))
            && self
                .genre
                .as_ref()
                .is_none_or(|genre| entry.genres.iter().any(|g| g == genre))
            && self.year.is_none_or(|year| entry.year == Some(year))
    }

    /// 过滤并排序；排序稳定，同分保持原顺序
    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        let mut result: Vec<CatalogEntry> = entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

/// 目录中出现过的全部类型（去重、按字母序）
pub fn genre_choices(entries: &[CatalogEntry]) -> Vec<String> {
    let mut genres: Vec<String> = entries
        .iter()
        .flat_map(|e| e.genres.iter().cloned())
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

/// 目录中出现过的全部年份（从新到旧）
pub fn year_choices(entries: &[CatalogEntry]) -> Vec<i32> {
    let mut years: Vec<i32> = entries.iter().filter_map(|e| e.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// 按路由中的 id 查找；非数字 id 视为不存在
pub fn find_entry<'a>(entries: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    let id: i64 = id.trim().parse().ok()?;
    entries.iter().find(|e| e.id == id)
}

/// 除自身以外的前几条内容
pub fn related(entries: &[CatalogEntry], id: i64) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|e| e.id != id)
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

pub async fn fetch_catalog(client: &ApiClient) -> Result<Vec<CatalogEntry>, ApiError> {
    let contents: Vec<AudiovisualContent> =
        client.find_all(&AUDIOVISUAL, Access::Authenticated).await?;
    Ok(contents.iter().map(CatalogEntry::from).collect())
}

/// 页面持有的目录状态
#[derive(Clone, Copy)]
pub struct Catalog {
    pub entries: RwSignal<Vec<CatalogEntry>>,
    /// 首次加载完成前为 `true`
    pub loading: RwSignal<bool>,
    client: StoredValue<ApiClient>,
    toaster: Toaster,
}

impl Catalog {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            client: StoredValue::new(client),
            toaster,
        }
    }

    pub async fn load(&self) {
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        match fetch_catalog(&client).await {
            Ok(entries) => {
                self.entries.try_set(entries);
            }
            Err(err) => {
                log::error!("loading catalog failed: {err}");
                self.toaster
                    .error("Error al cargar el catálogo", Some(err.message));
            }
        }
        self.loading.try_set(false);
    }
}
