use folio_core::{CatalogView, Publication};
use serde::Serialize;

// ── JSON shapes shared by the exporter and the web API ──────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PublicationJson {
    pub id: String,
    pub year: u16,
    pub category: String,
    pub category_label: String,
    pub title: String,
    /// Author line without emphasis markup.
    pub authors: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
}

impl From<&Publication> for PublicationJson {
    fn from(p: &Publication) -> Self {
        Self {
            id: p.id.clone(),
            year: p.year,
            category: p.category.clone(),
            category_label: p.category_label.clone(),
            title: p.title.clone(),
            authors: p.plain_authors(),
            status: p.status.label().to_string(),
            link: p.link.as_ref().map(|l| l.url.clone()),
            link_label: p.link.as_ref().map(|l| l.label.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewJson {
    pub filter: String,
    pub sort: String,
    pub count: usize,
    pub publications: Vec<PublicationJson>,
}

impl From<&CatalogView<'_>> for ViewJson {
    fn from(view: &CatalogView<'_>) -> Self {
        Self {
            filter: view.selection.filter.as_str().to_string(),
            sort: view.selection.sort.as_str().to_string(),
            count: view.len(),
            publications: view
                .publications
                .iter()
                .map(|p| PublicationJson::from(*p))
                .collect(),
        }
    }
}
