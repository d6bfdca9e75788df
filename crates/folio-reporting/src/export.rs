use std::io::Write;
use std::path::Path;

use folio_core::{Catalog, CatalogView};

use crate::html::{EMPTY_STATE, publication_list, render_page};
use crate::json::ViewJson;
use crate::types::{ExportFormat, RenderOptions};

/// Render `view` in the given format.
pub fn render(
    catalog: &Catalog,
    view: &CatalogView<'_>,
    format: ExportFormat,
    options: &RenderOptions,
) -> String {
    match format {
        ExportFormat::Html => publication_list(view, options.stagger_ms),
        ExportFormat::Page => render_page(catalog, view, options),
        ExportFormat::Json => export_json(view),
        ExportFormat::Markdown => export_markdown(catalog, view),
        ExportFormat::Text => export_text(catalog, view),
    }
}

/// Render `view` and write it to `path`.
pub fn export_to_path(
    catalog: &Catalog,
    view: &CatalogView<'_>,
    format: ExportFormat,
    options: &RenderOptions,
    path: &Path,
) -> Result<(), String> {
    let content = render(catalog, view, format, options);

    let mut file =
        std::fs::File::create(path).map_err(|e| format!("Failed to create file: {}", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write: {}", e))?;
    Ok(())
}

fn export_json(view: &CatalogView<'_>) -> String {
    // Serializing plain strings and numbers cannot fail.
    serde_json::to_string_pretty(&ViewJson::from(view)).unwrap_or_default()
}

/// Escape characters Markdown would read as emphasis or link syntax.
fn md_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '[' | ']' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Link destination with the characters that would end it early encoded.
fn md_url(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

fn export_markdown(catalog: &Catalog, view: &CatalogView<'_>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("# Publications\n\n");
    out.push_str(&format!(
        "Filter: **{}** | Sort: **{}** | **{}** shown\n\n",
        md_escape(&catalog.filter_label(&view.selection.filter)),
        view.selection.sort.label(),
        view.len()
    ));

    if view.is_empty() {
        out.push_str(&format!("_{}_\n", EMPTY_STATE));
        return out;
    }

    for (i, p) in view.publications.iter().enumerate() {
        out.push_str(&format!(
            "{}. **{}** ({}, {})",
            i + 1,
            md_escape(&p.title),
            p.year,
            md_escape(&p.category_label)
        ));
        if !p.status.is_published() {
            out.push_str(&format!(" *{}*", p.status.label()));
        }
        out.push('\n');
        out.push_str(&format!("   {}\n", md_escape(&p.plain_authors())));
        if let Some(link) = &p.link {
            out.push_str(&format!("   [{}]({})\n", md_escape(&link.label), md_url(&link.url)));
        }
        out.push('\n');
    }
    out
}

fn export_text(catalog: &Catalog, view: &CatalogView<'_>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("Publications\n============\n");
    out.push_str(&format!(
        "Filter: {} | Sort: {} | {} shown\n\n",
        catalog.filter_label(&view.selection.filter),
        view.selection.sort.label(),
        view.len()
    ));

    if view.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
        return out;
    }

    for (i, p) in view.publications.iter().enumerate() {
        out.push_str(&format!("[{}] {}  {}", i + 1, p.year, p.title));
        if !p.status.is_published() {
            out.push_str(&format!(" ({})", p.status.label()));
        }
        out.push('\n');
        out.push_str(&format!("    {}\n", p.category_label));
        out.push_str(&format!("    {}\n", p.plain_authors()));
        if let Some(link) = &p.link {
            out.push_str(&format!("    {} <{}>\n", link.label, link.url));
        }
    }
    out
}
