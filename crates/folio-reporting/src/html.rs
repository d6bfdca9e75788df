//! HTML rendering: the publication list fragment and the full page.
//!
//! Every render produces the complete markup for its container; callers
//! replace the old content wholesale.

use folio_core::markup::EMPHASIS_TAGS;
use folio_core::{Catalog, CatalogView, CategoryFilter, Project, Publication, Service, SortOrder};

use crate::types::RenderOptions;

/// Placeholder shown in place of the list when nothing matches.
pub const EMPTY_STATE: &str = "No publications found for this category.";

const FILTER_ACTIVE: &str = "bg-blue-600 text-white";
const FILTER_IDLE: &str = "bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-300";

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape an author line, keeping only the allowed emphasis tags.
fn authors_html(s: &str) -> String {
    let mut out = html_escape(s);
    for tag in EMPHASIS_TAGS {
        out = out.replace(&html_escape(tag), tag);
    }
    out
}

/// Badge classes for a category accent token.
fn accent_classes(accent: &str) -> String {
    let a = html_escape(accent);
    format!("bg-{a}/10 text-{a} border border-{a}/20")
}

/// Query string selecting `filter` under `sort`, escaped for an attribute.
///
/// The tag is percent-encoded first so `+`, `&` and friends survive the
/// round trip through the query string.
fn selection_href(filter: &CategoryFilter, sort: SortOrder) -> String {
    format!(
        "?filter={}&amp;sort={}",
        html_escape(&urlencoding::encode(filter.as_str())),
        sort.as_str()
    )
}

/// Render the publication list for `view`.
///
/// Each card carries a reveal delay of `index * stagger_ms`. An empty view
/// renders the [`EMPTY_STATE`] placeholder instead.
pub fn publication_list(view: &CatalogView<'_>, stagger_ms: u32) -> String {
    if view.is_empty() {
        return format!(
            "<p class=\"empty-state text-center text-gray-500 dark:text-gray-400 col-span-full py-12\">{}</p>\n",
            EMPTY_STATE
        );
    }

    let mut out = String::with_capacity(view.len() * 1024);
    for (index, publication) in view.publications.iter().enumerate() {
        let delay = (index as u64) * u64::from(stagger_ms);
        write_card(&mut out, publication, delay);
    }
    out
}

fn write_card(out: &mut String, p: &Publication, delay_ms: u64) {
    out.push_str(&format!(
        "<article class=\"glass-card p-6 rounded-2xl relative overflow-hidden group hover:border-l-4 hover:border-l-blue-500 reveal\" data-id=\"{}\" data-category=\"{}\" style=\"transition-delay: {}ms\">\n",
        html_escape(&p.id),
        html_escape(&p.category),
        delay_ms,
    ));
    out.push_str("<div class=\"relative z-10\">\n");
    out.push_str("<div class=\"flex flex-wrap items-center gap-2 mb-3\">\n");
    out.push_str(&format!(
        "<span class=\"badge year px-3 py-1 rounded-full text-xs font-semibold bg-gray-100 text-gray-700 dark:bg-gray-800 dark:text-gray-300\">{}</span>\n",
        p.year
    ));
    out.push_str(&format!(
        "<span class=\"badge category px-3 py-1 rounded-full text-xs font-semibold {}\">{}</span>\n",
        accent_classes(&p.style),
        html_escape(&p.category_label)
    ));
    if !p.status.is_published() {
        out.push_str(&format!(
            "<span class=\"badge status px-3 py-1 rounded-full text-xs font-semibold bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-300 border border-yellow-200 dark:border-yellow-800\">{}</span>\n",
            p.status.label()
        ));
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<h3 class=\"text-lg md:text-xl font-bold mb-3 leading-snug group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors\">{}</h3>\n",
        html_escape(&p.title)
    ));
    out.push_str(&format!(
        "<p class=\"authors text-sm text-gray-600 dark:text-gray-400 mb-4 line-clamp-2\">{}</p>\n",
        authors_html(&p.authors)
    ));
    out.push_str("<div class=\"flex items-center gap-3\">\n");
    if let Some(link) = &p.link {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\" class=\"inline-flex items-center text-sm font-medium text-blue-600 hover:text-blue-700 dark:text-blue-400 dark:hover:text-blue-300 transition-colors\"><i class=\"fas fa-external-link-alt mr-2 text-xs\"></i> Read Paper</a>\n",
            html_escape(&link.url),
            html_escape(&link.label)
        ));
    }
    out.push_str("</div>\n</div>\n</article>\n");
}

fn write_filter_controls(out: &mut String, catalog: &Catalog, view: &CatalogView<'_>) {
    let sort = view.selection.sort;
    out.push_str("<div class=\"filters flex flex-wrap gap-2\" role=\"group\">\n");

    let mut controls = vec![(CategoryFilter::All, "All".to_string())];
    controls.extend(
        catalog
            .categories()
            .into_iter()
            .map(|c| (CategoryFilter::Category(c.tag), c.label)),
    );

    for (filter, label) in controls {
        let active = filter == view.selection.filter;
        out.push_str(&format!(
            "<a class=\"filter-btn px-4 py-2 rounded-full text-sm font-medium {}\" data-filter=\"{}\" href=\"{}\"{}>{}</a>\n",
            if active { FILTER_ACTIVE } else { FILTER_IDLE },
            html_escape(filter.as_str()),
            selection_href(&filter, sort),
            if active { " aria-current=\"true\"" } else { "" },
            html_escape(&label),
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<form class=\"sort\" method=\"get\">\n");
    out.push_str(&format!(
        "<input type=\"hidden\" name=\"filter\" value=\"{}\">\n",
        html_escape(view.selection.filter.as_str())
    ));
    out.push_str("<select id=\"year-sort\" name=\"sort\" onchange=\"this.form.submit()\">\n");
    for order in SortOrder::ALL {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            order.as_str(),
            if order == sort { " selected" } else { "" },
            order.label()
        ));
    }
    out.push_str("</select>\n<noscript><button type=\"submit\">Apply</button></noscript>\n</form>\n");
}

fn write_service(out: &mut String, s: &Service, delay_ms: u64) {
    let accent = html_escape(&s.accent);
    out.push_str(&format!(
        "<div class=\"group tilt-card relative overflow-hidden rounded-2xl p-8 shadow-lg bg-gradient-to-br from-{accent}/5 to-{accent}/10 reveal\" data-id=\"{}\" style=\"transition-delay: {}ms\">\n",
        html_escape(&s.id),
        delay_ms,
    ));
    out.push_str(&format!(
        "<i class=\"{} text-2xl text-{accent}-600\"></i>\n",
        html_escape(&s.icon)
    ));
    out.push_str(&format!(
        "<h3 class=\"text-2xl font-bold mb-3\">{}</h3>\n",
        html_escape(&s.title)
    ));
    out.push_str(&format!(
        "<p class=\"mb-6 leading-relaxed\">{}</p>\n",
        html_escape(&s.description)
    ));
    out.push_str("<ul class=\"space-y-2 mb-8\">\n");
    for outcome in &s.outcomes {
        out.push_str(&format!(
            "<li><i class=\"fas fa-check-circle text-{accent}-500 mr-2\"></i><span>{}</span></li>\n",
            html_escape(outcome)
        ));
    }
    out.push_str("</ul>\n");
    out.push_str(&format!(
        "<a href=\"#contact\" class=\"block w-full py-3 px-4 rounded-xl text-center font-medium text-white bg-{accent}-600\">Get Started</a>\n"
    ));
    out.push_str("</div>\n");
}

fn write_project(out: &mut String, p: &Project) {
    out.push_str("<li class=\"project\">\n");
    out.push_str(&format!(
        "<h3 class=\"text-xl font-semibold\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>\n",
        html_escape(&p.link),
        html_escape(&p.title)
    ));
    for line in &p.description {
        out.push_str(&format!("<p>{}</p>\n", html_escape(line)));
    }
    if !p.tools.is_empty() {
        out.push_str("<ul class=\"tools flex flex-wrap gap-2\">");
        for tool in &p.tools {
            out.push_str(&format!("<li>{}</li>", html_escape(tool)));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
}

/// Render the full page for the current selection.
pub fn render_page(catalog: &Catalog, view: &CatalogView<'_>, options: &RenderOptions) -> String {
    let owner = html_escape(&options.owner);
    let mut out = String::with_capacity(32768);

    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{owner}</title>
<style>
.reveal {{ opacity: 0; transform: translateY(1rem); transition: all 0.6s ease; }}
.reveal.active {{ opacity: 1; transform: none; }}
@media (prefers-reduced-motion: reduce) {{ .reveal {{ opacity: 1; transform: none; }} }}
</style>
</head>
<body>
<header class="px-8 py-4">
<h1 class="text-4xl font-bold">{owner}</h1>
<p class="text-lg">{}</p>
</header>
<main class="px-8 py-8">
"#,
        html_escape(&options.tagline)
    ));

    out.push_str("<section id=\"publications\" class=\"my-8\">\n<h2 class=\"text-3xl font-semibold mb-4\">Publications</h2>\n");
    write_filter_controls(&mut out, catalog, view);
    out.push_str("<div id=\"publications-grid\" class=\"grid gap-6\">\n");
    out.push_str(&publication_list(view, options.stagger_ms));
    out.push_str("</div>\n</section>\n");

    if !catalog.services.is_empty() {
        out.push_str("<section id=\"services\" class=\"my-8\">\n<h2 class=\"text-3xl font-semibold mb-4\">Services</h2>\n<div id=\"services-grid\" class=\"grid gap-6\">\n");
        // Services stagger a little slower than publications.
        let step = u64::from(options.stagger_ms) * 3 / 2;
        for (i, s) in catalog.services.iter().enumerate() {
            write_service(&mut out, s, i as u64 * step);
        }
        out.push_str("</div>\n</section>\n");
    }

    if !catalog.projects.is_empty() {
        out.push_str("<section id=\"projects\" class=\"my-8\">\n<h2 class=\"text-3xl font-semibold mb-4\">Projects</h2>\n<ul class=\"space-y-4\">\n");
        for p in &catalog.projects {
            write_project(&mut out, p);
        }
        out.push_str("</ul>\n</section>\n");
    }

    out.push_str(&format!(
        "</main>\n<footer class=\"py-4 text-center\"><p>&copy; {owner}</p></footer>\n<script>document.querySelectorAll('.reveal').forEach(function (el) {{ el.classList.add('active'); }});</script>\n</body>\n</html>\n"
    ));
    out
}
