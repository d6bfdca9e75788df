use std::io::Write;

use folio_core::{Catalog, CatalogView, Category, Publication};
use folio_reporting::EMPTY_STATE;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the selection header line.
pub fn print_view_header(
    w: &mut dyn Write,
    catalog: &Catalog,
    view: &CatalogView<'_>,
    color: ColorMode,
) -> std::io::Result<()> {
    let line = format!(
        "Filter: {} | Sort: {} | {} of {} shown",
        catalog.filter_label(&view.selection.filter),
        view.selection.sort.label(),
        view.len(),
        catalog.publications.len()
    );
    if color.enabled() {
        writeln!(w, "{}", line.bold())?;
    } else {
        writeln!(w, "{}", line)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Print every record in the view, or the empty-state placeholder.
pub fn print_view(
    w: &mut dyn Write,
    catalog: &Catalog,
    view: &CatalogView<'_>,
    color: ColorMode,
) -> std::io::Result<()> {
    print_view_header(w, catalog, view, color)?;

    if view.is_empty() {
        if color.enabled() {
            writeln!(w, "{}", EMPTY_STATE.dimmed())?;
        } else {
            writeln!(w, "{}", EMPTY_STATE)?;
        }
        return Ok(());
    }

    for (i, p) in view.publications.iter().enumerate() {
        print_publication(w, i + 1, p, color)?;
    }
    Ok(())
}

fn print_publication(
    w: &mut dyn Write,
    num: usize,
    p: &Publication,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        write!(
            w,
            "[{}] {} {} ",
            num,
            p.year.to_string().cyan(),
            format!("[{}]", p.category_label).blue()
        )?;
        if !p.status.is_published() {
            write!(w, "{} ", format!("({})", p.status.label()).yellow())?;
        }
        writeln!(w, "{}", p.title.bold())?;
        writeln!(w, "    {}", p.plain_authors().dimmed())?;
        if let Some(link) = &p.link {
            writeln!(w, "    {} {}", link.label, link.url.underline())?;
        }
    } else {
        write!(w, "[{}] {} [{}] ", num, p.year, p.category_label)?;
        if !p.status.is_published() {
            write!(w, "({}) ", p.status.label())?;
        }
        writeln!(w, "{}", p.title)?;
        writeln!(w, "    {}", p.plain_authors())?;
        if let Some(link) = &p.link {
            writeln!(w, "    {} {}", link.label, link.url)?;
        }
    }
    writeln!(w)?;
    Ok(())
}

/// Print the filter values, one per line, with their record counts.
pub fn print_categories(
    w: &mut dyn Write,
    catalog: &Catalog,
    categories: &[Category],
    color: ColorMode,
) -> std::io::Result<()> {
    let width = categories
        .iter()
        .map(|c| c.tag.len())
        .max()
        .unwrap_or(0)
        .max(3);

    let all = format!("{:<width$}  All ({})", "all", catalog.publications.len());
    if color.enabled() {
        writeln!(w, "{}", all.bold())?;
    } else {
        writeln!(w, "{}", all)?;
    }
    for c in categories {
        let count = catalog
            .publications
            .iter()
            .filter(|p| p.category == c.tag)
            .count();
        writeln!(w, "{:<width$}  {} ({})", c.tag, c.label, count)?;
    }
    Ok(())
}

/// Print catalog validation results.
pub fn print_check(
    w: &mut dyn Write,
    catalog: &Catalog,
    problems: &[String],
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{} publications, {} services, {} projects",
        catalog.publications.len(),
        catalog.services.len(),
        catalog.projects.len()
    )?;
    if problems.is_empty() {
        if color.enabled() {
            writeln!(w, "{}", "Catalog OK".green())?;
        } else {
            writeln!(w, "Catalog OK")?;
        }
        return Ok(());
    }
    for p in problems {
        if color.enabled() {
            writeln!(w, "{} {}", "ERROR:".red(), p)?;
        } else {
            writeln!(w, "ERROR: {}", p)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{CategoryFilter, Selection, SortOrder};

    fn render_plain(filter: &str, sort: SortOrder) -> String {
        let catalog = Catalog::builtin();
        let view = catalog.view(&Selection::new(CategoryFilter::parse(filter), sort));
        let mut buf = Vec::new();
        print_view(&mut buf, &catalog, &view, ColorMode(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_listing_is_numbered_in_view_order() {
        let out = render_plain("all", SortOrder::Newest);
        assert!(out.starts_with("Filter: All | Sort: Newest first | 9 of 9 shown"));
        let first = out.find("[1] 2025").unwrap();
        let fourth = out.find("[4] 2024").unwrap();
        assert!(first < fourth);
        assert!(!out.contains("<strong>"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn plain_listing_empty_state() {
        let out = render_plain("nonexistent-category", SortOrder::Newest);
        assert!(out.contains("0 of 9 shown"));
        assert!(out.contains(EMPTY_STATE));
        assert!(!out.contains("[1]"));
    }

    #[test]
    fn plain_listing_marks_unpublished() {
        let out = render_plain("astrophysics", SortOrder::Oldest);
        assert!(out.contains("[1] 2024 [Astrophysics] (Preprint) Quantitative Analysis"));
    }

    #[test]
    fn categories_list_counts() {
        let catalog = Catalog::builtin();
        let mut buf = Vec::new();
        print_categories(&mut buf, &catalog, &catalog.categories(), ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.lines().next().unwrap().contains("All (9)"));
        assert!(out.contains("Medical AI (1)"));
    }

    #[test]
    fn check_reports_problems() {
        let catalog = Catalog::builtin();
        let mut buf = Vec::new();
        print_check(
            &mut buf,
            &catalog,
            &["duplicate publication id \"pub1\"".to_string()],
            ColorMode(false),
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("ERROR: duplicate publication id"));
        assert!(!out.contains("Catalog OK"));
    }
}
