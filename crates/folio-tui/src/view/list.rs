use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use folio_core::markup::{emphasized_spans, strip_emphasis};
use folio_core::{CategoryFilter, Publication};
use folio_reporting::EMPTY_STATE;

use crate::app::App;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the publication list screen.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(5),    // table
        Constraint::Length(6), // detail
        Constraint::Length(1), // footer
    ])
    .split(f.area());

    render_header(f, chunks[0], app);
    if app.visible.is_empty() {
        render_empty(f, chunks[1], app);
    } else {
        render_table(f, chunks[1], app);
    }
    render_detail(f, chunks[2], app.selected(), &app.theme);
    render_footer(f, chunks[3], &app.theme);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" Folio ", theme.header_style()),
        Span::styled(
            " Publications",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.selection.filter != CategoryFilter::All {
        spans.push(Span::styled(
            format!(
                " [filter: {}]",
                app.catalog.filter_label(&app.selection.filter)
            ),
            Style::default().fg(theme.active),
        ));
    }
    spans.push(Span::styled(
        format!(
            "  {} of {}",
            app.visible.len(),
            app.catalog.publications.len()
        ),
        Style::default().fg(theme.dim),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn list_block<'a>(app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" Sort: {} (s) ", app.selection.sort.label()))
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        EMPTY_STATE,
        Style::default().fg(app.theme.dim),
    )))
    .block(list_block(app));
    f.render_widget(placeholder, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let header = Row::new(["Year", "Category", "Status", "Title"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    }));

    // Borders, three fixed columns and the gaps between them.
    let title_width = (area.width as usize).saturating_sub(2 + 6 + 26 + 11 + 3);

    let rows: Vec<Row> = app
        .rows()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.year.to_string()).style(Style::default().fg(theme.year)),
                Cell::from(truncate(&p.category_label, 26))
                    .style(Style::default().fg(theme.category)),
                Cell::from(p.status.label())
                    .style(Style::default().fg(theme.status_color(&p.status))),
                Cell::from(truncate(&p.title, title_width))
                    .style(Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(26),
        Constraint::Length(11),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(list_block(app))
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    state.select(Some(app.cursor));
    f.render_stateful_widget(table, area, &mut state);
}

/// Author line with the emphasized names (normally the owner) picked out.
fn author_spans(authors: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = strip_emphasis(authors);
    let dim = Style::default().fg(theme.dim);
    let strong = Style::default()
        .fg(theme.active)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut rest = plain.as_str();
    for name in emphasized_spans(authors) {
        if let Some(at) = rest.find(&name) {
            if at > 0 {
                spans.push(Span::styled(rest[..at].to_string(), dim));
            }
            spans.push(Span::styled(name.clone(), strong));
            rest = &rest[at + name.len()..];
        }
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), dim));
    }
    spans
}

fn render_detail(f: &mut Frame, area: Rect, publication: Option<&Publication>, theme: &Theme) {
    let lines = match publication {
        Some(p) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    p.title.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(author_spans(&p.authors, theme)),
            ];
            if let Some(link) = &p.link {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", link.label), Style::default().fg(theme.text)),
                    Span::styled(
                        link.url.clone(),
                        Style::default()
                            .fg(theme.active)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]));
            }
            lines
        }
        None => Vec::new(),
    };

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Details "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let keys = [
        ("f", "filter"),
        ("a", "all"),
        ("s", "sort"),
        ("j/k", "move"),
        ("t", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, desc) in keys {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(theme.active),
        ));
        spans.push(Span::styled(format!(" {desc} "), theme.footer_style()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_spans_bold_the_emphasized_name() {
        let theme = Theme::hacker();
        let spans = author_spans("A. One, <strong><em>B. Two</em></strong>, C. Three", &theme);
        let text: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["A. One, ", "B. Two", ", C. Three"]);
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn author_spans_plain_line_is_one_span() {
        let spans = author_spans("A. One, C. Three", &Theme::modern());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "A. One, C. Three");
    }
}
