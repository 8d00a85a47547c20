//! services/tui/src/ui/render.rs
//!
//! Drawing functions for the browser: sidebar, results list, and the modal
//! overlays. Everything here reads the core state; nothing mutates it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use tooldex_core::domain::{Category, Tool, ToolId};
use tooldex_core::Directory;

use super::forms::{AuthForm, AuthTab, TagBrowser, ToolForm, TOOL_FIELDS, TOOL_FIELD_CATEGORY, TOOL_FIELD_PRICING};
use super::theme::{color_for, stars};
use super::view::{Focus, Modal, ViewState};

/// Draw the whole UI for one frame.
pub fn draw_ui(f: &mut Frame, directory: &Directory, view: &mut ViewState) {
    let size = f.size();
    let visible = directory.visible();
    view.clamp_selection(visible.len());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(size);

    draw_sidebar(f, panes[0], directory, view);
    draw_main(f, panes[1], directory, view, &visible);

    match &view.modal {
        Modal::None => {}
        Modal::Auth(form) => draw_auth_modal(f, size, form),
        Modal::Tool(form) => draw_tool_modal(f, size, form),
        Modal::Tags(browser) => draw_tags_modal(f, size, browser, directory),
        Modal::Detail(id) => draw_detail_modal(f, size, directory, *id),
    }
}

//=========================================================================================
// Sidebar
//=========================================================================================

fn draw_sidebar(f: &mut Frame, area: Rect, directory: &Directory, view: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    draw_account(f, rows[0], directory);
    draw_categories(f, rows[1], directory, view);
    draw_tag_summary(f, rows[2], directory);
}

fn draw_account(f: &mut Frame, area: Rect, directory: &Directory) {
    let mut lines: Vec<Line> = Vec::new();
    match &directory.user {
        Some(user) => {
            lines.push(Line::from(Span::styled(
                user.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                user.email.clone(),
                Style::default().fg(Color::DarkGray),
            )));
            let favorites = format!("♥ Favorites ({})", directory.favorite_count());
            let style = if directory.filter.favorites_only {
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::LightRed)
            };
            lines.push(Line::from(Span::styled(favorites, style)));
            lines.push(Line::from(Span::styled(
                "l: sign out",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            lines.push(Line::from("Browsing anonymously"));
            lines.push(Line::from(Span::styled(
                "l: sign in to edit",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let block = Block::default().borders(Borders::ALL).title("Account");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_categories(f: &mut Frame, area: Rect, directory: &Directory, view: &ViewState) {
    let mut lines: Vec<Line> = Vec::new();
    for (row, category) in std::iter::once(None)
        .chain(Category::ALL.into_iter().map(Some))
        .enumerate()
    {
        let (label, icon, color) = match category {
            None => ("All Tools".to_string(), "∗", Color::White),
            Some(c) => {
                let meta = c.meta();
                (meta.name.to_string(), meta.icon, color_for(meta.color))
            }
        };
        let count = directory.catalog.count_in(category);
        let applied = directory.filter.category == category;
        let under_cursor = view.sidebar_cursor == row;

        let mut style = Style::default().fg(color);
        if applied {
            style = style.add_modifier(Modifier::BOLD);
        }
        if under_cursor && view.focus == Focus::Sidebar {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if applied { "●" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{marker} {icon} {label} ({count})"),
            style,
        )));
    }
    let block = Block::default().borders(Borders::ALL).title("Categories");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tag_summary(f: &mut Frame, area: Rect, directory: &Directory) {
    let filter = &directory.filter;
    let mut lines: Vec<Line> = Vec::new();
    if filter.show_tags.is_empty() && filter.hide_tags.is_empty() {
        lines.push(Line::from(Span::styled(
            "t: tag filters",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        if !filter.show_tags.is_empty() {
            let shown: Vec<&str> = filter.show_tags.iter().map(String::as_str).collect();
            lines.push(Line::from(Span::styled(
                format!("Show: {}", shown.join(", ")),
                Style::default().fg(Color::Green),
            )));
        }
        if !filter.hide_tags.is_empty() {
            let hidden: Vec<&str> = filter.hide_tags.iter().map(String::as_str).collect();
            lines.push(Line::from(Span::styled(
                format!("Hide: {}", hidden.join(", ")),
                Style::default().fg(Color::Red),
            )));
        }
    }
    let block = Block::default().borders(Borders::ALL).title("Tags");
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

//=========================================================================================
// Main pane
//=========================================================================================

fn draw_main(f: &mut Frame, area: Rect, directory: &Directory, view: &mut ViewState, visible: &[&Tool]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_search(f, rows[0], directory, view);
    draw_filter_summary(f, rows[1], directory);
    draw_count(f, rows[2], directory, visible.len());
    draw_results(f, rows[3], directory, view, visible);
    draw_footer(f, rows[4], view);
}

fn draw_search(f: &mut Frame, area: Rect, directory: &Directory, view: &ViewState) {
    let query = &directory.filter.query;
    let content = if view.searching {
        Line::from(vec![
            Span::raw(query.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ])
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Press / to search tools...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(query.clone())
    };
    let title = if view.searching { "Search (typing)" } else { "Search" };
    let border = if view.searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border).title(title);
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_filter_summary(f: &mut Frame, area: Rect, directory: &Directory) {
    let filter = &directory.filter;
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" Sort: {} ", filter.sort.label()),
        Style::default().fg(Color::Cyan),
    )];
    if let Some(pricing) = filter.pricing {
        spans.push(Span::styled(
            format!(" {} ", pricing.label()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if filter.favorites_only {
        spans.push(Span::styled(" ♥ Favorites Only ", Style::default().fg(Color::LightRed)));
    }
    if filter.is_narrowed() {
        spans.push(Span::styled(" c: clear filters ", Style::default().fg(Color::DarkGray)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_count(f: &mut Frame, area: Rect, directory: &Directory, found: usize) {
    let noun = if directory.filter.favorites_only { "favorite tool" } else { "AI tool" };
    let plural = if found == 1 { "" } else { "s" };
    let text = format!(" Found {found} {noun}{plural}");
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn draw_results(f: &mut Frame, area: Rect, directory: &Directory, view: &mut ViewState, visible: &[&Tool]) {
    let block = Block::default().borders(Borders::ALL).title("Tools");

    if visible.is_empty() {
        // "No results for current filters" and "catalog empty" are
        // different situations and get different messages.
        let message = if directory.catalog.is_empty() {
            "The catalog is empty. Provide a seed dataset to get started."
        } else if directory.filter.favorites_only {
            "No favorite tools found. Favorite some tools to see them here."
        } else {
            "No AI tools found. Try adjusting your filters or search terms."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|tool| ListItem::new(result_line(tool, directory)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    f.render_stateful_widget(list, area, &mut view.list_state);
}

fn result_line<'a>(tool: &'a Tool, directory: &Directory) -> Line<'a> {
    let meta = tool.category.meta();
    let favorite = if directory.is_favorite(tool.id) { "♥ " } else { "  " };
    let mut spans = vec![
        Span::styled(favorite, Style::default().fg(Color::LightRed)),
        Span::styled(format!("{} ", meta.icon), Style::default().fg(color_for(meta.color))),
        Span::styled(tool.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(stars(tool.rating), Style::default().fg(Color::Yellow)),
        Span::styled(format!(" ({:.1})  ", tool.rating), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("[{}] {}", tool.pricing.label(), tool.release_year),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if !tool.tags.is_empty() {
        spans.push(Span::styled(
            format!("  {}", tool.tags.join(" · ")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_footer(f: &mut Frame, area: Rect, view: &ViewState) {
    let line = match &view.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            " ↑↓ select · Tab pane · / search · s sort · p pricing · t tags · f ♥ · F favs only · a add · e edit · Enter detail · o open · l sign in/out · c clear · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

//=========================================================================================
// Modal overlays
//=========================================================================================

/// A centered popup rect clamped to the frame.
fn centered(width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    Rect {
        x: frame.x + (frame.width - width) / 2,
        y: frame.y + (frame.height - height) / 2,
        width,
        height,
    }
}

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(format!("{marker}{label}: "), label_style),
        Span::raw(value),
    ])
}

fn draw_auth_modal(f: &mut Frame, frame: Rect, form: &AuthForm) {
    let height = 10 + form.field_count() as u16;
    let area = centered(48, height, frame);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    let (login_style, register_style) = match form.tab {
        AuthTab::Login => (
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::DarkGray),
        ),
        AuthTab::Register => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Login", login_style),
        Span::raw("  |  "),
        Span::styled("Register", register_style),
    ]));
    lines.push(Line::default());

    for (index, label) in form.labels().iter().enumerate() {
        let value = if form.is_masked(index) {
            "•".repeat(form.field(index).chars().count())
        } else {
            form.field(index).to_string()
        };
        lines.push(field_line(label, value, form.focus == index));
    }

    lines.push(Line::default());
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "  Enter submit · Tab next · ←/→ switch tab · Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  Demo: any email and password will do",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title("Welcome to tooldex");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tool_modal(f: &mut Frame, frame: Rect, form: &ToolForm) {
    let area = centered(62, 16, frame);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (index, label) in TOOL_FIELDS.iter().enumerate() {
        let value = match index {
            TOOL_FIELD_CATEGORY => format!("◂ {} ▸", form.category.name()),
            TOOL_FIELD_PRICING => format!("◂ {} ▸", form.pricing.label()),
            0 => form.name.clone(),
            1 => form.website.clone(),
            2 => form.image_url.clone(),
            5 => form.rating.clone(),
            6 => form.tags.clone(),
            _ => form.description.clone(),
        };
        lines.push(field_line(label, value, form.focus == index));
    }

    lines.push(Line::default());
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "  Enter submit · Tab next · ←/→ cycle choice · Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let title = if form.target.is_some() { "Edit Tool" } else { "Add New Tool" };
    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tags_modal(f: &mut Frame, frame: Rect, browser: &TagBrowser, directory: &Directory) {
    let height = (browser.tags.len() as u16 + 5).min(frame.height).min(22);
    let area = centered(40, height, frame);
    f.render_widget(Clear, area);

    let filter = &directory.filter;
    let mut lines: Vec<Line> = Vec::new();
    for (index, tag) in browser.tags.iter().enumerate() {
        let (marker, color) = if filter.show_tags.contains(tag) {
            ("[+]", Color::Green)
        } else if filter.hide_tags.contains(tag) {
            ("[-]", Color::Red)
        } else {
            ("[ ]", Color::White)
        };
        let cursor = if browser.cursor == index { "▸ " } else { "  " };
        let mut style = Style::default().fg(color);
        if browser.cursor == index {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(format!("{cursor}{marker} {tag}"), style)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  s show · h hide · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title("Tag Filters");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_detail_modal(f: &mut Frame, frame: Rect, directory: &Directory, id: ToolId) {
    let Some(tool) = directory.catalog.get(id) else {
        return;
    };
    let area = centered(64, 16, frame);
    f.render_widget(Clear, area);

    let meta = tool.category.meta();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{} ", meta.icon), Style::default().fg(color_for(meta.color))),
            Span::styled(meta.name, Style::default().fg(color_for(meta.color))),
        ]),
        Line::from(vec![
            Span::styled(stars(tool.rating), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" ({:.1}) · {} · {} · popularity {}", tool.rating, tool.pricing.label(), tool.release_year, tool.popularity),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            if tool.tags.is_empty() { "no tags".to_string() } else { tool.tags.join(" · ") },
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(tool.website.clone(), Style::default().fg(Color::Cyan))),
        Line::default(),
        Line::from(tool.description.clone()),
        Line::default(),
        Line::from(Span::styled(
            "  o open website · f favorite · Esc close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(image_url) = &tool.image_url {
        lines.insert(4, Line::from(Span::styled(image_url.clone(), Style::default().fg(Color::DarkGray))));
    }

    let block = Block::default().borders(Borders::ALL).title(tool.name.clone());
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}
