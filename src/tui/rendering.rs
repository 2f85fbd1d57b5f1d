use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::layout::StoreLayout;
use crate::catalog::{Department, ProductCard};
use crate::notifications::{Notification, Severity};
use crate::utils::sanitize_for_display;

const ACCENT: Color = Color::Rgb(255, 153, 0);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Everything the renderer needs besides the matched products
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub suggestions: &'a [&'static str],
    pub cart_count: u64,
    pub history: &'a [String],
    pub show_menu: bool,
    pub toasts: &'a [Notification],
    pub searching: Option<&'a str>,
    pub confirming: Option<&'a str>,
    pub total_products: usize,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    products: &[&ProductCard],
    selected_idx: usize,
    state: &RenderState,
) {
    let screen = frame.area();
    let layout = StoreLayout::new(screen, state.show_menu);

    render_search_bar(frame, layout.search_area, state.search_query, state.searching.is_some());
    render_cart_badge(frame, layout.cart_area, state.cart_count);
    if let Some(menu_area) = layout.menu_area {
        render_menu(frame, menu_area, state.history);
    }
    render_products(frame, layout.products_area, products, selected_idx);
    render_status_bar(frame, layout.status_area, products.len(), selected_idx, state);

    // Overlays last so they sit on top
    if !state.suggestions.is_empty() {
        let area = layout.suggestions_area(state.suggestions.len(), screen);
        render_suggestions(frame, area, state.suggestions);
    }
    render_toasts(frame, screen, state.toasts);
}

fn render_search_bar(frame: &mut Frame, area: Rect, query: &str, searching: bool) {
    let title = if searching { " Search (searching...) " } else { " Search " };
    let border = if searching { ACCENT } else { MUTED };

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(sanitize_for_display(query)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title),
    );

    frame.render_widget(paragraph, area);
}

fn render_cart_badge(frame: &mut Frame, area: Rect, count: u64) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw("Cart "),
        Span::styled(count.to_string(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)));

    frame.render_widget(paragraph, area);
}

fn render_menu(frame: &mut Frame, area: Rect, history: &[String]) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Departments", heading))];
    for department in Department::ALL {
        lines.push(Line::from(format!("  {}", department.name())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Recent searches", heading)));
    if history.is_empty() {
        lines.push(Line::from(Span::styled("  none yet", Style::default().fg(MUTED))));
    }
    for query in history {
        lines.push(Line::from(format!("  {}", sanitize_for_display(query))));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Menu "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_products(frame: &mut Frame, area: Rect, products: &[&ProductCard], selected_idx: usize) {
    let items: Vec<ListItem> = products
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let content = format!("{} | {}", card.title, card.department.name());

            let style = if idx == selected_idx {
                Style::default().fg(STATUS_BG).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BRIGHT)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Products "),
    );

    // The list scrolls so the selected card stays on screen
    let mut state = ListState::default().with_selected(Some(selected_idx));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_suggestions(frame: &mut Frame, area: Rect, suggestions: &[&'static str]) {
    let mut items: Vec<ListItem> = suggestions.iter().map(|s| ListItem::new(*s)).collect();
    if let Some(first) = items.first_mut() {
        *first = ListItem::new(suggestions[0]).style(Style::default().fg(ACCENT));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Suggestions (→ to pick) "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Success => Style::default().fg(Color::White).bg(Color::Rgb(34, 197, 94)),
        Severity::Error => Style::default().fg(Color::White).bg(Color::Rgb(239, 68, 68)),
        Severity::Warning => Style::default().fg(Color::Black).bg(Color::Rgb(234, 179, 8)),
        Severity::Info => Style::default().fg(Color::White).bg(Color::Rgb(59, 130, 246)),
    }
}

/// Stack toasts top-right, newest on top, as many as fit
fn render_toasts(frame: &mut Frame, screen: Rect, toasts: &[Notification]) {
    let width = TOAST_WIDTH.min(screen.width);
    let x = screen.right().saturating_sub(width);
    let mut y = screen.y;

    for toast in toasts.iter().rev() {
        if y + TOAST_HEIGHT > screen.bottom() {
            break;
        }
        let area = Rect::new(x, y, width, TOAST_HEIGHT);
        let style = severity_style(toast.severity);

        let paragraph = Paragraph::new(sanitize_for_display(&toast.message))
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(format!(" {} {} ", toast.severity, toast.created_at.format("%H:%M:%S"))),
            );

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
        y += TOAST_HEIGHT;
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    matched_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    if let Some(title) = state.confirming {
        let prompt = format!(" Add this item to cart? {} | y/Enter: yes | any other key: no ", title);
        let paragraph =
            Paragraph::new(prompt).style(Style::default().fg(STATUS_BG).bg(ACCENT));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut parts = vec![];

    if let Some(query) = state.searching {
        parts.push(format!("Searching for: {}", sanitize_for_display(query)));
        parts.push("Esc: cancel".to_string());
    } else if matched_count < state.total_products {
        parts.push(format!("{}/{} products", matched_count, state.total_products));
    } else {
        parts.push(format!("{} products", state.total_products));
    }

    if matched_count > 0 {
        parts.push(format!("item {}/{}", selected_idx + 1, matched_count));
    }

    parts.push("Enter: search".to_string());
    parts.push("Ctrl+A: add".to_string());
    parts.push("Ctrl+O: cart".to_string());
    parts.push("Tab: menu".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(STATUS_BG));

    frame.render_widget(paragraph, area);
}
