//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use listkit_core::{Element, Node};

use super::app::{App, Mode, Tab};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for input values
const HIGHLIGHT: Color = Color::Yellow;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab header
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab header
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{}:{}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" listkit ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY)),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

/// Render the active component
fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Edit;
    let title = if editing {
        format!(" {} [EDIT] ", app.tab.title())
    } else {
        format!(" {} ", app.tab.title())
    };

    let border_style = if editing {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(Text::from(node_lines(&app.current_node())))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (mode_label, mode_style) = match app.mode {
        Mode::Normal => (" NORMAL ", Style::default().fg(Color::Black).bg(ACCENT)),
        Mode::Edit => (" EDIT ", Style::default().fg(Color::Black).bg(HIGHLIGHT)),
    };

    let hint = match app.mode {
        Mode::Normal => "1-5/Tab: switch  i: edit form  r: refetch  q: quit",
        Mode::Edit => "Enter: submit  Esc: stop editing",
    };

    let message = app.status_message.as_deref().unwrap_or(hint);

    let line = Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Convert a node tree into styled terminal lines.
///
/// Layout matches the plain-text renderer: blocks start lines, list items
/// get bullets, inputs and buttons are bracketed.
pub fn node_lines(node: &Node) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::default();
    builder.node(node);
    builder.flush();
    builder.lines
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style: Style,
    list_depth: usize,
    pending_bullet: bool,
}

impl LineBuilder {
    fn flush(&mut self) {
        let spans = std::mem::take(&mut self.spans);
        if spans.iter().all(|span| span.content.trim().is_empty()) {
            return;
        }

        let mut line = vec![self.lead()];
        line.extend(spans);
        self.lines.push(Line::from(line));
    }

    /// Emit a bare bullet for a list item that has produced no line yet
    fn flush_bullet(&mut self) {
        if self.pending_bullet {
            let indent = "  ".repeat(self.list_depth.saturating_sub(1));
            self.pending_bullet = false;
            self.lines.push(Line::from(Span::styled(
                format!("{}•", indent),
                Style::default().fg(SECONDARY),
            )));
        }
    }

    fn lead(&mut self) -> Span<'static> {
        let indent = "  ".repeat(self.list_depth.saturating_sub(1));
        if self.pending_bullet {
            self.pending_bullet = false;
            Span::styled(format!("{}• ", indent), Style::default().fg(SECONDARY))
        } else if self.list_depth > 0 {
            Span::raw(format!("{}  ", indent))
        } else {
            Span::raw("")
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.spans.push(Span::styled(text.clone(), self.style)),
            Node::Fragment(children) => self.children(children),
            Node::Element(element) if element.is_block() => self.block(element),
            Node::Element(element) => self.inline(element),
        }
    }

    fn children(&mut self, children: &[Node]) {
        for child in children {
            self.node(child);
        }
    }

    fn block(&mut self, element: &Element) {
        self.flush();
        let saved = self.style;

        match element.tag.as_str() {
            "h1" => self.style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.style = self.style.add_modifier(Modifier::BOLD)
            }
            "ul" | "ol" => {
                self.flush_bullet();
                self.list_depth += 1;
            }
            "li" => self.pending_bullet = true,
            _ => {}
        }

        self.children(&element.children);
        self.flush();

        match element.tag.as_str() {
            "ul" | "ol" => self.list_depth -= 1,
            "li" => self.flush_bullet(),
            _ => {}
        }
        self.style = saved;
    }

    fn inline(&mut self, element: &Element) {
        match element.tag.as_str() {
            "input" => {
                let value = element.get_attr("value").unwrap_or("");
                let span = if value.is_empty() {
                    let placeholder = element.get_attr("placeholder").unwrap_or("");
                    Span::styled(format!("[{}]", placeholder), Style::default().fg(SECONDARY))
                } else {
                    Span::styled(format!("[{}]", value), Style::default().fg(HIGHLIGHT))
                };
                self.spans.push(span);
            }
            "button" => {
                let label: String = element.children.iter().map(Node::text_content).collect();
                self.spans.push(Span::raw(" "));
                self.spans.push(Span::styled(
                    format!("[{}]", label),
                    Style::default().add_modifier(Modifier::REVERSED),
                ));
            }
            _ => self.children(&element.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkit_core::{render_list, span, AppShell, Component, ListkitConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_app_shell_lines() {
        let lines: Vec<String> = node_lines(&AppShell::default().render())
            .iter()
            .map(plain)
            .collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Numbers");
        assert_eq!(lines[1], "• 1");
        assert_eq!(lines[6], "Fruits");
        assert_eq!(lines[9], "• cherry");
    }

    #[test]
    fn test_blank_items_keep_their_bullets() {
        let lines: Vec<String> = node_lines(&render_list(&["", "a", "  "], span))
            .iter()
            .map(plain)
            .collect();

        assert_eq!(lines, vec!["•", "• a", "•"]);
    }

    #[test]
    fn test_heading_is_accented() {
        let lines = node_lines(&Node::element("h1", ["Title"]));
        let span = lines[0].spans.last().unwrap();
        assert_eq!(span.style.fg, Some(ACCENT));
    }

    #[test]
    fn test_draws_current_tab() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new(&ListkitConfig::default());

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Numbers"));
        assert!(screen.contains("banana"));
        assert!(screen.contains("NORMAL"));
    }
}
