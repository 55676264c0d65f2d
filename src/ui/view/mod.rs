//! 视图层模块
//!
//! 渲染分两步：`describe` 生成界面树，`paint` 把树画到终端。
//! ratatui 会把新旧缓冲区做差异比较，只输出变化的单元格。

pub mod components;
pub mod tree;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{App, Focus};
use components::{render_button, render_input_widget};
use tree::{Item, Node, describe};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    bind_refs(app);
    let tree = describe(&app.builder, &app.labels);
    paint(frame, app, &tree);
}

/// 把组件的输入引用绑定到宿主的活控件
pub fn bind_refs(app: &mut App) {
    if let Some(input) = &app.input {
        app.builder.input_ref.attach(input);
    }
}

fn paint(frame: &mut Frame, app: &mut App, tree: &Node) {
    let Node::Root { id, children } = tree else {
        return;
    };

    let root = Block::default()
        .title(format!(" #{id} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let area = frame.area();
    let inner = root.inner(area);
    frame.render_widget(root, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 输入框 + 按钮
        ])
        .split(inner);

    for node in children {
        match node {
            Node::Heading(text) => render_heading(frame, rows[0], text),
            Node::List { ordered, items } => render_entries(frame, rows[1], *ordered, items),
            Node::TextEntry { placeholder, bound } => {
                let area = form_row(rows[2], button_label(children))[0];
                let field = app.input.as_ref().map(|f| f.borrow());
                render_input_widget(
                    frame,
                    area,
                    field.as_deref(),
                    placeholder,
                    app.focus == Focus::Input,
                    *bound,
                );
            }
            Node::Button { label } => {
                let area = form_row(rows[2], label)[1];
                render_button(frame, area, label, app.focus == Focus::Submit);
                app.button_area = Some(area);
            }
            Node::Root { .. } => {}
        }
    }
}

fn button_label(children: &[Node]) -> &str {
    children
        .iter()
        .find_map(|node| match node {
            Node::Button { label } => Some(label.as_str()),
            _ => None,
        })
        .unwrap_or("")
}

fn form_row(area: Rect, label: &str) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(
                u16::try_from(label.width())
                    .unwrap_or(u16::MAX)
                    .saturating_add(4),
            ),
        ])
        .split(area)
}

fn render_heading(frame: &mut Frame, area: Rect, text: &str) {
    let heading = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(heading, area);
}

fn render_entries(frame: &mut Frame, area: Rect, ordered: bool, items: &[Item]) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let marker = if ordered {
                format!("{}. ", item.key + 1)
            } else {
                "• ".to_string()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
                Span::raw(item.text.as_str()),
            ]))
        })
        .collect();

    let list = List::new(rows).block(Block::default().borders(Borders::NONE));

    // 选中最后一项，列表超出区域时自动滚动到最新的记录
    let mut state = ListState::default();
    state.select(items.len().checked_sub(1));

    frame.render_stateful_widget(list, area, &mut state);
}
