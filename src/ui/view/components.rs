//! 通用 UI 组件
//!
//! 输入框、按钮等

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::refs::TextField;

fn focus_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// 横向滚动量：保证光标所在列落在宽度为 `width` 的可视区域内
fn scroll_offset(cursor_col: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    cursor_col.saturating_sub(width - 1)
}

/// [组件] 文本输入框；为空时显示占位文字，未绑定时置灰且不显示光标
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    field: Option<&TextField>,
    placeholder: &str,
    is_focused: bool,
    bound: bool,
) {
    let value = field.and_then(TextField::value).unwrap_or("");
    let is_active = is_focused && bound;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if bound {
            focus_style(is_active, Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);

    let cursor_col = field
        .map(|f| {
            let before: String = value.graphemes(true).take(f.cursor()).collect();
            u16::try_from(before.width()).unwrap_or(u16::MAX)
        })
        .unwrap_or(0);
    let scroll = scroll_offset(cursor_col, inner.width);

    let input = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value)
            .style(focus_style(is_active, Color::Yellow))
            .scroll((0, scroll))
    };
    frame.render_widget(input.block(block), area);

    if is_active && inner.width > 0 {
        let x = inner.x + (cursor_col - scroll);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
