//! 终端事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    // Windows 上 AltGr 以 CONTROL|ALT 到达，按普通字符处理
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
    {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        _ => match focus {
            Focus::Input => match key.code {
                KeyCode::Char(c) => Some(Action::Input(c)),
                KeyCode::Backspace => Some(Action::DeleteChar),
                KeyCode::Delete => Some(Action::DeleteForward),
                KeyCode::Left => Some(Action::CursorLeft),
                KeyCode::Right => Some(Action::CursorRight),
                KeyCode::Home => Some(Action::CursorHome),
                KeyCode::End => Some(Action::CursorEnd),
                _ => None,
            },
            Focus::Submit => match key.code {
                KeyCode::Char(' ') => Some(Action::Submit),
                _ => None,
            },
        },
    }
}

/// 点击提交按钮区域时提交
pub fn get_mouse_action(button: Option<Rect>, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => button
            .filter(|area| area.contains(Position::new(mouse.column, mouse.row)))
            .map(|_| Action::Submit),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(app.focus, key),
        Event::Mouse(mouse) => get_mouse_action(app.button_area, mouse),
        Event::Resize(_, _) => {
            app.redraw.schedule();
            None
        }
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_submits_from_any_focus() {
        assert_eq!(get_action(Focus::Input, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(get_action(Focus::Submit, key(KeyCode::Enter)), Some(Action::Submit));
    }

    #[test]
    fn test_chars_depend_on_focus() {
        assert_eq!(
            get_action(Focus::Input, key(KeyCode::Char(' '))),
            Some(Action::Input(' '))
        );
        assert_eq!(get_action(Focus::Submit, key(KeyCode::Char(' '))), Some(Action::Submit));
        assert_eq!(get_action(Focus::Submit, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(get_action(Focus::Input, key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(Focus::Input, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_altgr_chars_are_typed() {
        let altgr = KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert_eq!(get_action(Focus::Input, altgr), Some(Action::Input('@')));

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(get_action(Focus::Input, ctrl_x), None);
    }

    #[test]
    fn test_click_inside_button_only() {
        let button = Some(Rect::new(10, 5, 10, 3));
        assert_eq!(get_mouse_action(button, click(12, 6)), Some(Action::Submit));
        assert_eq!(get_mouse_action(button, click(2, 6)), None);
        assert_eq!(get_mouse_action(None, click(12, 6)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::new(&crate::config::Config::default());
        app.mount();
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!handle_event(&mut app, Event::Key(release)));
        assert_eq!(app.input.as_ref().unwrap().borrow().value(), None);
    }
}
