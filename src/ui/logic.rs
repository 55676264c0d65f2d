//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含 dispatch 逻辑和组件的提交处理

use super::actions::Action;
use super::refs::TextField;
use super::state::{App, Focus, ListBuilder};
use crate::models::Entry;

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Appended { index: usize },
    /// 输入控件尚未挂载
    Skipped,
}

impl ListBuilder {
    /// 读取输入控件的值并追加到列表末尾
    ///
    /// 控件不可解析时什么也不做。空字符串同样会被追加，控件内容不清空。
    pub fn on_submit(&mut self) -> Submitted {
        let Some(field) = self.input_ref.resolve() else {
            tracing::debug!("submit skipped: input control not mounted");
            return Submitted::Skipped;
        };
        let text = field.borrow().value().unwrap_or_default().to_string();

        let next = self.entries.get().appended(Entry::from(text));
        let index = next.len() - 1;
        self.entries.set(next);

        tracing::debug!(index, "entry appended");
        Submitted::Appended { index }
    }
}

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                tracing::info!(entries = self.builder.entries.get().len(), "quit");
                return true;
            }
            Action::Submit => {
                self.builder.on_submit();
            }
            Action::FocusNext | Action::FocusPrev => {
                self.focus = self.focus.toggled();
                self.redraw.schedule();
            }
            Action::Input(c) => self.edit_input(|f| f.insert_char(c)),
            Action::DeleteChar => self.edit_input(TextField::delete_left),
            Action::DeleteForward => self.edit_input(TextField::delete_right),
            Action::CursorLeft => self.edit_input(TextField::move_left),
            Action::CursorRight => self.edit_input(TextField::move_right),
            Action::CursorHome => self.edit_input(TextField::move_home),
            Action::CursorEnd => self.edit_input(TextField::move_end),
        }
        false
    }

    /// 直接编辑活控件；只重绘控件本身，不改变组件状态
    fn edit_input(&mut self, edit: impl FnOnce(&mut TextField)) {
        if self.focus != Focus::Input {
            return;
        }
        if let Some(field) = &self.input {
            edit(&mut *field.borrow_mut());
            self.redraw.schedule();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::EntryList;
    use crate::ui::view::bind_refs;

    fn mounted_app() -> App {
        let mut app = App::new(&Config::default());
        app.mount();
        bind_refs(&mut app);
        app.redraw.take();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn clear_input(app: &mut App) {
        app.dispatch(Action::CursorEnd);
        while app.input.as_ref().unwrap().borrow().cursor() > 0 {
            app.dispatch(Action::DeleteChar);
        }
    }

    fn texts(list: &EntryList) -> Vec<&str> {
        list.iter().map(Entry::as_str).collect()
    }

    #[test]
    fn test_submit_before_mount_is_noop() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.builder.on_submit(), Submitted::Skipped);
        assert!(!app.dispatch(Action::Submit));
        assert!(app.builder.entries.get().is_empty());
        assert!(!app.redraw.is_scheduled());
    }

    #[test]
    fn test_milk_then_eggs() {
        let mut app = mounted_app();

        type_text(&mut app, "Milk");
        assert_eq!(app.builder.on_submit(), Submitted::Appended { index: 0 });
        assert_eq!(texts(app.builder.entries.get()), vec!["Milk"]);

        clear_input(&mut app);
        type_text(&mut app, "Eggs");
        assert_eq!(app.builder.on_submit(), Submitted::Appended { index: 1 });
        assert_eq!(texts(app.builder.entries.get()), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_blank_submit_appends_empty_entry() {
        let mut app = mounted_app();
        app.dispatch(Action::Submit);
        assert_eq!(texts(app.builder.entries.get()), vec![""]);
    }

    #[test]
    fn test_n_submits_keep_order() {
        let mut app = mounted_app();
        let values = ["a", "b", "b", "", "c d"];
        for v in values {
            clear_input(&mut app);
            type_text(&mut app, v);
            app.dispatch(Action::Submit);
        }
        assert_eq!(texts(app.builder.entries.get()), values.to_vec());
    }

    #[test]
    fn test_submit_replaces_list_and_schedules_redraw() {
        let mut app = mounted_app();
        let before = app.builder.entries.get().clone();

        app.dispatch(Action::Submit);

        assert!(app.redraw.take());
        assert!(!before.same_instance(app.builder.entries.get()));
        assert!(before.is_empty());
    }

    #[test]
    fn test_input_is_not_cleared_after_submit() {
        let mut app = mounted_app();
        type_text(&mut app, "Milk");
        app.dispatch(Action::Submit);
        app.dispatch(Action::Submit);

        assert_eq!(app.input.as_ref().unwrap().borrow().value(), Some("Milk"));
        assert_eq!(texts(app.builder.entries.get()), vec!["Milk", "Milk"]);
    }

    #[test]
    fn test_typing_does_not_touch_entries() {
        let mut app = mounted_app();
        let before = app.builder.entries.get().clone();
        type_text(&mut app, "abc");
        assert!(before.same_instance(app.builder.entries.get()));
    }

    #[test]
    fn test_typing_ignored_when_button_focused() {
        let mut app = mounted_app();
        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, Focus::Submit);
        type_text(&mut app, "x");
        assert_eq!(app.input.as_ref().unwrap().borrow().value(), None);
        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_quit() {
        let mut app = mounted_app();
        assert!(app.dispatch(Action::Quit));
    }
}
