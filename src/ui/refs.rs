//! 输入控件与其非响应式引用
//!
//! `TextField` 由宿主持有；组件只通过 `InputRef` 弱引用读取它，
//! 写入引用不会触发重绘。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use unicode_segmentation::UnicodeSegmentation;

/// 文本输入控件（宿主持有的“活”控件）
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: Option<String>,
    cursor: usize, // 以字素为单位
}

impl TextField {
    /// 当前值；从未输入过时为 None
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn graphemes(&self) -> Vec<&str> {
        self.value
            .as_deref()
            .map(|v| v.graphemes(true).collect())
            .unwrap_or_default()
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    pub fn insert_text(&mut self, s: &str) {
        let parts = self.graphemes();
        let idx = self.cursor.min(parts.len());
        let mut next = String::new();
        parts[..idx].iter().for_each(|g| next.push_str(g));
        next.push_str(s);
        parts[idx..].iter().for_each(|g| next.push_str(g));

        self.value = Some(next);
        let len = self.graphemes().len();
        self.cursor = (idx + s.graphemes(true).count()).min(len);
    }

    /// 删除光标左侧的字素
    pub fn delete_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut parts = self.graphemes();
        let idx = self.cursor.min(parts.len());
        parts.remove(idx - 1);
        self.value = Some(parts.concat());
        self.cursor = idx - 1;
    }

    /// 删除光标右侧的字素
    pub fn delete_right(&mut self) {
        let mut parts = self.graphemes();
        let idx = self.cursor.min(parts.len());
        if idx < parts.len() {
            parts.remove(idx);
            self.value = Some(parts.concat());
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.graphemes().len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.graphemes().len();
    }
}

/// 指向活控件的非拥有引用
///
/// 首次渲染前未解析；宿主释放控件后再次变为不可解析。
#[derive(Debug, Clone, Default)]
pub struct InputRef {
    current: Option<Weak<RefCell<TextField>>>,
}

impl InputRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// 渲染时绑定到宿主的控件
    pub fn attach(&mut self, field: &Rc<RefCell<TextField>>) {
        self.current = Some(Rc::downgrade(field));
    }

    pub fn resolve(&self) -> Option<Rc<RefCell<TextField>>> {
        self.current.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolve().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_absent_until_typed() {
        let mut field = TextField::default();
        assert_eq!(field.value(), None);
        field.insert_char('a');
        assert_eq!(field.value(), Some("a"));
    }

    #[test]
    fn test_editing_at_cursor() {
        let mut field = TextField::default();
        field.insert_text("Mlk");
        field.move_home();
        field.move_right();
        field.insert_char('i');
        assert_eq!(field.value(), Some("Milk"));
        assert_eq!(field.cursor(), 2);

        field.move_end();
        field.delete_left();
        assert_eq!(field.value(), Some("Mil"));

        field.move_home();
        field.delete_right();
        assert_eq!(field.value(), Some("il"));
    }

    #[test]
    fn test_graphemes_move_as_one() {
        let mut field = TextField::default();
        field.insert_text("e\u{301}x");
        assert_eq!(field.cursor(), 2);
        field.move_left();
        field.delete_left();
        assert_eq!(field.value(), Some("x"));
    }

    #[test]
    fn test_ref_resolution_follows_owner() {
        let mut input_ref = InputRef::new();
        assert!(!input_ref.is_resolved());

        let field = Rc::new(RefCell::new(TextField::default()));
        input_ref.attach(&field);
        assert!(input_ref.is_resolved());

        drop(field);
        assert!(!input_ref.is_resolved());
    }
}
