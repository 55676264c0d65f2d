//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Submit,

    // 焦点切换
    FocusNext,
    FocusPrev,

    // 输入控件编辑，不经过组件状态
    Input(char),
    DeleteChar,    // Backspace
    DeleteForward, // Delete
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}
