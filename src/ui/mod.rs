//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, refs.rs): 组件状态、重绘信号与输入控件
//! - View (view/): 纯函数，将 State 映射为界面树再绘制
//! - Intent (actions.rs, input.rs): 终端事件转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod refs;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_event;
pub use state::App;
pub use view::render;
