//! 状态定义 (Model)
//!
//! 包含组件状态、重绘信号以及宿主 App

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::layout::Rect;

use super::refs::{InputRef, TextField};
use crate::config::Config;
use crate::models::EntryList;

/// 共享的重绘标记
#[derive(Debug, Clone, Default)]
pub struct Redraw(Rc<Cell<bool>>);

impl Redraw {
    pub fn schedule(&self) {
        self.0.set(true);
    }

    #[allow(dead_code)]
    pub fn is_scheduled(&self) -> bool {
        self.0.get()
    }

    /// 取出并清除标记
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// 响应式状态：`set` 替换值并请求重绘
#[derive(Debug)]
pub struct State<T> {
    value: T,
    redraw: Redraw,
}

impl<T> State<T> {
    pub fn new(value: T, redraw: Redraw) -> Self {
        Self { value, redraw }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.redraw.schedule();
    }
}

/// 列表构建组件
#[derive(Debug)]
pub struct ListBuilder {
    pub entries: State<EntryList>,
    pub input_ref: InputRef,
}

impl ListBuilder {
    pub fn new(redraw: Redraw) -> Self {
        Self {
            entries: State::new(EntryList::new(), redraw),
            input_ref: InputRef::new(),
        }
    }
}

/// 焦点所在控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Submit,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::Submit,
            Focus::Submit => Focus::Input,
        }
    }
}

/// 界面文案
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub mount_id: String,
    pub heading: String,
    pub placeholder: String,
    pub submit: String,
    pub ordered: bool,
}

impl From<&Config> for Labels {
    fn from(config: &Config) -> Self {
        Self {
            mount_id: config.mount_id.clone(),
            heading: config.heading.clone(),
            placeholder: config.placeholder.clone(),
            submit: config.submit_label.clone(),
            ordered: config.ordered,
        }
    }
}

/// 宿主：持有组件、活控件和事件循环需要的状态
pub struct App {
    pub builder: ListBuilder,
    pub input: Option<Rc<RefCell<TextField>>>,
    pub focus: Focus,
    pub labels: Labels,
    pub redraw: Redraw,
    pub button_area: Option<Rect>,
}

impl App {
    /// 创建应用实例；此时尚未挂载，输入控件不存在
    pub fn new(config: &Config) -> Self {
        let redraw = Redraw::default();
        Self {
            builder: ListBuilder::new(redraw.clone()),
            input: None,
            focus: Focus::default(),
            labels: Labels::from(config),
            redraw,
            button_area: None,
        }
    }

    /// 挂载：创建输入控件并请求首次绘制
    pub fn mount(&mut self) {
        if self.input.is_none() {
            self.input = Some(Rc::new(RefCell::new(TextField::default())));
            tracing::info!(mount_id = %self.labels.mount_id, "component mounted");
        }
        self.redraw.schedule();
    }
}
