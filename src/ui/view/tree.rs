//! 界面树描述
//!
//! `describe` 是纯函数：相同的状态得到相同的树，由 `paint` 负责落到终端上。

use crate::models::Entry;
use crate::ui::state::{Labels, ListBuilder};

/// 列表项，key 为其在列表中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root { id: String, children: Vec<Node> },
    Heading(String),
    List { ordered: bool, items: Vec<Item> },
    TextEntry { placeholder: String, bound: bool },
    Button { label: String },
}

/// [组件] 单个列表项
pub fn render_item(key: usize, entry: &Entry) -> Item {
    Item {
        key,
        text: entry.as_str().to_string(),
    }
}

/// 把组件状态映射为界面树
pub fn describe(builder: &ListBuilder, labels: &Labels) -> Node {
    let items = builder
        .entries
        .get()
        .iter()
        .enumerate()
        .map(|(key, entry)| render_item(key, entry))
        .collect();

    Node::Root {
        id: labels.mount_id.clone(),
        children: vec![
            Node::Heading(labels.heading.clone()),
            Node::List {
                ordered: labels.ordered,
                items,
            },
            Node::TextEntry {
                placeholder: labels.placeholder.clone(),
                bound: builder.input_ref.is_resolved(),
            },
            Node::Button {
                label: labels.submit.clone(),
            },
        ],
    }
}
