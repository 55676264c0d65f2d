use std::ops::Deref;
use std::rc::Rc;

/// 列表中的一条记录，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry(String);

impl Entry {
    #[allow(dead_code)]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// 有序记录列表
///
/// 追加时整体替换：`appended` 返回新实例，旧实例保持不变。
/// 允许重复，顺序即插入顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    entries: Rc<[Entry]>,
}

impl EntryList {
    pub fn new() -> Self {
        Self {
            entries: Rc::from(Vec::new()),
        }
    }

    /// 生成在末尾追加了 `entry` 的新列表
    pub fn appended(&self, entry: Entry) -> Self {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend(self.entries.iter().cloned());
        next.push(entry);
        Self {
            entries: Rc::from(next),
        }
    }

    /// 两个句柄是否指向同一份数据
    #[allow(dead_code)]
    pub fn same_instance(&self, other: &EntryList) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for EntryList {
    type Target = [Entry];

    fn deref(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<E: Into<Entry>> FromIterator<E> for EntryList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let entries: Vec<Entry> = iter.into_iter().map(Into::into).collect();
        Self {
            entries: Rc::from(entries),
        }
    }
}
