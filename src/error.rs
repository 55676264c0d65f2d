use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 程序级错误（组件本身没有可失败的操作）
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot determine the user {0} directory")]
    NoDir(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
