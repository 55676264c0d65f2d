use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 命令行参数
#[derive(Debug, Default, Parser)]
#[command(name = "listbuilder", version, about = "Build a list one entry at a time")]
pub struct Cli {
    /// 配置文件路径（默认 ~/.config/listbuilder/config.toml）
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 日志文件路径（默认 ~/.local/share/listbuilder/listbuilder.log）
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// 用序号而不是圆点显示列表
    #[arg(long)]
    pub ordered: bool,
}

/// 界面配置，所有字段都可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heading: String,
    pub placeholder: String,
    pub submit_label: String,
    pub mount_id: String,
    pub ordered: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heading: "List Builder".to_string(),
            placeholder: "Enter a new item".to_string(),
            submit_label: "Submit".to_string(),
            mount_id: "root".to_string(),
            ordered: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 命令行参数覆盖文件配置
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if cli.ordered {
            self.ordered = true;
        }
        self
    }
}

/// 获取应用子目录，例如 ~/.config/listbuilder/
fn app_dir(base: Option<PathBuf>, kind: &'static str) -> Result<PathBuf> {
    let dir = base.ok_or(Error::NoDir(kind))?.join("listbuilder");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_dir(dirs::config_dir(), "config")?.join("config.toml"))
}

pub fn default_log_path() -> Result<PathBuf> {
    Ok(app_dir(dirs::data_dir(), "data")?.join("listbuilder.log"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
