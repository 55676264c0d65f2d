mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Cli, default_config_path, default_log_path, load_config};
use crate::ui::{App, render};

/// 终端守卫：退出或出错时恢复终端
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 配置 (~/.config/listbuilder/config.toml)
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = load_config(&config_path)
        .with_context(|| format!("load config {}", config_path.display()))?
        .apply_cli(&cli);

    // 日志 (~/.local/share/listbuilder/listbuilder.log)
    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    let _log_guard = logging::init(&log_path, &config.log_level)
        .with_context(|| format!("open log file {}", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "starting");

    let mut app = App::new(&config);
    let mut guard = TerminalGuard::new().context("set up terminal")?;

    app.mount();
    run_app(&mut guard.terminal, &mut app)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        if app.redraw.take() {
            terminal.draw(|f| render(f, app))?;
        }

        if ui::handle_event(app, crossterm::event::read()?) {
            break;
        }
    }
    Ok(())
}
