use std::io::Write;

use cite_types::Language;

use crate::session::{Session, SubmitOutcome};
use crate::ui;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    /// `None` toggles
    SelectLanguage(Option<Language>),
    ShowHistory,
    Select(String),
    /// `None` copies the displayed result
    Copy(Option<String>),
    Paste,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// `None` for blank input
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Some(Command::Submit(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };

    let command = match (name, arg) {
        ("q" | "quit" | "exit", _) => Command::Quit,
        ("h" | "help", _) => Command::Help,
        ("lang", None) => Command::SelectLanguage(None),
        ("lang", Some(arg)) => match arg.parse() {
            Ok(lang) => Command::SelectLanguage(Some(lang)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        ("history" | "hist", _) => Command::ShowHistory,
        ("show", Some(arg)) => Command::Select(arg.to_string()),
        ("copy", arg) => Command::Copy(arg.map(str::to_string)),
        ("paste", _) => Command::Paste,
        ("clear", _) => Command::Clear,
        _ => Command::Unknown(line.to_string()),
    };

    Some(command)
}

pub async fn handle_command(
    session: &Session,
    command: Command,
    out: &mut dyn Write,
) -> anyhow::Result<Flow> {
    match command {
        Command::Submit(identifier) => {
            submit(session, &identifier, out).await?;
        }
        Command::SelectLanguage(lang) => {
            let lang = match lang {
                Some(lang) => lang,
                None => session.snapshot().await.language.toggled(),
            };
            session.select_language(lang).await;
            writeln!(out, "{}", ui::render_language(lang))?;
        }
        Command::ShowHistory => {
            let state = session.snapshot().await;
            write!(out, "{}", ui::render_history(&state.history))?;
        }
        Command::Select(selector) => {
            select(session, &selector, out).await?;
        }
        Command::Copy(selector) => {
            copy(session, selector.as_deref(), out).await?;
        }
        Command::Paste => match cite_io::clipboard::read_text() {
            Ok(Some(text)) => submit(session, &text, out).await?,
            Ok(None) => writeln!(out, "剪贴板为空 (clipboard is empty)")?,
            Err(e) => {
                tracing::warn!("Clipboard read failed: {:#}", e);
                writeln!(out, "读取剪贴板失败: {}", e)?;
            }
        },
        Command::Clear => {
            session.clear_history().await;
            writeln!(out, "历史记录已清空")?;
        }
        Command::Help => {
            write!(out, "{}", ui::HELP)?;
        }
        Command::Quit => return Ok(Flow::Quit),
        Command::Unknown(text) => {
            writeln!(out, "未知命令: {} (:help)", text)?;
        }
    }

    Ok(Flow::Continue)
}

async fn submit(session: &Session, identifier: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "查询中...")?;
    out.flush()?;

    match session.submit(identifier).await {
        SubmitOutcome::Ignored => {}
        SubmitOutcome::Found(record) => write!(out, "{}", ui::render_result(&record))?,
        SubmitOutcome::Failed(message) => write!(out, "{}", ui::render_error(&message))?,
    }

    Ok(())
}

async fn select(session: &Session, selector: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let Some(entry) = session.find_history_entry(selector).await else {
        writeln!(out, "没有这条记录: {}", selector)?;
        return Ok(());
    };

    if session.select_history_entry(entry.id()).await.is_some() {
        writeln!(
            out,
            "ISBN {}  {}",
            entry.record().isbn(),
            ui::render_language(entry.language())
        )?;
        write!(out, "{}", ui::render_result(entry.record()))?;
    }

    Ok(())
}

async fn copy(session: &Session, selector: Option<&str>, out: &mut dyn Write) -> anyhow::Result<()> {
    let citation = match selector {
        Some(selector) => session
            .find_history_entry(selector)
            .await
            .map(|e| e.record().formatted().to_string()),
        None => session
            .snapshot()
            .await
            .result
            .map(|r| r.formatted().to_string()),
    };

    let Some(citation) = citation else {
        writeln!(out, "没有可复制的引用 (nothing to copy)")?;
        return Ok(());
    };

    match cite_io::clipboard::copy_text(&citation) {
        Ok(()) => writeln!(out, "已复制: {}", citation)?,
        Err(e) => {
            tracing::warn!("Clipboard write failed: {:#}", e);
            writeln!(out, "复制失败: {}", e)?;
        }
    }

    Ok(())
}
