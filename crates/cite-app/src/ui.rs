use chrono::{Local, TimeZone};
use cite_history::HistoryLog;
use cite_types::{BookRecord, Language};

use crate::session::SessionState;

pub fn render_result(record: &BookRecord) -> String {
    let mut out = String::new();
    out.push_str("生成结果\n");
    out.push_str(&format!("  {}\n", record.formatted()));
    out.push_str(&format!("  作者: {}\n", record.author()));
    out.push_str(&format!("  书名: {}\n", record.title()));
    out.push_str(&format!(
        "  出版地 : 出版社: {} : {}\n",
        record.location(),
        record.publisher()
    ));
    out.push_str(&format!("  年份: {}\n", record.year()));
    out
}

pub fn render_error(message: &str) -> String {
    format!("查询失败\n  {}\n", message)
}

/// Toggle with the selected script bracketed
pub fn render_language(selected: Language) -> String {
    [Language::SimplifiedChinese, Language::TraditionalChinese]
        .iter()
        .map(|lang| {
            if *lang == selected {
                format!("[{}]", lang.label())
            } else {
                lang.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Local `HH:MM` for a millisecond timestamp
pub fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

pub fn render_history(history: &HistoryLog) -> String {
    let mut out = String::from("最近查询\n");

    if history.is_empty() {
        out.push_str("  暂无历史记录\n");
        return out;
    }

    for (i, entry) in history.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {}  {}  [{}]\n      {}\n",
            i + 1,
            entry.record().isbn(),
            format_time(entry.timestamp()),
            entry.language().label(),
            entry.record().formatted()
        ));
    }
    out
}

/// Prompt line: script toggle, plus a marker while a lookup is outstanding
pub fn render_prompt(state: &SessionState) -> String {
    if state.is_busy() {
        format!("{} 查询中... > ", render_language(state.language))
    } else {
        format!("{} > ", render_language(state.language))
    }
}

pub const HELP: &str = "\
输入 ISBN 并回车即可查询 (Enter an ISBN to look it up)
  :lang [cn|tw]    切换简体/繁體 (toggle or set script)
  :history         最近查询 (show history)
  :show <n|id>     显示历史记录 (display a history entry)
  :copy [n|id]     复制引用 (copy current or a history citation)
  :paste           查询剪贴板中的 ISBN (look up the clipboard text)
  :clear           清空历史 (clear history)
  :help            帮助
  :quit            退出
";
