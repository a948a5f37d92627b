use std::sync::Arc;

use cite_history::MemoryStore;
use cite_types::Language;

use super::support::{ScriptedLookup, book_reply, session_with};
use crate::events::{Command, Flow, handle_command, parse_command};
use crate::session::Session;

async fn run(session: &Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let command = parse_command(line).expect("blank line");
    let flow = handle_command(session, command, &mut out).await.unwrap();
    (flow, String::from_utf8(out).unwrap())
}

#[test]
fn parses_commands() {
    assert_eq!(parse_command("   "), None);
    assert_eq!(
        parse_command(" 9787111544296 "),
        Some(Command::Submit("9787111544296".into()))
    );
    assert_eq!(parse_command(":q"), Some(Command::Quit));
    assert_eq!(parse_command(":lang"), Some(Command::SelectLanguage(None)));
    assert_eq!(
        parse_command(":lang tw"),
        Some(Command::SelectLanguage(Some(Language::TraditionalChinese)))
    );
    assert_eq!(parse_command(":history"), Some(Command::ShowHistory));
    assert_eq!(parse_command(":show 2"), Some(Command::Select("2".into())));
    assert_eq!(parse_command(":copy"), Some(Command::Copy(None)));
    assert_eq!(
        parse_command(":copy  3 "),
        Some(Command::Copy(Some("3".into())))
    );
    assert_eq!(parse_command(":paste"), Some(Command::Paste));
    assert_eq!(parse_command(":clear"), Some(Command::Clear));
}

#[test]
fn rejects_unknown_commands() {
    assert_eq!(
        parse_command(":lang fr"),
        Some(Command::Unknown(":lang fr".into()))
    );
    assert_eq!(parse_command(":show"), Some(Command::Unknown(":show".into())));
    assert_eq!(parse_command(":frobnicate"), Some(Command::Unknown(":frobnicate".into())));
}

#[tokio::test]
async fn submit_prints_result_panel() {
    let lookup = ScriptedLookup::new().reply("9787111544296", &book_reply("示例书"));
    let (session, _) = session_with(lookup, Arc::new(MemoryStore::new()));

    let (flow, out) = run(&session, "9787111544296").await;

    assert_eq!(flow, Flow::Continue);
    assert!(out.contains("查询中..."));
    assert!(out.contains("张三：《示例书》，北京：示例出版社，2020"));
}

#[tokio::test]
async fn failed_submit_prints_error_panel() {
    let (session, _) = session_with(ScriptedLookup::new(), Arc::new(MemoryStore::new()));

    let (_, out) = run(&session, "9787111544296").await;

    assert!(out.contains("查询失败"));
    assert!(out.contains(cite_lookup::LOOKUP_FAILED_MESSAGE));
}

#[tokio::test]
async fn lang_toggles_and_sets() {
    let (session, _) = session_with(ScriptedLookup::new(), Arc::new(MemoryStore::new()));

    let (_, out) = run(&session, ":lang").await;
    assert_eq!(out.trim(), "简体 [繁體]");
    assert_eq!(session.snapshot().await.language, Language::TraditionalChinese);

    let (_, out) = run(&session, ":lang cn").await;
    assert_eq!(out.trim(), "[简体] 繁體");
}

#[tokio::test]
async fn show_selects_history_entry() {
    let lookup = ScriptedLookup::new()
        .reply("a", &book_reply("甲"))
        .reply("b", &book_reply("乙"));
    let (session, lookup) = session_with(lookup, Arc::new(MemoryStore::new()));
    run(&session, "a").await;
    run(&session, "b").await;

    let (_, out) = run(&session, ":show 2").await;

    assert!(out.contains("ISBN a"));
    assert!(out.contains("《甲》"));
    assert_eq!(session.snapshot().await.query, "a");
    assert_eq!(lookup.calls(), 2);

    let (_, out) = run(&session, ":show 9").await;
    assert!(out.contains("没有这条记录"));
}

#[tokio::test]
async fn history_and_clear() {
    let lookup = ScriptedLookup::new().reply("a", &book_reply("甲"));
    let store = Arc::new(MemoryStore::new());
    let (session, _) = session_with(lookup, store);
    run(&session, "a").await;

    let (_, out) = run(&session, ":history").await;
    assert!(out.contains("最近查询"));
    assert!(out.contains("《甲》"));

    run(&session, ":clear").await;
    let (_, out) = run(&session, ":history").await;
    assert!(out.contains("暂无历史记录"));
}

#[tokio::test]
async fn copy_without_result_reports_nothing_to_copy() {
    let (session, _) = session_with(ScriptedLookup::new(), Arc::new(MemoryStore::new()));

    let (_, out) = run(&session, ":copy").await;
    assert!(out.contains("nothing to copy"));

    let (_, out) = run(&session, ":copy 1").await;
    assert!(out.contains("nothing to copy"));
}

#[tokio::test]
async fn quit_stops_the_loop() {
    let (session, _) = session_with(ScriptedLookup::new(), Arc::new(MemoryStore::new()));
    let (flow, out) = run(&session, ":quit").await;
    assert_eq!(flow, Flow::Quit);
    assert!(out.is_empty());
}
