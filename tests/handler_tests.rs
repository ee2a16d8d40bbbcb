//! MCP handler tests
mod common;

use common::{extract_hash_for, get_test_handler};
use todotxt_mcp::NoteStore;

// 全ノートのタスクが表示順で一覧表示されることを確認
#[tokio::test]
async fn test_list_orders_across_notes() {
    let (handler, _temp_file) = get_test_handler(vec![
        (1, "plain task\nx 2000-01-02 2000-01-01 old done"),
        (2, "(A) important\noverdue task due:2000-01-01"),
    ]);

    let result = handler.handle_list(None, None, None).await.unwrap();
    assert!(result.starts_with("Found 4 item(s):"));

    let overdue = result.find("overdue task").unwrap();
    let important = result.find("important").unwrap();
    let plain = result.find("plain task").unwrap();
    let done = result.find("old done").unwrap();
    assert!(overdue < important && important < plain && plain < done);
    assert!(result.contains("(overdue)"));
    assert!(result.contains("1 item(s) overdue or due today"));
}

// プロジェクト・コンテキスト・キーワードでの絞り込みテスト
#[tokio::test]
async fn test_list_filters() {
    let (handler, _temp_file) = get_test_handler(vec![(
        1,
        "Pay rent +bills @home\nCall bank +bills @phone\nWalk dog @home",
    )]);

    let result = handler
        .handle_list(Some("bills".to_string()), None, None)
        .await
        .unwrap();
    assert!(result.starts_with("Found 2 item(s):"));

    let result = handler
        .handle_list(Some("+bills".to_string()), Some("@home".to_string()), None)
        .await
        .unwrap();
    assert!(result.starts_with("Found 1 item(s):"));
    assert!(result.contains("Pay rent"));

    let result = handler
        .handle_list(None, None, Some("DOG".to_string()))
        .await
        .unwrap();
    assert!(result.contains("Walk dog"));
    assert!(!result.contains("Pay rent"));

    let result = handler
        .handle_list(None, None, Some("nothing".to_string()))
        .await
        .unwrap();
    assert_eq!(result, "No items found");
}

// 解析できない行が診断として表示されることを確認
#[tokio::test]
async fn test_list_reports_skipped_lines() {
    let (handler, _temp_file) = get_test_handler(vec![(3, "good line\nx\n")]);
    let result = handler.handle_list(None, None, None).await.unwrap();
    assert!(result.starts_with("Found 1 item(s):"));
    assert!(result.contains("Skipped note 3 line 2"));
}

// タグ一覧の取得テスト
#[tokio::test]
async fn test_tags() {
    let (handler, _temp_file) = get_test_handler(vec![
        (1, "a +garden @home\nx b +archived @attic"),
        (2, "c +garden +work @office"),
    ]);

    let projects = handler.handle_tags("project".to_string()).await.unwrap();
    assert_eq!(projects, "+garden\n+work");

    let contexts = handler.handle_tags("context".to_string()).await.unwrap();
    assert_eq!(contexts, "@home\n@office");

    assert!(handler.handle_tags("label".to_string()).await.is_err());
}

// タグがない場合のメッセージテスト
#[tokio::test]
async fn test_tags_empty() {
    let (handler, _temp_file) = get_test_handler(vec![(1, "nothing tagged")]);
    let result = handler.handle_tags("project".to_string()).await.unwrap();
    assert_eq!(result, "No tags found");
}

// 完了処理で行が書き換えられ、ファイルに保存されることを確認
#[tokio::test]
async fn test_complete_rewrites_line() {
    let (handler, temp_file) = get_test_handler(vec![(
        7,
        "Buy milk\n(A) 2024-01-01 Pay rent +bills\n",
    )]);

    let listing = handler.handle_list(None, None, None).await.unwrap();
    let hash = extract_hash_for(&listing, "Pay rent");

    let result = handler.handle_complete(7, hash, None).await.unwrap();
    assert!(result.starts_with("Updated note 7: x (A) "));

    let notes = NoteStore::new(temp_file.path()).load().unwrap();
    let content = &notes.find(7).unwrap().content;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Buy milk");
    assert!(lines[1].starts_with("x (A) "));
    assert!(lines[1].ends_with(" 2024-01-01 Pay rent +bills "));

    // the old hash no longer matches anything
    assert!(handler.handle_complete(7, hash, None).await.is_err());
}

// 完了済みタスクを再オープンできることを確認
#[tokio::test]
async fn test_complete_can_reopen() {
    let (handler, temp_file) =
        get_test_handler(vec![(1, "x 2024-01-05 2024-01-01 Submit report")]);

    let listing = handler.handle_list(None, None, None).await.unwrap();
    let hash = extract_hash_for(&listing, "Submit report");

    handler.handle_complete(1, hash, Some(false)).await.unwrap();

    let notes = NoteStore::new(temp_file.path()).load().unwrap();
    assert_eq!(notes.find(1).unwrap().content, "2024-01-01 Submit report ");
}

// 存在しないノート・ハッシュへのエラーテスト
#[tokio::test]
async fn test_complete_errors() {
    let (handler, _temp_file) = get_test_handler(vec![(1, "Buy milk")]);
    assert!(handler.handle_complete(42, 0, None).await.is_err());
    assert!(handler.handle_complete(1, 12345, None).await.is_err());
}

// 保存に失敗した場合はメモリ上のノートも変更されないことを確認
#[tokio::test]
async fn test_complete_failed_save_keeps_notes() {
    let (handler, temp_file) = get_test_handler(vec![(1, "Buy milk\nWalk dog")]);

    let listing = handler.handle_list(None, None, None).await.unwrap();
    let hash = extract_hash_for(&listing, "Walk dog");

    // a directory in place of the notes file makes the write fail
    std::fs::remove_file(temp_file.path()).unwrap();
    std::fs::create_dir(temp_file.path()).unwrap();

    assert!(handler.handle_complete(1, hash, None).await.is_err());

    let listing = handler.handle_list(None, None, None).await.unwrap();
    assert!(listing.contains("- [ ] Walk dog"));
    assert_eq!(extract_hash_for(&listing, "Walk dog"), hash);

    std::fs::remove_dir(temp_file.path()).unwrap();
}
