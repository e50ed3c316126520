//! Integration tests for the API methods: getUpdates, sendMessage, getFile, sendDocument.
//!
//! Each test runs against a mockito server standing in for the Bot API root. Covers wire
//! fields, envelope handling (`ok: false`, missing result), and non-2xx statuses.

mod common;

use std::io::Write;
use std::sync::{Arc, Mutex};

use common::{bot_for, file_path, init_tracing, method_path, sent_message_body, TEST_BOT_TOKEN};
use mockito::Matcher;
use telegram_bot::{BotError, BotErrorKind};

/// **Test: getUpdates sends `offset` and returns the batch in wire order.**
#[tokio::test]
async fn test_get_updates_in_wire_order() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("getUpdates").as_str())
        .match_body(Matcher::UrlEncoded("offset".into(), "0".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok": true, "result": [
                {"update_id": 11, "message": {"message_id": 2, "chat": {"id": 5, "type": "private"}, "date": 1, "text": "second"}},
                {"update_id": 10, "message": {"message_id": 1, "chat": {"id": 5, "type": "private"}, "date": 1, "text": "first"}}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let updates = bot_for(&server).get_updates(0).await.unwrap();

    let ids: Vec<i64> = updates.iter().map(|u| u.update_id).collect();
    assert_eq!(ids, vec![11, 10]);
    assert_eq!(updates[0].text(), "second");
    mock.assert_async().await;
}

/// **Test: getUpdates never sends a long-poll timeout.**
#[tokio::test]
async fn test_get_updates_sends_only_offset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("getUpdates").as_str())
        .match_body("offset=12")
        .with_status(200)
        .with_body(r#"{"ok": true, "result": []}"#)
        .expect(1)
        .create_async()
        .await;

    let updates = bot_for(&server).get_updates(12).await.unwrap();

    assert!(updates.is_empty());
    mock.assert_async().await;
}

/// **Test: `ok: false` with HTTP 200 is an api-not-ok error carrying the description.**
#[tokio::test]
async fn test_get_updates_not_ok() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", method_path("getUpdates").as_str())
        .with_status(200)
        .with_body(r#"{"ok": false, "description": "x"}"#)
        .create_async()
        .await;

    let err = bot_for(&server).get_updates(0).await.unwrap_err();

    assert_eq!(err.kind(), BotErrorKind::ApiNotOk);
    match err {
        BotError::ApiNotOk { method, description, .. } => {
            assert_eq!(method, "getUpdates");
            assert_eq!(description.as_deref(), Some("x"));
        }
        other => panic!("expected ApiNotOk, got {other:?}"),
    }
}

/// **Test: any non-2xx response fails the operation, whatever the body says.**
#[tokio::test]
async fn test_non_2xx_fails_every_operation() {
    let mut server = mockito::Server::new_async().await;
    let ok_body = r#"{"ok": true, "result": []}"#;
    let _updates = server
        .mock("POST", method_path("getUpdates").as_str())
        .with_status(502)
        .with_body(ok_body)
        .create_async()
        .await;
    let _send = server
        .mock("POST", method_path("sendMessage").as_str())
        .with_status(500)
        .with_body(sent_message_body(1, "x"))
        .create_async()
        .await;
    let _file = server
        .mock("POST", method_path("getFile").as_str())
        .with_status(403)
        .with_body(r#"{"ok": true, "result": {"file_id": "F", "file_path": "a.txt"}}"#)
        .create_async()
        .await;
    let _doc = server
        .mock("POST", method_path("sendDocument").as_str())
        .with_status(413)
        .create_async()
        .await;

    let bot = bot_for(&server);
    let mut upload = tempfile::NamedTempFile::new().unwrap();
    writeln!(upload, "data").unwrap();

    let errors = vec![
        bot.get_updates(0).await.unwrap_err(),
        bot.send_message(1, "x").await.unwrap_err(),
        bot.get_file_url("F").await.unwrap_err(),
        bot.send_file(1, upload.path(), "").await.unwrap_err(),
    ];
    let statuses: Vec<u16> = errors
        .iter()
        .map(|e| match e {
            BotError::HttpStatus { status, .. } => status.as_u16(),
            other => panic!("expected HttpStatus, got {other:?}"),
        })
        .collect();
    assert_eq!(statuses, vec![502, 500, 403, 413]);
}

/// **Test: sendMessage posts `chat_id` in decimal and `text` raw, and returns the sent message.**
#[tokio::test]
async fn test_send_message_fields() {
    let mut server = mockito::Server::new_async().await;
    let text = "héllo & <b>world</b> = 100%";
    let mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "-1001234567890".into()),
            Matcher::UrlEncoded("text".into(), text.into()),
        ]))
        .with_status(200)
        .with_body(sent_message_body(-1001234567890, text))
        .expect(1)
        .create_async()
        .await;

    let sent = bot_for(&server).send_message(-1001234567890, text).await.unwrap();

    assert_eq!(sent.chat.id, -1001234567890);
    assert_eq!(sent.text, text);
    mock.assert_async().await;
}

/// **Test: getFile result resolves to `<root>/file/bot<TOKEN>/<file_path>`.**
#[tokio::test]
async fn test_get_file_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("getFile").as_str())
        .match_body(Matcher::UrlEncoded("file_id".into(), "BQACAgIAAxkB".into()))
        .with_status(200)
        .with_body(r#"{"ok": true, "result": {"file_id": "BQACAgIAAxkB", "file_unique_id": "AgAD", "file_size": 9, "file_path": "documents/file_3.txt"}}"#)
        .expect(1)
        .create_async()
        .await;

    let url = bot_for(&server).get_file_url("BQACAgIAAxkB").await.unwrap();

    assert_eq!(
        url,
        format!("{}/file/bot{}/documents/file_3.txt", server.url(), TEST_BOT_TOKEN)
    );
    assert!(url.ends_with(&file_path("documents/file_3.txt")));
    mock.assert_async().await;
}

/// **Test: an ok getFile result without `file_path` still yields a URL at the download root.**
#[tokio::test]
async fn test_get_file_url_without_file_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("getFile").as_str())
        .match_body(Matcher::UrlEncoded("file_id".into(), "F".into()))
        .with_status(200)
        .with_body(r#"{"ok": true, "result": {"file_id": "F"}}"#)
        .create_async()
        .await;

    let url = bot_for(&server).get_file_url("F").await.unwrap();

    assert_eq!(url, format!("{}/file/bot{}/", server.url(), TEST_BOT_TOKEN));
    mock.assert_async().await;
}

/// **Test: getFile with `ok: false` yields no URL.**
#[tokio::test]
async fn test_get_file_url_not_ok() {
    let mut server = mockito::Server::new_async().await;
    let _not_ok = server
        .mock("POST", method_path("getFile").as_str())
        .match_body(Matcher::UrlEncoded("file_id".into(), "gone".into()))
        .with_status(200)
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: invalid file_id"}"#)
        .create_async()
        .await;

    let bot = bot_for(&server);
    let err = bot.get_file_url("gone").await.unwrap_err();
    match err {
        BotError::ApiNotOk { error_code, .. } => assert_eq!(error_code, Some(400)),
        other => panic!("expected ApiNotOk, got {other:?}"),
    }
}

/// Mock for sendDocument that records the raw request body.
async fn capture_send_document(server: &mut mockito::ServerGuard) -> (mockito::Mock, Arc<Mutex<String>>) {
    let captured = Arc::new(Mutex::new(String::new()));
    let sink = captured.clone();
    let mock = server
        .mock("POST", method_path("sendDocument").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .with_status(200)
        .with_body_from_request(move |request| {
            let body = request
                .utf8_lossy_body()
                .map(|b| b.into_owned())
                .unwrap_or_default();
            *sink.lock().unwrap() = body;
            sent_message_body(77, "").into_bytes()
        })
        .expect(1)
        .create_async()
        .await;
    (mock, captured)
}

/// **Test: sendDocument uploads the file under its basename with chat_id and caption parts.**
#[tokio::test]
async fn test_send_document_multipart() {
    let mut server = mockito::Server::new_async().await;
    let (mock, captured) = capture_send_document(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let sent = bot_for(&server).send_file(77, &path, "weekly report").await.unwrap();

    assert_eq!(sent.chat.id, 77);
    mock.assert_async().await;
    let body = captured.lock().unwrap().clone();
    assert!(body.contains(r#"name="document"; filename="report.txt""#), "{body}");
    assert!(body.contains("line one\nline two\n"));
    assert!(body.contains("name=\"chat_id\"\r\n\r\n77\r\n"));
    assert!(body.contains("name=\"caption\"\r\n\r\nweekly report\r\n"));
}

/// **Test: an empty caption is omitted from the multipart body.**
#[tokio::test]
async fn test_send_document_without_caption() {
    let mut server = mockito::Server::new_async().await;
    let (mock, captured) = capture_send_document(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    std::fs::write(&path, "").unwrap();

    bot_for(&server).send_file(77, &path, "").await.unwrap();

    mock.assert_async().await;
    let body = captured.lock().unwrap().clone();
    assert!(body.contains(r#"filename="empty.log""#));
    assert!(!body.contains(r#"name="caption""#));
}

/// **Test: a missing local file fails with io-local before any request.**
#[tokio::test]
async fn test_send_document_missing_file() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = bot_for(&server).send_file(1, &missing, "c").await.unwrap_err();

    assert_eq!(err.kind(), BotErrorKind::LocalIo);
    match err {
        BotError::LocalIo { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected LocalIo, got {other:?}"),
    }
    any.assert_async().await;
}

/// **Test: transport failures never carry the token in their text.**
///
/// Setup: bot whose API root refuses connections. Action: poll and download.
/// Expected: Transport errors whose Display and Debug omit the token.
#[tokio::test]
async fn test_transport_error_hides_token() {
    let token = "123456789:SECRETSECRETSECRET";
    let bot = telegram_bot::Bot::builder(token)
        .api_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let poll_err = bot.get_updates(0).await.unwrap_err();
    let download_err = bot
        .download_file(&format!("http://127.0.0.1:9/file/bot{}/x.txt", token))
        .await
        .unwrap_err();

    for err in [poll_err, download_err] {
        assert_eq!(err.kind(), BotErrorKind::Transport);
        assert!(!err.to_string().contains("SECRET"), "{err}");
        assert!(!format!("{err:?}").contains("SECRET"), "{err:?}");
    }
}
