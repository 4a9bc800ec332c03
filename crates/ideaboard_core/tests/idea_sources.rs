use ideaboard_core::{
    BoardConfig, FileIdeaSource, HttpIdeaSource, IdeaBoard, IdeaRecord, IdeaSource, SourceError,
    SourceResult, Track,
};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHEET_PATH: &str = "/api/v1/sheet";

const SHEET_PAYLOAD: &str = r#"[
    {
        "Idea Header (10 words max)": "Vault rebalancer",
        "Idea Description (120 words max)": "Agent that rebalances LP positions",
        "Theme": "DeFi Agents",
        "Platform": "Solana",
        "Reference Links and Examples": "check out https://example.com/page for more",
        "Idea Contributor": "alice",
        "Idea Reviewer": "bob"
    },
    {
        "Idea Header (10 words max)": "Raid leader",
        "Theme": "Gaming",
        "Idea Contributor": ""
    },
    {
        "Idea Header (10 words max)": "Community host",
        "Theme": " social ",
        "Reference Links and Examples": "see example.org"
    }
]"#;

fn http_source(endpoint: &str) -> HttpIdeaSource {
    let config = BoardConfig::default()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(5));
    HttpIdeaSource::try_new(&config).expect("build http source")
}

/// Mounts one GET route on a fresh server that must be hit exactly once.
async fn sheet_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .and(header("Accept", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn sheet_endpoint(server: &MockServer) -> String {
    format!("{}{SHEET_PATH}", server.uri())
}

/// The blocking client owns its own runtime, so it is built, used and
/// dropped off the async workers.
async fn fetch_blocking(endpoint: String) -> SourceResult<Vec<IdeaRecord>> {
    tokio::task::spawn_blocking(move || http_source(&endpoint).fetch_ideas())
        .await
        .expect("blocking fetch task")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn http_source_decodes_sheet_rows_in_order() {
    let server = sheet_server(
        ResponseTemplate::new(200).set_body_raw(SHEET_PAYLOAD, "application/json"),
    )
    .await;

    let ideas = fetch_blocking(sheet_endpoint(&server))
        .await
        .expect("fetch ideas");

    let headers = ideas.iter().map(|i| i.header.as_str()).collect::<Vec<_>>();
    assert_eq!(headers, ["Vault rebalancer", "Raid leader", "Community host"]);
    assert_eq!(ideas[0].reviewer, "bob");
    assert_eq!(ideas[1].contributor_or_anonymous(), "Anonymous");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn http_source_reports_non_success_status() {
    let server = sheet_server(
        ResponseTemplate::new(500).set_body_raw(r#"{"error":"boom"}"#, "application/json"),
    )
    .await;

    let err = fetch_blocking(sheet_endpoint(&server))
        .await
        .expect_err("500 must fail");

    match err {
        SourceError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn http_source_caps_error_body() {
    let body = "x".repeat(1_000);
    let server = sheet_server(ResponseTemplate::new(503).set_body_string(body)).await;

    let err = fetch_blocking(sheet_endpoint(&server))
        .await
        .expect_err("503 must fail");

    match err {
        SourceError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body.len(), 203);
            assert!(body.ends_with("..."));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn http_source_reports_connection_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind free-port listener");
        listener.local_addr().expect("listener address").port()
    };
    let source = http_source(&format!("http://127.0.0.1:{port}/"));

    let err = source.fetch_ideas().expect_err("closed port must fail");
    assert!(matches!(err, SourceError::Http(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn board_swallows_fetch_failure() {
    let server = sheet_server(
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"error":"quota exceeded"}"#, "application/json"),
    )
    .await;
    let endpoint = sheet_endpoint(&server);

    let (loaded, still_loading, visible) = tokio::task::spawn_blocking(move || {
        let source = http_source(&endpoint);
        let mut board = IdeaBoard::new();
        let loaded = board.load(&source);
        (loaded, board.is_loading(), board.visible_ideas().len())
    })
    .await
    .expect("blocking load task");

    assert_eq!(loaded, 0);
    assert!(!still_loading);
    assert_eq!(visible, 0);
}

#[test]
fn file_source_feeds_board_filtering() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, SHEET_PAYLOAD).expect("write snapshot");

    let source = FileIdeaSource::new(&path);
    let mut board = IdeaBoard::new();
    assert_eq!(board.load(&source), 3);

    board.select_track(Some(Track::SocialAgents));
    let visible = board.visible_ideas();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].header, "Community host");

    let view = board.open_reference(0).expect("reference view");
    assert_eq!(view.link.href(), "https://example.org");
}

#[test]
fn file_source_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = FileIdeaSource::new(dir.path().join("absent.json"));

    let err = source.fetch_ideas().expect_err("missing file");
    assert!(matches!(err, SourceError::Io(_)));
}
