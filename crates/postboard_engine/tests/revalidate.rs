use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant, SystemTime};

use postboard_engine::{
    revalidate_users, EngineEvent, FetchSettings, ReqwestFetcher, RevalidateSettings,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS_BODY: &str = r#"[{
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874"},
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org",
    "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net", "bs": "harness real-time e-markets"}
}]"#;

async fn next_event(rx: &mpsc::Receiver<EngineEvent>, deadline: Duration) -> EngineEvent {
    let until = Instant::now() + deadline;
    loop {
        if let Ok(event) = rx.try_recv() {
            return event;
        }
        assert!(Instant::now() < until, "no revalidation event before deadline");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_pass_retries_sooner_and_recovers() {
    let server = MockServer::start().await;
    // First pass fails, every later one succeeds.
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(USERS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    }));
    let settings = RevalidateSettings {
        // Short failure interval so the retry lands inside the test window;
        // long success interval so at most one success is observed.
        success_interval: Duration::from_secs(60),
        failure_interval: Duration::from_millis(50),
    };
    let (tx, rx) = mpsc::channel();
    let started = SystemTime::now();
    let task = tokio::spawn(revalidate_users(fetcher, settings, tx));

    match next_event(&rx, Duration::from_secs(5)).await {
        EngineEvent::UsersRefreshed { fetched_at, result } => {
            assert!(result.is_err(), "first pass must fail");
            assert!(fetched_at >= started);
        }
        other => panic!("unexpected event {other:?}"),
    }

    match next_event(&rx, Duration::from_secs(5)).await {
        EngineEvent::UsersRefreshed { result, .. } => {
            let users = result.expect("second pass must succeed");
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].name, "Leanne Graham");
        }
        other => panic!("unexpected event {other:?}"),
    }

    drop(rx);
    task.abort();
}

#[tokio::test(flavor = "multi_thread")]
async fn loop_stops_once_the_receiver_is_gone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(USERS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    }));
    let settings = RevalidateSettings {
        success_interval: Duration::from_millis(10),
        failure_interval: Duration::from_millis(10),
    };
    let (tx, rx) = mpsc::channel();
    drop(rx);

    let task = tokio::spawn(revalidate_users(fetcher, settings, tx));
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("loop must return after the first failed send")
        .expect("task must not panic");
}
