use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const FIXTURE: &str = r#"[
  {"MENU_ITEM_NAME": "Item A", "DATE": "2022-02-02", "ORDER_TOTAL": 20.0},
  {"MENU_ITEM_NAME": "Item B", "DATE": "2022-02-01", "ORDER_TOTAL": 3.5},
  {"MENU_ITEM_NAME": "Item A", "DATE": "2022-02-01", "ORDER_TOTAL": 10.0},
  {"MENU_ITEM_NAME": "Item A", "DATE": "2022-02-01", "ORDER_TOTAL": 5.0},
  {"MENU_ITEM_NAME": "Item C & Co", "DATE": "2022-02-03", "ORDER_TOTAL": 8.0}
]"#;

#[derive(Debug, Deserialize)]
struct ItemsResponse {
    table: String,
    items: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DailyTotal {
    date: String,
    summed_total: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
struct PaddedDomain {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    item: String,
    series: Vec<DailyTotal>,
    domain: Option<PaddedDomain>,
    empty: bool,
    chart: Value,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_table_path(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "menu_sales_http_{tag}_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str, ready: impl Fn(StatusCode) -> bool) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/items")).send().await {
            if ready(resp.status()) {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

fn spawn_child(port: u16, table_path: &str) -> Child {
    Command::new(env!("CARGO_BIN_EXE_menu_sales_dashboard"))
        .env("PORT", port.to_string())
        .env("SALES_TABLE_PATH", table_path)
        .env("SALES_TABLE_NAME", "test.analytics.menu_item_sales")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server")
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let table_path = unique_table_path("shared");
    std::fs::write(&table_path, FIXTURE).expect("write fixture table");

    let child = spawn_child(port, &table_path);

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url, |status| status.is_success()).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_chart(client: &Client, url: String) -> ChartResponse {
    client
        .get(url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_items_list_distinct_names_in_table_order() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let items: ItemsResponse = client
        .get(format!("{}/api/items", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(items.table, "test.analytics.menu_item_sales");
    assert_eq!(items.items, vec!["Item A", "Item B", "Item C & Co"]);
}

#[tokio::test]
async fn http_chart_sums_days_and_pads_domain() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view = fetch_chart(
        &client,
        format!("{}/api/chart?item=Item%20A", server.base_url),
    )
    .await;

    assert_eq!(view.item, "Item A");
    assert!(!view.empty);
    let series: Vec<(&str, f64)> = view
        .series
        .iter()
        .map(|point| (point.date.as_str(), point.summed_total))
        .collect();
    assert_eq!(series, vec![("2022-02-01", 15.0), ("2022-02-02", 20.0)]);
    assert_eq!(view.domain, Some(PaddedDomain { min: 12.5, max: 22.5 }));
    assert_eq!(
        view.chart["title"],
        "Total Daily Sales for Menu Item: Item A"
    );
    assert_eq!(
        view.chart["encoding"]["y"]["scale"]["domain"],
        serde_json::json!([12.5, 22.5])
    );
}

#[tokio::test]
async fn http_chart_defaults_to_first_item() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view = fetch_chart(&client, format!("{}/api/chart", server.base_url)).await;
    assert_eq!(view.item, "Item A");
    assert_eq!(view.series.len(), 2);
}

#[tokio::test]
async fn http_chart_single_day_and_unknown_item() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let single = fetch_chart(
        &client,
        format!("{}/api/chart?item=Item%20C%20%26%20Co", server.base_url),
    )
    .await;
    assert_eq!(single.domain, Some(PaddedDomain { min: 8.0, max: 8.0 }));

    let unknown = fetch_chart(
        &client,
        format!("{}/api/chart?item=Item%20Z", server.base_url),
    )
    .await;
    assert!(unknown.empty);
    assert!(unknown.series.is_empty());
    assert_eq!(unknown.domain, None);
}

#[tokio::test]
async fn http_index_renders_selector() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();

    assert!(html.contains("Menu Item Sales in Japan for February 2022"));
    assert!(html.contains(r#"<option value="Item A" selected>Item A</option>"#));
    assert!(html.contains("Item C &amp; Co"));
}

#[tokio::test]
async fn http_missing_table_is_service_unavailable() {
    let port = pick_free_port();
    let table_path = unique_table_path("missing");
    let base_url = format!("http://127.0.0.1:{port}");
    let _server = TestServer {
        base_url: base_url.clone(),
        child: spawn_child(port, &table_path),
    };
    wait_until_ready(&base_url, |status| {
        status == StatusCode::SERVICE_UNAVAILABLE
    })
    .await;

    let client = Client::new();
    let response = client
        .get(format!("{base_url}/api/chart?item=Item%20A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response.text().await.unwrap();
    assert!(body.contains("test.analytics.menu_item_sales"));
}
