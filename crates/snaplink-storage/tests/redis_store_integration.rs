use redis::AsyncCommands;
use snaplink_core::ShortCode;
use snaplink_storage::{LinkStore, RedisLinkStore, StoreError};
use snaplink_test_infra::redis::{RedisConfig, RedisServer};

struct Fixture {
    redis: RedisServer,
}

impl Fixture {
    async fn start() -> Self {
        let redis = RedisServer::new(RedisConfig::builder().build())
            .await
            .expect("start redis");
        Self { redis }
    }

    async fn store(&self) -> RedisLinkStore {
        RedisLinkStore::new(self.redis.connection().await.expect("redis connection"))
    }
}

fn code(value: &str) -> ShortCode {
    ShortCode::new(value).expect("valid short code")
}

#[tokio::test]
async fn insert_then_lookup() {
    let fixture = Fixture::start().await;
    let store = fixture.store().await;

    assert!(store
        .try_insert(&code("abc123"), "https://example.com/very/long/path")
        .await
        .unwrap());

    let record = store.lookup(&code("abc123")).await.unwrap().unwrap();
    assert_eq!(record.short_code, code("abc123"));
    assert_eq!(record.destination_url, "https://example.com/very/long/path");
}

#[tokio::test]
async fn lookup_missing_code() {
    let fixture = Fixture::start().await;
    let store = fixture.store().await;

    assert!(store.lookup(&code("nope12")).await.unwrap().is_none());
}

#[tokio::test]
async fn second_insert_is_rejected_and_first_record_kept() {
    let fixture = Fixture::start().await;
    let store = fixture.store().await;

    assert!(store
        .try_insert(&code("dup123"), "https://first.example")
        .await
        .unwrap());
    assert!(!store
        .try_insert(&code("dup123"), "https://second.example")
        .await
        .unwrap());

    let record = store.lookup(&code("dup123")).await.unwrap().unwrap();
    assert_eq!(record.destination_url, "https://first.example");
}

#[tokio::test]
async fn concurrent_inserts_across_connections_have_one_winner() {
    let fixture = Fixture::start().await;
    let mut handles = Vec::new();

    for i in 0..16 {
        let store = fixture.store().await;
        handles.push(tokio::spawn(async move {
            store
                .try_insert(&code("race01"), &format!("https://example{}.com", i))
                .await
                .unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
}

#[tokio::test]
async fn prefixes_isolate_stores() {
    let fixture = Fixture::start().await;
    let conn = fixture.redis.connection().await.unwrap();

    let first = RedisLinkStore::with_prefix(conn.clone(), "tenant1:");
    let second = RedisLinkStore::with_prefix(conn, "tenant2:");

    assert!(first
        .try_insert(&code("shared"), "https://one.example")
        .await
        .unwrap());

    assert!(second.lookup(&code("shared")).await.unwrap().is_none());
    assert!(second
        .try_insert(&code("shared"), "https://two.example")
        .await
        .unwrap());
}

#[tokio::test]
async fn corrupt_payload_is_invalid_data() {
    let fixture = Fixture::start().await;
    let store = fixture.store().await;

    let mut raw = fixture.redis.connection().await.unwrap();
    raw.set::<_, _, ()>("snaplink:link:broken", "not json")
        .await
        .unwrap();

    let err = store.lookup(&code("broken")).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[tokio::test]
async fn connect_by_url() {
    let fixture = Fixture::start().await;
    let url = fixture.redis.redis_url().await.unwrap();

    let store = RedisLinkStore::connect(&url).await.unwrap();
    assert!(store
        .try_insert(&code("viaUrl"), "https://example.com")
        .await
        .unwrap());
}
