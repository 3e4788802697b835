use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

use plateful_api::auth::{generate_jwt, Claims};
use plateful_api::database::manager::DatabaseManager;

static SERVER: OnceLock<TestServer> = OnceLock::new();

/// Integration tests need a live Postgres; skip cleanly when the
/// environment does not provide one.
pub fn db_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        let mut cmd = Command::new("target/debug/plateful-api");
        cmd.env("PLATEFUL_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

pub async fn test_pool() -> Result<PgPool> {
    let pool = DatabaseManager::connect().await?;
    Ok(pool)
}

/// Apply the schema so a fresh database works out of the box. The DDL is
/// idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    let mut conn = pool.acquire().await?;

    // Tests run in parallel; serialize DDL application
    sqlx::query("SELECT pg_advisory_lock(727274)")
        .execute(&mut *conn)
        .await?;

    let ddl = include_str!("../../db/schema.sql");
    for statement in ddl.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(&mut *conn).await?;
    }

    sqlx::query("SELECT pg_advisory_unlock(727274)")
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Bearer header value for an authenticated request as the given user
pub fn bearer(user_id: Uuid) -> String {
    let token = generate_jwt(Claims::new(user_id)).expect("token generation");
    format!("Bearer {}", token)
}

pub async fn create_user(pool: &PgPool, name: &str) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, surname, email, password_hash) VALUES ($1, 'Tester', $2, 'x') RETURNING id",
    )
    .bind(name)
    .bind(format!("{}-{}@test.plateful", name.to_lowercase(), Uuid::new_v4()))
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_group(pool: &PgPool, name: &str, description: &str) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO groups (name, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn add_member(pool: &PgPool, user_id: Uuid, group_id: Uuid) -> Result<()> {
    sqlx::query("INSERT INTO group_members (user_id, group_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(group_id)
        .execute(pool)
        .await?;
    Ok(())
}
