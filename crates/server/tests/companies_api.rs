use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::auth::Claims;
use server::routes;
use server::state::AppState;
use service::actor::Role;
use service::catalog::repository::mock::MockCatalogRepository;
use service::company::repository::mock::MockCompanyRepository;
use service::userservice::mock::StaticSuperuserDirectory;

const SECRET: &str = "test-secret";

struct TestApp {
    base_url: String,
    companies: Arc<MockCompanyRepository>,
    catalog: Arc<MockCatalogRepository>,
}

async fn start_server(directory: StaticSuperuserDirectory) -> anyhow::Result<TestApp> {
    let companies = Arc::new(MockCompanyRepository::default());
    let catalog = Arc::new(MockCatalogRepository::default());
    let state = AppState::new(companies.clone(), Arc::new(directory), catalog.clone(), SECRET);

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, companies, catalog })
}

fn token(uid: i64, role: Role) -> String {
    let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs() as usize;
    let claims = Claims { uid, role, exp: now + 600 };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

fn ids(v: &Value) -> Vec<i64> {
    v["manager_ids"].as_array().unwrap().iter().map(|x| x.as_i64().unwrap()).collect()
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn superuser_creates_company_with_merged_managers() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![1, 2])).await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth(token(1, Role::Superuser))
        .json(&json!({"name": "Shine", "manager_ids": [2, 3]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(ids(&body), vec![1, 2, 3]);

    let id = body["id"].as_i64().unwrap();
    let fetched: Value = c.get(format!("{}/api/v1/companies/{}", app.base_url, id)).send().await?.json().await?;
    assert_eq!(fetched["name"], "Shine");
    assert_eq!(ids(&fetched), vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn writes_require_a_valid_token() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/v1/companies", app.base_url)).json(&json!({"name": "Shine"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth("not-a-jwt")
        .json(&json!({"name": "Shine"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    assert_eq!(app.companies.calls("create"), 0);
    Ok(())
}

#[tokio::test]
async fn regular_user_cannot_create_or_delete() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    app.companies.seed_company(5, "Shine", vec![2]);
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .json(&json!({"name": "Mine"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);

    let res = c
        .delete(format!("{}/api/v1/companies/5", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    assert!(app.companies.snapshot(5).is_some());
    Ok(())
}

#[tokio::test]
async fn manager_update_keeps_superusers_in_manager_list() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![9])).await?;
    app.companies.seed_company(5, "Shine", vec![2, 3]);
    let c = reqwest::Client::new();

    let res = c
        .put(format!("{}/api/v1/companies/5", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .json(&json!({"address": "Main st. 1"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(ids(&body), vec![2, 3, 9]);
    assert_eq!(body["address"], "Main st. 1");

    let res = c
        .put(format!("{}/api/v1/companies/5", app.base_url))
        .bearer_auth(token(4, Role::RegularUser))
        .json(&json!({"name": "Hijacked"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    assert_eq!(app.companies.snapshot(5).unwrap().name, "Shine");
    Ok(())
}

#[tokio::test]
async fn degraded_user_service_still_allows_writes() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::degraded()).await?;
    let res = reqwest::Client::new()
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth(token(1, Role::Superuser))
        .json(&json!({"name": "Shine", "manager_ids": [4]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(ids(&body), vec![4]);
    Ok(())
}

#[tokio::test]
async fn missing_company_and_bad_input_map_to_client_errors() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/api/v1/companies/42", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "company not found");

    let res = c
        .delete(format!("{}/api/v1/companies/42", app.base_url))
        .bearer_auth(token(1, Role::Superuser))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/api/v1/companies/0", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth(token(1, Role::Superuser))
        .json(&json!({"name": "   "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn store_failure_hides_the_cause() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    app.companies.fail_all(true);
    let res = reqwest::get(format!("{}/api/v1/companies", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let text = res.text().await?;
    assert!(!text.contains("connection refused"));
    Ok(())
}

#[tokio::test]
async fn list_companies_filters_by_manager() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    app.companies.seed_company(1, "Shine North", vec![2]);
    app.companies.seed_company(2, "Tyres", vec![3]);

    let body: Value = reqwest::get(format!("{}/api/v1/companies?manager_id=3", app.base_url)).await?.json().await?;
    let companies = body["companies"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["id"], 2);
    assert_eq!(body["pagination"]["total"], 1);
    Ok(())
}

#[tokio::test]
async fn services_list_with_and_without_token() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    app.catalog.seed(5, "Express wash", 1500, 30);
    let c = reqwest::Client::new();

    let body: Value = c.get(format!("{}/api/v1/companies/5/services", app.base_url)).send().await?.json().await?;
    assert_eq!(body["services"].as_array().unwrap().len(), 1);
    assert_eq!(body["services"][0]["price"], 1500);

    let res = c
        .get(format!("{}/api/v1/companies/5/services", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c
        .get(format!("{}/api/v1/companies/5/services", app.base_url))
        .bearer_auth("garbage")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let body: Value = c.get(format!("{}/api/v1/companies/6/services", app.base_url)).send().await?.json().await?;
    assert!(body["services"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn docs_are_served() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    let spec: Value = reqwest::get(format!("{}/api-docs/openapi.json", app.base_url)).await?.json().await?;
    assert!(spec["paths"]["/api/v1/companies"].is_object());
    Ok(())
}

#[tokio::test]
async fn authorization_is_decided_before_payload_validation() -> anyhow::Result<()> {
    let app = start_server(StaticSuperuserDirectory::returning(vec![])).await?;
    app.companies.seed_company(5, "Shine", vec![2]);
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/v1/companies", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .json(&json!({"name": "  "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);

    let res = c
        .put(format!("{}/api/v1/companies/5", app.base_url))
        .bearer_auth(token(4, Role::RegularUser))
        .json(&json!({"manager_ids": [0]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);

    let res = c
        .put(format!("{}/api/v1/companies/5", app.base_url))
        .bearer_auth(token(2, Role::RegularUser))
        .json(&json!({"manager_ids": [0]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "manager_ids must contain positive ids");
    assert_eq!(app.companies.calls("update"), 0);
    Ok(())
}
