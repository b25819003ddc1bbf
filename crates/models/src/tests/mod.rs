
/// Database tests need a reachable PostgreSQL; they are skipped when
/// `SKIP_DB_TESTS` is set or no `DATABASE_URL` is configured.
pub(crate) fn db_tests_disabled() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

pub(crate) fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}
