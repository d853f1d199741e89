//! HTTP-level tests for the `/v1/movies` endpoints against PostgreSQL.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, location, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_get_delete_lifecycle(pool: PgPool) {
    let app = common::build_pg_app(pool);

    let response = post_json(&app, "/v1/movies", common::pulp_fiction()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = location(&response).expect("Location header");
    let id = location.trim_start_matches("/movies/");

    let response = get(&app, &format!("/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Pulp Fiction");
    assert_eq!(json["id"].to_string(), id);

    let response = delete(&app, &format!("/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_create_returns_409(pool: PgPool) {
    let app = common::build_pg_app(pool.clone());
    post_json(&app, "/v1/movies", common::pulp_fiction()).await;

    let response = post_json(&app, "/v1/movies", common::pulp_fiction()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["errorMessage"], "Movie already exists");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_stars(pool: PgPool) {
    let app = common::build_pg_app(pool);
    let response = post_json(&app, "/v1/movies", common::pulp_fiction()).await;
    let location = location(&response).unwrap();
    let id = location.trim_start_matches("/movies/");

    let body = serde_json::json!({
        "title": "Pulp Fiction",
        "releaseDate": "1999-10-14",
        "stars": ["Bruce Willis", "Bruce Willis"]
    });
    let response = put_json(&app, &format!("/v1/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, &format!("/v1/movies/{id}")).await).await;
    assert_eq!(json["stars"], serde_json::json!(["Bruce Willis"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_onto_other_title_and_date_returns_409(pool: PgPool) {
    let app = common::build_pg_app(pool);
    post_json(&app, "/v1/movies", common::pulp_fiction()).await;
    let response = post_json(&app, "/v1/movies", common::inception()).await;
    let location = location(&response).unwrap();
    let id = location.trim_start_matches("/movies/");

    let response = put_json(&app, &format!("/v1/movies/{id}"), common::pulp_fiction()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Pulp Fiction");
    assert_eq!(json["releaseDate"], "1999-10-14");
    assert_eq!(json["errorMessage"], "Movie already exists");

    let json = body_json(get(&app, &format!("/v1/movies/{id}")).await).await;
    assert_eq!(json["title"], "Inception");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_nul_in_title_returns_400_not_500(pool: PgPool) {
    let app = common::build_pg_app(pool);
    let body = serde_json::json!({
        "title": "Pulp\u{0}Fiction",
        "releaseDate": "1999-10-14",
        "stars": ["Uma Thurman"]
    });

    let response = post_json(&app, "/v1/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errorMessage"],
        "title and stars must not contain NUL characters"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies(pool: PgPool) {
    let app = common::build_pg_app(pool);
    post_json(&app, "/v1/movies", common::pulp_fiction()).await;
    post_json(&app, "/v1/movies", common::inception()).await;

    let response = get(&app, "/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["title"], "Pulp Fiction");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let app = common::build_pg_app(pool);
    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
