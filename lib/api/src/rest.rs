use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use librix_core::{Error, Library, PosterResolver, Recommender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::page::{render_page, Card, Theme};

#[derive(Deserialize)]
struct PageQuery {
    book: Option<String>,
    theme: Option<String>,
}

#[derive(Deserialize)]
struct RecommendQuery {
    title: String,
}

#[derive(Serialize)]
struct RecommendResult {
    title: String,
    distance: f32,
    poster_url: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(library: Arc<Library>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(library.clone()))
                .route("/", web::get().to(index))
                .route("/health", web::get().to(health))
                .route("/api/books", web::get().to(list_books))
                .route("/api/recommend", web::get().to(recommend))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Run the lookup pipeline for the gallery: neighbors for the title, the
/// queried book itself excluded, next five shown with covers resolved.
fn build_cards(library: &Arc<Library>, title: &str) -> librix_core::Result<Vec<Card>> {
    let recommender = Recommender::new(library.clone());
    let resolver = PosterResolver::new(library.clone());

    let recommendations = recommender.recommend(title)?;

    Ok(recommendations
        .into_iter()
        .skip(1) // the queried book itself
        .take(5)
        .map(|r| {
            if resolver.poster_url(&r.title).is_none() {
                warn!("No cover art for {}, using placeholder", r.title);
            }
            let poster_url = resolver.poster_url_or_placeholder(&r.title).to_string();
            Card {
                title: r.title,
                poster_url,
            }
        })
        .collect())
}

async fn index(
    library: web::Data<Arc<Library>>,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    let theme = Theme::from_name(query.theme.as_deref());
    let titles = library.catalog().titles();

    // The pipeline only runs when the trigger fired with a real selection;
    // a bare submit renders the same page with no gallery.
    let selected = query
        .book
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (cards, unknown) = match selected {
        Some(book) => match build_cards(&library, book) {
            Ok(cards) => (cards, false),
            Err(Error::TitleNotFound(_)) => (Vec::new(), true),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(e.to_string()));
            }
        },
        None => (Vec::new(), false),
    };

    let html = render_page(titles, selected, &cards, unknown, &theme);
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

async fn health(library: web::Data<Arc<Library>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "books": library.matrix().row_count(),
        "metadata_rows": library.ratings().len(),
    })))
}

async fn list_books(library: web::Data<Arc<Library>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": library.catalog().titles(),
    })))
}

/// Full neighbor list for a title, the queried book first. The gallery's
/// skip-self rule is presentation policy and stays out of this endpoint.
async fn recommend(
    library: web::Data<Arc<Library>>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let recommender = Recommender::new(library.get_ref().clone());
    let resolver = PosterResolver::new(library.get_ref().clone());

    match recommender.recommend(&query.title) {
        Ok(recommendations) => {
            let results: Vec<RecommendResult> = recommendations
                .into_iter()
                .map(|r| {
                    let poster_url = resolver.poster_url_or_placeholder(&r.title).to_string();
                    RecommendResult {
                        title: r.title,
                        distance: r.distance,
                        poster_url,
                    }
                })
                .collect();

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": results
            })))
        }
        Err(Error::TitleNotFound(title)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Title not found: {title}")
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
