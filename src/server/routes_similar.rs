//! Similar TV shows page routes.
//!
//! `GET /tv-shows/:tv_id/similar[?page=N]` authenticates the caller and
//! resolves the locale concurrently, then resolves exactly one page of
//! similar titles.

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sora_common::{Error, SimilarResult};

use super::error::AppError;
use super::params::first_query_value;
use super::AppContext;
use crate::similar::{CacheTier, RouteMeta};

/// Create similar-titles routes.
pub fn similar_routes() -> Router<AppContext> {
    Router::new()
        .route("/tv-shows/:tv_id/similar", get(get_similar))
        .route("/tv-shows/:tv_id/similar/meta", get(get_similar_meta))
}

/// Query parameter carrying the raw page.
pub const PAGE_PARAM: &str = "page";

/// Response body of the listing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub similar: SimilarResult,
}

async fn get_similar(
    State(ctx): State<AppContext>,
    tv_id: Result<Path<String>, PathRejection>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let (parts, _body) = request.into_parts();
    let (user, locale) = tokio::try_join!(
        ctx.authenticator.authenticate(&parts),
        ctx.locales.resolve_locale(&parts),
    )?;

    let Path(tv_id) = tv_id.map_err(undecodable_id)?;
    let page = first_query_value(&parts.uri, PAGE_PARAM);
    tracing::debug!(?user, %locale, tv_id = %tv_id, "Resolving similar page");

    let resolved = ctx
        .resolver
        .resolve(&tv_id, page.as_deref(), &locale)
        .await?;

    let cache_control = cache_header(&ctx, resolved.cache)?;

    Ok((
        [(header::CACHE_CONTROL, cache_control)],
        Json(SimilarResponse {
            similar: resolved.similar,
        }),
    ))
}

async fn get_similar_meta(
    State(ctx): State<AppContext>,
    tv_id: Result<Path<String>, PathRejection>,
) -> Result<Json<RouteMeta>, AppError> {
    let Path(tv_id) = tv_id.map_err(undecodable_id)?;
    Ok(Json(RouteMeta::for_listing(&ctx.config.server.site_url, &tv_id)))
}

/// A segment that does not decode can never name a show.
fn undecodable_id(rejection: PathRejection) -> Error {
    tracing::debug!(%rejection, "Undecodable tv show id");
    Error::not_found("tv show")
}

fn cache_header(ctx: &AppContext, tier: CacheTier) -> Result<HeaderValue, Error> {
    let policy = match tier {
        CacheTier::Detail => &ctx.config.server.cache.detail,
    };
    HeaderValue::from_str(policy)
        .map_err(|e| Error::internal(format!("invalid Cache-Control policy {policy:?}: {e}")))
}
