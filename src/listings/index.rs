use axum::{
    debug_handler,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{flash, include_res, models::Listing, pages, AppResult};

#[derive(Deserialize)]
pub(crate) struct IndexQuery {
    #[serde(rename = "maxPrice")]
    max_price: Option<String>,
    location: Option<String>,
}

#[debug_handler]
pub(crate) async fn index(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Query(IndexQuery {
        max_price,
        location,
    }): Query<IndexQuery>,
) -> AppResult<Response> {
    // empty inputs arrive as empty strings from the filter form
    let max_price: Option<i64> = max_price.as_deref().and_then(|s| s.trim().parse().ok());
    let location = location.filter(|s| !s.is_empty());

    let mut sql = String::from(
        "SELECT id,title,description,price,location,country,owner_id,image_filename,image_url \
         FROM listings",
    );
    let mut clauses = Vec::new();
    if max_price.is_some() {
        clauses.push("price <= ?");
    }
    if location.is_some() {
        clauses.push("location LIKE ?");
    }
    if !clauses.is_empty() {
        sql += " WHERE ";
        sql += &clauses.join(" AND ");
    }

    let mut query = sqlx::query_as::<_, Listing>(&sql);
    if let Some(max_price) = max_price {
        query = query.bind(max_price);
    }
    if let Some(location) = &location {
        query = query.bind(format!("%{location}%"));
    }
    let listings = query.fetch_all(&db_pool).await?;

    let mut items = String::new();
    for listing in &listings {
        items += &include_res!(str, "/pages/listings/item.html")
            .replace("{id}", &listing.id)
            .replace("{image_url}", &listing.image_url)
            .replace("{price}", &listing.price.to_string())
            .replace("{title}", &pages::esc(&listing.title))
            .replace("{location}", &pages::esc(&listing.location));
    }

    let flashes = flash::take(&session).await?;
    let body = include_res!(str, "/pages/listings/index.html").replace("{items}", &items);
    Ok(pages::with_flash(&body, &flashes).into_response())
}
