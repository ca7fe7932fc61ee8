use sqlx::SqlitePool;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    email         TEXT NOT NULL,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS listings (
    id             TEXT PRIMARY KEY,
    title          TEXT NOT NULL,
    description    TEXT NOT NULL,
    price          INTEGER NOT NULL CHECK (price >= 0),
    location       TEXT NOT NULL,
    country        TEXT NOT NULL,
    owner_id       TEXT NOT NULL REFERENCES users(id),
    image_filename TEXT NOT NULL,
    image_url      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS reviews (
    id        TEXT PRIMARY KEY,
    author_id TEXT NOT NULL REFERENCES users(id),
    rating    INTEGER NOT NULL,
    comment   TEXT NOT NULL
);

-- ordered review references; review rows themselves are never cascaded
CREATE TABLE IF NOT EXISTS listing_reviews (
    listing_id TEXT NOT NULL REFERENCES listings(id),
    review_id  TEXT NOT NULL REFERENCES reviews(id)
);
";

pub async fn init(db_pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(db_pool).await?;
    Ok(())
}
