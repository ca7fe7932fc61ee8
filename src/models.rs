use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub country: String,
    // set once at creation, never reassigned
    pub owner_id: String,
    pub image_filename: String,
    pub image_url: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: String,
    pub author_id: String,
    pub rating: i64,
    pub comment: String,
}
