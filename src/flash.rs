use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::AppResult;

const FLASH: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub kind: Kind,
    pub text: String,
}

pub async fn success(session: &Session, text: impl Into<String>) -> AppResult<()> {
    push(session, Kind::Success, text.into()).await
}

pub async fn error(session: &Session, text: impl Into<String>) -> AppResult<()> {
    push(session, Kind::Error, text.into()).await
}

async fn push(session: &Session, kind: Kind, text: String) -> AppResult<()> {
    let mut queue: Vec<Flash> = session.get(FLASH).await?.unwrap_or_default();
    queue.push(Flash { kind, text });
    session.insert(FLASH, &queue).await?;
    Ok(())
}

// drains the queue; a notice only ever survives one round-trip
pub async fn take(session: &Session) -> AppResult<Vec<Flash>> {
    Ok(session.remove(FLASH).await?.unwrap_or_default())
}
