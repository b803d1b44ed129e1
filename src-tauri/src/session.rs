//! Signed-in admin and vendor accounts, persisted in SQLite with an expiry.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::db::Database;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    Admin,
    Vendor,
}

impl Portal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Portal::Admin => "admin",
            Portal::Vendor => "vendor",
        }
    }

    pub fn login_route(&self) -> &'static str {
        match self {
            Portal::Admin => "/login",
            Portal::Vendor => "/vender-login",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub portal: Portal,
    pub profile: Value,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Display name of the signed-in account, used to scope vendor screens.
    pub fn display_name(&self) -> Option<&str> {
        self.profile
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Read access to the current session of a portal.
pub trait SessionSource {
    fn current(&self, portal: Portal, now: DateTime<Utc>) -> AppResult<Option<Session>>;
}

pub struct SessionStore<'a> {
    db: &'a Database,
}

impl<'a> SessionStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn start(
        &self,
        portal: Portal,
        profile: Value,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> AppResult<Session> {
        let ttl = ChronoDuration::from_std(ttl).map_err(|e| AppError::Internal(e.to_string()))?;
        let session = Session {
            portal,
            profile,
            created_at: now,
            expires_at: now + ttl,
        };

        let conn = self
            .db
            .conn
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        conn.execute(
            "INSERT INTO sessions (portal, profile, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(portal) DO UPDATE SET profile = excluded.profile,
                 created_at = excluded.created_at, expires_at = excluded.expires_at",
            rusqlite::params![
                portal.as_str(),
                session.profile.to_string(),
                session.created_at.to_rfc3339(),
                session.expires_at.to_rfc3339(),
            ],
        )?;

        let portal = portal.as_str();
        tracing::info!(portal, expires_at = %session.expires_at, "session started");
        Ok(session)
    }

    pub fn end(&self, portal: Portal) -> AppResult<bool> {
        let conn = self
            .db
            .conn
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let removed = conn.execute("DELETE FROM sessions WHERE portal = ?1", [portal.as_str()])?;
        if removed > 0 {
            tracing::info!(portal = portal.as_str(), "session ended");
        }
        Ok(removed > 0)
    }

    /// Like `current`, but a missing session is an error.
    pub fn require(&self, portal: Portal, now: DateTime<Utc>) -> AppResult<Session> {
        self.current(portal, now)?.ok_or(AppError::Unauthenticated)
    }
}

impl SessionSource for SessionStore<'_> {
    fn current(&self, portal: Portal, now: DateTime<Utc>) -> AppResult<Option<Session>> {
        let conn = self
            .db
            .conn
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT profile, created_at, expires_at FROM sessions WHERE portal = ?1",
                [portal.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((profile, created_at, expires_at)) = row else {
            return Ok(None);
        };

        let session = match decode_session(portal, &profile, &created_at, &expires_at) {
            Some(session) => session,
            None => {
                tracing::warn!(portal = portal.as_str(), "discarding unreadable session");
                conn.execute("DELETE FROM sessions WHERE portal = ?1", [portal.as_str()])?;
                return Ok(None);
            }
        };

        if session.is_expired(now) {
            tracing::info!(portal = portal.as_str(), "session expired");
            conn.execute("DELETE FROM sessions WHERE portal = ?1", [portal.as_str()])?;
            return Ok(None);
        }

        Ok(Some(session))
    }
}

fn decode_session(
    portal: Portal,
    profile: &str,
    created_at: &str,
    expires_at: &str,
) -> Option<Session> {
    Some(Session {
        portal,
        profile: serde_json::from_str(profile).ok()?,
        created_at: DateTime::parse_from_rfc3339(created_at).ok()?.with_timezone(&Utc),
        expires_at: DateTime::parse_from_rfc3339(expires_at).ok()?.with_timezone(&Utc),
    })
}
