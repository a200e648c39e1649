use crate::models::{BudgetTier, Destination, GroupTier, TravelerProfile};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading or writing stored records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Narrow persistence contract for traveler profiles.
///
/// The matching core only ever needs get-by-id, list-all and save; any
/// storage engine that can do those three can back the service.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<TravelerProfile, StoreError>;
    async fn list(&self) -> Result<Vec<TravelerProfile>, StoreError>;
    async fn save(&self, profile: &TravelerProfile) -> Result<(), StoreError>;
}

/// Read-only contract for the destination catalog.
///
/// `list` must return destinations in a stable order: ranking ties are
/// broken by catalog iteration order.
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    async fn get(&self, place_id: &str) -> Result<Destination, StoreError>;
    async fn list(&self) -> Result<Vec<Destination>, StoreError>;
}

fn budget_tier_from_str(value: &str) -> Result<BudgetTier, StoreError> {
    match value {
        "low" => Ok(BudgetTier::Low),
        "medium" => Ok(BudgetTier::Medium),
        "high" => Ok(BudgetTier::High),
        other => Err(StoreError::Corrupt(format!("unknown budget tier: {}", other))),
    }
}

fn group_tier_from_str(value: &str) -> Result<GroupTier, StoreError> {
    match value {
        "solo" => Ok(GroupTier::Solo),
        "couple" => Ok(GroupTier::Couple),
        "group" => Ok(GroupTier::Group),
        other => Err(StoreError::Corrupt(format!("unknown group tier: {}", other))),
    }
}

fn from_json<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<T, StoreError> {
    serde_json::from_value(value)
        .map_err(|e| StoreError::Corrupt(format!("bad {} payload: {}", what, e)))
}

/// PostgreSQL-backed store for profiles and the destination catalog.
///
/// Profiles are written once at onboarding and never updated. Destinations
/// are seeded by migration and read-only at runtime, ordered by their seed
/// position so ranking tie-breaks stay deterministic.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings.
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    fn profile_from_row(row: &sqlx::postgres::PgRow) -> Result<TravelerProfile, StoreError> {
        let budget: String = row.get("budget_tier");
        let group: String = row.get("group_tier");
        let persona: Option<serde_json::Value> = row.get("persona");

        Ok(TravelerProfile {
            user_id: row.get("user_id"),
            vibe: from_json(row.get("vibe"), "vibe")?,
            budget_tier: budget_tier_from_str(&budget)?,
            group_tier: group_tier_from_str(&group)?,
            persona: persona.map(|v| from_json(v, "persona")).transpose()?,
            created_at: row.get("created_at"),
        })
    }

    fn destination_from_row(row: &sqlx::postgres::PgRow) -> Result<Destination, StoreError> {
        let budget: String = row.get("budget_tier");
        let group: String = row.get("group_tier");

        Ok(Destination {
            place_id: row.get("place_id"),
            name: row.get("name"),
            region: row.get("region"),
            description: row.get("description"),
            vibe: from_json(row.get("vibe"), "vibe")?,
            budget_tier: budget_tier_from_str(&budget)?,
            group_tier: group_tier_from_str(&group)?,
        })
    }
}

#[async_trait]
impl ProfileStore for PostgresStore {
    async fn get(&self, user_id: &str) -> Result<TravelerProfile, StoreError> {
        let query = r#"
            SELECT user_id, vibe, budget_tier, group_tier, persona, created_at
            FROM traveler_profiles
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("profile {}", user_id)))?;

        Self::profile_from_row(&row)
    }

    async fn list(&self) -> Result<Vec<TravelerProfile>, StoreError> {
        let query = r#"
            SELECT user_id, vibe, budget_tier, group_tier, persona, created_at
            FROM traveler_profiles
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        rows.iter().map(Self::profile_from_row).collect()
    }

    async fn save(&self, profile: &TravelerProfile) -> Result<(), StoreError> {
        // Profiles are immutable after onboarding; a duplicate id is a no-op.
        let query = r#"
            INSERT INTO traveler_profiles (user_id, vibe, budget_tier, group_tier, persona, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO NOTHING
        "#;

        let vibe = serde_json::to_value(profile.vibe)
            .map_err(|e| StoreError::Corrupt(format!("bad vibe payload: {}", e)))?;
        let persona = profile
            .persona
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| StoreError::Corrupt(format!("bad persona payload: {}", e)))?;

        sqlx::query(query)
            .bind(&profile.user_id)
            .bind(vibe)
            .bind(profile.budget_tier.as_str())
            .bind(profile.group_tier.as_str())
            .bind(persona)
            .bind(profile.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved profile {}", profile.user_id);

        Ok(())
    }
}

#[async_trait]
impl DestinationCatalog for PostgresStore {
    async fn get(&self, place_id: &str) -> Result<Destination, StoreError> {
        let query = r#"
            SELECT place_id, name, region, description, vibe, budget_tier, group_tier
            FROM destinations
            WHERE place_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(place_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("destination {}", place_id)))?;

        Self::destination_from_row(&row)
    }

    async fn list(&self) -> Result<Vec<Destination>, StoreError> {
        let query = r#"
            SELECT place_id, name, region, description, vibe, budget_tier, group_tier
            FROM destinations
            ORDER BY position
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        rows.iter().map(Self::destination_from_row).collect()
    }
}

/// In-memory profile store. Used by tests and available as a process-scoped
/// store when no database is configured.
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, TravelerProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, user_id: &str) -> Result<TravelerProfile, StoreError> {
        self.profiles
            .read()
            .expect("profile store lock poisoned")
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("profile {}", user_id)))
    }

    async fn list(&self) -> Result<Vec<TravelerProfile>, StoreError> {
        Ok(self
            .profiles
            .read()
            .expect("profile store lock poisoned")
            .values()
            .cloned()
            .collect())
    }

    async fn save(&self, profile: &TravelerProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .expect("profile store lock poisoned")
            .entry(profile.user_id.clone())
            .or_insert_with(|| profile.clone());
        Ok(())
    }
}

/// Immutable in-memory destination catalog snapshot. Preserves insertion
/// order, which is the order ranking ties are broken in.
pub struct MemoryCatalog {
    destinations: Vec<Destination>,
}

impl MemoryCatalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }
}

#[async_trait]
impl DestinationCatalog for MemoryCatalog {
    async fn get(&self, place_id: &str) -> Result<Destination, StoreError> {
        self.destinations
            .iter()
            .find(|d| d.place_id == place_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("destination {}", place_id)))
    }

    async fn list(&self) -> Result<Vec<Destination>, StoreError> {
        Ok(self.destinations.clone())
    }
}
