use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::domain::FlattenedPerson;
use crate::error::ArchiveError;

#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn init_schema(&self) -> Result<(), ArchiveError>;

    /// Stores one chunk's records in a single transaction.
    async fn insert_all(&self, records: &[FlattenedPerson]) -> Result<(), ArchiveError>;
}

/// SQLite-backed sink: one table, one column per `FlattenedPerson` field.
/// Each chunk insert runs in its own short-lived transaction, so a failed
/// chunk never rolls back an earlier one.
#[derive(Clone)]
pub struct Archive {
    pool: SqlitePool,
}

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS people (
    birth_year TEXT NOT NULL,
    eye_color TEXT NOT NULL,
    films TEXT NOT NULL,
    gender TEXT NOT NULL,
    hair_color TEXT NOT NULL,
    height TEXT NOT NULL,
    homeworld TEXT NOT NULL,
    mass TEXT NOT NULL,
    name TEXT NOT NULL,
    skin_color TEXT NOT NULL,
    species TEXT NOT NULL,
    starships TEXT NOT NULL,
    vehicles TEXT NOT NULL
)";

const INSERT: &str = "\
INSERT INTO people (
    birth_year, eye_color, films, gender, hair_color, height, homeworld,
    mass, name, skin_color, species, starships, vehicles
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

const SELECT_ALL: &str = "\
SELECT birth_year, eye_color, films, gender, hair_color, height, homeworld,
       mass, name, skin_color, species, starships, vehicles
FROM people ORDER BY rowid";

impl Archive {
    pub async fn open(path: &str) -> Result<Self, ArchiveError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{path}?mode=rwc"))
            .map_err(|err| ArchiveError::Database(err.to_string()))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn in_memory() -> Result<Self, ArchiveError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn count(&self) -> Result<i64, ArchiveError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM people")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        Ok(row.get("total"))
    }

    pub async fn load_people(&self) -> Result<Vec<FlattenedPerson>, ArchiveError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|row| FlattenedPerson {
                birth_year: row.get("birth_year"),
                eye_color: row.get("eye_color"),
                films: row.get("films"),
                gender: row.get("gender"),
                hair_color: row.get("hair_color"),
                height: row.get("height"),
                homeworld: row.get("homeworld"),
                mass: row.get("mass"),
                name: row.get("name"),
                skin_color: row.get("skin_color"),
                species: row.get("species"),
                starships: row.get("starships"),
                vehicles: row.get("vehicles"),
            })
            .collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordSink for Archive {
    async fn init_schema(&self) -> Result<(), ArchiveError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        Ok(())
    }

    async fn insert_all(&self, records: &[FlattenedPerson]) -> Result<(), ArchiveError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        for record in records {
            sqlx::query(INSERT)
                .bind(record.birth_year.as_str())
                .bind(record.eye_color.as_str())
                .bind(record.films.as_str())
                .bind(record.gender.as_str())
                .bind(record.hair_color.as_str())
                .bind(record.height.as_str())
                .bind(record.homeworld.as_str())
                .bind(record.mass.as_str())
                .bind(record.name.as_str())
                .bind(record.skin_color.as_str())
                .bind(record.species.as_str())
                .bind(record.starships.as_str())
                .bind(record.vehicles.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|err| ArchiveError::Database(err.to_string()))?;
        }
        tx.commit()
            .await
            .map_err(|err| ArchiveError::Database(err.to_string()))?;
        tracing::debug!(records = records.len(), "chunk committed");
        Ok(())
    }
}
