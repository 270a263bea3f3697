use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{Offer, Profile};

/// Errors that can occur when interacting with the catalog database
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

const CREATE_SCHOLARSHIPS: &str = "
CREATE TABLE IF NOT EXISTS scholarships (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    provider TEXT NOT NULL,
    description TEXT NOT NULL,
    country TEXT NOT NULL,
    education_level TEXT NOT NULL,
    field TEXT NOT NULL,
    min_gpa REAL NOT NULL,
    max_income INTEGER NOT NULL,
    min_age INTEGER NOT NULL,
    max_age INTEGER NOT NULL,
    award_amount REAL NOT NULL,
    deadline TEXT NOT NULL
)";

const CREATE_STUDENTS: &str = "
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    country TEXT NOT NULL,
    education_level TEXT NOT NULL,
    gpa REAL NOT NULL,
    field_of_study TEXT NOT NULL,
    income INTEGER NOT NULL,
    created_at TEXT NOT NULL
)";

/// SQLite-backed store for the offer catalog and submitted profiles
///
/// The catalog is the single source of truth for offers; the ranking
/// core consumes `all_offers` as a snapshot-in-time and never writes
/// back.
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Open (and create if missing) the catalog database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, CatalogError> {
        // SQLite creates missing files but not missing directories.
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the schema when it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), CatalogError> {
        sqlx::query(CREATE_SCHOLARSHIPS).execute(&self.pool).await?;
        sqlx::query(CREATE_STUDENTS).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert the built-in seed catalog, only when the table is empty.
    pub async fn seed_if_empty(&self) -> Result<(), CatalogError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scholarships")
            .fetch_one(&self.pool)
            .await?;

        if existing > 0 {
            return Ok(());
        }

        for seed in SEED_OFFERS {
            sqlx::query(
                "INSERT INTO scholarships (
                    name, provider, description, country, education_level, field,
                    min_gpa, max_income, min_age, max_age, award_amount, deadline
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(seed.name)
            .bind(seed.provider)
            .bind(seed.description)
            .bind(seed.country)
            .bind(seed.education_level)
            .bind(seed.field)
            .bind(seed.min_gpa)
            .bind(seed.max_income)
            .bind(seed.min_age)
            .bind(seed.max_age)
            .bind(seed.award_amount)
            .bind(seed.deadline)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!("Seeded catalog with {} offers", SEED_OFFERS.len());
        Ok(())
    }

    /// Fetch the full offer catalog in stable table order.
    pub async fn all_offers(&self) -> Result<Vec<Offer>, CatalogError> {
        let offers = sqlx::query_as::<_, Offer>("SELECT * FROM scholarships ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(offers)
    }

    /// Persist a submitted candidate profile, returning the row id.
    pub async fn save_profile(&self, profile: &Profile) -> Result<i64, CatalogError> {
        let result = sqlx::query(
            "INSERT INTO students (name, age, country, education_level, gpa, field_of_study, income, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.country)
        .bind(&profile.education_level)
        .bind(profile.gpa)
        .bind(&profile.field_of_study)
        .bind(profile.income)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(true)
    }
}

struct SeedOffer {
    name: &'static str,
    provider: &'static str,
    description: &'static str,
    country: &'static str,
    education_level: &'static str,
    field: &'static str,
    min_gpa: f64,
    max_income: i64,
    min_age: u8,
    max_age: u8,
    award_amount: f64,
    deadline: &'static str,
}

const SEED_OFFERS: &[SeedOffer] = &[
    SeedOffer {
        name: "Global Excellence Scholarship",
        provider: "World Education Fund",
        description: "Merit award for outstanding academic performance in any discipline.",
        country: "Any",
        education_level: "Bachelor",
        field: "Any",
        min_gpa: 3.5,
        max_income: 60_000,
        min_age: 17,
        max_age: 25,
        award_amount: 10_000.0,
        deadline: "2026-11-30",
    },
    SeedOffer {
        name: "STEM Futures Grant",
        provider: "National Science Council",
        description: "Support for undergraduate students pursuing computer science.",
        country: "US",
        education_level: "Bachelor",
        field: "Computer Science",
        min_gpa: 3.0,
        max_income: 80_000,
        min_age: 18,
        max_age: 24,
        award_amount: 7_500.0,
        deadline: "2026-10-15",
    },
    SeedOffer {
        name: "First Generation Bursary",
        provider: "Access Education Trust",
        description: "Needs-based award for first generation students of any field.",
        country: "Any",
        education_level: "High School",
        field: "Any",
        min_gpa: 2.5,
        max_income: 35_000,
        min_age: 16,
        max_age: 22,
        award_amount: 3_000.0,
        deadline: "2026-09-01",
    },
    SeedOffer {
        name: "Graduate Research Fellowship",
        provider: "Institute of Advanced Studies",
        description: "Fellowship for masters students conducting original research.",
        country: "US",
        education_level: "Master",
        field: "Engineering",
        min_gpa: 3.7,
        max_income: 50_000,
        min_age: 21,
        max_age: 35,
        award_amount: 20_000.0,
        deadline: "2027-01-15",
    },
    SeedOffer {
        name: "Maple Leaf Award",
        provider: "Canadian Futures Foundation",
        description: "Award for Canadian undergraduates in business programs.",
        country: "Canada",
        education_level: "Bachelor",
        field: "Business",
        min_gpa: 3.2,
        max_income: 70_000,
        min_age: 18,
        max_age: 26,
        award_amount: 5_000.0,
        deadline: "2026-12-01",
    },
    SeedOffer {
        name: "Doctoral Innovation Prize",
        provider: "Frontier Research Society",
        description: "Prize for doctoral candidates in any scientific field.",
        country: "Any",
        education_level: "PhD",
        field: "Any",
        min_gpa: 3.8,
        max_income: 45_000,
        min_age: 22,
        max_age: 40,
        award_amount: 25_000.0,
        deadline: "2027-03-31",
    },
    SeedOffer {
        name: "Community College Pathway Grant",
        provider: "Open Doors Initiative",
        description: "Grant for associate degree students moving into four year programs.",
        country: "US",
        education_level: "Associate",
        field: "Any",
        min_gpa: 2.8,
        max_income: 40_000,
        min_age: 18,
        max_age: 30,
        award_amount: 2_500.0,
        deadline: "2026-08-15",
    },
    SeedOffer {
        name: "Healthcare Heroes Scholarship",
        provider: "Medical Futures Fund",
        description: "Scholarship for nursing and medical students worldwide.",
        country: "Any",
        education_level: "Bachelor",
        field: "Nursing",
        min_gpa: 3.0,
        max_income: 55_000,
        min_age: 18,
        max_age: 32,
        award_amount: 8_000.0,
        deadline: "2026-11-01",
    },
];
