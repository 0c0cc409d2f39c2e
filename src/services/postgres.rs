use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::requests::{AddArsenalRequest, CreatePatternRequest, LogPerformanceRequest};
use crate::models::{
    ArsenalBall, ArsenalEntry, Ball, OilPattern, PerformanceLog, PerformanceStats, RecentGame,
    TrendPoint,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Reporting window for performance stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    SevenDays,
    ThirtyDays,
    NinetyDays,
    OneYear,
}

impl Timeframe {
    /// Parse the query-string form; unknown values mean "no window"
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "7d" => Some(Self::SevenDays),
            "30d" => Some(Self::ThirtyDays),
            "90d" => Some(Self::NinetyDays),
            "1y" => Some(Self::OneYear),
            _ => None,
        }
    }

    fn interval(self) -> &'static str {
        match self {
            Self::SevenDays => "7 days",
            Self::ThirtyDays => "30 days",
            Self::NinetyDays => "90 days",
            Self::OneYear => "1 year",
        }
    }
}

/// PostgreSQL client for the ball catalog, oil patterns, arsenals and
/// performance logs
///
/// The schema is provisioned externally; this client only reads and writes
/// the tables the API exposes.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Full ball catalog, ordered for display
    pub async fn list_balls(&self) -> Result<Vec<Ball>, PostgresError> {
        let query = r#"
            SELECT id, name, brand, coverstock, hook_potential, length, backend, surface
            FROM balls
            ORDER BY brand, name
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let balls = rows
            .iter()
            .map(|row| Ball {
                id: row.get("id"),
                name: row.get("name"),
                brand: row.get("brand"),
                coverstock: row.get("coverstock"),
                hook_potential: row.get("hook_potential"),
                length: row.get("length"),
                backend: row.get("backend"),
                surface: row.get("surface"),
            })
            .collect();

        Ok(balls)
    }

    /// List oil patterns, optionally restricted to one category
    pub async fn list_patterns(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<OilPattern>, PostgresError> {
        let rows = match category {
            Some(category) => {
                let query = r#"
                    SELECT id, name, category, length, volume, ratio, forward_oil, description, difficulty
                    FROM oil_patterns
                    WHERE category = $1
                    ORDER BY name
                "#;
                sqlx::query(query)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = r#"
                    SELECT id, name, category, length, volume, ratio, forward_oil, description, difficulty
                    FROM oil_patterns
                    ORDER BY category, name
                "#;
                sqlx::query(query).fetch_all(&self.pool).await?
            }
        };

        Ok(rows.iter().map(Self::pattern_from_row).collect())
    }

    /// Fetch a single pattern by id
    pub async fn get_pattern(&self, id: i32) -> Result<OilPattern, PostgresError> {
        let query = r#"
            SELECT id, name, category, length, volume, ratio, forward_oil, description, difficulty
            FROM oil_patterns
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("Pattern {} not found", id)))?;

        Ok(Self::pattern_from_row(&row))
    }

    /// Insert a custom pattern; category is always `Custom`
    pub async fn create_pattern(
        &self,
        req: &CreatePatternRequest,
    ) -> Result<OilPattern, PostgresError> {
        let query = r#"
            INSERT INTO oil_patterns (name, category, length, volume, ratio, forward_oil, description, difficulty)
            VALUES ($1, 'Custom', $2, $3, $4, $5, $6, $7)
            RETURNING id, name, category, length, volume, ratio, forward_oil, description, difficulty
        "#;

        let row = sqlx::query(query)
            .bind(&req.name)
            .bind(req.length)
            .bind(req.volume)
            .bind(req.ratio)
            .bind(req.forward_oil)
            .bind(&req.description)
            .bind(&req.difficulty)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Created custom pattern: {}", req.name);

        Ok(Self::pattern_from_row(&row))
    }

    /// A user's arsenal with catalog attributes joined in
    pub async fn arsenal_for_user(&self, user_id: i32) -> Result<Vec<ArsenalBall>, PostgresError> {
        let query = r#"
            SELECT a.id, a.user_id, a.ball_id, a.layout, a.current_surface, a.purchase_date, a.created_at,
                   b.name AS ball_name, b.brand, b.hook_potential, b.length, b.backend
            FROM arsenal a
            JOIN balls b ON a.ball_id = b.id
            WHERE a.user_id = $1
            ORDER BY a.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let arsenal = rows
            .iter()
            .map(|row| ArsenalBall {
                id: row.get("id"),
                user_id: row.get("user_id"),
                ball_id: row.get("ball_id"),
                layout: row.get("layout"),
                current_surface: row.get("current_surface"),
                purchase_date: row.get("purchase_date"),
                created_at: row.get("created_at"),
                ball_name: row.get("ball_name"),
                brand: row.get("brand"),
                hook_potential: row.get("hook_potential"),
                length: row.get("length"),
                backend: row.get("backend"),
            })
            .collect();

        Ok(arsenal)
    }

    /// Add a catalog ball to a user's arsenal
    pub async fn add_to_arsenal(
        &self,
        user_id: i32,
        req: &AddArsenalRequest,
    ) -> Result<ArsenalEntry, PostgresError> {
        let query = r#"
            INSERT INTO arsenal (user_id, ball_id, layout, current_surface, purchase_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, ball_id, layout, current_surface, purchase_date, created_at
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(req.ball_id)
            .bind(&req.layout)
            .bind(&req.current_surface)
            .bind(req.purchase_date)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Added ball {} to arsenal of user {}", req.ball_id, user_id);

        Ok(ArsenalEntry {
            id: row.get("id"),
            user_id: row.get("user_id"),
            ball_id: row.get("ball_id"),
            layout: row.get("layout"),
            current_surface: row.get("current_surface"),
            purchase_date: row.get("purchase_date"),
            created_at: row.get("created_at"),
        })
    }

    /// Log one game for a user
    pub async fn log_performance(
        &self,
        user_id: i32,
        req: &LogPerformanceRequest,
    ) -> Result<PerformanceLog, PostgresError> {
        let query = r#"
            INSERT INTO performance_logs (user_id, pattern_id, ball_used_id, score, carry_percentage, entry_angle, game_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, pattern_id, ball_used_id, score, carry_percentage, entry_angle, game_date, notes
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(req.pattern_id)
            .bind(req.ball_used_id)
            .bind(req.score)
            .bind(req.carry_percentage)
            .bind(req.entry_angle)
            .bind(req.game_date)
            .bind(&req.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(PerformanceLog {
            id: row.get("id"),
            user_id: row.get("user_id"),
            pattern_id: row.get("pattern_id"),
            ball_used_id: row.get("ball_used_id"),
            score: row.get("score"),
            carry_percentage: row.get("carry_percentage"),
            entry_angle: row.get("entry_angle"),
            game_date: row.get("game_date"),
            notes: row.get("notes"),
        })
    }

    /// Aggregated averages over a window; `None` window means all-time
    pub async fn performance_stats(
        &self,
        user_id: i32,
        window: Option<Timeframe>,
    ) -> Result<PerformanceStats, PostgresError> {
        // The interval literal comes from the Timeframe enum, never from input
        let date_filter = match window {
            Some(tf) => format!("AND game_date >= NOW() - INTERVAL '{}'", tf.interval()),
            None => String::new(),
        };

        let query = format!(
            r#"
            SELECT
                ROUND(AVG(score)::numeric, 1)::float8 AS average_score,
                ROUND(AVG(carry_percentage)::numeric, 1)::float8 AS carry_percentage,
                ROUND(AVG(entry_angle)::numeric, 1)::float8 AS entry_angle,
                COUNT(*) AS games_played
            FROM performance_logs
            WHERE user_id = $1 {}
        "#,
            date_filter
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(PerformanceStats {
            average_score: row.get("average_score"),
            carry_percentage: row.get("carry_percentage"),
            entry_angle: row.get("entry_angle"),
            games_played: row.get("games_played"),
        })
    }

    /// Most recent games with pattern and ball names resolved
    pub async fn recent_games(
        &self,
        user_id: i32,
        limit: i64,
    ) -> Result<Vec<RecentGame>, PostgresError> {
        let query = r#"
            SELECT pl.id, pl.pattern_id, pl.ball_used_id, pl.score,
                   pl.carry_percentage, pl.entry_angle, pl.game_date, pl.notes,
                   op.name AS pattern_name, b.name AS ball_name
            FROM performance_logs pl
            LEFT JOIN oil_patterns op ON pl.pattern_id = op.id
            LEFT JOIN balls b ON pl.ball_used_id = b.id
            WHERE pl.user_id = $1
            ORDER BY pl.game_date DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        let games = rows
            .iter()
            .map(|row| RecentGame {
                id: row.get("id"),
                pattern_id: row.get("pattern_id"),
                ball_used_id: row.get("ball_used_id"),
                score: row.get("score"),
                carry_percentage: row.get("carry_percentage"),
                entry_angle: row.get("entry_angle"),
                game_date: row.get("game_date"),
                notes: row.get("notes"),
                pattern_name: row.get("pattern_name"),
                ball_name: row.get("ball_name"),
            })
            .collect();

        Ok(games)
    }

    /// Weekly score and carry averages over the last six months
    pub async fn performance_trends(&self, user_id: i32) -> Result<Vec<TrendPoint>, PostgresError> {
        let query = r#"
            SELECT
                DATE_TRUNC('week', game_date)::date AS week,
                ROUND(AVG(score)::numeric, 1)::float8 AS avg_score,
                ROUND(AVG(carry_percentage)::numeric, 1)::float8 AS avg_carry,
                COUNT(*) AS games
            FROM performance_logs
            WHERE user_id = $1
              AND game_date >= NOW() - INTERVAL '6 months'
            GROUP BY DATE_TRUNC('week', game_date)
            ORDER BY week
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let trends = rows
            .iter()
            .map(|row| TrendPoint {
                week: row.get("week"),
                avg_score: row.get("avg_score"),
                avg_carry: row.get("avg_carry"),
                games: row.get("games"),
            })
            .collect();

        Ok(trends)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    fn pattern_from_row(row: &sqlx::postgres::PgRow) -> OilPattern {
        OilPattern {
            id: Some(row.get("id")),
            name: row.get("name"),
            category: row.get("category"),
            length: row.get("length"),
            volume: row.get("volume"),
            ratio: row.get("ratio"),
            forward_oil: row.get("forward_oil"),
            description: row.get("description"),
            difficulty: row.get("difficulty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parse() {
        assert_eq!(Timeframe::parse("7d"), Some(Timeframe::SevenDays));
        assert_eq!(Timeframe::parse("30d"), Some(Timeframe::ThirtyDays));
        assert_eq!(Timeframe::parse("90d"), Some(Timeframe::NinetyDays));
        assert_eq!(Timeframe::parse("1y"), Some(Timeframe::OneYear));
        assert_eq!(Timeframe::parse("all"), None);
    }

    #[test]
    fn test_timeframe_intervals() {
        assert_eq!(Timeframe::SevenDays.interval(), "7 days");
        assert_eq!(Timeframe::OneYear.interval(), "1 year");
    }
}
