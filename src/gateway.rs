use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::Config;

const SELECT_INVITEES: &str = "SELECT invitee FROM invitations WHERE inviter = ?";

#[derive(Debug)]
pub enum GatewayError {
    /// The store was unreachable or rejected the credentials.
    Connect(sqlx::Error),
    /// The query failed after a connection was established.
    Query(sqlx::Error),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(_) => write!(f, "Failed to connect to the database"),
            Self::Query(e) => write!(f, "Database error: {e}"),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(e) | Self::Query(e) => Some(e),
        }
    }
}

/// Read access to invitation records, as seen by the HTTP layer.
#[async_trait]
pub trait InviteLookup: Send + Sync {
    /// Invitees of `inviter`, in store order. Unknown inviters yield an empty list.
    async fn invitees(&self, inviter: &str) -> Result<Vec<String>, GatewayError>;

    /// Opens and closes a connection without querying anything.
    async fn ping(&self) -> Result<(), GatewayError>;
}

/// Opens a fresh MySQL connection per lookup and closes it afterwards.
#[derive(Debug, Clone)]
pub struct Gateway {
    options: MySqlConnectOptions,
}

impl Gateway {
    pub fn new(config: &Config) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_username)
            .password(&config.db_password)
            .database(&config.db_name);

        Self { options }
    }

    pub async fn connect(&self) -> Result<MySqlConnection, GatewayError> {
        MySqlConnection::connect_with(&self.options)
            .await
            .map_err(GatewayError::Connect)
    }

    pub async fn fetch_invitees(
        conn: &mut MySqlConnection,
        inviter: &str,
    ) -> Result<Vec<String>, GatewayError> {
        sqlx::query_scalar::<_, String>(SELECT_INVITEES)
            .bind(inviter)
            .fetch_all(&mut *conn)
            .await
            .map_err(GatewayError::Query)
    }
}

async fn close(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }
}

#[async_trait]
impl InviteLookup for Gateway {
    async fn invitees(&self, inviter: &str) -> Result<Vec<String>, GatewayError> {
        let mut conn = self.connect().await?;
        let result = Self::fetch_invitees(&mut conn, inviter).await;
        close(conn).await;
        result
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        let conn = self.connect().await?;
        close(conn).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> Config {
        // Nothing listens on port 1, so the connect fails immediately.
        Config {
            db_host: "127.0.0.1".to_string(),
            db_port: 1,
            db_username: "nobody".to_string(),
            db_password: "secret".to_string(),
            db_name: "referrals".to_string(),
        }
    }

    #[test]
    fn error_messages() {
        let connect = GatewayError::Connect(sqlx::Error::Io(
            std::io::ErrorKind::ConnectionRefused.into(),
        ));
        assert_eq!(connect.to_string(), "Failed to connect to the database");

        let query = GatewayError::Query(sqlx::Error::RowNotFound);
        assert!(query.to_string().starts_with("Database error: "));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_connect_error() {
        let gateway = Gateway::new(&unreachable_config());

        let err = gateway.invitees("alice").await.unwrap_err();
        assert!(matches!(err, GatewayError::Connect(_)), "got {err:?}");

        let err = gateway.ping().await.unwrap_err();
        assert!(matches!(err, GatewayError::Connect(_)), "got {err:?}");
    }
}
