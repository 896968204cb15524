pub mod dish;

use serde::Deserialize;
use surrealdb::{
    engine::any::{self, Any},
    opt::auth::Root,
    Surreal,
};

use crate::error::Result;

/// Struct representing the Surrealdb configuration parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SurrealdbCfg {
    /// Endpoint understood by the `any` engine, e.g. `ws://127.0.0.1:8000`
    /// or `mem://`
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials. Skipped for engines that run without auth.
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for SurrealdbCfg {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:8000".to_string(),
            namespace: "dishbook".to_string(),
            database: "dishbook".to_string(),
            username: None,
            password: None,
        }
    }
}

/// Process-wide database handle.
///
/// Opened once at startup and handed to the store; closed after the HTTP
/// server has drained.
pub struct Database {
    client: Surreal<Any>,
}

impl Database {
    pub async fn connect(cfg: &SurrealdbCfg) -> Result<Self> {
        let client = any::connect(cfg.url.as_str()).await?;

        if let (Some(username), Some(password)) = (&cfg.username, &cfg.password) {
            client
                .signin(Root {
                    username: username.as_str(),
                    password: password.as_str(),
                })
                .await?;
        }

        client
            .use_ns(cfg.namespace.as_str())
            .use_db(cfg.database.as_str())
            .await?;

        let db = Self { client };
        db.define_schema().await?;

        tracing::info!("Connected to SurrealDB at {}", cfg.url);
        Ok(db)
    }

    /// Tables and indexes. Safe to run on every start.
    pub async fn define_schema(&self) -> Result<()> {
        dish::create_dish_table(&self.client).await
    }

    pub fn client(&self) -> Surreal<Any> {
        self.client.clone()
    }

    /// Drops this handle. The connection itself goes away once the last
    /// store clone is gone, which happens when the router is dropped.
    pub async fn close(self) -> Result<()> {
        self.client.invalidate().await?;
        drop(self.client);
        tracing::info!("Database connection closed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) async fn memory_db() -> Database {
    let cfg = SurrealdbCfg {
        url: "mem://".to_string(),
        namespace: "test".to_string(),
        database: "test".to_string(),
        username: None,
        password: None,
    };
    Database::connect(&cfg).await.unwrap()
}
