//! `FrontDesk`: one complete session, from snapshot load to snapshot save.
//!
//! This ties the layers together: store → inventory → console → store.
//!
//! ```text
//! load_or_empty(store)          startup, never fails
//!        │
//!        ▼
//! Console::run(&mut inventory)  blocking pool, borrows the inventory
//!        │
//!        ▼
//! spawn_save(store, inventory)  awaited before returning
//! ```

use std::io::{BufRead, Write};
use std::sync::Arc;

use innkeep_room::RoomInventory;
use innkeep_store::{FileStore, JsonCodec, SnapshotStore, load_or_empty, spawn_save};

use crate::{Console, FrontDeskConfig, InnkeepError};

/// A front-desk session bound to a snapshot store.
pub struct FrontDesk<S: SnapshotStore> {
    store: Arc<S>,
    config: FrontDeskConfig,
}

impl FrontDesk<FileStore<JsonCodec>> {
    /// A front desk that keeps its snapshot at `config.snapshot_path`.
    pub fn from_config(config: FrontDeskConfig) -> Self {
        let store = FileStore::json(config.snapshot_path.clone());
        Self::with_store(store, config)
    }
}

impl<S: SnapshotStore> FrontDesk<S> {
    pub fn with_store(store: S, config: FrontDeskConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    pub fn config(&self) -> &FrontDeskConfig {
        &self.config
    }

    /// Runs one session and returns the final inventory.
    ///
    /// The console runs on Tokio's blocking pool since it blocks on
    /// input. When it returns, the inventory is saved and the save is
    /// awaited; a failed save is logged and does not fail the session.
    /// The save also runs when the console stops on an I/O error, so
    /// bookings made before the failure are kept.
    ///
    /// # Errors
    /// Console I/O failures (reported after the save), or the console
    /// task panicking.
    pub async fn run<R, W>(
        &self,
        input: R,
        output: W,
    ) -> Result<RoomInventory, InnkeepError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let mut inventory = load_or_empty(self.store.as_ref());
        let console = Console::new(input, output)
            .prompt_to_continue(self.config.prompt_to_continue);

        let (inventory, outcome) = tokio::task::spawn_blocking(move || {
            let outcome = console.run(&mut inventory);
            (inventory, outcome)
        })
        .await?;
        if let Err(e) = &outcome {
            tracing::error!(error = %e, "console stopped, saving what was entered");
        }

        let save = spawn_save(Arc::clone(&self.store), inventory.clone());
        if save.wait().await.is_err() {
            tracing::warn!("session ended without a saved snapshot");
        }
        outcome.map(|()| inventory)
    }
}
