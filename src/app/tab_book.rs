//! Load, mutate, save: the shell around the pure ledger and access operations.

use std::sync::Arc;

use tabkeep_config::ConfigManager;
use tabkeep_core::{
    AccessService, AuditEvent, AuditSink, Authorization, Clock, CoreError, LedgerService,
    LedgerStorage, PartialPayment, StoreError,
};
use tabkeep_domain::{Entry, EntryId, Ledger, MinorUnits};
use tabkeep_storage_json::{FileAuditLog, JsonLedgerStorage, StoragePaths};

use super::SystemClock;

/// Facade that runs one logical operation against the persisted ledger.
///
/// Each call reads the documents it needs from storage and writes the full
/// result back; nothing is cached between calls.
pub struct TabBook {
    storage: Box<dyn LedgerStorage>,
    audit: Box<dyn AuditSink>,
    config: ConfigManager,
    clock: Arc<dyn Clock>,
}

impl TabBook {
    pub fn new(
        storage: Box<dyn LedgerStorage>,
        audit: Box<dyn AuditSink>,
        config: ConfigManager,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            audit,
            config,
            clock,
        }
    }

    /// Wires the JSON backend, the file audit log and the config manager to `paths`.
    pub fn open(paths: &StoragePaths) -> Self {
        Self::open_with_clock(paths, Arc::new(SystemClock))
    }

    pub fn open_with_clock(paths: &StoragePaths, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Box::new(JsonLedgerStorage::new(paths.clone())),
            Box::new(FileAuditLog::new(paths.log_file.clone(), Arc::clone(&clock))),
            ConfigManager::new(paths.config_file.clone()),
            clock,
        )
    }

    /// Reads the ledger, starting from an empty one when the document is missing or
    /// cannot be parsed.
    pub fn load(&self) -> Result<Ledger, CoreError> {
        match self.storage.load_ledger() {
            Ok(ledger) => Ok(ledger),
            Err(StoreError::NotFound(_)) => Ok(Ledger::default()),
            Err(StoreError::Malformed { path, reason }) => {
                tracing::warn!(
                    path = %path.display(),
                    %reason,
                    "ledger is unreadable, starting from an empty one"
                );
                Ok(Ledger::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        self.storage.save_ledger(ledger)?;
        Ok(())
    }

    /// Appends `event` once the ledger write has committed. A failed append cannot
    /// undo that write, so it is logged and the committed result is still returned.
    fn record(&self, event: AuditEvent) {
        let message = event.to_string();
        if let Err(err) = self.audit.record(&message) {
            tracing::warn!(record = %message, error = %err, "audit record was not written");
        }
    }

    /// Adds an entry priced from `price_text` and returns its id.
    pub fn add(&self, item: &str, price_text: &str) -> Result<EntryId, CoreError> {
        let price = MinorUnits::parse(price_text)?;
        let mut ledger = self.load()?;
        let id = LedgerService::add_entry(&mut ledger, item, price, self.clock.unix_seconds())?;
        self.save(&ledger)?;
        self.record(AuditEvent::Add {
            id,
            price: price_text.to_string(),
        });
        Ok(id)
    }

    pub fn unpaid(&self) -> Result<Vec<Entry>, CoreError> {
        let ledger = self.load()?;
        Ok(LedgerService::list_unpaid(&ledger).to_vec())
    }

    pub fn balance(&self) -> Result<MinorUnits, CoreError> {
        let ledger = self.load()?;
        Ok(LedgerService::balance(&ledger))
    }

    /// Removes the entries with `id`. The ledger is rewritten even when nothing
    /// matched; only removals are audited.
    pub fn pay_by_id(&self, id: EntryId) -> Result<Vec<EntryId>, CoreError> {
        let mut ledger = self.load()?;
        let removed = LedgerService::pay_by_id(&mut ledger, id);
        self.save(&ledger)?;
        for paid in &removed {
            self.record(AuditEvent::PayId { id: *paid });
        }
        Ok(removed)
    }

    pub fn pay_partial(&self, amount_text: &str) -> Result<PartialPayment, CoreError> {
        let amount = MinorUnits::parse(amount_text)?;
        let mut ledger = self.load()?;
        let outcome = LedgerService::pay_partial(&mut ledger, amount)?;
        self.save(&ledger)?;
        self.record(AuditEvent::PayPartial {
            amount: amount_text.to_string(),
        });
        Ok(outcome)
    }

    pub fn has_password(&self) -> Result<bool, CoreError> {
        let config = self.config.load()?;
        Ok(config
            .as_ref()
            .and_then(|config| config.password_hash())
            .is_some())
    }

    /// Stores the digest of `plaintext`, replacing any previous password.
    pub fn set_password(&self, plaintext: &str) -> Result<(), CoreError> {
        self.config.save(&AccessService::set_password(plaintext))?;
        tracing::info!("password updated");
        Ok(())
    }

    pub fn authorize(&self, plaintext: &str) -> Result<Authorization, CoreError> {
        let config = self.config.load()?;
        Ok(AccessService::authorize(config.as_ref(), plaintext))
    }

    /// Deletes every stored document when `plaintext` matches the stored password.
    pub fn wipe(&self, plaintext: &str) -> Result<Authorization, CoreError> {
        let authorization = self.authorize(plaintext)?;
        if authorization.is_granted() {
            self.storage.wipe()?;
            tracing::info!("all data wiped");
        } else {
            tracing::warn!(?authorization, "wipe refused");
        }
        Ok(authorization)
    }
}
