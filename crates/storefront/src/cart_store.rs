//! File-backed persistence for the single cart entry.
//!
//! The cart lives at one fixed path as a serialized array of line items.
//! Reads are forgiving: an absent file or unparseable content yields an
//! empty cart, never an error. Saves replace the file wholesale.
//!
//! A process-local mutex serializes read-modify-write sequences so handler
//! tasks cannot interleave a mutation. Separate processes sharing the same
//! path still race last-write-wins; that is an accepted limitation, not a
//! bug to fix.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use fashionshop_core::Cart;

/// Errors persisting the cart. Reads never produce these; only saves do.
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("failed to write cart {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read/write access to the persisted cart.
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CartStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// The persisted cart, or an empty cart when the file is absent or its
    /// content fails to parse. Never errors.
    #[must_use]
    pub fn get(&self) -> Cart {
        let Ok(bytes) = std::fs::read(&self.path) else {
            return Cart::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "Corrupt cart file, resetting to empty");
            Cart::new()
        })
    }

    /// Serialize and persist the full cart, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError` if serialization or the file write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let json = serde_json::to_vec(cart)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| CartStoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| CartStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Locked read-modify-write: load the cart, apply `f`, persist, and
    /// return the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError` if persisting the mutated cart fails.
    pub fn update<F>(&self, f: F) -> Result<Cart, CartStoreError>
    where
        F: FnOnce(&mut Cart),
    {
        // A poisoned lock only means another handler panicked mid-update;
        // the file itself is still consistent.
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut cart = self.get();
        f(&mut cart);
        self.save(&cart)?;
        Ok(cart)
    }
}
