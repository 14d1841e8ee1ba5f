//! File-backed encrypted token store.
//!
//! Persists the session token under the app data directory as a single
//! AES-256-GCM encrypted file so it survives app restarts without ever
//! touching disk in plaintext. Layout: `[nonce (12 bytes)][ciphertext]`.
//! The 32-byte key is expected to come from the platform keystore (or a
//! derived device key) — this store never generates or persists it.

use super::{TokenStore, TOKEN_KEY};
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use anyhow::Result;
use async_trait::async_trait;
use rand::RngCore;
use std::path::{Path, PathBuf};

/// AES-GCM nonce size.
const NONCE_SIZE: usize = 12;

/// Encrypted on-disk session token store.
pub struct EncryptedTokenStore {
    /// Path of the encrypted token file.
    path: PathBuf,
    /// Encryption key (32 bytes, AES-256).
    key: [u8; 32],
}

impl EncryptedTokenStore {
    /// Create a store rooted at the given app data directory.
    pub fn new(data_dir: &Path, key: [u8; 32]) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{TOKEN_KEY}.enc")),
            key,
        })
    }

    /// Encrypt a token using AES-256-GCM with a fresh random nonce.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| anyhow::anyhow!("Cipher init failed: {e}"))?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| anyhow::anyhow!("Encryption failed: {e}"))?;

        let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }

    /// Decrypt a nonce-prefixed AES-256-GCM payload.
    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>> {
        if encrypted.len() < NONCE_SIZE {
            anyhow::bail!("Encrypted token file too short");
        }

        let (nonce_bytes, ciphertext) = encrypted.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| anyhow::anyhow!("Cipher init failed: {e}"))?;

        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| anyhow::anyhow!("Decryption failed: {e}"))
    }
}

#[async_trait]
impl TokenStore for EncryptedTokenStore {
    async fn get_token(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let encrypted = std::fs::read(&self.path)?;
        let plaintext = self.decrypt(&encrypted)?;
        Ok(Some(String::from_utf8(plaintext)?))
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        let encrypted = self.encrypt(token.as_bytes())?;
        std::fs::write(&self.path, encrypted)?;
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
