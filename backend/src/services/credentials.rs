use crate::models::ApiError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Round-robin pool of YouTube Data API keys.
///
/// One key is consumed per inbound request; every upstream call made while
/// serving that request uses the same key.
#[derive(Debug, Default)]
pub struct CredentialRotator {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl CredentialRotator {
    pub fn new(keys: Vec<String>) -> Self {
        CredentialRotator {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Parse a comma separated list, ignoring blank entries
    pub fn from_csv(value: &str) -> Self {
        let keys = value
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .collect();
        Self::new(keys)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn next_key(&self) -> Result<&str, ApiError> {
        if self.keys.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        Ok(&self.keys[slot])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[test]
    fn parses_comma_separated_keys() {
        let rotator = CredentialRotator::from_csv(" a, b ,,c,");
        assert_eq!(rotator.len(), 3);
        assert_eq!(rotator.next_key().unwrap(), "a");
        assert_eq!(rotator.next_key().unwrap(), "b");
        assert_eq!(rotator.next_key().unwrap(), "c");
        assert_eq!(rotator.next_key().unwrap(), "a");
    }

    #[test]
    fn empty_pool_is_a_configuration_error() {
        let rotator = CredentialRotator::from_csv(" , ");
        assert!(rotator.is_empty());
        assert!(matches!(
            rotator.next_key(),
            Err(ApiError::MissingCredentials)
        ));
    }

    #[test]
    fn sequential_requests_cover_every_key() {
        let rotator = CredentialRotator::from_csv("k1,k2,k3");
        let n = 10;
        let mut used = Vec::new();
        for _ in 0..n {
            used.push(rotator.next_key().unwrap().to_string());
        }
        assert_eq!(
            used,
            vec!["k1", "k2", "k3", "k1", "k2", "k3", "k1", "k2", "k3", "k1"]
        );
        for key in ["k1", "k2", "k3"] {
            assert!(used.iter().filter(|k| *k == key).count() >= n / 3);
        }
    }

    #[test]
    fn concurrent_requests_never_share_a_slot() {
        let rotator = Arc::new(CredentialRotator::from_csv("k1,k2,k3,k4"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let rotator = rotator.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| rotator.next_key().unwrap().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for handle in handles {
            for key in handle.join().unwrap() {
                *counts.entry(key).or_default() += 1;
            }
        }
        for key in ["k1", "k2", "k3", "k4"] {
            assert_eq!(counts[key], 200);
        }
    }
}
