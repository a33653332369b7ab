use crate::io::storage::Storage;

/// Storage key for the session flag. This belongs to the login gate in
/// the CLI layer; the store itself never reads it.
pub const KEY_AUTH: &str = "auth";

/// Whether a signed-in session flag is present
pub fn is_authenticated(storage: &impl Storage) -> bool {
    storage.read(KEY_AUTH).as_deref() == Some("true")
}

/// Record a signed-in session
pub fn sign_in(storage: &mut impl Storage) {
    storage.write(KEY_AUTH, "true");
}

/// Clear the session flag
pub fn sign_out(storage: &mut impl Storage) {
    storage.remove(KEY_AUTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;

    #[test]
    fn sign_in_and_out() {
        let mut storage = MemoryStorage::new();
        assert!(!is_authenticated(&storage));
        sign_in(&mut storage);
        assert!(is_authenticated(&storage));
        sign_out(&mut storage);
        assert!(!is_authenticated(&storage));
    }

    #[test]
    fn unexpected_flag_value_is_not_authenticated() {
        let mut storage = MemoryStorage::new();
        storage.write(KEY_AUTH, "yes");
        assert!(!is_authenticated(&storage));
    }
}
