use crate::error::GatehouseError;
use keyring::Entry;
use tracing::debug;

const KEYRING_SERVICE_PREFIX: &str = "gatehouse";
const KEYRING_TOKEN_USER: &str = "access-token";

/// Access token left by `gatehouse login`, kept in the platform keyring under
/// the API address it was issued by.
pub struct ServerSession {
    server_address: String,
}

impl ServerSession {
    pub fn new(server_address: String) -> Self {
        Self {
            server_address: session_key(&server_address),
        }
    }

    pub fn get_server_address(&self) -> &str {
        &self.server_address
    }

    fn service_name(&self) -> String {
        format!("{KEYRING_SERVICE_PREFIX}:{}", self.server_address)
    }

    fn entry(&self) -> Result<Entry, keyring::Error> {
        Entry::new(&self.service_name(), KEYRING_TOKEN_USER)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.get_token(), Ok(Some(_)))
    }

    /// Returns `None` when no session was stored for this address.
    pub fn get_token(&self) -> Result<Option<String>, GatehouseError> {
        match self.entry().and_then(|entry| entry.get_password()) {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => {
                debug!("Cannot read session of {}: {error}", self.server_address);
                Err(GatehouseError::CannotLoadResource(self.service_name()))
            }
        }
    }

    pub fn store(&self, token: &str) -> Result<(), GatehouseError> {
        self.entry()
            .and_then(|entry| entry.set_password(token))
            .map_err(|error| {
                debug!("Cannot store session of {}: {error}", self.server_address);
                GatehouseError::CannotSaveResource(self.service_name())
            })
    }

    /// Removing a session that was never stored is not an error.
    pub fn delete(&self) -> Result<(), GatehouseError> {
        match self.entry().and_then(|entry| entry.delete_credential()) {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => {
                debug!("Cannot remove session of {}: {error}", self.server_address);
                Err(GatehouseError::CannotSaveResource(self.service_name()))
            }
        }
    }
}

/// Lowercased address without scheme or trailing slash, so that
/// `HTTP://Admin.local:8080/` and `admin.local:8080` share one session.
fn session_key(address: &str) -> String {
    let address = address.trim().to_lowercase();
    let address = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(&address);
    address.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_addresses_should_share_one_session() {
        let sessions = [
            ServerSession::new("HTTP://Admin.local:8080/".to_string()),
            ServerSession::new("https://admin.local:8080".to_string()),
            ServerSession::new("admin.local:8080//".to_string()),
        ];

        for session in &sessions {
            assert_eq!(session.get_server_address(), "admin.local:8080");
            assert_eq!(session.service_name(), "gatehouse:admin.local:8080");
        }
    }

    #[test]
    fn path_of_the_address_should_stay_part_of_the_key() {
        let session = ServerSession::new("127.0.0.1:3000/api/".to_string());
        assert_eq!(session.get_server_address(), "127.0.0.1:3000/api");
    }
}
