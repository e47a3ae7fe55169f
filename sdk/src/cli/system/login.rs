use crate::cli::system::session::ServerSession;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::users::login_user::LoginUser;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

/// Logs in with username and password and keeps the session token in the keyring,
/// so that following invocations need no credentials.
pub struct LoginCmd {
    server_session: ServerSession,
    login_user: LoginUser,
}

impl LoginCmd {
    pub fn new(server_address: String, username: String, password: String) -> Self {
        Self {
            server_session: ServerSession::new(server_address),
            login_user: LoginUser { username, password },
        }
    }
}

#[async_trait]
impl CliCommand for LoginCmd {
    fn explain(&self) -> String {
        "login command".to_owned()
    }

    fn login_required(&self) -> bool {
        false
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        if self.server_session.is_active() {
            event!(target: PRINT_TARGET, Level::INFO, "Already logged into Gatehouse server {}", self.server_session.get_server_address());
            return Ok(());
        }

        let token = client
            .login_user(&self.login_user)
            .await
            .with_context(|| {
                format!(
                    "Problem with server login for username: {}",
                    self.login_user.username
                )
            })?;

        self.server_session.store(&token)?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Successfully logged into Gatehouse server {}",
            self.server_session.get_server_address(),
        );

        Ok(())
    }
}
