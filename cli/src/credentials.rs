use crate::args::CliOptions;
use crate::error::{CmdToolError, GatehouseCmdError};
use anyhow::{bail, Context};
use gatehouse::args::Args;
use gatehouse::cli::system::session::ServerSession;
use gatehouse::cli_command::PRINT_TARGET;
use gatehouse::client::{SystemClient, UserClient};
use gatehouse::http::client::HttpClient;
use gatehouse::http::HttpTransport;
use gatehouse::users::get_me::GetMe;
use gatehouse::users::login_user::LoginUser;
use gatehouse::users::logout_user::LogoutUser;
use passterm::{isatty, prompt_password_stdin, prompt_password_tty, Stream};
use std::env::var;
use tracing::{event, Level};

pub(crate) static ENV_GATEHOUSE_USERNAME: &str = "GATEHOUSE_USERNAME";
pub(crate) static ENV_GATEHOUSE_PASSWORD: &str = "GATEHOUSE_PASSWORD";

struct UsernameAndPassword {
    username: String,
    password: String,
}

enum Credentials {
    UserNameAndPassword(UsernameAndPassword),
    Token(String),
    SessionWithToken(String, String),
}

/// Returns the given password or asks for it without echoing.
pub(crate) fn read_password(
    password: &Option<String>,
    prompt: &str,
) -> Result<String, passterm::PromptError> {
    match password {
        Some(password) => Ok(password.clone()),
        None => {
            if isatty(Stream::Stdin) {
                prompt_password_tty(Some(prompt))
            } else {
                prompt_password_stdin(None, Stream::Stdout)
            }
        }
    }
}

/// Username given on the command line or in config.toml, then the environment.
pub(crate) fn resolve_username(cli_options: &CliOptions) -> Result<String, CmdToolError> {
    cli_options
        .username
        .clone()
        .or_else(|| var(ENV_GATEHOUSE_USERNAME).ok())
        .ok_or(CmdToolError::MissingUsername)
}

pub(crate) struct GatehouseCredentials<'a> {
    credentials: Option<Credentials>,
    client: Option<&'a HttpClient>,
    login_required: bool,
}

impl<'a> GatehouseCredentials<'a> {
    /// A session stored by `gatehouse login` takes precedence, then the token,
    /// then username and password given as options or in the environment.
    pub(crate) fn new(
        cli_options: &CliOptions,
        args: &Args,
        login_required: bool,
    ) -> anyhow::Result<Self, anyhow::Error> {
        if !login_required {
            return Ok(Self {
                credentials: None,
                client: None,
                login_required,
            });
        }

        let server_address = args.get_server_address();
        let stored_token = ServerSession::new(server_address.clone())
            .get_token()
            .unwrap_or_else(|error| {
                event!(target: PRINT_TARGET, Level::DEBUG, "Ignoring stored session: {error}");
                None
            });
        if let Some(token) = stored_token {
            return Ok(Self {
                credentials: Some(Credentials::SessionWithToken(token, server_address)),
                client: None,
                login_required,
            });
        }

        let credentials = if let Some(token) = &cli_options.token {
            Credentials::Token(token.clone())
        } else if let Some(username) = &cli_options.username {
            let password = match &cli_options.password {
                Some(password) => password.clone(),
                None => match var(ENV_GATEHOUSE_PASSWORD) {
                    Ok(password) => password,
                    Err(_) => read_password(&None, "Password: ")?,
                },
            };
            Credentials::UserNameAndPassword(UsernameAndPassword {
                username: username.clone(),
                password,
            })
        } else if let (Ok(username), Ok(password)) =
            (var(ENV_GATEHOUSE_USERNAME), var(ENV_GATEHOUSE_PASSWORD))
        {
            Credentials::UserNameAndPassword(UsernameAndPassword { username, password })
        } else {
            return Err(GatehouseCmdError::CmdToolError(CmdToolError::MissingCredentials).into());
        };

        Ok(Self {
            credentials: Some(credentials),
            client: None,
            login_required,
        })
    }

    pub(crate) fn set_client(&mut self, client: &'a HttpClient) {
        self.client = Some(client);
    }

    pub(crate) async fn login_user(&self) -> anyhow::Result<(), anyhow::Error> {
        let (Some(client), Some(credentials)) = (self.client, &self.credentials) else {
            return Ok(());
        };
        if !self.login_required {
            return Ok(());
        }

        match credentials {
            Credentials::UserNameAndPassword(username_and_password) => {
                client
                    .login_user(&LoginUser {
                        username: username_and_password.username.clone(),
                        password: username_and_password.password.clone(),
                    })
                    .await
                    .with_context(|| {
                        format!(
                            "Problem with server login for username: {}",
                            &username_and_password.username
                        )
                    })?;
            }
            Credentials::Token(token) => {
                client.set_access_token(Some(token.clone())).await;
            }
            Credentials::SessionWithToken(token, server_address) => {
                client.set_access_token(Some(token.clone())).await;
                if let Err(error) = client.get_me(&GetMe {}).await {
                    if matches!(error.http_status(), Some(401) | Some(403)) {
                        ServerSession::new(server_address.clone()).delete()?;
                        bail!("Login session expired for Gatehouse server: {server_address}, please login again or use other authentication method");
                    }
                    event!(target: PRINT_TARGET, Level::DEBUG, "Cannot verify stored session: {error}");
                }
            }
        }

        Ok(())
    }

    /// Only sessions opened by this invocation are closed, a stored session
    /// or a given token stays valid.
    pub(crate) async fn logout_user(&self) -> anyhow::Result<(), anyhow::Error> {
        let (Some(client), Some(Credentials::UserNameAndPassword(_))) =
            (self.client, &self.credentials)
        else {
            return Ok(());
        };

        if self.login_required {
            client
                .logout_user(&LogoutUser {})
                .await
                .with_context(|| "Problem with server logout".to_string())?;
        }

        Ok(())
    }
}
