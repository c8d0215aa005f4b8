//! Remote console client
//!
//! One command per connection: the command text goes out as raw UTF-8 with
//! no length prefix or terminator, and the reply is whatever a single read of
//! up to [`RESPONSE_BUFFER_SIZE`] bytes returns.

use exlaunch_core::{ConsoleConfig, ExlaunchError, RESPONSE_BUFFER_SIZE, ResponseFrame, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Client for the console's remote API
pub struct ConsoleClient {
    config: ConsoleConfig,
}

impl ConsoleClient {
    /// Create a new client
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// Target configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Connect, send `command`, and decode the reply.
    ///
    /// Makes exactly one connection attempt. The socket is closed when this
    /// returns, whether the exchange succeeded or not.
    pub async fn send(&self, command: &str) -> Result<ResponseFrame> {
        info!("Connecting to console at {}", self.config.address());

        let mut stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| {
                ExlaunchError::ConnectionError(format!(
                    "connect to {} failed: {}",
                    self.config.address(),
                    e
                ))
            })?;

        exchange(&mut stream, command).await
    }
}

/// Write one command and read one reply over an established stream
pub(crate) async fn exchange<S>(stream: &mut S, command: &str) -> Result<ResponseFrame>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    debug!("Console send: {}", command);
    stream
        .write_all(command.as_bytes())
        .await
        .map_err(|e| ExlaunchError::ConnectionError(format!("send failed: {}", e)))?;

    let mut buf = vec![0u8; RESPONSE_BUFFER_SIZE];
    let len = stream
        .read(&mut buf)
        .await
        .map_err(|e| ExlaunchError::ConnectionError(format!("recv failed: {}", e)))?;
    buf.truncate(len);

    debug!("Console reply: {} bytes", len);
    Ok(ResponseFrame::decode(&buf))
}
