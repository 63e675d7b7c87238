use crate::window::Window;

use thiserror::Error;

use x11rb::errors::ConnectError;
use x11rb::errors::ConnectionError;
use x11rb::errors::ReplyError;

#[derive(Debug, Error)]
pub enum Error {
    /// No X server could be reached.
    #[error("unable to connect to the X server: {0}")]
    Connection(#[from] ConnectError),

    /// The server was reached but session setup (atom interning) failed.
    #[error("X session setup failed: {0}")]
    Handshake(#[source] ReplyError),

    /// The window manager's client list could not be read.
    #[error("client list query failed: {0}")]
    Query(#[source] ReplyError),

    /// The activation request never left this end of the connection.
    #[error("activation request for window {window:#x} could not be sent: {source}")]
    Activation {
        window: Window,
        #[source]
        source: ConnectionError,
    },

    /// A window identifier string that is not `0x`-prefixed hexadecimal
    /// within the 32-bit id width.
    #[error("malformed window identifier {input:?}")]
    Ident { input: String },
}
