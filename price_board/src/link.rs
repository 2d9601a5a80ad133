//! Websocket link to the price server.
//!
//! A single background thread owns the socket. It forwards inbound text
//! frames to the event loop as [`LinkEvent`]s and writes the frames queued by
//! [`LinkSender`]. The socket is polled with a read timeout so the thread can
//! interleave reads with queued writes.
//!
//! There is no reconnect: once the link reports `Closed` or `Failed`, no
//! further events arrive for the lifetime of the process.
use crate::connection::Transport;
use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use log::{debug, error, info, warn};
use price_common::BoardError;
use std::io::ErrorKind;
use std::net::TcpStream;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tungstenite::client::IntoClientRequest;
use tungstenite::{Message, WebSocket};

/// What the link reports to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// One inbound text frame, undecoded.
    Frame(String),
    /// The connection closed; carries the close reason sent by the peer, if any.
    Closed(Option<String>),
    /// The connection broke with an error.
    Failed(String),
}

#[derive(Debug)]
enum Outgoing {
    Text(String),
    Close,
}

/// Write half handed to the `ConnectionManager`.
#[derive(Debug, Clone)]
pub struct LinkSender {
    tx: Sender<Outgoing>,
}

impl Transport for LinkSender {
    fn send_text(&mut self, text: String) -> Result<(), BoardError> {
        self.tx
            .send(Outgoing::Text(text))
            .map_err(|e| BoardError::ChannelSend(e.to_string()))
    }

    fn close(&mut self) -> Result<(), BoardError> {
        self.tx
            .send(Outgoing::Close)
            .map_err(|e| BoardError::ChannelSend(e.to_string()))
    }
}

/// Running websocket link.
pub struct WsLink {
    /// Write half.
    pub sender: LinkSender,
    /// Inbound frames and close/error notifications, in delivery order.
    pub events: Receiver<LinkEvent>,
    /// The I/O thread; finishes after `Closed` or `Failed` was sent.
    pub handle: JoinHandle<()>,
}

impl WsLink {
    /// Open the one push-stream connection and start the I/O thread.
    ///
    /// Only plain `ws://` endpoints are supported.
    pub fn connect(url: &str, read_timeout: Duration) -> Result<WsLink, BoardError> {
        let request = url
            .into_client_request()
            .map_err(|e| BoardError::Transport(e.to_string()))?;
        let uri = request.uri();
        if uri.scheme_str() != Some("ws") {
            return Err(BoardError::Transport(format!(
                "Unsupported endpoint {}: only ws:// is supported",
                url
            )));
        }
        let host = uri
            .host()
            .ok_or_else(|| BoardError::Transport(format!("No host in {}", url)))?
            .to_string();
        let port = uri.port_u16().unwrap_or(80);

        info!("Connecting to {}", url);
        let stream = TcpStream::connect((host.as_str(), port))?;
        let (socket, response) = tungstenite::client(request, stream)
            .map_err(|e| BoardError::Transport(format!("Handshake failed: {}", e)))?;
        socket.get_ref().set_read_timeout(Some(read_timeout))?;
        info!("Connected to {} (HTTP {})", url, response.status());

        let (out_tx, out_rx) = unbounded::<Outgoing>();
        let (event_tx, event_rx) = unbounded::<LinkEvent>();
        let handle = thread::spawn(move || {
            let outcome = run_socket(socket, out_rx, &event_tx);
            if event_tx.send(outcome).is_err() {
                debug!("Event loop is gone, dropping final link event");
            }
        });

        Ok(WsLink {
            sender: LinkSender { tx: out_tx },
            events: event_rx,
            handle,
        })
    }
}

/// I/O loop of the link thread; returns the terminal event.
fn run_socket(
    mut socket: WebSocket<TcpStream>,
    outgoing: Receiver<Outgoing>,
    events: &Sender<LinkEvent>,
) -> LinkEvent {
    let mut close_reason: Option<String> = None;
    let mut closing = false;

    loop {
        while !closing {
            match outgoing.try_recv() {
                Ok(Outgoing::Text(text)) => {
                    debug!("Sending frame: {}", text);
                    if let Err(e) = socket.send(Message::text(text)) {
                        error!("Failed to send frame: {}", e);
                        return LinkEvent::Failed(e.to_string());
                    }
                }
                Ok(Outgoing::Close) => {
                    info!("Closing connection");
                    closing = true;
                    if let Err(e) = socket.close(None) {
                        debug!("Close handshake: {}", e);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Link sender dropped, closing connection");
                    closing = true;
                    if let Err(e) = socket.close(None) {
                        debug!("Close handshake: {}", e);
                    }
                }
            }
        }

        match socket.read() {
            Ok(Message::Text(text)) => {
                if events.send(LinkEvent::Frame(text)).is_err() {
                    debug!("Event loop is gone, stopping link");
                    return LinkEvent::Closed(close_reason);
                }
            }
            Ok(Message::Close(frame)) => {
                close_reason = frame.map(|f| f.reason.to_string()).filter(|r| !r.is_empty());
                info!("Close frame received: {:?}", close_reason);
            }
            Ok(Message::Binary(bytes)) => debug!("Ignoring binary frame ({} bytes)", bytes.len()),
            Ok(other) => debug!("Control frame: {:?}", other),
            Err(tungstenite::Error::Io(e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
            Err(tungstenite::Error::ConnectionClosed) | Err(tungstenite::Error::AlreadyClosed) => {
                return LinkEvent::Closed(close_reason);
            }
            Err(e) => {
                warn!("Connection lost: {}", e);
                return LinkEvent::Failed(e.to_string());
            }
        }
    }
}
