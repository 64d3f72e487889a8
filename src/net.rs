//! Peer-to-peer move transport.
//!
//! One TCP connection carries newline-delimited JSON messages between the
//! two players. The host accepts a single peer and immediately sends a side
//! assignment; after that both ends exchange only move payloads. A
//! dedicated receiver thread reads the socket and forwards decoded events
//! through a channel, so game state is only ever touched from the thread
//! that owns the [`crate::game::Game`].

use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Color, MoveRecord};
use crate::sync::StopFlag;

/// A move as it travels over the wire.
///
/// Coordinates are plain row/column pairs; the flags describe what the
/// sender's executor did so logs on both ends agree, but the receiver
/// re-derives the side effects from its own board. Missing flags decode
/// as `false`, so a minimal `{"from": .., "to": ..}` payload is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    pub from: (usize, usize),
    pub to: (usize, usize),
    #[serde(default)]
    pub castling: bool,
    #[serde(default)]
    pub en_passant: bool,
}

impl From<&MoveRecord> for MovePayload {
    fn from(record: &MoveRecord) -> Self {
        MovePayload {
            from: (record.from.0, record.from.1),
            to: (record.to.0, record.to.1),
            castling: record.is_castling,
            en_passant: record.is_en_passant,
        }
    }
}

/// Everything that can appear on the wire.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireMessage {
    /// Host-to-joiner side assignment, sent once right after accept.
    Side { side: Color },
    Move {
        #[serde(flatten)]
        payload: MovePayload,
    },
}

/// An event delivered by the receiver thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetEvent {
    Move(MovePayload),
    /// The peer went away (clean close, decode failure, or socket error).
    Disconnected,
}

/// A bound listener waiting for the single peer.
pub struct Host {
    listener: TcpListener,
    side: Color,
}

impl Host {
    /// Bind to `addr` and choose the side the host will play.
    pub fn bind<A: ToSocketAddrs>(addr: A, side: Color) -> io::Result<Host> {
        let listener = TcpListener::bind(addr)?;
        Ok(Host { listener, side })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Block until the peer connects, assign it the opposite side, and
    /// return the live connection.
    pub fn accept(self) -> io::Result<Connection> {
        let (mut stream, peer) = self.listener.accept()?;
        info!("peer connected from {peer}");
        write_message(
            &mut stream,
            &WireMessage::Side {
                side: self.side.opponent(),
            },
        )?;
        Connection::start(stream, self.side)
    }
}

/// A live connection to the peer.
///
/// Owns the socket, the receiver thread, and the channel the thread feeds.
/// Dropping the connection shuts the receiver down.
pub struct Connection {
    stream: TcpStream,
    local_side: Color,
    events: Receiver<NetEvent>,
    stop: StopFlag,
    receiver: Option<JoinHandle<()>>,
}

impl Connection {
    /// Host a game on `addr` playing `side`, blocking until a peer joins.
    pub fn host<A: ToSocketAddrs>(addr: A, side: Color) -> io::Result<Connection> {
        Host::bind(addr, side)?.accept()
    }

    /// Join a hosted game at `addr`. Blocks until the host's side
    /// assignment arrives; the returned connection plays that side.
    pub fn join<A: ToSocketAddrs>(addr: A) -> io::Result<Connection> {
        let stream = TcpStream::connect(addr)?;
        let mut reader = BufReader::new(stream.try_clone()?);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "host closed the connection before assigning a side",
            ));
        }
        let side = match serde_json::from_str(&line) {
            Ok(WireMessage::Side { side }) => side,
            Ok(other) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("expected side assignment, got {other:?}"),
                ))
            }
            Err(err) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("malformed side assignment: {err}"),
                ))
            }
        };
        info!("joined as {side:?}");
        Connection::start(stream, side)
    }

    fn start(stream: TcpStream, local_side: Color) -> io::Result<Connection> {
        let (sender, events) = mpsc::channel();
        let stop = StopFlag::new();
        let reader_stream = stream.try_clone()?;
        let thread_stop = stop.clone();
        let receiver = thread::Builder::new()
            .name("netchess-recv".into())
            .spawn(move || receive_loop(reader_stream, sender, thread_stop))?;
        Ok(Connection {
            stream,
            local_side,
            events,
            stop,
            receiver: Some(receiver),
        })
    }

    /// The side this end of the connection plays.
    #[must_use]
    pub fn local_side(&self) -> Color {
        self.local_side
    }

    /// Send a move to the peer.
    pub fn send(&mut self, payload: &MovePayload) -> io::Result<()> {
        write_message(
            &mut self.stream,
            &WireMessage::Move {
                payload: payload.clone(),
            },
        )
    }

    /// Poll for a received event without blocking.
    pub fn try_event(&self) -> Option<NetEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(NetEvent::Disconnected),
        }
    }

    /// Block until the next event. Returns `None` only if the receiver
    /// thread has exited and drained.
    pub fn recv_event(&self) -> Option<NetEvent> {
        self.events.recv().ok()
    }

    /// Stop the receiver thread and close the socket.
    pub fn shutdown(&mut self) {
        self.stop.stop();
        // Unblocks the reader; an already-dead socket is fine.
        let _ = self.stream.shutdown(Shutdown::Both);
        if let Some(handle) = self.receiver.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn write_message(stream: &mut TcpStream, message: &WireMessage) -> io::Result<()> {
    let mut line = serde_json::to_string(message)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    line.push('\n');
    stream.write_all(line.as_bytes())
}

fn receive_loop(stream: TcpStream, events: Sender<NetEvent>, stop: StopFlag) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                if !stop.is_stopped() {
                    info!("peer closed the connection");
                    let _ = events.send(NetEvent::Disconnected);
                }
                break;
            }
            Ok(_) => match serde_json::from_str::<WireMessage>(&line) {
                Ok(WireMessage::Move { payload }) => {
                    debug!("received move {:?} -> {:?}", payload.from, payload.to);
                    if events.send(NetEvent::Move(payload)).is_err() {
                        break;
                    }
                }
                Ok(WireMessage::Side { side }) => {
                    warn!("unexpected mid-game side assignment ({side:?}), ignoring");
                }
                Err(err) => {
                    warn!("undecodable message from peer, dropping connection: {err}");
                    let _ = events.send(NetEvent::Disconnected);
                    break;
                }
            },
            Err(err) => {
                if !stop.is_stopped() {
                    warn!("read error from peer: {err}");
                    let _ = events.send(NetEvent::Disconnected);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    #[test]
    fn test_payload_roundtrip() {
        let payload = MovePayload {
            from: (6, 4),
            to: (4, 4),
            castling: false,
            en_passant: false,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: MovePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }

    #[test]
    fn test_payload_flags_default_false() {
        let payload: MovePayload = serde_json::from_str(r#"{"from":[6,4],"to":[4,4]}"#).unwrap();
        assert!(!payload.castling);
        assert!(!payload.en_passant);
    }

    #[test]
    fn test_wire_move_is_tagged() {
        let message = WireMessage::Move {
            payload: MovePayload {
                from: (7, 4),
                to: (7, 6),
                castling: true,
                en_passant: false,
            },
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains(r#""type":"move""#));
        assert!(json.contains(r#""castling":true"#));
    }

    #[test]
    fn test_side_assignment_decodes() {
        let message: WireMessage =
            serde_json::from_str(r#"{"type":"side","side":"black"}"#).unwrap();
        match message {
            WireMessage::Side { side } => assert_eq!(side, Color::Black),
            other => panic!("expected side assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_from_record() {
        let record = MoveRecord {
            from: Square(7, 4),
            to: Square(7, 6),
            piece: Piece::new(Color::White, PieceKind::King),
            captured: None,
            is_en_passant: false,
            is_castling: true,
        };
        let payload = MovePayload::from(&record);
        assert_eq!(payload.from, (7, 4));
        assert_eq!(payload.to, (7, 6));
        assert!(payload.castling);
        assert!(!payload.en_passant);
    }
}
