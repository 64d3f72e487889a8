//! Loopback tests for the TCP move transport.

use std::thread;
use std::time::Duration;

use netchess::{Color, Connection, Game, Host, MovePayload, NetEvent, Square};

fn connect_pair(host_side: Color) -> (Connection, Connection) {
    let host = Host::bind("127.0.0.1:0", host_side).unwrap();
    let addr = host.local_addr().unwrap();
    let joiner = thread::spawn(move || Connection::join(addr).unwrap());
    let host_conn = host.accept().unwrap();
    (host_conn, joiner.join().unwrap())
}

#[test]
fn handshake_assigns_opposite_sides() {
    let (host, peer) = connect_pair(Color::White);
    assert_eq!(host.local_side(), Color::White);
    assert_eq!(peer.local_side(), Color::Black);
}

#[test]
fn handshake_respects_host_side_choice() {
    let (host, peer) = connect_pair(Color::Black);
    assert_eq!(host.local_side(), Color::Black);
    assert_eq!(peer.local_side(), Color::White);
}

#[test]
fn moves_travel_both_ways() {
    let (mut host, mut peer) = connect_pair(Color::White);

    let opening = MovePayload {
        from: (6, 4),
        to: (4, 4),
        castling: false,
        en_passant: false,
    };
    host.send(&opening).unwrap();
    assert_eq!(peer.recv_event(), Some(NetEvent::Move(opening)));

    let reply = MovePayload {
        from: (1, 4),
        to: (3, 4),
        castling: false,
        en_passant: false,
    };
    peer.send(&reply).unwrap();
    assert_eq!(host.recv_event(), Some(NetEvent::Move(reply)));
}

#[test]
fn relayed_moves_keep_the_games_in_lockstep() {
    let (mut host, peer) = connect_pair(Color::White);

    let mut host_game = Game::new();
    host_game.set_local_side(Some(host.local_side()));
    let mut peer_game = Game::new();
    peer_game.set_local_side(Some(peer.local_side()));

    host_game.select(Square(6, 4));
    let record = host_game.attempt_move(Square(4, 4)).unwrap();
    let payload = MovePayload::from(record);
    host.send(&payload).unwrap();

    match peer.recv_event() {
        Some(NetEvent::Move(payload)) => peer_game.apply_remote(&payload).unwrap(),
        other => panic!("expected a move event, got {other:?}"),
    }
    assert_eq!(host_game.board(), peer_game.board());
    assert_eq!(peer_game.side_to_move(), Color::Black);
}

#[test]
fn try_event_does_not_block() {
    let (mut host, peer) = connect_pair(Color::White);
    assert_eq!(peer.try_event(), None);

    let payload = MovePayload {
        from: (6, 0),
        to: (5, 0),
        castling: false,
        en_passant: false,
    };
    host.send(&payload).unwrap();
    // Give the receiver thread a moment to pick the line up.
    let mut event = None;
    for _ in 0..50 {
        event = peer.try_event();
        if event.is_some() {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(event, Some(NetEvent::Move(payload)));
}

#[test]
fn dropping_a_peer_signals_disconnect() {
    let (host, peer) = connect_pair(Color::White);
    drop(host);
    assert_eq!(peer.recv_event(), Some(NetEvent::Disconnected));
}
