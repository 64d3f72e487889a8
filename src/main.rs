use std::error::Error;
use std::io::{self, BufRead, Write};

use netchess::{parse_square, Color, Connection, Game, MovePayload, NetEvent};

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("netchess");
    println!("commands:");
    println!("  local                play both sides on this terminal");
    println!("  host <port> [side]   host a game (side: white or black, default white)");
    println!("  join <addr>          join a hosted game, e.g. join 127.0.0.1:5000");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["local"] => {
                let mut game = Game::new();
                play(&mut game, None, &mut lines)?;
                return Ok(());
            }
            ["host", port, rest @ ..] => {
                let side = match rest {
                    [] | ["white"] => Color::White,
                    ["black"] => Color::Black,
                    _ => {
                        println!("side must be white or black");
                        continue;
                    }
                };
                println!("waiting for a peer on port {port}...");
                let connection = Connection::host(format!("0.0.0.0:{port}"), side)?;
                let mut game = Game::new();
                game.set_local_side(Some(connection.local_side()));
                play(&mut game, Some(connection), &mut lines)?;
                return Ok(());
            }
            ["join", addr] => {
                let connection = Connection::join(addr)?;
                println!("connected, playing {:?}", connection.local_side());
                let mut game = Game::new();
                game.set_local_side(Some(connection.local_side()));
                play(&mut game, Some(connection), &mut lines)?;
                return Ok(());
            }
            [] => {}
            _ => println!("unrecognized command"),
        }
    }
}

fn play(
    game: &mut Game,
    mut connection: Option<Connection>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn Error>> {
    loop {
        println!("\n{}", game.board());
        if game.in_check() && !game.is_game_over() {
            println!("{:?} is in check", game.side_to_move());
        }
        if game.is_game_over() {
            match game.winner() {
                Some(color) => println!("checkmate, {color:?} wins"),
                None => println!("stalemate, draw"),
            }
            return Ok(());
        }

        let my_turn = game
            .local_side()
            .map_or(true, |side| side == game.side_to_move());

        if my_turn {
            print!("{:?} to move (e.g. e2e4, or quit): ", game.side_to_move());
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let input = line?;
            let input = input.trim();
            if input == "quit" {
                return Ok(());
            }
            let Some((from, to)) = parse_move(input) else {
                println!("moves look like e2e4");
                continue;
            };
            game.select(from);
            let payload = game.attempt_move(to).map(MovePayload::from);
            match payload {
                Some(payload) => {
                    if let Some(connection) = connection.as_mut() {
                        connection.send(&payload)?;
                    }
                }
                None => println!("illegal move"),
            }
        } else if let Some(connection) = connection.as_ref() {
            println!("waiting for {:?}...", game.side_to_move());
            match connection.recv_event() {
                Some(NetEvent::Move(payload)) => {
                    if let Err(err) = game.apply_remote(&payload) {
                        println!("rejected remote move: {err}");
                    }
                }
                Some(NetEvent::Disconnected) | None => {
                    println!("peer disconnected");
                    return Ok(());
                }
            }
        }
    }
}

fn parse_move(input: &str) -> Option<(netchess::Square, netchess::Square)> {
    if input.len() != 4 || !input.is_ascii() {
        return None;
    }
    let from = parse_square(&input[..2])?;
    let to = parse_square(&input[2..])?;
    Some((from, to))
}
