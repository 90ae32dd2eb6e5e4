use battleship_engine::{
    init_logging, AiConfig, Difficulty, GameConfig, GameSession, GameState, ParticipantId, Seat,
};
use serde_json::json;

fn parse_difficulty(text: &str) -> anyhow::Result<Difficulty> {
    match text {
        "random" => Ok(Difficulty::Random),
        "parity" => Ok(Difficulty::Parity),
        "smart" => Ok(Difficulty::Smart),
        other => Err(anyhow::anyhow!("unknown difficulty {:?}", other)),
    }
}

/// Play AI vs AI games and print a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: {} <seed> <games> [difficulty1] [difficulty2]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;
    let d1 = args.get(3).map(|s| parse_difficulty(s)).transpose()?.unwrap_or(Difficulty::Smart);
    let d2 = args.get(4).map(|s| parse_difficulty(s)).transpose()?.unwrap_or(Difficulty::Smart);

    let p1 = ParticipantId(1);
    let p2 = ParticipantId(2);
    let mut wins = [0u64; 2];
    let mut total_moves = 0u64;

    for game in 0..games {
        let config = GameConfig::new(
            Seat::ai(p1, AiConfig::with_difficulty(d1)),
            Seat::ai(p2, AiConfig::with_difficulty(d2)),
        )
        .seed(seed.wrapping_add(game));
        let mut session = GameSession::create(config).map_err(|e| anyhow::anyhow!(e))?;
        while let GameState::AwaitingMove(id) = session.state() {
            session.play_ai_turn(id).map_err(|e| anyhow::anyhow!(e))?;
        }
        match session.winner() {
            Some(w) if w == p1 => wins[0] += 1,
            Some(_) => wins[1] += 1,
            None => {}
        }
        total_moves += session.move_count() as u64;
        log::debug!("game {} finished in {} moves", game, session.move_count());
    }

    let average = if games == 0 { 0.0 } else { total_moves as f64 / games as f64 };
    let result = json!({
        "player1": {"difficulty": d1, "wins": wins[0]},
        "player2": {"difficulty": d2, "wins": wins[1]},
        "games": games,
        "average_moves": average,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
