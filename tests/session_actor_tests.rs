use battleship_engine::prelude::*;
use battleship_engine::CellView;

const HUMAN: ParticipantId = ParticipantId(1);
const BOT: ParticipantId = ParticipantId(2);

fn handle() -> SessionHandle {
    let config = GameConfig::new(Seat::human(HUMAN), Seat::ai(BOT, AiConfig::default())).seed(99);
    spawn_session(create_game(config).unwrap())
}

#[tokio::test]
async fn test_moves_through_handle() {
    let handle = handle();
    assert_eq!(handle.state().await.unwrap(), GameState::AwaitingMove(HUMAN));

    let mv = handle.submit_move(HUMAN, "A1".to_string()).await.unwrap();
    assert_eq!(mv.move_number, 1);
    assert_eq!(handle.state().await.unwrap(), GameState::AwaitingMove(BOT));

    assert_eq!(handle.choose_ai_move(BOT).await.unwrap(), "E5");
    let mv = handle.play_ai_turn(BOT).await.unwrap();
    assert_eq!(mv.coordinate, Coordinate::new(4, 4));

    let view = handle.snapshot(HUMAN).await.unwrap();
    assert_eq!(view.moves, 2);
    assert!(matches!(
        view.own.cell(Coordinate::new(4, 4)),
        Some(CellView::Miss | CellView::Hit | CellView::Sunk)
    ));
    assert_ne!(view.opponent.cell(Coordinate::new(0, 0)), Some(CellView::Unknown));
}

#[tokio::test]
async fn test_errors_pass_through() {
    let handle = handle();
    assert_eq!(
        handle.submit_move(BOT, "A1".to_string()).await,
        Err(GameError::NotYourTurn { expected: HUMAN })
    );
    assert!(matches!(
        handle.submit_move(HUMAN, "A99".to_string()).await,
        Err(GameError::InvalidCoordinate(_))
    ));
    assert_eq!(
        handle.choose_ai_move(HUMAN).await,
        Err(GameError::NotAiControlled(HUMAN))
    );
}

#[tokio::test]
async fn test_concurrent_submissions_are_serialised() {
    let handle = handle();
    let a = handle.clone();
    let b = handle.clone();
    let (ra, rb) = tokio::join!(
        a.submit_move(HUMAN, "B2".to_string()),
        b.submit_move(HUMAN, "C3".to_string())
    );
    // Exactly one of the racing moves lands; the other finds it is no longer its turn.
    assert_eq!(ra.is_ok() as u8 + rb.is_ok() as u8, 1);
    let rejected = if ra.is_ok() { rb } else { ra };
    assert_eq!(rejected, Err(GameError::NotYourTurn { expected: BOT }));
    assert_eq!(handle.snapshot(HUMAN).await.unwrap().moves, 1);
}

#[tokio::test]
async fn test_full_game_over_handle() {
    let config = GameConfig::new(
        Seat::ai(HUMAN, AiConfig::with_difficulty(Difficulty::Parity)),
        Seat::ai(BOT, AiConfig::default()),
    )
    .seed(4);
    let handle = spawn_session(create_game(config).unwrap());
    while let GameState::AwaitingMove(id) = handle.state().await.unwrap() {
        handle.play_ai_turn(id).await.unwrap();
    }
    assert!(handle.state().await.unwrap().is_finished());
    assert_eq!(
        handle.submit_move(HUMAN, "A1".to_string()).await,
        Err(GameError::GameAlreadyFinished)
    );
}

#[test]
#[should_panic]
fn test_spawn_outside_runtime_panics() {
    let _ = handle();
}
