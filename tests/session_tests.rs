use seabattle::{CellState, GameController, GameSession, GameState, Orientation};
use tokio::time::{sleep, Duration};

const DELAY: Duration = Duration::from_millis(1000);

async fn ready_session(seed: u64) -> GameSession {
    let session = GameSession::new(GameController::new(seed).unwrap(), DELAY);
    session
        .place_ship(0, 0, 4, Orientation::Vertical)
        .await
        .unwrap();
    session.randomize_player_fleet().await.unwrap();
    session.confirm_ready().await.unwrap();
    session
}

fn resolved(grid: &seabattle::Grid) -> usize {
    grid.count(CellState::Resolved)
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_delay() {
    let mut session = ready_session(1).await;
    session.player_attack(4, 4).await.unwrap();
    assert!(session.computer_pending());

    sleep(DELAY / 2).await;
    assert_eq!(session.state().await, GameState::ComputerTurn);
    assert_eq!(resolved(&session.snapshot().await.player_grid), 0);

    session.wait_for_computer().await;
    assert!(!session.computer_pending());
    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.state, GameState::PlayerTurn);
    assert_eq!(resolved(&snapshot.player_grid), 1);
}

#[tokio::test(start_paused = true)]
async fn test_player_cannot_fire_while_computer_thinks() {
    let mut session = ready_session(2).await;
    session.player_attack(1, 1).await.unwrap();
    assert!(session.player_attack(2, 2).await.is_err());
    session.wait_for_computer().await;
    session.player_attack(2, 2).await.unwrap();
    session.wait_for_computer().await;
    assert_eq!(resolved(&session.snapshot().await.computer_grid), 2);
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_turn() {
    let mut session = ready_session(3).await;
    session.player_attack(0, 9).await.unwrap();
    session.reset().await.unwrap();
    assert!(!session.computer_pending());

    sleep(DELAY * 2).await;
    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.state, GameState::Placement);
    assert_eq!(resolved(&snapshot.player_grid), 0);
    assert_eq!(resolved(&snapshot.computer_grid), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stale_turn_is_discarded() {
    let mut session = ready_session(4).await;
    session.player_attack(9, 0).await.unwrap();
    // Reset behind the session's back so the task is not aborted.
    session.controller().lock().await.reset().unwrap();

    sleep(DELAY * 2).await;
    session.wait_for_computer().await;
    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.state, GameState::Placement);
    assert_eq!(resolved(&snapshot.player_grid), 0);
    assert_eq!(session.controller().lock().await.last_computer_shot(), None);
}

#[tokio::test(start_paused = true)]
async fn test_session_plays_to_the_end() {
    let mut session = ready_session(5).await;
    let mut shots = 0;
    'outer: for y in 0..10 {
        for x in 0..10 {
            if session.state().await == GameState::Finished {
                break 'outer;
            }
            session.player_attack(x, y).await.unwrap();
            shots += 1;
            session.wait_for_computer().await;
        }
    }
    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.state, GameState::Finished);
    assert!(snapshot.winner.is_some());
    assert!(shots <= 100);
}
