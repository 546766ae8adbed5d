use armada::{AutoPilot, Board, Game, TurnEngine};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn auto_engine(name: &str) -> TurnEngine<Vec<u8>> {
    TurnEngine::new(name, Board::new(), Box::new(AutoPilot::default()), Vec::new())
}

#[test]
fn test_auto_game_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Game::new(auto_engine("A"), auto_engine("B"));

    let winner = game.run(&mut rng).unwrap();

    // both autopilots use the same layout and raster fire, so the first
    // mover lands the final hit half a turn earlier
    assert_eq!(winner, "A");
    assert!(game.player_b().has_lost());
    assert!(!game.player_a().has_lost());
}

#[test]
fn test_auto_game_places_the_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = Game::new(auto_engine("A"), auto_engine("B"));
    let _ = game.run(&mut rng).unwrap();

    for engine in [game.player_a(), game.player_b()] {
        assert_eq!(engine.board().ships().len(), armada::FLEET.len());
        let total_cells: usize = engine.board().ships().iter().map(|s| s.cells().len()).sum();
        let expected: usize = armada::FLEET.iter().map(|k| k.cell_count()).sum();
        assert_eq!(total_cells, expected);
    }
}

#[test]
fn test_winner_is_announced_to_both_players() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::new(auto_engine("A"), auto_engine("B"));
    let winner = game.run(&mut rng).unwrap();

    for engine in [game.player_a(), game.player_b()] {
        let out = String::from_utf8(engine.output().clone()).unwrap();
        assert!(
            out.contains(&format!("Player {winner} has won the game!")),
            "winner missing from player {}'s output",
            engine.name()
        );
    }
}
