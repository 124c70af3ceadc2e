//! Game integration tests: the worked scenarios and full play-throughs.

use memory_match::cards::{CardFace, Deck};
use memory_match::core::{CardId, GameRng, PairId, PairSpec};
use memory_match::game::{Game, GameEvent, GamePhase, IgnoreReason, Resolution, SelectOutcome};

fn ab() -> Vec<PairSpec> {
    vec![PairSpec::new("a", "A"), PairSpec::new("b", "B")]
}

/// Deck laid out as A, B, B, A.
fn abba() -> Game {
    Game::from_deck(Deck::arranged(&ab(), &[0, 1, 1, 0]).unwrap())
}

fn faces(game: &Game) -> Vec<CardFace> {
    game.deck().iter().map(|c| c.face()).collect()
}

/// Solve a game by picking each pair in turn.
fn solve(game: &mut Game) -> Vec<Resolution> {
    let mut by_pair: Vec<(PairId, CardId)> = game.deck().iter().map(|c| (c.pair_id, c.id)).collect();
    by_pair.sort();

    by_pair
        .chunks(2)
        .filter_map(|chunk| {
            game.select_card(chunk[0].1);
            game.select_card(chunk[1].1);
            game.resolve()
        })
        .collect()
}

// =============================================================================
// Worked Scenarios
// =============================================================================

#[test]
fn test_scenario_mismatch_match_win() {
    let mut game = abba();

    // A then B: mismatch
    assert_eq!(game.select_card(CardId(0)), SelectOutcome::Flipped);
    assert_eq!(game.select_card(CardId(1)), SelectOutcome::EvaluationPending);
    assert_eq!(
        game.resolve(),
        Some(Resolution::Mismatch {
            cards: [CardId(0), CardId(1)]
        })
    );
    assert_eq!(faces(&game), vec![CardFace::Hidden; 4]);

    // A then A: match
    game.select_card(CardId(0));
    game.select_card(CardId(3));
    assert_eq!(
        game.resolve(),
        Some(Resolution::Match {
            pair: PairId(0),
            won: false
        })
    );
    assert_eq!(
        faces(&game),
        vec![CardFace::Matched, CardFace::Hidden, CardFace::Hidden, CardFace::Matched]
    );
    assert!(!game.is_won());

    // B then B: match and win
    game.select_card(CardId(1));
    game.select_card(CardId(2));
    assert_eq!(
        game.resolve(),
        Some(Resolution::Match {
            pair: PairId(1),
            won: true
        })
    );
    assert!(game.is_won());
    assert_eq!(game.phase(), GamePhase::Won);
}

#[test]
fn test_scenario_same_card_twice() {
    let mut game = abba();

    game.select_card(CardId(2));
    let before = game.view();
    assert_eq!(
        game.select_card(CardId(2)),
        SelectOutcome::Ignored(IgnoreReason::AlreadyFlipped)
    );

    assert_eq!(game.selection().len(), 1);
    assert_eq!(game.view(), before);
}

#[test]
fn test_scenario_third_card_during_evaluation() {
    let mut game = abba();

    game.select_card(CardId(0));
    game.select_card(CardId(1));
    let before = game.view();
    let history_len = game.history().len();

    assert_eq!(
        game.select_card(CardId(2)),
        SelectOutcome::Ignored(IgnoreReason::Evaluating)
    );
    assert_eq!(game.view(), before);
    assert_eq!(game.history().len(), history_len);
    assert_eq!(game.deck().get(CardId(2)).unwrap().face(), CardFace::Hidden);

    // After resolution the third card can be picked
    game.resolve();
    assert_eq!(game.select_card(CardId(2)), SelectOutcome::Flipped);
}

// =============================================================================
// Full Play-Throughs
// =============================================================================

#[test]
fn test_perfect_play_wins_on_last_pair() {
    let pairs: Vec<_> = ["❤️", "⭐", "🌙", "🌸", "💋", "✨"]
        .iter()
        .enumerate()
        .map(|(i, glyph)| PairSpec::new(format!("k{i}"), *glyph))
        .collect();
    let mut game = Game::new(&pairs, 6, &mut GameRng::new(42)).unwrap();

    let resolutions = solve(&mut game);

    assert_eq!(resolutions.len(), 6);
    let wins: Vec<bool> = resolutions
        .iter()
        .map(|r| matches!(r, Resolution::Match { won: true, .. }))
        .collect();
    assert_eq!(wins, vec![false, false, false, false, false, true]);
    assert!(game.is_won());
    assert_eq!(game.matched_pairs(), 6);

    let won_events = game.history().iter().filter(|r| r.event == GameEvent::Won).count();
    assert_eq!(won_events, 1);
    assert_eq!(game.history().last().map(|r| r.event.clone()), Some(GameEvent::Won));
}

#[test]
fn test_single_pair_game() {
    let pairs = vec![PairSpec::new("only", "🃏")];
    let mut game = Game::new(&pairs, 1, &mut GameRng::new(0)).unwrap();
    assert_eq!(game.deck().len(), 2);

    let resolutions = solve(&mut game);
    assert_eq!(
        resolutions,
        vec![Resolution::Match {
            pair: PairId(0),
            won: true
        }]
    );
}

#[test]
fn test_won_game_ignores_everything() {
    let mut game = abba();
    solve(&mut game);
    let before = game.view();

    for id in 0..6 {
        assert_eq!(
            game.select_card(CardId(id)),
            SelectOutcome::Ignored(IgnoreReason::Won)
        );
    }
    assert_eq!(game.resolve(), None);
    assert_eq!(game.view(), before);
}

#[test]
fn test_pair_count_boundary() {
    let pairs = ab();
    let mut rng = GameRng::new(9);

    assert_eq!(Game::new(&pairs, 2, &mut rng).unwrap().deck().len(), 4);
    assert!(Game::new(&pairs, 3, &mut rng).is_err());
    assert!(Game::new(&pairs, 0, &mut rng).is_err());
}

#[test]
fn test_clone_is_independent_snapshot() {
    let mut game = abba();
    game.select_card(CardId(0));
    let snapshot = game.clone();

    game.select_card(CardId(3));
    game.resolve();

    assert_eq!(snapshot.matched_pairs(), 0);
    assert_eq!(snapshot.selection().as_slice(), &[CardId(0)]);
    assert_eq!(game.matched_pairs(), 1);
}
