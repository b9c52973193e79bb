//! Integration tests for account rating updates and history.

use game_rating::demo::run_demo;
use game_rating::{
    AccountKind, Game, GameAccount, GameHistoryEntry, Outcome, RATING_CEILING, RATING_FLOOR,
};

// =============================================================================
// Recorded games
// =============================================================================

#[test]
fn test_standard_win_from_five() {
    let mut account = GameAccount::standard("Player1", 5);
    account.win_game("Player2", Game::standard());

    assert_eq!(account.current_rating(), 10);
    assert_eq!(account.games_count(), 1);
    assert_eq!(
        account.history().as_slice(),
        &[GameHistoryEntry {
            opponent_name: "Player2".to_string(),
            won: true,
            rating_delta: 100,
            game_index: 1,
        }]
    );
}

#[test]
fn test_reduced_penalty_loss_from_ten() {
    let mut account = GameAccount::reduced_penalty("Player2", 10);
    account.lose_game("Player1", Game::standard());

    assert_eq!(account.current_rating(), RATING_FLOOR);
    assert_eq!(account.history().last().unwrap().outcome(), Outcome::Defeat);
}

#[test]
fn test_clamping_is_the_same_for_every_kind() {
    for kind in AccountKind::ALL {
        let mut account = GameAccount::new(kind, "P", 5);
        account.win_game("Q", Game::training());
        assert_eq!(account.current_rating(), RATING_CEILING);
        account.lose_game("Q", Game::single_player());
        assert_eq!(account.current_rating(), RATING_FLOOR);
    }
}

#[test]
fn test_small_win_below_ceiling() {
    // A negative starting rating is kept and only the ceiling applies on a win.
    let mut account = GameAccount::standard("P", -60);
    account.win_game("Q", Game::training());
    assert_eq!(account.current_rating(), -10);
}

#[test]
fn test_mixed_sequence_indices() {
    let mut account = GameAccount::bonus_points("P", 3);
    let games = [Game::Standard, Game::Training, Game::SinglePlayer, Game::Training];
    for (i, game) in games.into_iter().enumerate() {
        if i % 2 == 0 {
            account.lose_game(format!("opp{}", i), game);
        } else {
            account.win_game(format!("opp{}", i), game);
        }
    }

    assert_eq!(account.games_count(), 4);
    for (i, entry) in account.history().iter().enumerate() {
        assert_eq!(entry.game_index as usize, i + 1);
        assert_eq!(entry.opponent_name, format!("opp{}", i));
        assert_eq!(entry.won, i % 2 == 1);
    }
}

// =============================================================================
// Policy updates
// =============================================================================

#[test]
fn test_bonus_update_at_five_games() {
    let mut account = GameAccount::bonus_points("P", 5);
    for _ in 0..5 {
        account.win_game("Q", Game::training());
    }
    let before = account.current_rating();

    account.update_rating(Game::standard());
    assert_eq!(account.current_rating(), before + 120);
}

#[test]
fn test_update_rating_leaves_history_alone() {
    for kind in AccountKind::ALL {
        let mut account = GameAccount::new(kind, "P", 5);
        account.win_game("Q", Game::standard());
        let history = account.history().clone();

        account.update_rating(Game::single_player());
        account.update_rating(Game::standard());

        assert_eq!(account.games_count(), 1);
        assert_eq!(account.history(), &history);
        assert!(account.current_rating() > RATING_CEILING);
    }
}

#[test]
fn test_policy_table() {
    let cases = [
        (AccountKind::Standard, Game::Training, 50),
        (AccountKind::ReducedPenalty, Game::Standard, 50),
        (AccountKind::ReducedPenalty, Game::SinglePlayer, 37),
        (AccountKind::BonusPoints, Game::SinglePlayer, 95),
    ];
    for (kind, game, expected) in cases {
        let mut account = GameAccount::new(kind, "P", 0);
        assert_eq!(account.update_rating(game), expected);
        assert_eq!(account.current_rating(), expected);
    }
}

// =============================================================================
// Demo
// =============================================================================

#[test]
fn test_demo_reports() {
    let accounts = run_demo();

    let expected_player1 = "\
Player: Player1, Rating: 10
GameIndex OpponentName   Outcome   Rating    
1         Player2        Victory   100       
2         Player2        Victory   50        
3         Player2        Victory   75        
";
    let expected_player2 = "\
Player: Player2, Rating: 1095
GameIndex OpponentName   Outcome   Rating    
1         Player1        Defeat    50        
2         Player1        Defeat    25        
3         Player1        Defeat    30        
";

    assert_eq!(accounts[0].stats(), expected_player1);
    assert_eq!(accounts[1].stats(), expected_player2);
}
