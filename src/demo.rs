//! Demonstration sequence.
//!
//! Two accounts play one game of each variant against each other:
//! `Player1` (standard, starting at 1000) wins every game and
//! `Player2` (reduced penalty, starting at 1200) loses every game.

use crate::accounts::GameAccount;
use crate::games::Game;

/// Run the demonstration and return both accounts, `Player1` first.
pub fn run_demo() -> Vec<GameAccount> {
    let mut player1 = GameAccount::standard("Player1", 1000);
    let mut player2 = GameAccount::reduced_penalty("Player2", 1200);

    for game in [Game::standard(), Game::training(), Game::single_player()] {
        player1.win_game("Player2", game);
        player2.lose_game("Player1", game);
    }

    vec![player1, player2]
}
