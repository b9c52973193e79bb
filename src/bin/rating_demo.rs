//! Rating demo CLI
//!
//! Plays the demonstration games and prints each account's stats.

use game_rating::demo::run_demo;

fn main() {
    for account in run_demo() {
        println!("{}", account.stats());
    }
}
