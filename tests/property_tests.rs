use pinhash::digest::{Digester, Sha256Digester};
use pinhash::game::{filter_input, is_well_formed, Game, Outcome};
use pinhash::session::SessionManager;
use pinhash::store::{MemoryStore, ATTEMPTS_KEY, DIGEST_KEY, PIN_KEY};
use proptest::prelude::*;

fn ready_game(pin: u16) -> Game<MemoryStore, Sha256Digester> {
    let pin = pin.to_string();
    let digest = Sha256Digester.digest(&pin);
    let store = MemoryStore::with_entries([
        (PIN_KEY, pin.as_str()),
        (DIGEST_KEY, digest.as_str()),
        (ATTEMPTS_KEY, "0"),
    ]);
    let mut game = Game::new(SessionManager::new(store, Sha256Digester));
    game.publish_digest().unwrap();
    game
}

proptest! {
    #[test]
    fn test_filter_input_shape(raw in "\\PC*") {
        let filtered = filter_input(&raw);

        // Invariant: at most 3 characters, all ASCII digits
        prop_assert!(filtered.len() <= 3);
        prop_assert!(filtered.bytes().all(|b| b.is_ascii_digit()));

        // Invariant: the digits keep their order from the raw input
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        prop_assert!(digits.starts_with(&filtered));
    }

    #[test]
    fn test_filter_input_idempotent(raw in "\\PC*") {
        let once = filter_input(&raw);
        prop_assert_eq!(filter_input(&once), once);
    }

    #[test]
    fn test_filtered_field_of_three_is_well_formed(raw in "[0-9a-z ]{0,12}") {
        let filtered = filter_input(&raw);
        prop_assert_eq!(is_well_formed(&filtered), filtered.len() == 3);
    }

    #[test]
    fn test_correct_iff_guess_equals_pin(pin in 100u16..=999, guess in 100u16..=999) {
        let mut game = ready_game(pin);
        let outcome = game.submit_guess(&guess.to_string()).unwrap();

        if guess == pin {
            prop_assert_eq!(outcome, Outcome::Correct);
        } else {
            prop_assert_eq!(outcome, Outcome::Incorrect);
        }
        prop_assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_malformed_guesses_never_count(raw in "[^0-9]*[0-9]{0,2}[^0-9]*") {
        let mut game = ready_game(457);
        prop_assert_eq!(game.submit_guess(&raw).unwrap(), Outcome::InvalidShape);
        prop_assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_attempts_count_every_well_formed_miss(misses in 0usize..20) {
        let mut game = ready_game(457);
        for _ in 0..misses {
            prop_assert_eq!(game.submit_guess("458").unwrap(), Outcome::Incorrect);
        }
        prop_assert_eq!(game.submit_guess("457").unwrap(), Outcome::Correct);
        prop_assert_eq!(game.attempts() as usize, misses + 1);
    }
}
