//! Game integration tests.

use warrs::{
    Card, DECK_SIZE, DealError, Deck, DeckError, FaceValue, Game, GameError, GameOptions,
    GameState, HAND_SIZE, Outcome, PlayError, Seat, Suit,
};

const fn card(suit: Suit, face: FaceValue) -> Card {
    Card::new(suit, face)
}

fn suit_run(suit: Suit) -> Vec<Card> {
    FaceValue::ALL.iter().map(|&face| card(suit, face)).collect()
}

/// Builds a deck from the two hands, first hand on top.
fn deck_from_hands(first: &[Card], second: &[Card]) -> Deck {
    let mut cards = first.to_vec();
    cards.extend_from_slice(second);
    Deck::from_cards(cards).unwrap()
}

fn options() -> GameOptions {
    GameOptions::default()
        .with_player_one("Alice")
        .with_player_two("Bob")
}

#[test]
fn fresh_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    for suit in Suit::ALL {
        let faces: Vec<FaceValue> = deck
            .cards()
            .iter()
            .filter(|c| c.suit() == suit)
            .map(Card::face)
            .collect();
        assert_eq!(faces, FaceValue::ALL);
    }

    let mut sorted = deck.cards().to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), DECK_SIZE);
}

#[test]
fn deal_twice_fails() {
    let mut deck = Deck::new();
    let (first, second) = deck.deal().unwrap();
    assert_eq!(first.len(), HAND_SIZE);
    assert_eq!(second.len(), HAND_SIZE);

    assert_eq!(
        deck.deal().unwrap_err(),
        DealError::WrongCardCount {
            expected: DECK_SIZE,
            found: 0,
        }
    );
}

#[test]
fn from_cards_rejects_bad_arrangements() {
    let mut short = Deck::new().cards().to_vec();
    short.pop();
    assert_eq!(
        Deck::from_cards(short).unwrap_err(),
        DeckError::WrongCardCount {
            expected: DECK_SIZE,
            found: DECK_SIZE - 1,
        }
    );

    let mut duplicated = Deck::new().cards().to_vec();
    duplicated[51] = duplicated[0];
    assert_eq!(
        Deck::from_cards(duplicated).unwrap_err(),
        DeckError::DuplicateCard
    );
}

#[test]
fn higher_card_scores_and_tie_scores_nothing() {
    let mut cards = Deck::new().cards().to_vec();
    // Ten of Spades on top of hand one, Five of Diamonds on top of hand two.
    cards.swap(0, 8);
    cards.swap(HAND_SIZE, HAND_SIZE + 3);
    let deck = Deck::from_cards(cards).unwrap();

    let mut game = Game::with_deck(options(), deck);
    game.setup().unwrap();

    let round = game.play_round().unwrap();
    assert_eq!(round.round, 1);
    assert_eq!(round.card(Seat::One), card(Suit::Spades, FaceValue::Ten));
    assert_eq!(round.card(Seat::Two), card(Suit::Diamonds, FaceValue::Five));
    assert_eq!(round.outcome, Outcome::Winner(Seat::One));
    assert_eq!(round.scores, [1, 0]);

    // Three of Spades against Three of Diamonds.
    let round = game.play_round().unwrap();
    assert_eq!(round.outcome, Outcome::Tie);
    assert_eq!(round.scores, [1, 0]);
    assert_eq!(game.player(Seat::One).score(), 1);
    assert_eq!(game.player(Seat::Two).score(), 0);
}

#[test]
fn mirrored_hands_tie_every_round() {
    let first = [suit_run(Suit::Spades), suit_run(Suit::Hearts)].concat();
    let second = [suit_run(Suit::Diamonds), suit_run(Suit::Clubs)].concat();
    let mut game = Game::with_deck(options(), deck_from_hands(&first, &second));

    let result = game.play_to_end().unwrap();
    assert_eq!(result.scores, [0, 0]);
    assert_eq!(result.ties, 26);
    assert_eq!(result.outcome, Outcome::Tie);
}

#[test]
fn fixed_arrangement_reproduces_trace() {
    // Hand one: Spades 2..A, Hearts 2..A.
    let first = [suit_run(Suit::Spades), suit_run(Suit::Hearts)].concat();
    // Hand two: Diamonds A..2, Clubs 3..A then 2.
    let mut diamonds = suit_run(Suit::Diamonds);
    diamonds.reverse();
    let mut clubs = suit_run(Suit::Clubs);
    clubs.rotate_left(1);
    let second = [diamonds, clubs].concat();

    let mut game = Game::with_deck(options(), deck_from_hands(&first, &second));
    let result = game.play_to_end().unwrap();

    let one = Outcome::Winner(Seat::One);
    let two = Outcome::Winner(Seat::Two);
    let mut expected = vec![two; 6];
    expected.push(Outcome::Tie);
    expected.extend([one; 6]);
    expected.extend([two; 12]);
    expected.push(one);

    let outcomes: Vec<Outcome> = game.rounds().iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, expected);

    let rounds = game.rounds();
    assert_eq!(rounds[5].scores, [0, 6]);
    assert_eq!(rounds[6].scores, [0, 6]);
    assert_eq!(rounds[12].scores, [6, 6]);
    assert_eq!(rounds[24].scores, [6, 18]);
    assert_eq!(rounds[25].scores, [7, 18]);

    assert_eq!(result.scores, [7, 18]);
    assert_eq!(result.ties, 1);
    assert_eq!(result.rounds, 26);
    assert_eq!(result.outcome, two);
    assert_eq!(result.outcome.winner(), Some(Seat::Two));
    assert_eq!(game.player(Seat::Two).name(), "Bob");
}

#[test]
fn full_game_accounts_for_every_round() {
    let mut game = Game::new(options(), 2024);
    assert_eq!(game.state(), GameState::Setup);
    assert!(game.result().is_none());

    let result = game.play_to_end().unwrap();
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.cards_in_deck(), 0);
    assert!(game.players().iter().all(|p| !p.has_cards()));

    let [one, two] = result.scores;
    assert_eq!(one + two + result.ties, result.rounds);
    assert_eq!(result.rounds, 26);
    assert_eq!(game.rounds().len(), 26);

    let expected = match one.cmp(&two) {
        core::cmp::Ordering::Greater => Outcome::Winner(Seat::One),
        core::cmp::Ordering::Less => Outcome::Winner(Seat::Two),
        core::cmp::Ordering::Equal => Outcome::Tie,
    };
    assert_eq!(result.outcome, expected);
    assert_eq!(game.result(), Some(result));
}

#[test]
fn same_seed_plays_same_game() {
    let mut a = Game::new(options(), 99);
    let mut b = Game::new(options(), 99);
    assert_eq!(a.play_to_end().unwrap(), b.play_to_end().unwrap());
    assert_eq!(a.rounds(), b.rounds());
}

#[test]
fn state_machine_rejects_out_of_order_calls() {
    let mut game = Game::new(options(), 1);
    assert_eq!(game.play_round().unwrap_err(), GameError::InvalidState);

    game.setup().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.setup().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.player(Seat::One).cards_remaining(), HAND_SIZE);
    assert_eq!(game.player(Seat::Two).cards_remaining(), HAND_SIZE);
    assert_eq!(game.cards_in_deck(), 0);

    let next_one = game.player(Seat::One).hand().front().copied();
    let next_two = game.player(Seat::Two).hand().front().copied();
    let round = game.play_round().unwrap();
    assert_eq!(Some(round.card(Seat::One)), next_one);
    assert_eq!(Some(round.card(Seat::Two)), next_two);
    assert_eq!(game.player(Seat::One).cards_remaining(), HAND_SIZE - 1);

    game.play_to_end().unwrap();
    assert_eq!(game.play_round().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.play_to_end().unwrap_err(), GameError::InvalidState);
}

#[test]
fn errors_render_messages() {
    let err = GameError::Play {
        seat: Seat::Two,
        source: PlayError::EmptyHand,
    };
    assert_eq!(err.to_string(), "player two could not play: hand is empty");

    let err = GameError::from(DealError::WrongCardCount {
        expected: DECK_SIZE,
        found: 0,
    });
    assert_eq!(
        err.to_string(),
        "cannot deal: expected 52 cards in the deck, found 0"
    );
}
