//! Tests for turn protocols and round resolution.

use parlor_twentyone::{
    dealer_play, play_round, player_play, resolve_round, Action, Card, Deck, Hand, Rank, Role,
    RoundWinner, Suit, TurnOutcome, DEALER_STANDS_AT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(17)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(Card::new(rank, Suit::Hearts));
    }
    hand
}

#[test]
fn test_dealer_stands_at_seventeen_or_more() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    let mut hand = Hand::opening(&mut deck, &mut rng).unwrap();

    let outcome = dealer_play(&mut deck, &mut hand, &mut rng).unwrap();
    assert!(hand.total() >= DEALER_STANDS_AT);
    assert_eq!(outcome == TurnOutcome::Busted, hand.is_busted());
}

#[test]
fn test_dealer_does_not_hit_a_made_hand() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    let mut hand = hand_of(&[Rank::King, Rank::Seven]);

    let outcome = dealer_play(&mut deck, &mut hand, &mut rng).unwrap();
    assert_eq!(outcome, TurnOutcome::Stood);
    assert_eq!(hand.cards().len(), 2);
    assert_eq!(deck.len(), 52);
}

#[test]
fn test_player_stay_ends_turn_immediately() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    let mut hand = hand_of(&[Rank::King, Rank::Seven]);

    let outcome = player_play(&mut deck, &mut hand, &mut rng, |_| Action::Stay).unwrap();
    assert_eq!(outcome, TurnOutcome::Stood);
    assert_eq!(hand.cards().len(), 2);
}

#[test]
fn test_player_hits_until_choice_says_stay() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    let mut hand = hand_of(&[Rank::Two, Rank::Three]);

    let outcome = player_play(&mut deck, &mut hand, &mut rng, |hand: &Hand| {
        if hand.total() < 12 {
            Action::Hit
        } else {
            Action::Stay
        }
    })
    .unwrap();

    match outcome {
        TurnOutcome::Stood => assert!(hand.total() >= 12 && hand.total() <= 21),
        TurnOutcome::Busted => assert!(hand.total() > 21),
    }
    assert!(hand.cards().len() > 2);
}

#[test]
fn test_player_turn_ends_on_bust_without_asking_again() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    // 20 against an always-hit policy: the first draw of anything
    // but an Ace busts, and an Ace makes 21 and draws again.
    let mut hand = hand_of(&[Rank::King, Rank::Queen]);

    let outcome = player_play(&mut deck, &mut hand, &mut rng, |_| Action::Hit).unwrap();
    assert_eq!(outcome, TurnOutcome::Busted);
    assert!(hand.is_busted());
}

#[test]
fn test_resolution_orders_busts_before_totals() {
    let busted = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
    let made = hand_of(&[Rank::King, Rank::Seven]);

    // Player bust loses even against a busted dealer.
    assert_eq!(resolve_round(&busted, &busted), RoundWinner::Dealer);
    assert_eq!(resolve_round(&busted, &made), RoundWinner::Dealer);
    assert_eq!(resolve_round(&made, &busted), RoundWinner::Player);
}

#[test]
fn test_resolution_compares_totals() {
    let nineteen = hand_of(&[Rank::King, Rank::Nine]);
    let eighteen = hand_of(&[Rank::King, Rank::Eight]);
    let also_nineteen = hand_of(&[Rank::Ten, Rank::Nine]);

    assert_eq!(resolve_round(&nineteen, &eighteen), RoundWinner::Player);
    assert_eq!(resolve_round(&eighteen, &nineteen), RoundWinner::Dealer);
    assert_eq!(resolve_round(&nineteen, &also_nineteen), RoundWinner::Tie);
}

#[test]
fn test_play_round_opening_hands_and_outcome_agree() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);

    let summary = play_round(&mut deck, &mut rng, |hand: &Hand| {
        if hand.total() < 17 {
            Action::Hit
        } else {
            Action::Stay
        }
    })
    .unwrap();

    assert!(summary.hand(Role::Player).cards().len() >= 2);
    assert!(summary.hand(Role::Dealer).cards().len() >= 2);

    if summary.player.is_busted() {
        // Dealer keeps the untouched opening hand and wins outright.
        assert_eq!(summary.winner, RoundWinner::Dealer);
        assert_eq!(summary.dealer.cards().len(), 2);
    } else if summary.dealer.is_busted() {
        assert_eq!(summary.winner, RoundWinner::Player);
    } else {
        assert_eq!(summary.winner, resolve_round(&summary.player, &summary.dealer));
        assert!(summary.dealer.total() >= DEALER_STANDS_AT);
    }
}

#[test]
fn test_summary_serializes_with_totals_intact() {
    let mut rng = rng();
    let mut deck = Deck::new(&mut rng);
    let summary = play_round(&mut deck, &mut rng, |_| Action::Stay).unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let restored: parlor_twentyone::RoundSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, summary);
    assert_eq!(restored.player.total(), summary.player.total());
}

#[test]
fn test_rounds_never_exhaust_the_deck() {
    // Even an always-hit-to-16 player and a full dealer turn leave
    // most of the deck untouched.
    let mut rng = rng();
    for seed in 0..20 {
        let mut rng_round = StdRng::seed_from_u64(seed);
        let mut deck = Deck::new(&mut rng);
        let summary = play_round(&mut deck, &mut rng_round, |hand: &Hand| {
            if hand.total() < 17 {
                Action::Hit
            } else {
                Action::Stay
            }
        })
        .unwrap();
        let dealt = summary.player.cards().len() + summary.dealer.cards().len();
        assert_eq!(deck.len(), 52 - dealt);
    }
}
