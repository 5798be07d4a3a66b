//! End-to-end exercise of a full match through the orchestrator, using the
//! standard catalog content and a fixed seed.

use railclaim::catalog;
use railclaim::error::Error;
use railclaim::game::Match;
use railclaim::manager::{MatchEvent, MatchManager};
use railclaim::player::PlayerId;

use std::sync::mpsc;

const TOTAL_VEHICLE_CARDS: usize = 110;

fn vehicle_cards_in_play(state: &Match) -> usize {
    state.vehicle_deck().len()
        + state
            .players()
            .iter()
            .map(|player| player.hand().len())
            .sum::<usize>()
}

#[test]
fn full_match_through_the_orchestrator() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (sender, receiver) = mpsc::channel();
    let manager = MatchManager::in_memory().with_event_sink(sender);

    let state = manager
        .create_match_with_seed(catalog::standard_content(), 2024)
        .expect("standard content loads");
    let id = state.id();

    // Lobby: three players join, one leaves and is replaced.
    manager.add_player(&id, "Ada").expect("match exists");
    let state = manager.add_player(&id, "Grace").expect("match exists");
    let leaver = state.players()[1].id();
    assert_eq!(manager.remove_player(&id, leaver), Ok(true));
    manager.add_player(&id, "Edsger").expect("match exists");
    let state = manager.add_player(&id, "Barbara").expect("match exists");

    let players: Vec<PlayerId> = state.players().iter().map(|player| player.id()).collect();
    assert_eq!(players.len(), 3);

    // Player count is validated against the expectation at start time.
    assert!(matches!(
        manager.start_match(&id, 4),
        Err(Error::Validation(_))
    ));

    let state = manager.start_match(&id, 3).expect("three players joined");
    assert!(state.is_started());
    for player in state.players() {
        assert_eq!(player.hand().len(), 4);
        assert_eq!(player.train_pieces(), 45);
    }
    assert_eq!(vehicle_cards_in_play(&state), TOTAL_VEHICLE_CARDS);

    // Each player opens with the setup-phase ticket draw on their first
    // turn; it does not consume the turn.
    for (i, &player) in players.iter().enumerate() {
        let turn_before = manager
            .current_turn(&id)
            .expect("match exists")
            .expect("started match has a turn");
        assert_eq!(turn_before.player(), player);

        let (state, kept) = manager
            .draw_destination_tickets(&id, player, &[0, 1], true)
            .expect("deck has tickets");
        assert_eq!(kept.len(), 2);

        let turn_after = state.current_turn().expect("turn");
        assert_eq!(turn_after.number(), turn_before.number());
        assert_eq!(turn_after.player(), player);

        // Spend the actual turn drawing: blind for the first player, from
        // the face-up window for the others.
        if i == 0 {
            manager
                .draw_vehicle_cards(&id, player, &[])
                .expect("deck has cards");
        } else {
            manager
                .draw_vehicle_cards(&id, player, &[0, 1])
                .expect("window is full");
        }
    }

    // Out-of-turn commands bounce without touching the match.
    let current = manager
        .current_turn(&id)
        .expect("match exists")
        .expect("turn")
        .player();
    let intruder = players
        .iter()
        .copied()
        .find(|&p| p != current)
        .expect("three players");
    assert!(matches!(
        manager.draw_vehicle_cards(&id, intruder, &[]),
        Err(Error::InvalidState(_))
    ));

    // Main phase: claim whenever the hand covers something, draw blind
    // otherwise, until a handful of routes are on the table.
    let mut claims = 0;
    for _ in 0..80 {
        if claims >= 6 {
            break;
        }

        let state = manager.get_match(&id).expect("exists");
        let acting = state.current_turn().expect("turn").player();
        let player = state.player(acting).expect("player exists");

        let coverable = state.board().available_routes().into_iter().find_map(|route| {
            player
                .suggest_selection(route)
                .map(|selection| (route.id().clone(), selection))
        });

        match coverable {
            Some((route_id, selection)) => {
                let before = player.train_pieces();
                let state = manager
                    .claim_route(&id, acting, &route_id, &selection)
                    .expect("suggested selection is eligible");

                let claimed = state
                    .board()
                    .route(&route_id)
                    .expect("route stays on the board");
                assert!(!claimed.is_available());

                let after = state.player(acting).expect("player exists");
                assert_eq!(after.train_pieces(), before - claimed.length());
                claims += 1;
            }
            None => {
                manager
                    .draw_vehicle_cards(&id, acting, &[])
                    .expect("deck has cards");
            }
        }
    }

    assert!(claims >= 6, "expected the driver to claim routes, got {}", claims);

    // Every claim was announced on the event channel.
    let events: Vec<MatchEvent> = receiver.try_iter().collect();
    assert_eq!(events.len(), claims);
    for event in &events {
        let MatchEvent::RouteClaimed { match_id, .. } = event;
        assert_eq!(*match_id, id);
    }

    // Cards never leak: deck piles plus hands always total 110.
    let state = manager.get_match(&id).expect("exists");
    assert_eq!(vehicle_cards_in_play(&state), TOTAL_VEHICLE_CARDS);

    // Work out what the final scoring pass must produce.
    let expected_scores: Vec<i32> = state
        .players()
        .iter()
        .map(|player| player.score() + player.ticket_points())
        .collect();
    let bonus_holder = {
        let mut holder = None;
        let mut longest = 0;
        for (index, player) in state.players().iter().enumerate() {
            if player.continuous_route_length() > longest {
                longest = player.continuous_route_length();
                holder = Some(index);
            }
        }
        holder
    };

    let state = manager.finish_match(&id).expect("started match finishes");
    assert!(state.is_finished());

    for (index, player) in state.players().iter().enumerate() {
        let mut expected = expected_scores[index];
        if bonus_holder == Some(index) {
            expected += 10;
        }
        assert_eq!(player.score(), expected, "score of {}", player.name());
    }

    // The match is over for good.
    assert!(matches!(
        manager.finish_match(&id),
        Err(Error::InvalidState(_))
    ));
    assert!(matches!(
        manager.draw_vehicle_cards(&id, players[0], &[]),
        Err(Error::InvalidState(_))
    ));

    // The ranking lines up with the final scores.
    let ranking = state.ranking();
    for pair in ranking.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
}

#[test]
fn seeded_matches_replay_identically() {
    let manager = MatchManager::in_memory();

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let state = manager
            .create_match_with_seed(catalog::standard_content(), 77)
            .expect("standard content loads");
        let id = state.id();

        manager.add_player(&id, "Ada").expect("match exists");
        manager.add_player(&id, "Grace").expect("match exists");
        let state = manager.start_match(&id, 2).expect("two players joined");
        snapshots.push(state);
    }

    let (first, second) = (&snapshots[0], &snapshots[1]);
    for (a, b) in first.players().iter().zip(second.players()) {
        assert_eq!(a.hand(), b.hand());
    }
    assert_eq!(
        first.revealed_vehicle_cards(),
        second.revealed_vehicle_cards()
    );
}
