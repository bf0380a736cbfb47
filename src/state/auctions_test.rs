use super::*;

use chrono::TimeZone;

fn auction(id: i64, ends_at: i64) -> Auction {
    Auction {
        id,
        title: format!("Аукцион {id}"),
        description: None,
        start_date: None,
        end_date: Utc.timestamp_opt(ends_at, 0).unwrap(),
        charity: Some(1),
        image: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = AuctionsState::default();
    assert!(state.auctions.is_empty());
    assert!(state.current_auction.is_none());
    assert!(state.auction_events.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn has_auctions_tracks_collection() {
    let mut state = AuctionsState::default();
    assert!(!state.has_auctions());
    state.auctions.push(auction(1, 100));
    assert!(state.has_auctions());
}

#[test]
fn active_auctions_keeps_only_future_end_dates() {
    let now = Utc.timestamp_opt(1_000, 0).unwrap();
    let state = AuctionsState {
        auctions: vec![auction(1, 500), auction(2, 1_000), auction(3, 1_500)],
        ..AuctionsState::default()
    };

    let active = state.active_auctions(now);
    assert_eq!(active.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn active_auctions_empty_when_all_ended() {
    let now = Utc.timestamp_opt(10_000, 0).unwrap();
    let state =
        AuctionsState { auctions: vec![auction(1, 500)], ..AuctionsState::default() };
    assert!(state.active_auctions(now).is_empty());
}
