use super::*;

fn lot(id: i64, auction: i64, status: LotStatus) -> Lot {
    Lot {
        id,
        auction,
        donor: None,
        title: format!("Лот {id}"),
        description: None,
        category: None,
        status,
        images: Vec::new(),
        start_price: None,
        current_price: None,
    }
}

// =============================================================
// Defaults and derived views
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = LotsState::default();
    assert!(state.lots.is_empty());
    assert!(state.current_lot.is_none());
    assert!(state.categories.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.success);
}

#[test]
fn active_lots_filters_by_status() {
    let state = LotsState {
        lots: vec![
            lot(1, 1, LotStatus::Active),
            lot(2, 1, LotStatus::Pending),
            lot(3, 1, LotStatus::Sold),
        ],
        ..LotsState::default()
    };
    assert_eq!(state.active_lots().iter().map(|l| l.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn lots_by_auction_getter_filters_collection() {
    let state = LotsState {
        lots: vec![
            lot(1, 10, LotStatus::Active),
            lot(2, 20, LotStatus::Active),
            lot(3, 10, LotStatus::Pending),
        ],
        ..LotsState::default()
    };
    assert_eq!(state.lots_by_auction(10).iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
}

// =============================================================
// Defensive per-auction filter
// =============================================================

#[test]
fn filter_drops_lots_from_other_auctions() {
    let response = vec![
        lot(1, 7, LotStatus::Active),
        lot(2, 8, LotStatus::Active),
        lot(3, 7, LotStatus::Pending),
        lot(4, 9, LotStatus::Active),
    ];
    let filtered = lots_matching_auction(response, 7);
    assert_eq!(filtered.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(filtered.iter().all(|l| l.auction == 7));
}

#[test]
fn filter_keeps_everything_when_server_behaved() {
    let response = vec![lot(1, 7, LotStatus::Active), lot(2, 7, LotStatus::Active)];
    assert_eq!(lots_matching_auction(response, 7).len(), 2);
}

// =============================================================
// Moderation splice
// =============================================================

#[test]
fn moderation_patches_collection_and_current_slot() {
    let mut state = LotsState {
        lots: vec![lot(1, 1, LotStatus::Pending), lot(2, 1, LotStatus::Pending)],
        current_lot: Some(lot(2, 1, LotStatus::Pending)),
        ..LotsState::default()
    };

    state.apply_moderated(lot(2, 1, LotStatus::Approved));

    assert_eq!(state.current_lot.as_ref().unwrap().status, LotStatus::Approved);
    assert_eq!(state.lots[1].status, LotStatus::Approved);
    // The other lot is untouched.
    assert_eq!(state.lots[0].status, LotStatus::Pending);
}

#[test]
fn moderation_leaves_unrelated_current_lot_alone() {
    let mut state = LotsState {
        lots: vec![lot(1, 1, LotStatus::Pending)],
        current_lot: Some(lot(5, 1, LotStatus::Active)),
        ..LotsState::default()
    };

    state.apply_moderated(lot(1, 1, LotStatus::Rejected));

    assert_eq!(state.current_lot.as_ref().unwrap().id, 5);
    assert_eq!(state.current_lot.as_ref().unwrap().status, LotStatus::Active);
    assert_eq!(state.lots[0].status, LotStatus::Rejected);
}

#[test]
fn moderation_of_unknown_lot_is_a_no_op() {
    let mut state =
        LotsState { lots: vec![lot(1, 1, LotStatus::Pending)], ..LotsState::default() };
    state.apply_moderated(lot(99, 1, LotStatus::Approved));
    assert_eq!(state.lots.len(), 1);
    assert_eq!(state.lots[0].status, LotStatus::Pending);
}
