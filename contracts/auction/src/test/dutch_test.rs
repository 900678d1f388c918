use crate::test::{Setup, DIME, INITIAL_BALANCE, START, TON};
use crate::{AuctionConfig, Error, Outcome, Phase};

#[test]
fn test_price_decays_per_cycle() {
    let s = Setup::new();
    s.launch(&s.dutch_config());

    assert_eq!(s.client.get_desired_price(), 10 * TON);
    s.set_time(START + 9);
    assert_eq!(s.client.get_desired_price(), 10 * TON);
    s.set_time(START + 10);
    assert_eq!(s.client.get_desired_price(), 9 * TON);
    s.set_time(START + 25);
    assert_eq!(s.client.get_desired_price(), 8 * TON);
}

#[test]
fn test_price_stops_at_floor() {
    let s = Setup::new();
    s.launch(&s.dutch_config());

    s.set_time(START + 60);
    assert_eq!(s.client.get_desired_price(), 4 * TON);
    s.set_time(START + 900);
    assert_eq!(s.client.get_desired_price(), 4 * TON);
}

#[test]
fn test_first_bid_at_price_wins() {
    let s = Setup::new();
    s.launch(&s.dutch_config());
    let a = s.bidder();
    let b = s.bidder();
    s.set_time(START + 25);

    let low = s.client.try_bid(&a, &(7 * TON));
    assert_eq!(low, Err(Ok(Error::InsufficientValue)));
    assert_eq!(s.token.balance(&a), INITIAL_BALANCE);

    assert!(s.client.bid(&a, &(9 * TON)));
    let info = s.client.get_info();
    assert_eq!(info.phase, Phase::Ended);
    assert_eq!(info.winner, Some(a.clone()));
    assert_eq!(info.current_value, 8 * TON);
    assert_eq!(s.client.get_refund(&a), TON);

    let late = s.client.try_bid(&b, &(10 * TON));
    assert_eq!(late, Err(Ok(Error::PhaseViolation)));

    assert_eq!(s.client.finalize(&b), Outcome::Settled);
    assert_eq!(s.record.owner(), a);
    assert_eq!(s.token.balance(&a), INITIAL_BALANCE - 8 * TON);
    assert_eq!(s.token.balance(&s.escrow), 4 * DIME);
    assert_eq!(s.token.balance(&s.fee_collector), 5 * DIME);
    assert_eq!(s.token.balance(&s.seller), 8 * TON - 4 * DIME - 5 * DIME);
    assert_eq!(s.held_by_auction(), 0);
}

#[test]
fn test_overpayment_withdrawn_before_finalize() {
    let s = Setup::new();
    s.launch(&s.dutch_config());
    let a = s.bidder();
    s.set_time(START + 70);

    s.client.bid(&a, &(6 * TON));
    assert_eq!(s.client.get_info().current_value, 4 * TON);
    assert_eq!(s.client.withdraw(&a), 2 * TON);
    assert_eq!(s.held_by_auction(), 4 * TON);
    assert_eq!(s.client.get_held_value(), 4 * TON);
}

#[test]
fn test_unsold_dutch_returns_record() {
    let s = Setup::new();
    s.launch(&s.dutch_config());

    s.set_time(START + 1_000);
    assert_eq!(s.client.get_phase(), Phase::Ended);
    let a = s.bidder();
    assert_eq!(s.client.try_bid(&a, &(4 * TON)), Err(Ok(Error::PhaseViolation)));

    s.client.finalize(&a);
    assert_eq!(s.record.owner(), s.seller);
    assert_eq!(s.token.balance(&s.seller), 0);
}

#[test]
fn test_dutch_rejects_blind_commit() {
    let s = Setup::new();
    s.launch(&s.dutch_config());
    let a = s.bidder();
    let hash = s.client.hash_price(&(5 * TON), &s.salt(1));
    assert_eq!(
        s.client.try_bid_blind(&a, &hash, &(5 * TON)),
        Err(Ok(Error::WrongAuctionKind))
    );
}

#[test]
fn test_dutch_without_step_rejected() {
    let s = Setup::new();
    let config = AuctionConfig {
        min_price_step: 0,
        ..s.dutch_config()
    };
    assert_eq!(s.client.try_initialize(&config), Err(Ok(Error::InvalidConfig)));
}

#[test]
fn test_extreme_negative_bid_rejected() {
    let s = Setup::new();
    s.launch(&s.dutch_config());
    let a = s.bidder();
    s.set_time(START + 25);

    let result = s.client.try_bid(&a, &i128::MIN);
    assert_eq!(result, Err(Ok(Error::InsufficientValue)));
    assert_eq!(s.client.get_info().winner, None);
}
