use bank_sim::{init, ledger::Ledger};
use rust_decimal_macros::dec;

#[test]
fn ledger_smoke() {
    init();

    let mut ledger = Ledger::new();
    ledger.create_account("checking", dec!(40));
    ledger.create_account("savings", dec!(0));

    let checking = ledger.find_account_mut("checking").unwrap();
    checking.deposit(dec!(2)).unwrap();
    assert_eq!(checking.withdraw(dec!(42)).unwrap(), dec!(0));
    assert!(ledger.find_account("savings").is_some());
    assert!(ledger.find_account("brokerage").is_none());
}
