#![cfg(test)]
#![cfg(not(tarpaulin_include))]
mod setup;

use proptest::prelude::*;
use setup::TestEnv;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

// Actions the fuzzer may pick, all addressed by actor index
#[derive(Debug, Clone)]
enum Action {
    Buy { actor: usize, value: i128 },
    Transfer { from: usize, to: usize, amount: i128 },
    OpenVote { actor: usize, approve: bool },
}

fn action_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0..3usize, 1..1_000_000i128).prop_map(|(actor, value)| Action::Buy { actor, value }),
            (0..3usize, 0..3usize, 1..50_000i128)
                .prop_map(|(from, to, amount)| Action::Transfer { from, to, amount }),
            (0..3usize, any::<bool>())
                .prop_map(|(actor, approve)| Action::OpenVote { actor, approve }),
        ],
        1..25,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn fuzz_supply_invariant(actions in action_strategy()) {
        let t = TestEnv::new();
        let actors: [Address; 3] = [
            Address::generate(&t.env),
            Address::generate(&t.env),
            Address::generate(&t.env),
        ];

        for action in actions {
            match action {
                Action::Buy { actor, value } => {
                    t.fund(&actors[actor], value);
                    let _ = t.client.try_buy(&actors[actor], &value);
                }
                Action::Transfer { from, to, amount } => {
                    let _ = t.client.try_transfer(&actors[from], &actors[to], &amount);
                }
                Action::OpenVote { actor, approve } => {
                    t.client.vote_change(&actors[actor], &approve);
                }
            }
        }

        // After any sequence, minted units and proceeds must reconcile.
        let supply = t.client.total_supply();
        let sum: i128 = actors.iter().map(|a| t.client.balance(a)).sum();
        prop_assert_eq!(supply, sum);
        prop_assert_eq!(
            t.client.collected_value(),
            t.payment_balance(&t.client.address)
        );
    }
}
