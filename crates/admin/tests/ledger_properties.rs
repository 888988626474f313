use proptest::prelude::*;
use tulipa_admin::ledger::{LedgerError, StockCapacity, StockLedger};
use tulipa_admin::model::{Creator, Order, OrderId, OrderStatus, Variety, YesNo};

fn variety() -> impl Strategy<Value = Variety> {
    proptest::sample::select(Variety::ALL.to_vec())
}

fn orders() -> impl Strategy<Value = Vec<Order>> {
    proptest::collection::vec((variety(), 0u32..500, 1u64..1000), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (variety, quantity, number))| Order {
                id: OrderId(i as u32 + 1),
                order_number: number,
                customer: format!("customer {i}"),
                price: 1.0,
                variety,
                flower_quantity: quantity,
                packaging: YesNo::No,
                delivery: YesNo::No,
                delivery_address: String::new(),
                delivery_time: None,
                status: OrderStatus::New,
                created_by: Creator::User,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn committed_is_the_sum_for_the_variety(orders in orders(), v in variety()) {
        let ledger = StockLedger::default();
        let expected: u64 = orders
            .iter()
            .filter(|o| o.variety == v)
            .map(|o| u64::from(o.flower_quantity))
            .sum();
        prop_assert_eq!(ledger.committed(&orders, v, None), expected);
    }

    #[test]
    fn reservation_admitted_iff_it_fits(
        orders in orders(),
        v in variety(),
        requested in 0u32..2000,
        capacity in 0u32..5000,
    ) {
        let ledger = StockLedger::new(StockCapacity::new().with(v, capacity));
        let committed = ledger.committed(&orders, v, None);
        let fits = committed + u64::from(requested) <= u64::from(capacity);

        match ledger.validate_reservation(&orders, v, requested, None) {
            Ok(()) => prop_assert!(fits),
            Err(LedgerError::CapacityExceeded { remaining, .. }) => {
                prop_assert!(!fits);
                prop_assert_eq!(remaining, i64::from(capacity) - committed as i64);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn remaining_is_capacity_minus_committed(orders in orders(), v in variety()) {
        let ledger = StockLedger::default();
        let capacity = ledger.capacity().get(v).unwrap();
        prop_assert_eq!(
            ledger.remaining(&orders, v),
            i64::from(capacity) - ledger.committed(&orders, v, None) as i64
        );
    }

    #[test]
    fn next_order_number_exceeds_every_existing(orders in orders()) {
        let next = StockLedger::default().next_order_number(&orders);
        prop_assert!(orders.iter().all(|o| o.order_number < next));
    }
}
