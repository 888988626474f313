use tulipa_admin::clients::{DocumentClient, OrderClient};
use tulipa_admin::console::{ConsoleError, OrderForm, OrdersConsole};
use tulipa_admin::ledger::{LedgerError, StockCapacity, StockLedger};
use tulipa_admin::model::{
    Creator, Order, OrderDraft, OrderId, OrderPatch, OrderStatus, Variety, YesNo,
};
use tulipa_admin::order_actor::OrderError;
use tulipa_store::mock::{create_mock_client, expect_create, expect_list, MockStore};
use tulipa_store::StoreError;

fn draft(order_number: u64, quantity: u32) -> OrderDraft {
    OrderDraft {
        order_number,
        customer: "Femke".into(),
        price: 60.0,
        variety: Variety::Columbus,
        flower_quantity: quantity,
        packaging: YesNo::No,
        delivery: YesNo::No,
        delivery_address: String::new(),
        delivery_time: None,
        status: OrderStatus::New,
        created_by: Creator::User,
    }
}

fn stored(id: u32, quantity: u32) -> Order {
    Order::new(OrderId(id), draft(u64::from(id), quantity))
}

/// Real Order collection behind the typed client.
#[tokio::test]
async fn test_order_client_against_real_collection() {
    let (actor, generic_client) = tulipa_admin::order_actor::new(8);
    let handle = tokio::spawn(actor.run(()));
    let orders = OrderClient::new(generic_client);

    let id = orders.create_order(draft(1, 20)).await.unwrap();
    assert_eq!(id, OrderId(1));

    let err = orders
        .create_order(OrderDraft {
            customer: " ".into(),
            ..draft(2, 5)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation { field: "customer", .. }));

    let updated = orders
        .update_order(
            id,
            OrderPatch {
                status: Some(OrderStatus::InProgress),
                ..OrderPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::InProgress);

    assert!(orders.mark_done(id).await.unwrap());
    assert_eq!(
        orders.get(id).await.unwrap().unwrap().status,
        OrderStatus::Done
    );

    orders.delete(id).await.unwrap();
    assert_eq!(
        orders.mark_done(id).await,
        Err(OrderError::NotFound("order_1".into()))
    );

    drop(orders);
    handle.await.unwrap();
}

/// Console over a scripted store: a refused reservation never reaches the store.
#[tokio::test]
async fn test_refused_reservation_sends_no_write() {
    let mut mock = MockStore::<Order>::new();
    mock.expect_list().return_ok(vec![stored(1, 140)]);

    let ledger = StockLedger::new(StockCapacity::new().with(Variety::Columbus, 150));
    let console = OrdersConsole::new(OrderClient::new(mock.client()), ledger);

    let err = console
        .create_order(OrderForm {
            customer: "Femke".into(),
            variety: "Columbus".into(),
            flower_quantity: 11,
            ..OrderForm::default()
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ConsoleError::Stock(LedgerError::CapacityExceeded {
            variety: Variety::Columbus,
            requested: 11,
            remaining: 10,
        })
    );

    mock.verify();
}

#[tokio::test]
async fn test_create_assigns_next_number_from_snapshot() {
    let (client, mut receiver) = create_mock_client::<Order>(10);
    let console = OrdersConsole::new(OrderClient::new(client), StockLedger::default());

    let task = tokio::spawn(async move {
        console
            .create_order(OrderForm {
                customer: "Femke".into(),
                variety: "Columbus".into(),
                flower_quantity: 5,
                ..OrderForm::default()
            })
            .await
    });

    let responder = expect_list(&mut receiver).await.expect("Expected List request");
    responder.send(Ok(vec![stored(3, 10), stored(7, 10)])).unwrap();

    let (draft, responder) = expect_create(&mut receiver)
        .await
        .expect("Expected Create request");
    assert_eq!(draft.order_number, 8);
    assert_eq!(draft.variety, Variety::Columbus);
    assert_eq!(draft.created_by, Creator::User);
    responder.send(Ok(OrderId(3))).unwrap();

    assert_eq!(task.await.unwrap().unwrap(), OrderId(3));
}

#[tokio::test]
async fn test_store_failure_is_surfaced_generically() {
    let mut mock = MockStore::<Order>::new();
    mock.expect_list().return_err(StoreError::Closed);

    let console = OrdersConsole::new(OrderClient::new(mock.client()), StockLedger::default());
    let err = console.stock_report().await.unwrap_err();

    assert!(matches!(err, ConsoleError::Store(_)));
    assert_eq!(
        err.user_message(),
        "Could not reach the order store. Please try again."
    );

    mock.verify();
}

#[tokio::test]
async fn test_edit_without_stock_change_skips_the_snapshot() {
    let mut mock = MockStore::<Order>::new();
    let mut done = stored(2, 10);
    done.status = OrderStatus::Done;
    mock.expect_update(OrderId(2)).return_ok(done);

    let console = OrdersConsole::new(OrderClient::new(mock.client()), StockLedger::default());
    let order = console
        .edit_order(
            OrderId(2),
            OrderPatch {
                status: Some(OrderStatus::Done),
                ..OrderPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Done);

    mock.verify();
}

#[tokio::test]
async fn test_edit_of_missing_order_is_not_found() {
    let mut mock = MockStore::<Order>::new();
    mock.expect_list().return_ok(vec![stored(1, 10)]);

    let console = OrdersConsole::new(OrderClient::new(mock.client()), StockLedger::default());
    let err = console
        .edit_order(
            OrderId(5),
            OrderPatch {
                flower_quantity: Some(1),
                ..OrderPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ConsoleError::NotFound("order_5".into()));

    mock.verify();
}
