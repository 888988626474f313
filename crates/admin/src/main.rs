//! # Tulipa Admin demo
//!
//! Runs one scripted console session against an in-process order collection:
//! 1. Sign in once the remembered session has been checked.
//! 2. Enter a few orders, one of which overbooks its variety.
//! 3. Track an order and mark it done.
//! 4. Print the stock report.
//!
//! Settings come from the YAML file named by `TULIPA_CONFIG`, or built-in demo settings.

use tracing::{error, info, warn, Instrument};
use tulipa_admin::auth::{Decision, Operator, Route};
use tulipa_admin::config::ConsoleConfig;
use tulipa_admin::console::{OrderForm, OrderQuery};
use tulipa_admin::lifecycle::{setup_tracing, AdminSystem};
use tulipa_admin::model::{OrderStatus, YesNo};

fn load_config() -> Result<ConsoleConfig, String> {
    match std::env::var("TULIPA_CONFIG") {
        Ok(path) => {
            info!(%path, "Loading configuration");
            ConsoleConfig::from_yaml_file(&path).map_err(|e| e.to_string())
        }
        Err(_) => Ok(ConsoleConfig {
            operators: vec![Operator {
                email: "desk@tulipa.test".to_string(),
                password: "bloom".to_string(),
            }],
            ..ConsoleConfig::default()
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config()?;
    let system = AdminSystem::new(&config).map_err(|e| e.to_string())?;

    let mut guard = system.auth.guard();
    if let Decision::Redirect(Route::Login) = guard
        .resolve(Route::Orders)
        .await
        .map_err(|e| e.to_string())?
    {
        info!("No remembered session, signing in");
        let operator = config
            .operators
            .first()
            .ok_or_else(|| "no operators configured".to_string())?;
        system
            .auth
            .sign_in(&operator.email, &operator.password)
            .await
            .map_err(|e| e.to_string())?;
    }

    let forms = [
        OrderForm {
            customer: "Anna de Vries".to_string(),
            price: 240.0,
            variety: "Circuit".to_string(),
            flower_quantity: 200,
            ..OrderForm::default()
        },
        OrderForm {
            customer: "Bram Jansen".to_string(),
            price: 95.0,
            variety: "Montezuma".to_string(),
            flower_quantity: 60,
            packaging: YesNo::Yes,
            delivery: YesNo::Yes,
            delivery_address: "Bloemgracht 12, Amsterdam".to_string(),
            delivery_time: chrono::NaiveDate::from_ymd_opt(2024, 4, 20)
                .and_then(|d| d.and_hms_opt(10, 0, 0)),
            ..OrderForm::default()
        },
        OrderForm {
            customer: "Chris Bakker".to_string(),
            price: 130.0,
            variety: "Circuit".to_string(),
            flower_quantity: 150,
            ..OrderForm::default()
        },
    ];

    let span = tracing::info_span!("order_entry");
    let mut placed = Vec::new();
    async {
        for form in forms {
            match system.console.create_order(form).await {
                Ok(id) => placed.push(id),
                Err(e) => warn!(message = %e.user_message(), "Order not placed"),
            }
        }
    }
    .instrument(span)
    .await;

    if let Some(&id) = placed.first() {
        match system.console.mark_done(id).await {
            Ok(_) => {
                let tracking = system
                    .console
                    .track_order(id)
                    .await
                    .map_err(|e| e.to_string())?;
                info!(
                    %id,
                    number = tracking.order.order_number,
                    status = %tracking.order.status,
                    remaining = tracking.stock.map(|s| s.remaining),
                    "Tracked order"
                );
            }
            Err(e) => error!(message = %e.user_message(), "Could not update order"),
        }
    }

    let done = system
        .console
        .search(&OrderQuery::default().with_status(OrderStatus::Done))
        .await
        .map_err(|e| e.to_string())?;
    info!(count = done.len(), "Completed orders");

    for line in system
        .console
        .stock_report()
        .await
        .map_err(|e| e.to_string())?
    {
        println!(
            "{:<14} {:>5} committed {:>5} remaining {:>5}",
            line.variety.name(),
            line.capacity,
            line.committed,
            line.remaining
        );
    }

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
