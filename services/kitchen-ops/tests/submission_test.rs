//! 订货 / 盘点提交测试

mod common;

use std::sync::Arc;

use common::{MockGateway, fixed_clock, workbook};
use kitchen_ops::application::commands::SubmitEntriesCommand;
use kitchen_ops::application::handlers::SubmitEntriesHandler;
use kitchen_ops::domain::submission::{SubmissionKind, SubmissionSheets};
use mise_adapter_sheets::InMemorySheetGateway;
use mise_cqrs_core::CommandHandler;
use mise_errors::AppError;
use mise_ports::SheetGateway;

fn sheets() -> SubmissionSheets {
    SubmissionSheets {
        order: "Order_Log".into(),
        inventory: "Inventory_Log".into(),
    }
}

fn handler(gateway: Arc<dyn SheetGateway>) -> SubmitEntriesHandler {
    SubmitEntriesHandler::new(gateway, sheets(), fixed_clock())
}

fn setup() -> (SubmitEntriesHandler, Arc<InMemorySheetGateway>) {
    let gateway = Arc::new(workbook());
    (handler(gateway.clone()), gateway)
}

#[tokio::test]
async fn test_order_rows_share_one_timestamp() {
    let (handler, gateway) = setup();
    let command = SubmitEntriesCommand::new(
        SubmissionKind::Order,
        "Yelahanka",
        [("Onion", "2"), ("Tomato", ""), ("Chicken Boneless", "0"), ("500ml Container", "12")],
    );

    let result = handler.handle(command).await.unwrap();
    assert!(result.success);
    assert_eq!(result.rows, 2);

    let rows = gateway.rows("Order_Log");
    assert_eq!(
        rows,
        vec![
            vec!["07/01/2025, 09:30:00", "Yelahanka", "Onion", "2"],
            vec!["07/01/2025, 09:30:00", "Yelahanka", "500ml Container", "12"],
        ]
    );
    assert!(gateway.rows("Inventory_Log").is_empty());
}

#[tokio::test]
async fn test_inventory_keeps_decimal_quantities() {
    let (handler, gateway) = setup();
    let command =
        SubmitEntriesCommand::new(SubmissionKind::Inventory, "Thanisandra", [("Onion", "1.5")]);

    handler.handle(command).await.unwrap();

    let rows = gateway.rows("Inventory_Log");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "Thanisandra");
    assert_eq!(rows[0][3], "1.5");
}

#[tokio::test]
async fn test_no_positive_quantity_is_rejected() {
    let (handler, gateway) = setup();
    let command = SubmitEntriesCommand::new(
        SubmissionKind::Order,
        "Yelahanka",
        [("Onion", ""), ("Tomato", "-3"), ("Chicken Boneless", "lots")],
    );

    let err = handler.handle(command).await.unwrap_err();
    let AppError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert_eq!(msg, "Please enter at least one quantity");
    assert!(gateway.rows("Order_Log").is_empty());
}

#[tokio::test]
async fn test_blank_outlet_is_missing_parameter() {
    let (handler, _) = setup();
    let command = SubmitEntriesCommand::new(SubmissionKind::Order, " ", [("Onion", "2")]);

    let err = handler.handle(command).await.unwrap_err();
    assert!(matches!(err, AppError::MissingParameter(_)));
}

#[tokio::test]
async fn test_single_append_call() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_append_rows()
        .withf(|sheet, rows| sheet.to_string() == "Order_Log" && rows.len() == 3)
        .times(1)
        .returning(|_, _| Ok(()));

    let command = SubmitEntriesCommand::new(
        SubmissionKind::Order,
        "Yelahanka",
        [("Onion", "1"), ("Tomato", "2"), ("Chicken Boneless", "3")],
    );
    let result = handler(Arc::new(gateway)).handle(command).await.unwrap();
    assert_eq!(result.rows, 3);
}

#[tokio::test]
async fn test_append_failure_is_upstream_unavailable() {
    let mut gateway = MockGateway::new();
    gateway.expect_append_rows().returning(|_, _| {
        Err(AppError::upstream_unavailable("Appending to Order_Log!A:D: HTTP 500"))
    });

    let command = SubmitEntriesCommand::new(SubmissionKind::Order, "Yelahanka", [("Onion", "1")]);
    let err = handler(Arc::new(gateway)).handle(command).await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamUnavailable(_)));
}
