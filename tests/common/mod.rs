#![allow(dead_code)]

use rust_decimal_macros::dec;
use std::io::Error;
use std::path::Path;
use txledger::domain::order::{Order, OrderStatus, OrderType, parse_trade_time};

pub const USER: &str = "alice";

pub fn order(id: u64, payer: &str, payee: &str, status: OrderStatus, time: &str) -> Order {
    Order {
        id,
        order_name: format!("order-{id}"),
        r#type: OrderType::Payment,
        status,
        payer_username: payer.to_string(),
        payee_username: payee.to_string(),
        amount: dec!(10.00).try_into().unwrap(),
        fee_rate: dec!(0.01).try_into().unwrap(),
        remark: String::new(),
        trade_time: parse_trade_time(time).unwrap(),
    }
}

/// 25 refunded payments involving [`USER`], one per day from 2025-01-01 to
/// 2025-01-25 (id == day), alternating payer and payee, plus 5 orders between
/// other parties on the same days.
pub fn january_refunds() -> Vec<Order> {
    let mut orders: Vec<Order> = (1..=25u64)
        .map(|day| {
            let time = format!("2025-01-{day:02} 12:00:00");
            if day % 2 == 0 {
                order(day, USER, "merchant", OrderStatus::Refund, &time)
            } else {
                order(day, "merchant", USER, OrderStatus::Refund, &time)
            }
        })
        .collect();
    orders.extend((1..=5u64).map(|n| {
        let time = format!("2025-01-{:02} 12:00:00", n * 5);
        order(100 + n, "bob", "carol", OrderStatus::Refund, &time)
    }));
    orders
}

pub fn write_orders_csv(path: &Path, orders: &[Order]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    for order in orders {
        wtr.serialize(order)?;
    }
    wtr.flush()?;
    Ok(())
}
