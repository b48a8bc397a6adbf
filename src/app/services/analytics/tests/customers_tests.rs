//! Tests for customer analysis

use super::*;
use crate::app::services::analytics::customer_analysis;

#[test]
fn test_customers_sorted_by_spend() {
    let customers = customer_analysis(&create_sample_sales());
    let ids: Vec<&str> = customers.iter().map(|c| c.customer_id.as_str()).collect();

    assert_eq!(ids, vec!["C001", "C002", "C003"]);

    let top = &customers[0];
    assert_eq!(top.purchase_count, 2);
    assert_close(top.total_spent, 94_501.5);
    assert_close(top.average_order_value, 47_250.75);
    assert_eq!(top.products, vec!["Keyboard".to_string(), "Laptop".to_string()]);
}

#[test]
fn test_customer_products_are_distinct_and_sorted() {
    let records = vec![
        create_sale("T001", "2024-01-01", "Mouse", "1", "10", "C9", "North"),
        create_sale("T002", "2024-01-02", "Cable", "1", "10", "C9", "North"),
        create_sale("T003", "2024-01-03", "Mouse", "1", "10", "C9", "North"),
    ];
    let customers = customer_analysis(&records);

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].purchase_count, 3);
    assert_eq!(
        customers[0].products,
        vec!["Cable".to_string(), "Mouse".to_string()]
    );
}

#[test]
fn test_no_records_no_customers() {
    assert!(customer_analysis(&[]).is_empty());
}
