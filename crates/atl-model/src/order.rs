//! Purchase orders for components.

use serde::{Deserialize, Serialize};

use crate::lenient::{lenient_quantity, lenient_string};

/// Status shown for an order with none recorded.
pub const DEFAULT_ORDER_STATUS: &str = "Ordered";

/// An order row held by the record API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "ComponentID", default, deserialize_with = "lenient_string")]
    pub component_id: String,
    #[serde(rename = "ComponentName", default, deserialize_with = "lenient_string")]
    pub component_name: String,
    #[serde(rename = "Quantity", default, deserialize_with = "lenient_quantity")]
    pub quantity: u64,
    #[serde(rename = "Vendor", default, deserialize_with = "lenient_string")]
    pub vendor: String,
    #[serde(rename = "OrderDate", default, deserialize_with = "lenient_string")]
    pub order_date: String,
    #[serde(rename = "ExpectedDelivery", default, deserialize_with = "lenient_string")]
    pub expected_delivery: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(rename = "Notes", default, deserialize_with = "lenient_string")]
    pub notes: String,
}

impl Order {
    pub fn status_label(&self) -> &str {
        if self.status.trim().is_empty() {
            DEFAULT_ORDER_STATUS
        } else {
            &self.status
        }
    }

    pub fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            component_id: self.component_id.clone(),
            component_name: self.component_name.clone(),
            quantity: self.quantity,
            vendor: self.vendor.clone(),
            order_date: self.order_date.clone(),
            expected_delivery: self.expected_delivery.clone(),
            status: self.status.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Fields sent with `addOrder` and `updateOrder`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "ComponentID")]
    pub component_id: String,
    #[serde(rename = "ComponentName")]
    pub component_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "OrderDate")]
    pub order_date: String,
    #[serde(rename = "ExpectedDelivery")]
    pub expected_delivery: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sheet_typed_values() {
        let order: Order = serde_json::from_str(
            r#"{"OrderID": "O-3", "ComponentID": 17, "ComponentName": "Servo",
                "Quantity": "4", "Vendor": null, "Status": ""}"#,
        )
        .unwrap();
        assert_eq!(order.component_id, "17");
        assert_eq!(order.quantity, 4);
        assert_eq!(order.vendor, "");
        assert_eq!(order.status_label(), DEFAULT_ORDER_STATUS);
    }

    #[test]
    fn draft_keeps_fields_without_id() {
        let order = Order {
            id: "O-1".to_string(),
            component_name: "Servo".to_string(),
            quantity: 2,
            status: "Delivered".to_string(),
            ..Order::default()
        };
        let json = serde_json::to_value(order.to_draft()).unwrap();
        assert_eq!(json["ComponentName"], "Servo");
        assert_eq!(json["Quantity"], 2);
        assert_eq!(json["Status"], "Delivered");
        assert!(json.get("OrderID").is_none());
    }
}
