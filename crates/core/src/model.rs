#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One attached image. Immutable once created; owned by exactly one item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub image_data: String,
    pub file_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Pass,
    Fail,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Pass => "Pass",
            ItemStatus::Fail => "Fail",
            ItemStatus::NotApplicable => "N/A",
        }
    }
}

/// One inspection point within an area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub category: String,
    pub point: String,
    pub status: ItemStatus,
    pub comments: String,
    pub location: String,
    pub photos: Vec<Photo>,
}

impl Item {
    pub fn new(id: i64, category: impl Into<String>, point: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            point: point.into(),
            status: ItemStatus::NotApplicable,
            comments: String::new(),
            location: String::new(),
            photos: Vec::new(),
        }
    }
}

/// Named grouping of items. Item order is insertion order and is significant
/// for display and for failed-item extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub items: Vec<Item>,
}

impl Area {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Villa,
    Building,
    Other,
}

/// Aggregate root for one property visit. Owns its whole area/item/photo
/// tree exclusively; nothing in the tree is shared between inspections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: String,
    pub client_name: String,
    pub property_location: String,
    pub property_type: PropertyType,
    pub inspector_name: String,
    /// Calendar date string, `YYYY-MM-DD`.
    pub inspection_date: String,
    pub areas: Vec<Area>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Commercial,
    Residential,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Square meters.
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub properties: Vec<Property>,
}

/// `total == quantity * unit_price` is the caller's responsibility; the
/// model stores whatever it is given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceServiceItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Partial,
    Draft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceTemplate {
    Classic,
    Modern,
    Compact,
}

/// Client fields are a denormalized snapshot taken at invoice time;
/// `client_id` is a soft reference back to the client record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    /// Calendar date string, `YYYY-MM-DD`.
    pub invoice_date: String,
    pub due_date: String,
    pub client_id: String,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub property_location: String,
    pub services: Vec<InvoiceServiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total_amount: f64,
    pub amount_paid: f64,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<InvoiceTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::NotApplicable).expect("encode"),
            "\"N/A\""
        );
        assert_eq!(
            serde_json::from_str::<ItemStatus>("\"N/A\"").expect("decode"),
            ItemStatus::NotApplicable
        );
        assert_eq!(
            serde_json::from_str::<ItemStatus>("\"Fail\"").expect("decode"),
            ItemStatus::Fail
        );
    }

    #[test]
    fn inspection_wire_shape_is_camel_case() {
        let inspection = Inspection {
            id: "insp_1".to_string(),
            client_name: "Ahmed".to_string(),
            property_location: "Al Mouj".to_string(),
            property_type: PropertyType::Villa,
            inspector_name: "Said".to_string(),
            inspection_date: "2024-03-15".to_string(),
            areas: vec![Area::new(2, "General")],
            ai_summary: None,
        };
        let value = serde_json::to_value(&inspection).expect("encode");
        assert_eq!(value["clientName"], "Ahmed");
        assert_eq!(value["propertyType"], "Villa");
        assert_eq!(value["areas"][0]["name"], "General");
        // Absent summary stays off the wire entirely.
        assert!(value.get("aiSummary").is_none());
    }

    #[test]
    fn property_kind_round_trips_under_type_key() {
        let property = Property {
            id: "prop_1".to_string(),
            location: "Knowledge Oasis".to_string(),
            kind: PropertyKind::Commercial,
            size: 120.0,
        };
        let value = serde_json::to_value(&property).expect("encode");
        assert_eq!(value["type"], "Commercial");
        let back: Property = serde_json::from_value(value).expect("decode");
        assert_eq!(back, property);
    }

    #[test]
    fn invoice_template_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&InvoiceTemplate::Modern).expect("encode"),
            "\"modern\""
        );
    }
}
