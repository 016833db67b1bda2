#![forbid(unsafe_code)]

use insp_core::model::{Client, Property, PropertyKind};

/// Built-in sample client set used to seed an empty clients collection on
/// first run, so the client views are never blank out of the box.
pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "client_1".to_string(),
            name: "Ahmed Al Farsi".to_string(),
            email: "ahmed.farsi@email.com".to_string(),
            phone: "91234567".to_string(),
            address: "Villa 123, Al Mouj\nMuscat, Oman".to_string(),
            properties: vec![
                Property {
                    id: "prop_1a".to_string(),
                    location: "Villa 123, Al Mouj".to_string(),
                    kind: PropertyKind::Residential,
                    size: 350.0,
                },
                Property {
                    id: "prop_1b".to_string(),
                    location: "Office 404, Knowledge Oasis".to_string(),
                    kind: PropertyKind::Commercial,
                    size: 120.0,
                },
            ],
        },
        Client {
            id: "client_2".to_string(),
            name: "Fatima Al Balushi".to_string(),
            email: "fatima.b@email.com".to_string(),
            phone: "98765432".to_string(),
            address: "Apartment 7B, Qurum Heights\nMuscat, Oman".to_string(),
            properties: vec![Property {
                id: "prop_2a".to_string(),
                location: "Apt 7B, Qurum Heights".to_string(),
                kind: PropertyKind::Residential,
                size: 180.0,
            }],
        },
        Client {
            id: "client_3".to_string(),
            name: "Global Investments LLC".to_string(),
            email: "contact@globalinvest.com".to_string(),
            phone: "24601122".to_string(),
            address: "PO Box 500, PC 112\nRuwi, Oman".to_string(),
            properties: vec![
                Property {
                    id: "prop_3a".to_string(),
                    location: "Warehouse #5, Rusayl Industrial".to_string(),
                    kind: PropertyKind::Commercial,
                    size: 1500.0,
                },
                Property {
                    id: "prop_3b".to_string(),
                    location: "Building C, Ghala Heights".to_string(),
                    kind: PropertyKind::Commercial,
                    size: 2500.0,
                },
            ],
        },
    ]
}
