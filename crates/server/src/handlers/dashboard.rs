#![forbid(unsafe_code)]

use crate::server::{RpcError, Server};
use insp_core::catalog::INSPECTION_CATEGORIES;
use insp_core::derive::{dashboard, format_currency, format_long_date, recent};
use serde_json::{Value, json};

const RECENT_COUNT: usize = 5;

impl Server {
    pub(crate) fn dashboard_totals(&mut self) -> Result<Value, RpcError> {
        let inspections = self.store.list_inspections()?;
        let clients = self.store.list_clients()?;
        let invoices = self.store.list_invoices()?;
        let totals = dashboard(&inspections, &clients, &invoices);

        let recent_inspections: Vec<Value> = recent(&inspections, RECENT_COUNT)
            .iter()
            .map(|inspection| {
                json!({
                    "id": inspection.id,
                    "clientName": inspection.client_name,
                    "propertyLocation": inspection.property_location,
                    "date": format_long_date(&inspection.inspection_date),
                })
            })
            .collect();
        let recent_invoices: Vec<Value> = recent(&invoices, RECENT_COUNT)
            .iter()
            .map(|invoice| {
                json!({
                    "id": invoice.id,
                    "invoiceNumber": invoice.invoice_number,
                    "clientName": invoice.client_name,
                    "total": format_currency(invoice.total_amount, None),
                    "date": format_long_date(&invoice.invoice_date),
                })
            })
            .collect();

        Ok(json!({
            "inspections": totals.inspections,
            "clients": totals.clients,
            "invoices": totals.invoices,
            "revenue": format_currency(totals.revenue, None),
            "recentInspections": recent_inspections,
            "recentInvoices": recent_invoices,
        }))
    }

    pub(crate) fn catalog_list(&mut self) -> Result<Value, RpcError> {
        let categories: Vec<Value> = INSPECTION_CATEGORIES
            .iter()
            .map(|(category, points)| json!({ "category": category, "points": points }))
            .collect();
        Ok(json!({ "categories": categories }))
    }
}
