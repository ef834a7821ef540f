use super::text::prettify;
use super::JobRecord;
use crate::core::ParserConfig;
use log::debug;
use serde_json::Value;

const FIXED_PAYMENT: &str = "fixed";

/// Turns raw listing objects from the data script into [`JobRecord`]s.
#[derive(Debug, Clone)]
pub struct ListingNormalizer {
    metro_label: String,
}

impl ListingNormalizer {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            metro_label: config.metro_label.clone(),
        }
    }

    pub fn normalize(&self, listing: &Value) -> JobRecord {
        let min_salary = salary(listing, "salary_min_rub");
        let mut max_salary = salary(listing, "salary_max_rub");
        if text(listing.get("payment_type_alias")) == FIXED_PAYMENT {
            max_salary = min_salary;
        }

        let title = text(listing.get("header"));

        let contact = listing.get("contact");
        if contact.is_none() {
            debug!("Listing `{}` has no contact block", title);
        }
        let mut address = text(contact.and_then(|c| c.get("address")));
        let subway = contact
            .and_then(|c| c.get("subway"))
            .and_then(|s| s.get("title"))
            .map(|t| text(Some(t)))
            .filter(|t| !t.is_empty());
        if let Some(station) = subway {
            address = format!("{}, {} «{}»", address, self.metro_label, station);
        }

        let company = listing.get("company");
        if company.is_none() {
            debug!("Listing `{}` has no company block", title);
        }

        JobRecord {
            title: prettify(&title),
            min_salary: present(min_salary),
            max_salary: present(max_salary),
            company_name: prettify(&text(company.and_then(|c| c.get("title")))),
            address: prettify(&address),
            description: text(listing.get("description")),
        }
    }
}

/// Reads a salary as a whole number of roubles; anything unreadable is 0.
fn salary(listing: &Value, field: &str) -> u64 {
    match listing.get(field) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
            .unwrap_or(0),
        _ => 0,
    }
}

fn present(salary: u64) -> Option<u64> {
    (salary != 0).then_some(salary)
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
