use serde::{Deserialize, Serialize};

use crate::domain::common::form::{blank_to_none, int_text, number_text, parse_f64, parse_i64, require_some, require_text, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::metrics::is_low_stock;

pub const STOCKS_PATH: &str = "/api/parts/stocks";
pub const STOCK_ADJUST_PATH: &str = "/api/parts/stocks/adjust";
pub const MOVEMENTS_PATH: &str = "/api/parts/movements";

/// Spare part catalogue entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub part_code: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub sell_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub min_stock: Option<i64>,
}

impl Resource for Part {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_path() -> &'static str {
        "/api/parts"
    }

    fn element_name() -> &'static str {
        "Part"
    }
}

/// On-hand quantity, one row per part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartStock {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub part_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub quantity: Option<i64>,
}

/// Append-only stock ledger entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartMovement {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub part_id: Option<i64>,
    #[serde(default)]
    pub part_code: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub change_qty: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Quantity on hand for a part; parts without a stock row have none.
pub fn quantity_on_hand(stocks: &[PartStock], part_id: i64) -> i64 {
    stocks
        .iter()
        .find(|s| s.part_id == Some(part_id))
        .and_then(|s| s.quantity)
        .unwrap_or(0)
}

impl Part {
    pub fn is_low_stock(&self, stocks: &[PartStock]) -> bool {
        is_low_stock(quantity_on_hand(stocks, self.id), self.min_stock)
    }
}

/// Parts at or below their minimum.
pub fn low_stock_parts<'a>(parts: &'a [Part], stocks: &[PartStock]) -> Vec<&'a Part> {
    parts.iter().filter(|p| p.is_low_stock(stocks)).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDto {
    pub id: Option<i64>,
    pub part_code: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub unit: String,
    pub cost_price: String,
    pub sell_price: String,
    pub min_stock: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartPayload {
    pub part_code: String,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub unit: Option<String>,
    pub cost_price: f64,
    pub sell_price: f64,
    pub min_stock: Option<i64>,
}

impl From<&Part> for PartDto {
    fn from(p: &Part) -> Self {
        Self {
            id: Some(p.id),
            part_code: p.part_code.clone(),
            name: p.name.clone(),
            brand: text_of(&p.brand),
            model: text_of(&p.model),
            unit: text_of(&p.unit),
            cost_price: number_text(p.cost_price),
            sell_price: number_text(p.sell_price),
            min_stock: int_text(p.min_stock),
        }
    }
}

impl PartDto {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.part_code, "Part code is required")?;
        require_text(&self.name, "Part name is required")
    }

    pub fn payload(&self) -> PartPayload {
        PartPayload {
            part_code: self.part_code.trim().to_string(),
            name: self.name.trim().to_string(),
            brand: blank_to_none(&self.brand),
            model: blank_to_none(&self.model),
            unit: blank_to_none(&self.unit),
            cost_price: parse_f64(&self.cost_price).unwrap_or(0.0),
            sell_price: parse_f64(&self.sell_price).unwrap_or(0.0),
            min_stock: parse_i64(&self.min_stock),
        }
    }
}

/// Stock adjustment form; negative quantities take stock out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockAdjustmentDto {
    pub part_id: Option<i64>,
    pub change_qty: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAdjustment {
    pub part_id: i64,
    pub change_qty: i64,
    pub note: Option<String>,
}

impl StockAdjustmentDto {
    pub fn validate(&self) -> Result<StockAdjustment, String> {
        require_some(&self.part_id, "Please select a part")?;
        require_text(&self.change_qty, "Change quantity is required")?;
        let change_qty = parse_i64(&self.change_qty).ok_or("Change quantity must be a whole number")?;
        let part_id = self.part_id.ok_or("Please select a part")?;
        Ok(StockAdjustment {
            part_id,
            change_qty,
            note: blank_to_none(&self.note),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: i64, min_stock: Option<i64>) -> Part {
        Part {
            id,
            part_code: format!("P-{}", id),
            name: "Door roller".into(),
            min_stock,
            ..Part::default()
        }
    }

    #[test]
    fn test_missing_stock_row_counts_as_zero() {
        let stocks: Vec<PartStock> = serde_json::from_str(r#"[{"part_id": 1, "quantity": "12"}]"#).unwrap();
        assert_eq!(quantity_on_hand(&stocks, 1), 12);
        assert_eq!(quantity_on_hand(&stocks, 2), 0);
        assert!(part(2, None).is_low_stock(&stocks));
        assert!(!part(1, None).is_low_stock(&stocks));
        assert!(part(1, Some(15)).is_low_stock(&stocks));
    }

    #[test]
    fn test_low_stock_parts() {
        let stocks = vec![
            PartStock {
                part_id: Some(1),
                quantity: Some(5),
            },
            PartStock {
                part_id: Some(2),
                quantity: Some(6),
            },
        ];
        let parts = vec![part(1, None), part(2, None)];
        let low: Vec<i64> = low_stock_parts(&parts, &stocks).iter().map(|p| p.id).collect();
        assert_eq!(low, vec![1]);
    }

    #[test]
    fn test_payload_blank_min_stock_is_null() {
        let draft = PartDto {
            part_code: "P-1".into(),
            name: "Rope".into(),
            cost_price: "".into(),
            ..PartDto::default()
        };
        assert!(draft.validate().is_ok());
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert!(json["min_stock"].is_null());
        assert!(json["brand"].is_null());
        assert_eq!(json["cost_price"], 0.0);
    }

    #[test]
    fn test_adjustment_validation() {
        let mut adj = StockAdjustmentDto::default();
        assert_eq!(adj.validate(), Err("Please select a part".to_string()));
        adj.part_id = Some(3);
        assert_eq!(adj.validate(), Err("Change quantity is required".to_string()));
        adj.change_qty = "-2".into();
        let ok = adj.validate().unwrap();
        assert_eq!(ok.change_qty, -2);
        assert_eq!(ok.note, None);
        adj.change_qty = "1.5".into();
        assert!(adj.validate().is_err());
    }
}
