use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};

pub const DEFAULT_QUANTITY: u32 = 1;
pub const DEFAULT_CUSTOMER_NAME: &str = "Desconocido";

const PRODUCT_KEY: &str = "producto";
const COLOR_KEY: &str = "color";
const QUANTITY_KEY: &str = "cantidad";
const ITEMS_KEY: &str = "items";
const COUPON_KEY: &str = "cupon";
const NAME_KEY: &str = "nombre";

/// Quantity as it arrived in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityField {
    Missing,
    Valid(u32),
    Invalid,
}

impl QuantityField {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => {
                let whole = n.as_u64().or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                        .map(|f| f as u64)
                });
                whole
                    .and_then(|q| u32::try_from(q).ok())
                    .filter(|q| *q >= 1)
                    .map_or(Self::Invalid, Self::Valid)
            }
            Some(Value::String(s)) => s
                .trim()
                .parse::<Decimal>()
                .ok()
                .filter(|d| d.fract().is_zero())
                .and_then(|d| d.to_u32())
                .filter(|q| *q >= 1)
                .map_or(Self::Invalid, Self::Valid),
            Some(_) => Self::Invalid,
        }
    }

    /// Effective quantity: missing or invalid quantities count as one unit.
    pub fn resolve(&self) -> u32 {
        match self {
            Self::Valid(q) => *q,
            Self::Missing | Self::Invalid => DEFAULT_QUANTITY,
        }
    }
}

/// One order line after key normalization, before catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product: String,
    pub color: String,
    pub quantity: QuantityField,
}

impl OrderLine {
    fn from_fields(fields: Option<&Map<String, Value>>) -> Self {
        Self {
            product: normalize_key(field(fields, PRODUCT_KEY)),
            color: normalize_key(field(fields, COLOR_KEY)),
            quantity: QuantityField::from_json(field(fields, QUANTITY_KEY)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub coupon: Option<String>,
}

/// Result of classifying an incoming payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedOrder {
    Valid(Order),
    Invalid,
}

impl ParsedOrder {
    /// Accepts either an `items` list or a single flat line at top level.
    ///
    /// An `items` value that is not an array falls back to the flat shape.
    /// An empty `items` array is invalid.
    pub fn from_json(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::Invalid;
        };

        let lines: Vec<OrderLine> = match object.get(ITEMS_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| OrderLine::from_fields(item.as_object()))
                .collect(),
            _ if object.contains_key(PRODUCT_KEY) => vec![OrderLine::from_fields(Some(object))],
            _ => Vec::new(),
        };

        if lines.is_empty() {
            return Self::Invalid;
        }

        let coupon = object
            .get(COUPON_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);

        let customer_name = object
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_string();

        Self::Valid(Order {
            customer_name,
            lines,
            coupon,
        })
    }
}

fn field<'a>(fields: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    fields.and_then(|f| f.get(key))
}

fn normalize_key(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid(payload: Value) -> Order {
        match ParsedOrder::from_json(&payload) {
            ParsedOrder::Valid(order) => order,
            ParsedOrder::Invalid => panic!("expected a valid order for {payload}"),
        }
    }

    #[test]
    fn test_flat_line_is_normalized() {
        let order = valid(json!({"producto": " Taza ", "color": "BLANCO", "cantidad": 2}));
        assert_eq!(
            order.lines,
            vec![OrderLine {
                product: "taza".into(),
                color: "blanco".into(),
                quantity: QuantityField::Valid(2),
            }]
        );
        assert_eq!(order.coupon, None);
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_NAME);
    }

    #[test]
    fn test_customer_name_is_read_when_present() {
        let order = valid(json!({"nombre": " Ana ", "producto": "taza", "color": "blanco"}));
        assert_eq!(order.customer_name, "Ana");

        let order = valid(json!({"nombre": "", "producto": "taza", "color": "blanco"}));
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_NAME);
    }

    #[test]
    fn test_items_list_takes_precedence() {
        let order = valid(json!({
            "producto": "gorra",
            "items": [
                {"producto": "camiseta", "color": "azul", "cantidad": 3},
                {"producto": "taza", "color": "negro"}
            ],
            "cupon": "bienvenida10"
        }));
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].product, "camiseta");
        assert_eq!(order.lines[1].quantity, QuantityField::Missing);
        assert_eq!(order.coupon.as_deref(), Some("bienvenida10"));
    }

    #[test]
    fn test_non_array_items_falls_back_to_flat_line() {
        let order = valid(json!({"items": "nope", "producto": "taza", "color": "blanco"}));
        assert_eq!(order.lines.len(), 1);
    }

    #[test]
    fn test_invalid_shapes() {
        for payload in [
            json!({"nombre": "Ana"}),
            json!({"items": []}),
            json!({"items": 5}),
            json!([{"producto": "taza"}]),
            json!("taza"),
        ] {
            assert_eq!(ParsedOrder::from_json(&payload), ParsedOrder::Invalid);
        }
    }

    #[test]
    fn test_non_object_item_becomes_empty_line() {
        let order = valid(json!({"items": [42]}));
        assert_eq!(order.lines[0].product, "");
        assert_eq!(order.lines[0].quantity, QuantityField::Missing);
    }

    #[test]
    fn test_quantity_parsing() {
        let cases = [
            (json!(3), QuantityField::Valid(3)),
            (json!("4"), QuantityField::Valid(4)),
            (json!(" 5 "), QuantityField::Valid(5)),
            (json!(2.0), QuantityField::Valid(2)),
            (json!("2.0"), QuantityField::Valid(2)),
            (json!("2.5"), QuantityField::Invalid),
            (json!("-3"), QuantityField::Invalid),
            (json!(null), QuantityField::Missing),
            (json!("abc"), QuantityField::Invalid),
            (json!(0), QuantityField::Invalid),
            (json!(-2), QuantityField::Invalid),
            (json!(1.5), QuantityField::Invalid),
            (json!(true), QuantityField::Invalid),
        ];
        for (raw, expected) in cases {
            assert_eq!(QuantityField::from_json(Some(&raw)), expected, "input {raw}");
        }
        assert_eq!(QuantityField::Invalid.resolve(), DEFAULT_QUANTITY);
        assert_eq!(QuantityField::Missing.resolve(), DEFAULT_QUANTITY);
    }

    #[test]
    fn test_non_string_coupon_is_ignored() {
        let order = valid(json!({"producto": "taza", "color": "blanco", "cupon": 10}));
        assert_eq!(order.coupon, None);
    }
}
