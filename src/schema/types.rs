//! Column kinds inferred from CSV text
//!
//! Inference looks at every non-empty cell of a column:
//! - all parse as i64: integer
//! - else all parse as finite f64: float
//! - else all are true/false (any casing): boolean
//! - else: string
//!
//! A column with no non-empty cell is `empty`.

use serde::Serialize;

use crate::dataset::Value;

/// Declared kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    String,
    /// Every cell is empty
    Empty,
}

impl ColumnKind {
    /// Infers the kind of a column from its raw cells
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut integer = true;
        let mut float = true;
        let mut boolean = true;
        let mut seen = false;

        for cell in cells.into_iter().filter(|c| !c.is_empty()) {
            seen = true;
            integer = integer && cell.parse::<i64>().is_ok();
            float = float && parse_float(cell).is_some();
            boolean = boolean && parse_bool(cell).is_some();

            if !integer && !float && !boolean {
                return ColumnKind::String;
            }
        }

        match (seen, integer, float, boolean) {
            (false, ..) => ColumnKind::Empty,
            (true, true, ..) => ColumnKind::Integer,
            (true, false, true, _) => ColumnKind::Float,
            (true, false, false, true) => ColumnKind::Boolean,
            _ => ColumnKind::String,
        }
    }

    /// Converts a raw cell into a value of this kind.
    ///
    /// Empty cells are `Null`. A cell that does not fit the kind is kept as
    /// a string; this cannot happen for kinds produced by [`ColumnKind::infer`]
    /// over the same cells.
    pub fn convert(&self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }

        let converted = match self {
            ColumnKind::Integer => cell.parse::<i64>().ok().map(Value::from),
            ColumnKind::Float => parse_float(cell).map(Value::Number),
            ColumnKind::Boolean => parse_bool(cell).map(Value::Bool),
            ColumnKind::String | ColumnKind::Empty => None,
        };

        converted.unwrap_or_else(|| Value::String(cell.to_string()))
    }
}

fn parse_float(cell: &str) -> Option<serde_json::Number> {
    cell.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
}

fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer() {
        assert_eq!(ColumnKind::infer(["1", "-20", "", "300"]), ColumnKind::Integer);
    }

    #[test]
    fn test_infer_float_widens_integers() {
        assert_eq!(ColumnKind::infer(["1", "2.5", "3"]), ColumnKind::Float);
    }

    #[test]
    fn test_infer_boolean_any_casing() {
        assert_eq!(ColumnKind::infer(["True", "false", "TRUE"]), ColumnKind::Boolean);
    }

    #[test]
    fn test_infer_string_on_mixed() {
        assert_eq!(ColumnKind::infer(["1", "two"]), ColumnKind::String);
        assert_eq!(ColumnKind::infer(["true", "1"]), ColumnKind::String);
    }

    #[test]
    fn test_non_finite_is_not_float() {
        assert_eq!(ColumnKind::infer(["NaN", "inf"]), ColumnKind::String);
    }

    #[test]
    fn test_infer_empty() {
        assert_eq!(ColumnKind::infer(["", ""]), ColumnKind::Empty);
        assert_eq!(ColumnKind::infer(Vec::<&str>::new()), ColumnKind::Empty);
    }

    #[test]
    fn test_convert() {
        assert_eq!(ColumnKind::Integer.convert("42"), Value::from(42));
        assert_eq!(ColumnKind::Boolean.convert("False"), Value::Bool(false));
        assert_eq!(ColumnKind::String.convert("42"), Value::from("42"));
        assert_eq!(ColumnKind::Integer.convert(""), Value::Null);
    }

    #[test]
    fn test_kind_names_on_the_wire() {
        let kinds = [
            ColumnKind::Integer,
            ColumnKind::Float,
            ColumnKind::Boolean,
            ColumnKind::String,
            ColumnKind::Empty,
        ];
        let json = serde_json::to_string(&kinds).unwrap();
        assert_eq!(json, r#"["integer","float","boolean","string","empty"]"#);
    }
}
