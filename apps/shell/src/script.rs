//! Script steps and their JSON output.

use anyhow::Context;
use depot::domain::ProductSpec;
use depot::warehouse::{Warehouse, WarehouseError, wire};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

/// One warehouse operation. Unit steps are written as bare strings (`"save"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Deliver(Vec<ProductSpec>),
    Order(Document),
    Occupancy,
    Save,
    Restore(Document),
}

/// A JSON document given either inline or as an already-encoded string.
///
/// Strings are passed on verbatim, so malformed payloads reach the warehouse unchanged.
/// Inline documents are re-encoded compactly with keys sorted, so an inline order's
/// receipt is that canonical text, not the script's own spelling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Text(String),
    Inline(serde_json::Value),
}

impl Document {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Inline(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Restored {
    restored: bool,
}

impl Step {
    /// Applies the step and renders its result as one line of JSON.
    ///
    /// # Errors
    /// Returns the warehouse error for deliveries naming unknown product kinds.
    pub fn apply(self, warehouse: &mut Warehouse) -> Result<String, WarehouseError> {
        match self {
            Self::Deliver(specs) => wire::to_json(&warehouse.deliver(&specs)?),
            Self::Order(request) => wire::to_json(&warehouse.submit_order(&request.into_text())),
            Self::Occupancy => warehouse.occupancy_report_json(),
            Self::Save => warehouse.save_state_json(),
            Self::Restore(snapshot) => {
                let restored = warehouse.restore_state(&snapshot.into_text());
                wire::to_json(&Restored { restored })
            }
        }
    }
}

/// Parses a script (a JSON array of steps).
///
/// # Errors
/// Fails if `raw` is not a JSON array of known steps.
pub fn parse(raw: &str) -> anyhow::Result<Vec<Step>> {
    Ok(serde_json::from_str(raw)?)
}

/// Runs every step in order, writing one output line per step.
///
/// # Errors
/// Stops at the first failing step or write.
pub fn run(warehouse: &mut Warehouse, steps: Vec<Step>, out: &mut impl Write) -> anyhow::Result<()> {
    for (index, step) in steps.into_iter().enumerate() {
        debug!(step = index, "Applying script step");
        let line = step.apply(warehouse).with_context(|| format!("Script step #{index} failed"))?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot::domain::DepartmentKind;
    use depot::warehouse::Department;

    fn cold_room() -> Warehouse {
        let mut warehouse = Warehouse::new();
        warehouse.add_department(Department::new(DepartmentKind::ColdRoomDepartment, 10.0));
        warehouse
    }

    #[test]
    fn steps_parse_from_tags_and_strings() {
        let steps = parse(
            r#"[{"deliver":[{"class":"TV","name":"Brave","size":40}]},{"order":"{}"},"occupancy","save",{"restore":{"warehouseState":[]}}]"#,
        )
        .expect("parse");

        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], Step::Deliver(vec![ProductSpec::new("TV", "Brave", 40.0)]));
        assert_eq!(steps[1], Step::Order(Document::Text("{}".to_owned())));
        assert_eq!(steps[2], Step::Occupancy);
        assert_eq!(steps[3], Step::Save);
        assert!(matches!(steps[4], Step::Restore(Document::Inline(_))));
    }

    #[test]
    fn inline_documents_are_re_encoded() {
        let steps = parse(r#"[{"order": {"order": [{ "name": "X", "class": "GlassWare" }]}}]"#)
            .expect("parse");
        let Some(Step::Order(document)) = steps.into_iter().next() else {
            panic!("expected an order step");
        };
        assert_eq!(document.into_text(), r#"{"order":[{"class":"GlassWare","name":"X"}]}"#);

        let text = Document::Text(r#"{ "name": "X" }"#.to_owned());
        assert_eq!(text.into_text(), r#"{ "name": "X" }"#);
    }

    #[test]
    fn unknown_steps_are_rejected() {
        assert!(parse(r#"["inventory"]"#).is_err());
        assert!(parse(r#"{"deliver":[]}"#).is_err());
    }

    #[test]
    fn run_prints_one_line_per_step() {
        let mut warehouse = cold_room();
        let steps = parse(
            r#"[{"deliver":[{"class":"AstronautsIceCream","name":"Vanilla","size":2}]},"occupancy",{"order":{"order":[{"name":"Vanilla"}]}},{"restore":"not json"}]"#,
        )
        .expect("parse");

        let mut out = Vec::new();
        run(&mut warehouse, steps, &mut out).expect("run");

        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                r#"{"deliveryReport":[{"assignedDepartment":"ColdRoomDepartment","errorLog":"","productName":"Vanilla","status":"Success"}]}"#,
                r#"{"departmentsOccupancy":[{"departmentName":"ColdRoomDepartment","maxOccupancy":10,"occupancy":2}]}"#,
                r#"{"picked":[{"class":"AstronautsIceCream","flags":["keepDry","keepFrozen"],"name":"Vanilla","size":2}],"receipt":"{\"order\":[{\"name\":\"Vanilla\"}]}"}"#,
                r#"{"restored":false}"#,
            ]
        );
    }

    #[test]
    fn unknown_product_kind_stops_the_run() {
        let mut warehouse = cold_room();
        let steps = parse(r#"["save",{"deliver":[{"class":"Sorbet","name":"Lemon","size":1}]},"save"]"#)
            .expect("parse");

        let mut out = Vec::new();
        let err = run(&mut warehouse, steps, &mut out).expect_err("unknown kind");

        assert!(err.to_string().contains("Script step #1 failed"));
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 1);
    }
}
