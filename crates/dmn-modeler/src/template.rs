//! The canonical starter document.
//!
//! New documents start from one decision holding a decision table with a
//! single string input and a single string output. [`INITIAL_TEMPLATE`] is
//! the document as written to disk; [`starter_definitions`] is the same
//! document as a semantic model, ready for import.

use dmn_modeler_core::{
    identifier::Id,
    semantic::{
        Decision, DecisionTable, Definitions, InputClause, LiteralExpression, OutputClause,
    },
};

/// Namespace of documents created by the modeler.
pub const NAMESPACE: &str = "http://camunda.org/schema/1.0/dmn";

/// The starter document in DMN XML form.
pub const INITIAL_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://www.omg.org/spec/DMN/20151101/dmn.xsd" id="definitions" name="definitions" namespace="http://camunda.org/schema/1.0/dmn">
  <decision id="decision" name="">
    <decisionTable id="decisionTable">
      <input id="input1" label="">
        <inputExpression id="inputExpression1" typeRef="string">
          <text></text>
        </inputExpression>
      </input>
      <output id="output1" label="" name="" typeRef="string" />
    </decisionTable>
  </decision>
</definitions>
"#;

/// Build the starter document as a semantic model.
pub fn starter_definitions() -> Definitions {
    let table = DecisionTable::new(Id::new("decisionTable"))
        .with_input(
            InputClause::new(
                Id::new("input1"),
                LiteralExpression::new(Id::new("inputExpression1"), "string", ""),
            )
            .with_label(""),
        )
        .with_output(OutputClause::new(Id::new("output1"), "string").with_label(""));

    Definitions::new(Id::new("definitions"), "definitions", NAMESPACE)
        .with_decision(Decision::new(Id::new("decision"), "").with_decision_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_and_model_agree_on_ids() {
        let definitions = starter_definitions();
        let elements = definitions.elements();

        assert_eq!(elements.len(), 6);
        for element in elements {
            let attribute = format!(r#"id="{}""#, element.id());
            assert!(
                INITIAL_TEMPLATE.contains(&attribute),
                "template should declare {attribute}"
            );
        }
        assert_eq!(INITIAL_TEMPLATE.matches(" id=\"").count(), 6);
    }

    #[test]
    fn test_starter_shape() {
        let definitions = starter_definitions();

        assert_eq!(definitions.namespace(), NAMESPACE);
        assert_eq!(definitions.decisions().len(), 1);

        let decision = definitions.decisions()[0].borrow();
        let table = decision.decision_table().expect("starter has a table");
        assert_eq!(table.inputs().len(), 1);
        assert_eq!(table.outputs().len(), 1);
        assert_eq!(table.inputs()[0].input_expression().type_ref(), "string");
        assert!(!decision.has_extension_elements());
    }
}
