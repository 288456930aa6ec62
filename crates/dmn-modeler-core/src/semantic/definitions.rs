//! Document root, decisions and decision tables.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    identifier::Id,
    semantic::{DiBounds, ElementKind, ElementRef, ExtensionElements},
};

/// A decision shared between the document, the table view and the canvas.
pub type DecisionRef = Rc<RefCell<Decision>>;

/// The root of a decision document.
#[derive(Debug, Clone)]
pub struct Definitions {
    id: Id,
    name: String,
    namespace: String,
    decisions: Vec<DecisionRef>,
}

impl Definitions {
    /// Create an empty document root.
    pub fn new(id: Id, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            namespace: namespace.into(),
            decisions: Vec::new(),
        }
    }

    /// Add a decision (builder style).
    pub fn with_decision(mut self, decision: Decision) -> Self {
        self.decisions.push(decision.into_ref());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Borrow all decisions in document order.
    pub fn decisions(&self) -> &[DecisionRef] {
        &self.decisions
    }

    /// Append a decision to the document.
    pub fn add_decision(&mut self, decision: DecisionRef) {
        self.decisions.push(decision);
    }

    /// Find a decision by identifier.
    pub fn decision(&self, id: Id) -> Option<DecisionRef> {
        self.decisions
            .iter()
            .find(|decision| decision.borrow().id() == id)
            .cloned()
    }

    /// Collect a handle for every identified element, in document order.
    ///
    /// Duplicated identifiers are reported as many times as they occur.
    pub fn elements(&self) -> Vec<ElementRef> {
        let mut elements = vec![ElementRef::new(self.id, ElementKind::Definitions)];

        for decision in &self.decisions {
            let decision = decision.borrow();
            elements.push(ElementRef::new(decision.id(), ElementKind::Decision));

            let Some(table) = decision.decision_table() else {
                continue;
            };
            elements.push(ElementRef::new(table.id(), ElementKind::DecisionTable));

            for input in table.inputs() {
                elements.push(ElementRef::new(input.id(), ElementKind::InputClause));
                elements.push(ElementRef::new(
                    input.input_expression().id(),
                    ElementKind::LiteralExpression,
                ));
            }
            for output in table.outputs() {
                elements.push(ElementRef::new(output.id(), ElementKind::OutputClause));
            }
        }

        elements
    }
}

/// One decision, rendered as a table and optionally as a diagram shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    id: Id,
    name: String,
    decision_table: Option<DecisionTable>,
    extension_elements: Option<ExtensionElements>,
}

impl Decision {
    /// Create a decision without table or diagram-interchange data.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            decision_table: None,
            extension_elements: None,
        }
    }

    /// Attach a decision table (builder style).
    pub fn with_decision_table(mut self, table: DecisionTable) -> Self {
        self.decision_table = Some(table);
        self
    }

    /// Attach extension elements (builder style).
    pub fn with_extension_elements(mut self, extension_elements: ExtensionElements) -> Self {
        self.extension_elements = Some(extension_elements);
        self
    }

    /// Wrap the decision for sharing.
    pub fn into_ref(self) -> DecisionRef {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decision_table(&self) -> Option<&DecisionTable> {
        self.decision_table.as_ref()
    }

    pub fn extension_elements(&self) -> Option<&ExtensionElements> {
        self.extension_elements.as_ref()
    }

    pub fn has_extension_elements(&self) -> bool {
        self.extension_elements.is_some()
    }

    pub fn set_extension_elements(&mut self, extension_elements: ExtensionElements) {
        self.extension_elements = Some(extension_elements);
    }

    /// Diagram-interchange bounds, if the decision can be shown on the canvas.
    pub fn di_bounds(&self) -> Option<&DiBounds> {
        self.extension_elements.as_ref()?.bounds()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Hit policy of a decision table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HitPolicy {
    #[default]
    Unique,
    First,
    Priority,
    Any,
    Collect,
    RuleOrder,
    OutputOrder,
}

/// Tabular decision logic.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    id: Id,
    hit_policy: HitPolicy,
    inputs: Vec<InputClause>,
    outputs: Vec<OutputClause>,
}

impl DecisionTable {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            hit_policy: HitPolicy::default(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_hit_policy(mut self, hit_policy: HitPolicy) -> Self {
        self.hit_policy = hit_policy;
        self
    }

    pub fn with_input(mut self, input: InputClause) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: OutputClause) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }

    pub fn inputs(&self) -> &[InputClause] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[OutputClause] {
        &self.outputs
    }
}

/// A typed expression such as an input column's expression.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpression {
    id: Id,
    type_ref: String,
    text: String,
}

impl LiteralExpression {
    pub fn new(id: Id, type_ref: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            type_ref: type_ref.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn type_ref(&self) -> &str {
        &self.type_ref
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An input column of a decision table.
#[derive(Debug, Clone, PartialEq)]
pub struct InputClause {
    id: Id,
    label: Option<String>,
    input_expression: LiteralExpression,
}

impl InputClause {
    pub fn new(id: Id, input_expression: LiteralExpression) -> Self {
        Self {
            id,
            label: None,
            input_expression,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn input_expression(&self) -> &LiteralExpression {
        &self.input_expression
    }
}

/// An output column of a decision table.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputClause {
    id: Id,
    label: Option<String>,
    type_ref: String,
}

impl OutputClause {
    pub fn new(id: Id, type_ref: impl Into<String>) -> Self {
        Self {
            id,
            label: None,
            type_ref: type_ref.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn type_ref(&self) -> &str {
        &self.type_ref
    }
}
