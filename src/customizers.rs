//! Customization hooks.
//!
//! # Responsibilities
//! - Define the capability traits a group's customizers implement
//! - Carry the per-operation metadata the engine supplies alongside an entry
//!
//! # Design Decisions
//! - One-method traits, consumed as shared trait objects
//! - The in-progress document/operation is an opaque `serde_json::Value`;
//!   its shape belongs to the generation engine, not this crate
//! - Plain closures implement both traits via blanket impls

use serde_json::Value;

/// Post-processes the assembled documentation artifact for one group.
///
/// Invoked by the generation engine once per group, in insertion order.
/// Each customizer may mutate the shared in-progress document.
pub trait DocumentCustomizer: Send + Sync {
    fn customize(&self, document: &mut Value);
}

impl<F> DocumentCustomizer for F
where
    F: Fn(&mut Value) + Send + Sync,
{
    fn customize(&self, document: &mut Value) {
        self(document)
    }
}

/// Post-processes the documentation entry of a single matched operation.
///
/// Invoked by the generation engine once per matched operation, in
/// insertion order.
pub trait OperationCustomizer: Send + Sync {
    fn customize(&self, operation: &mut Value, context: &OperationContext);
}

impl<F> OperationCustomizer for F
where
    F: Fn(&mut Value, &OperationContext) + Send + Sync,
{
    fn customize(&self, operation: &mut Value, context: &OperationContext) {
        self(operation, context)
    }
}

/// Metadata the engine supplies alongside an operation entry.
#[derive(Debug, Clone)]
pub struct OperationContext {
    method: String,
    path: String,
}

impl OperationContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    /// HTTP method of the operation (e.g., "GET").
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Route path of the operation (e.g., "/api/items/{id}").
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_closure_as_document_customizer() {
        let customizer = |doc: &mut Value| {
            doc["info"]["title"] = json!("patched");
        };

        let mut doc = json!({ "info": { "title": "original" } });
        DocumentCustomizer::customize(&customizer, &mut doc);
        assert_eq!(doc["info"]["title"], "patched");
    }

    #[test]
    fn test_closure_as_operation_customizer() {
        let customizer = |op: &mut Value, ctx: &OperationContext| {
            op["operationId"] = json!(format!("{}_{}", ctx.method(), ctx.path()));
        };

        let mut op = json!({});
        let ctx = OperationContext::new("GET", "/api/items");
        OperationCustomizer::customize(&customizer, &mut op, &ctx);
        assert_eq!(op["operationId"], "GET_/api/items");
    }
}
