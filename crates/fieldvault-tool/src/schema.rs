//! Declarative schema documents for tool registration

use crate::descriptor::{PropertyDescriptor, PropertyKind};
use fieldvault_core::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Builds the schema document a tool advertises to the invocation host.
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Serialize an ordered descriptor sequence into a schema document.
    ///
    /// The n-th element of the output corresponds to the n-th input
    /// descriptor. Duplicate names among siblings are rejected; nothing else
    /// is validated here.
    pub fn build(properties: &[PropertyDescriptor]) -> Result<Value> {
        check_sibling_names(properties)?;

        Ok(Value::Array(
            properties.iter().map(|p| p.to_document()).collect(),
        ))
    }

    /// Encode the schema document as the JSON string the host registers
    pub fn build_json(properties: &[PropertyDescriptor]) -> Result<String> {
        let document = Self::build(properties)?;
        Ok(serde_json::to_string(&document)?)
    }
}

fn check_sibling_names(properties: &[PropertyDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();

    for property in properties {
        if !seen.insert(property.name()) {
            return Err(Error::Schema(format!(
                "duplicate property name among siblings: {}",
                property.name()
            )));
        }

        match property.kind() {
            PropertyKind::Scalar(_) => {}
            PropertyKind::Object { children } => check_sibling_names(children)?,
            PropertyKind::Array { item } => check_sibling_names(std::slice::from_ref(&**item))?,
        }
    }

    Ok(())
}
