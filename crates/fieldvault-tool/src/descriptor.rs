//! Property descriptors for tool argument schemas
//!
//! A descriptor tree describes the shape of one tool's arguments. Trees are
//! built bottom-up from static definitions at registry bootstrap, serialized
//! once into the advertised schema document, and never mutated afterwards.

use serde_json::{Map, Value};

/// Argument type tags advertised in schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    DateTime,
    Object,
    Array,
}

impl PropertyType {
    /// Wire spelling used in schema documents
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::DateTime => "DateTime",
            PropertyType::Object => "object",
            PropertyType::Array => "array",
        }
    }
}

/// The composite shape of a property.
///
/// `Object` owns its ordered child fields and `Array` the single descriptor
/// shared by every element; a scalar carries neither. The variants make the
/// children/item facets mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum PropertyKind {
    Scalar(PropertyType),
    Object { children: Vec<PropertyDescriptor> },
    Array { item: Box<PropertyDescriptor> },
}

/// One named, typed input field of a tool schema
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    name: String,
    kind: PropertyKind,
    description: String,
}

impl PropertyDescriptor {
    fn scalar(name: impl Into<String>, ty: PropertyType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Scalar(ty),
            description: description.into(),
        }
    }

    /// A string-typed field
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::scalar(name, PropertyType::String, description)
    }

    /// A number-typed field
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::scalar(name, PropertyType::Number, description)
    }

    /// A boolean-typed field
    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::scalar(name, PropertyType::Boolean, description)
    }

    /// A datetime-typed field
    pub fn datetime(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::scalar(name, PropertyType::DateTime, description)
    }

    /// An object-typed field with an ordered set of nested fields
    pub fn object(
        name: impl Into<String>,
        description: impl Into<String>,
        children: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Object { children },
            description: description.into(),
        }
    }

    /// An array-typed field whose elements all share the item descriptor
    pub fn array(
        name: impl Into<String>,
        description: impl Into<String>,
        item: PropertyDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Array {
                item: Box::new(item),
            },
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    /// The advertised type tag of this descriptor
    pub fn property_type(&self) -> PropertyType {
        match &self.kind {
            PropertyKind::Scalar(ty) => *ty,
            PropertyKind::Object { .. } => PropertyType::Object,
            PropertyKind::Array { .. } => PropertyType::Array,
        }
    }

    /// Serialize this descriptor depth-first into its document form.
    ///
    /// `properties` and `items` are emitted only for object and array nodes;
    /// downstream consumers treat key presence as structurally significant,
    /// so absent facets omit the key entirely rather than carrying null.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("propertyName".to_string(), Value::String(self.name.clone()));
        doc.insert(
            "propertyType".to_string(),
            Value::String(self.property_type().as_str().to_string()),
        );
        doc.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );

        match &self.kind {
            PropertyKind::Scalar(_) => {}
            PropertyKind::Object { children } => {
                doc.insert(
                    "properties".to_string(),
                    Value::Array(children.iter().map(|c| c.to_document()).collect()),
                );
            }
            PropertyKind::Array { item } => {
                doc.insert("items".to_string(), item.to_document());
            }
        }

        Value::Object(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_document_has_no_structural_keys() {
        let doc = PropertyDescriptor::string("sensor_id", "ID of the sensor").to_document();

        assert_eq!(doc["propertyName"], "sensor_id");
        assert_eq!(doc["propertyType"], "string");
        assert_eq!(doc["description"], "ID of the sensor");
        assert!(doc.get("properties").is_none());
        assert!(doc.get("items").is_none());
    }

    #[test]
    fn test_datetime_wire_spelling() {
        let doc = PropertyDescriptor::datetime("timestamp", "Timestamp of the data").to_document();
        assert_eq!(doc["propertyType"], "DateTime");
    }

    #[test]
    fn test_object_document_preserves_child_order() {
        let descriptor = PropertyDescriptor::object(
            "location",
            "Device location",
            vec![
                PropertyDescriptor::number("latitude", "Latitude"),
                PropertyDescriptor::number("longitude", "Longitude"),
                PropertyDescriptor::string("description", "Description"),
            ],
        );

        let doc = descriptor.to_document();
        assert_eq!(doc["propertyType"], "object");
        assert!(doc.get("items").is_none());

        let properties = doc["properties"].as_array().unwrap();
        assert_eq!(properties.len(), 3);
        assert_eq!(properties[0]["propertyName"], "latitude");
        assert_eq!(properties[1]["propertyName"], "longitude");
        assert_eq!(properties[2]["propertyName"], "description");
    }

    #[test]
    fn test_array_document_holds_single_item() {
        let descriptor = PropertyDescriptor::array(
            "errors",
            "List of error codes",
            PropertyDescriptor::string("error", "Error code or message"),
        );

        let doc = descriptor.to_document();
        assert_eq!(doc["propertyType"], "array");
        assert!(doc.get("properties").is_none());
        assert_eq!(doc["items"]["propertyName"], "error");
        assert_eq!(doc["items"]["propertyType"], "string");
    }

    #[test]
    fn test_to_document_is_idempotent() {
        let descriptor = PropertyDescriptor::array(
            "sensors",
            "Attached sensors",
            PropertyDescriptor::object(
                "sensor",
                "Sensor information",
                vec![
                    PropertyDescriptor::string("sensor_id", "Sensor ID"),
                    PropertyDescriptor::array(
                        "errors",
                        "Errors",
                        PropertyDescriptor::string("error", "Error message"),
                    ),
                ],
            ),
        );

        let first = descriptor.to_document();
        let second = descriptor.to_document();
        assert_eq!(first, second);
    }
}
