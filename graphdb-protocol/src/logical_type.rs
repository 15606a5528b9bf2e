use serde::ser::{Serialize, Serializer};

use crate::encoding::{ordered_pairs, Pair, Tagged};

/// Schema-level description of the shape of a [`Value`](crate::value::Value).
///
/// Used for the declared type of [`Value::Null`](crate::value::Value::Null)
/// and for element, key and value types of containers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Any,
    Bool,
    Serial,
    Int64,
    Int32,
    Int16,
    Int8,
    UInt64,
    UInt32,
    UInt16,
    UInt8,
    Int128,
    Double,
    Float,
    Date,
    Interval,
    Timestamp,
    TimestampTz,
    TimestampNs,
    TimestampMs,
    TimestampSec,
    InternalId,
    String,
    Blob,
    List {
        child_type: Box<LogicalType>,
    },
    Array {
        child_type: Box<LogicalType>,
        num_elements: u64,
    },
    Struct {
        fields: Vec<(String, LogicalType)>,
    },
    Node,
    Rel,
    RecursiveRel,
    Map {
        key_type: Box<LogicalType>,
        value_type: Box<LogicalType>,
    },
    Union {
        fields: Vec<(String, LogicalType)>,
    },
    Uuid,
    Decimal {
        precision: u32,
        scale: u32,
    },
}

impl LogicalType {
    /// Name of the variant as written on the wire.
    pub fn name(&self) -> &'static str {
        use LogicalType::*;
        match self {
            Any => "Any",
            Bool => "Bool",
            Serial => "Serial",
            Int64 => "Int64",
            Int32 => "Int32",
            Int16 => "Int16",
            Int8 => "Int8",
            UInt64 => "UInt64",
            UInt32 => "UInt32",
            UInt16 => "UInt16",
            UInt8 => "UInt8",
            Int128 => "Int128",
            Double => "Double",
            Float => "Float",
            Date => "Date",
            Interval => "Interval",
            Timestamp => "Timestamp",
            TimestampTz => "TimestampTz",
            TimestampNs => "TimestampNs",
            TimestampMs => "TimestampMs",
            TimestampSec => "TimestampSec",
            InternalId => "InternalID",
            String => "String",
            Blob => "Blob",
            List { .. } => "List",
            Array { .. } => "Array",
            Struct { .. } => "Struct",
            Node => "Node",
            Rel => "Rel",
            RecursiveRel => "RecursiveRel",
            Map { .. } => "Map",
            Union { .. } => "Union",
            Uuid => "UUID",
            Decimal { .. } => "Decimal",
        }
    }

    pub fn list(child_type: LogicalType) -> LogicalType {
        LogicalType::List {
            child_type: Box::new(child_type),
        }
    }

    pub fn array(child_type: LogicalType, num_elements: u64) -> LogicalType {
        LogicalType::Array {
            child_type: Box::new(child_type),
            num_elements,
        }
    }

    pub fn map(key_type: LogicalType, value_type: LogicalType) -> LogicalType {
        LogicalType::Map {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }

    pub fn decimal(precision: u32, scale: u32) -> LogicalType {
        LogicalType::Decimal { precision, scale }
    }

    /// Struct type with fields in the given order.
    pub fn struct_of<N: Into<String>>(
        fields: impl IntoIterator<Item = (N, LogicalType)>,
    ) -> LogicalType {
        LogicalType::Struct {
            fields: fields.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        }
    }

    /// Union type with alternatives in the given order.
    pub fn union_of<N: Into<String>>(
        fields: impl IntoIterator<Item = (N, LogicalType)>,
    ) -> LogicalType {
        LogicalType::Union {
            fields: fields.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        }
    }
}

#[derive(serde::Serialize)]
struct ListPayload<'a> {
    child_type: &'a LogicalType,
}

#[derive(serde::Serialize)]
struct ArrayPayload<'a> {
    child_type: &'a LogicalType,
    num_elements: u64,
}

#[derive(serde::Serialize)]
struct FieldsPayload<'a> {
    fields: Vec<Pair<&'a String, &'a LogicalType>>,
}

#[derive(serde::Serialize)]
struct MapPayload<'a> {
    key_type: &'a LogicalType,
    value_type: &'a LogicalType,
}

#[derive(serde::Serialize)]
struct DecimalPayload {
    precision: u32,
    scale: u32,
}

impl Serialize for LogicalType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use LogicalType::*;
        let tag = self.name();
        match self {
            List { child_type } => {
                Tagged::new(tag, &ListPayload { child_type }).serialize(serializer)
            }
            Array {
                child_type,
                num_elements,
            } => Tagged::new(
                tag,
                &ArrayPayload {
                    child_type,
                    num_elements: *num_elements,
                },
            )
            .serialize(serializer),
            Struct { fields } | Union { fields } => Tagged::new(
                tag,
                &FieldsPayload {
                    fields: ordered_pairs(fields),
                },
            )
            .serialize(serializer),
            Map {
                key_type,
                value_type,
            } => Tagged::new(
                tag,
                &MapPayload {
                    key_type,
                    value_type,
                },
            )
            .serialize(serializer),
            Decimal { precision, scale } => Tagged::new(
                tag,
                &DecimalPayload {
                    precision: *precision,
                    scale: *scale,
                },
            )
            .serialize(serializer),
            Any | Bool | Serial | Int64 | Int32 | Int16 | Int8 | UInt64 | UInt32 | UInt16
            | UInt8 | Int128 | Double | Float | Date | Interval | Timestamp | TimestampTz
            | TimestampNs | TimestampMs | TimestampSec | InternalId | String | Blob | Node
            | Rel | RecursiveRel | Uuid => Tagged::unit(tag).serialize(serializer),
        }
    }
}
