//! Mapping from information_schema column metadata to field descriptors.

use lorem_core::options::{parse_enum_spec, parse_set_spec, OptionsError};
use lorem_core::{Field, FieldError, FieldType, Value};

/// Signed maxima of the MySQL integer family. The unsigned variant of each
/// type spans `[0, 2 * max]`.
const TINYINT_MAX: u64 = 127;
const SMALLINT_MAX: u64 = 32_767;
const MEDIUMINT_MAX: u64 = 8_388_607;
const INT_MAX: u64 = 2_147_483_647;
const BIGINT_MAX: u64 = 9_223_372_036_854_775_807;

/// Error type for MySQL schema mapping.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SchemaError {
    /// A `data_type` the registry has no generator for. Surfaced rather
    /// than guessed: a misunderstood column must not produce inserts that
    /// fight the engine's constraints.
    #[error("unsupported mysql type {data_type:?} on column {column:?}")]
    UnsupportedType { column: String, data_type: String },

    /// Malformed enum/set option literal.
    #[error("column {column:?}: {source}")]
    Options {
        column: String,
        source: OptionsError,
    },

    /// Invalid numeric shape (e.g. scale exceeding precision).
    #[error("column {column:?}: {source}")]
    Field {
        column: String,
        source: FieldError,
    },
}

/// One row of the information_schema.columns projection.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: String,
    pub column_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub max_length: Option<u64>,
}

/// Resolve a catalog column to a field descriptor.
pub fn field_from_column(spec: ColumnSpec) -> Result<Field, SchemaError> {
    let unsigned = spec.column_type.contains("unsigned");

    let kind = match spec.data_type.to_lowercase().as_str() {
        "tinyint" => integer(TINYINT_MAX, unsigned),
        "smallint" => integer(SMALLINT_MAX, unsigned),
        "mediumint" => integer(MEDIUMINT_MAX, unsigned),
        "int" => integer(INT_MAX, unsigned),
        "bigint" => integer(BIGINT_MAX, unsigned),

        "decimal" | "float" | "real" | "double" | "numeric" => {
            FieldType::decimal(spec.precision.unwrap_or(10), spec.scale.unwrap_or(0)).map_err(
                |source| SchemaError::Field {
                    column: spec.name.clone(),
                    source,
                },
            )?
        }

        "date" => FieldType::Date,
        "datetime" => FieldType::DateTime,
        "timestamp" => FieldType::Timestamp,
        "time" => FieldType::Time,
        "year" => FieldType::Year,

        "char" | "varchar" | "binary" | "varbinary" | "text" => FieldType::Text {
            max_len: spec.max_length.unwrap_or(255) as usize,
        },

        "enum" => FieldType::Enum {
            options: parse_enum_spec(&spec.column_type).map_err(|source| {
                SchemaError::Options {
                    column: spec.name.clone(),
                    source,
                }
            })?,
        },
        "set" => FieldType::Set {
            options: parse_set_spec(&spec.column_type).map_err(|source| {
                SchemaError::Options {
                    column: spec.name.clone(),
                    source,
                }
            })?,
        },

        _ => {
            return Err(SchemaError::UnsupportedType {
                column: spec.name,
                data_type: spec.data_type,
            })
        }
    };

    Ok(Field {
        name: spec.name,
        nullable: spec.nullable,
        default: spec.default.map(Value::Text),
        kind,
    })
}

fn integer(signed_max: u64, unsigned: bool) -> FieldType {
    if unsigned {
        FieldType::UnsignedInteger {
            max: 2 * signed_max,
        }
    } else {
        FieldType::Integer {
            min: -(signed_max as i64),
            max: signed_max as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, data_type: &str, column_type: &str) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            data_type: data_type.to_string(),
            column_type: column_type.to_string(),
            nullable: false,
            default: None,
            precision: None,
            scale: None,
            max_length: None,
        }
    }

    #[test]
    fn test_signed_integer_family() {
        for (data_type, max) in [
            ("tinyint", 127),
            ("smallint", 32_767),
            ("mediumint", 8_388_607),
            ("int", 2_147_483_647),
            ("bigint", 9_223_372_036_854_775_807),
        ] {
            let field =
                field_from_column(spec("n", data_type, &format!("{data_type}(11)"))).unwrap();
            assert_eq!(
                field.kind,
                FieldType::Integer { min: -max, max },
                "for {data_type}"
            );
        }
    }

    #[test]
    fn test_unsigned_integer_family() {
        let field = field_from_column(spec("n", "int", "int(10) unsigned")).unwrap();
        assert_eq!(
            field.kind,
            FieldType::UnsignedInteger {
                max: 2 * 2_147_483_647
            }
        );

        let field = field_from_column(spec("n", "bigint", "bigint(20) unsigned")).unwrap();
        assert_eq!(
            field.kind,
            FieldType::UnsignedInteger {
                max: 2 * 9_223_372_036_854_775_807
            }
        );
    }

    #[test]
    fn test_decimal_reads_precision_and_scale() {
        let mut column = spec("price", "decimal", "decimal(10,2)");
        column.precision = Some(10);
        column.scale = Some(2);

        let field = field_from_column(column).unwrap();
        assert_eq!(
            field.kind,
            FieldType::Decimal {
                precision: 10,
                scale: 2
            }
        );
    }

    #[test]
    fn test_decimal_scale_above_precision_fails() {
        let mut column = spec("price", "numeric", "numeric(3,4)");
        column.precision = Some(3);
        column.scale = Some(4);

        assert!(matches!(
            field_from_column(column),
            Err(SchemaError::Field { .. })
        ));
    }

    #[test]
    fn test_float_shares_decimal_generator() {
        let mut column = spec("ratio", "float", "float");
        column.precision = Some(12);

        let field = field_from_column(column).unwrap();
        assert_eq!(
            field.kind,
            FieldType::Decimal {
                precision: 12,
                scale: 0
            }
        );
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(
            field_from_column(spec("d", "date", "date")).unwrap().kind,
            FieldType::Date
        );
        assert_eq!(
            field_from_column(spec("d", "datetime", "datetime"))
                .unwrap()
                .kind,
            FieldType::DateTime
        );
        assert_eq!(
            field_from_column(spec("d", "timestamp", "timestamp"))
                .unwrap()
                .kind,
            FieldType::Timestamp
        );
        assert_eq!(
            field_from_column(spec("d", "time", "time")).unwrap().kind,
            FieldType::Time
        );
        assert_eq!(
            field_from_column(spec("d", "year", "year(4)")).unwrap().kind,
            FieldType::Year
        );
    }

    #[test]
    fn test_text_family_uses_character_maximum_length() {
        let mut column = spec("name", "varchar", "varchar(64)");
        column.max_length = Some(64);

        let field = field_from_column(column).unwrap();
        assert_eq!(field.kind, FieldType::Text { max_len: 64 });

        for data_type in ["char", "binary", "varbinary", "text"] {
            let field = field_from_column(spec("c", data_type, data_type)).unwrap();
            assert!(matches!(field.kind, FieldType::Text { .. }), "for {data_type}");
        }
    }

    #[test]
    fn test_enum_options_with_escapes() {
        let field = field_from_column(spec(
            "kind",
            "enum",
            "enum('option1','secondOption','strange''option','test'',strage2')",
        ))
        .unwrap();

        assert_eq!(
            field.kind,
            FieldType::Enum {
                options: vec![
                    "option1".to_string(),
                    "secondOption".to_string(),
                    "strange'option".to_string(),
                    "test',strage2".to_string(),
                ]
            }
        );
    }

    #[test]
    fn test_set_options() {
        let field = field_from_column(spec("flags", "set", "set('a','b','c')")).unwrap();
        assert_eq!(
            field.kind,
            FieldType::Set {
                options: vec!["a".to_string(), "b".to_string(), "c".to_string()]
            }
        );
    }

    #[test]
    fn test_malformed_enum_literal_fails() {
        assert!(matches!(
            field_from_column(spec("kind", "enum", "enum('a','b")),
            Err(SchemaError::Options { .. })
        ));
    }

    #[test]
    fn test_unsupported_type_is_surfaced() {
        assert_eq!(
            field_from_column(spec("g", "geometry", "geometry")),
            Err(SchemaError::UnsupportedType {
                column: "g".to_string(),
                data_type: "geometry".to_string(),
            })
        );
    }

    #[test]
    fn test_nullable_and_default_carry_over() {
        let mut column = spec("status", "varchar", "varchar(16)");
        column.nullable = true;
        column.default = Some("pending".to_string());
        column.max_length = Some(16);

        let field = field_from_column(column).unwrap();
        assert!(field.nullable);
        assert_eq!(field.default, Some(Value::Text("pending".to_string())));
    }
}
