//! Общая модель данных для jview: входной JSON-документ со структурными
//! элементами (трубчатые секции) и таксономия ошибок.
//!
//! Документ приходит из внешнего расчётного пакета, поэтому числовые поля
//! могут быть как числами, так и десятичными строками — [`NumericValue`]
//! принимает оба варианта.

mod errors;

pub use errors::{ModelError, ModelResult};

use serde::{Deserialize, Deserializer, Serialize};

/// Уникальный идентификатор элемента в сцене
pub type ElementId = String;

/// Числовое поле, допускающее запись числом или десятичной строкой
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericValue(pub f64);

impl NumericValue {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        NumericValue(v)
    }
}

impl<'de> Deserialize<'de> for NumericValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumericVisitor;

        impl serde::de::Visitor<'_> for NumericVisitor {
            type Value = NumericValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number or a decimal string")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(NumericValue(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(NumericValue(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(NumericValue(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim()
                    .parse::<f64>()
                    .map(NumericValue)
                    .map_err(|_| E::custom(format!("invalid decimal string: {v:?}")))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

/// Узел элемента: координаты в исходной системе (Z вверх)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: NumericValue,
    pub y: NumericValue,
    pub z: NumericValue,
}

impl Node {
    /// Координаты в порядке исходного файла (X, Y, Z)
    pub fn coords(&self) -> [f64; 3] {
        [self.x.get(), self.y.get(), self.z.get()]
    }
}

/// Поперечное сечение элемента.
///
/// `type == "CylindricalHS"` — постоянное кольцевое сечение (только
/// `dia_A`/`thk_A`); любой другой тип — коническая секция, требующая всех
/// четырёх полей.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "dia_A", default)]
    pub dia_a: Option<NumericValue>,
    #[serde(rename = "thk_A", default)]
    pub thk_a: Option<NumericValue>,
    #[serde(rename = "dia_B", default)]
    pub dia_b: Option<NumericValue>,
    #[serde(rename = "thk_B", default)]
    pub thk_b: Option<NumericValue>,
}

/// Тип сечения с постоянным кольцевым профилем
pub const SECTION_CYLINDRICAL: &str = "CylindricalHS";

impl Section {
    /// Сечение постоянного профиля?
    pub fn is_uniform(&self) -> bool {
        self.kind == SECTION_CYLINDRICAL
    }
}

/// Один структурный элемент: два узла и сечение.
///
/// Поля опциональны, чтобы дефект одного элемента не валил разбор всего
/// документа — сборщик пропускает неполные элементы с диагностикой.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "node_A", default)]
    pub node_a: Option<Node>,
    #[serde(rename = "node_B", default)]
    pub node_b: Option<Node>,
    #[serde(default)]
    pub section: Option<Section>,
}

/// Группа элементов (member исходного файла)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Входной документ целиком
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub members: Vec<Member>,
}

impl Document {
    /// Разобрать документ из JSON-строки.
    ///
    /// Ошибка разбора — дефект уровня документа (`MalformedDocument`);
    /// дефекты отдельных элементов обрабатываются позже при сборке.
    pub fn from_json(json: &str) -> ModelResult<Document> {
        serde_json::from_str(json).map_err(|e| ModelError::MalformedDocument(e.to_string()))
    }

    /// Общее число элементов во всех группах
    pub fn element_count(&self) -> usize {
        self.members.iter().map(|m| m.elements.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_from_number() {
        let v: NumericValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(v.get(), 0.5);
    }

    #[test]
    fn test_numeric_value_from_integer() {
        let v: NumericValue = serde_json::from_str("10").unwrap();
        assert_eq!(v.get(), 10.0);
    }

    #[test]
    fn test_numeric_value_from_string() {
        let v: NumericValue = serde_json::from_str("\"0.02\"").unwrap();
        assert_eq!(v.get(), 0.02);
    }

    #[test]
    fn test_numeric_value_rejects_garbage_string() {
        let r: Result<NumericValue, _> = serde_json::from_str("\"abc\"");
        assert!(r.is_err());
    }

    #[test]
    fn test_parse_minimal_document() {
        let json = r#"{
            "members": [
                { "elements": [ {
                    "node_A": { "x": 0, "y": 0, "z": 0 },
                    "node_B": { "x": "0", "y": "0", "z": "10" },
                    "section": { "type": "CylindricalHS", "dia_A": "0.5", "thk_A": 0.02 }
                } ] }
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.members.len(), 1);
        assert_eq!(doc.element_count(), 1);

        let e = &doc.members[0].elements[0];
        assert_eq!(e.node_b.unwrap().z.get(), 10.0);
        let s = e.section.as_ref().unwrap();
        assert!(s.is_uniform());
        assert_eq!(s.dia_a.unwrap().get(), 0.5);
        assert!(s.dia_b.is_none());
    }

    #[test]
    fn test_tapered_section_not_uniform() {
        let s = Section {
            kind: "ConicalHS".to_string(),
            dia_a: Some(1.0.into()),
            thk_a: Some(0.05.into()),
            dia_b: Some(0.5.into()),
            thk_b: Some(0.03.into()),
        };
        assert!(!s.is_uniform());
    }

    #[test]
    fn test_missing_element_fields_parse_as_none() {
        let json = r#"{ "members": [ { "elements": [ { "node_A": { "x": 1, "y": 2, "z": 3 } } ] } ] }"#;
        let doc = Document::from_json(json).unwrap();
        let e = &doc.members[0].elements[0];
        assert!(e.node_a.is_some());
        assert!(e.node_b.is_none());
        assert!(e.section.is_none());
    }

    #[test]
    fn test_invalid_json_is_malformed_document() {
        let err = Document::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ModelError::MalformedDocument(_)));
    }

    #[test]
    fn test_wrong_top_level_shape_is_malformed_document() {
        let err = Document::from_json(r#"{ "members": 42 }"#).unwrap_err();
        assert!(matches!(err, ModelError::MalformedDocument(_)));
    }

    #[test]
    fn test_node_coords_order() {
        let n = Node {
            x: 1.0.into(),
            y: 2.0.into(),
            z: 3.0.into(),
        };
        assert_eq!(n.coords(), [1.0, 2.0, 3.0]);
    }
}
