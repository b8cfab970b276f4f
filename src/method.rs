//! @ai:module:intent Antialiasing methods swept by the harness
//! @ai:module:layer domain
//! @ai:module:public_api Method
//! @ai:module:stateless true

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// @ai:intent Antialiasing method passed to the rendering binary via --aa-method
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "fxaa")]
    Fxaa,
    #[serde(rename = "fxaa2phase")]
    Fxaa2Phase,
    #[serde(rename = "smaaLow")]
    SmaaLow,
    #[serde(rename = "smaaMedium")]
    SmaaMedium,
    #[serde(rename = "smaaHigh")]
    SmaaHigh,
    #[serde(rename = "smaaUltra")]
    SmaaUltra,
    #[serde(rename = "smaaUltraT2X")]
    SmaaUltraT2x,
    #[serde(rename = "taaLow")]
    TaaLow,
    #[serde(rename = "taaMedium")]
    TaaMedium,
    #[serde(rename = "taaHigh")]
    TaaHigh,
    #[serde(rename = "taaUltra")]
    TaaUltra,
    #[serde(rename = "taaExtreme")]
    TaaExtreme,
    #[serde(rename = "taaNightmare")]
    TaaNightmare,
}

impl Method {
    /// Every method, in sweep order.
    pub const ALL: [Method; 14] = [
        Method::None,
        Method::Fxaa,
        Method::Fxaa2Phase,
        Method::SmaaLow,
        Method::SmaaMedium,
        Method::SmaaHigh,
        Method::SmaaUltra,
        Method::SmaaUltraT2x,
        Method::TaaLow,
        Method::TaaMedium,
        Method::TaaHigh,
        Method::TaaUltra,
        Method::TaaExtreme,
        Method::TaaNightmare,
    ];

    /// @ai:intent Identifier understood by the rendering binary
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::None => "none",
            Method::Fxaa => "fxaa",
            Method::Fxaa2Phase => "fxaa2phase",
            Method::SmaaLow => "smaaLow",
            Method::SmaaMedium => "smaaMedium",
            Method::SmaaHigh => "smaaHigh",
            Method::SmaaUltra => "smaaUltra",
            Method::SmaaUltraT2x => "smaaUltraT2X",
            Method::TaaLow => "taaLow",
            Method::TaaMedium => "taaMedium",
            Method::TaaHigh => "taaHigh",
            Method::TaaUltra => "taaUltra",
            Method::TaaExtreme => "taaExtreme",
            Method::TaaNightmare => "taaNightmare",
        }
    }

    /// @ai:intent Parse a comma-separated method list, keeping sweep order
    /// @ai:pre every entry names a known method
    /// @ai:effects pure
    pub fn parse_list(list: &str) -> Result<Vec<Method>, HarnessError> {
        let requested = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Method::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Method::in_sweep_order(&requested))
    }

    /// @ai:intent Reorder a selection into sweep order, dropping duplicates
    /// @ai:effects pure
    pub fn in_sweep_order(selected: &[Method]) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|m| selected.contains(m))
            .collect()
    }
}

impl FromStr for Method {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| HarnessError::Argument(format!("Unknown AA method: {}", s)))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_methods_in_declared_order() {
        let names: Vec<_> = Method::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "none",
                "fxaa",
                "fxaa2phase",
                "smaaLow",
                "smaaMedium",
                "smaaHigh",
                "smaaUltra",
                "smaaUltraT2X",
                "taaLow",
                "taaMedium",
                "taaHigh",
                "taaUltra",
                "taaExtreme",
                "taaNightmare",
            ]
        );
    }

    #[test]
    fn test_serde_name_matches_binary_flag() {
        for method in Method::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }

    #[test]
    fn test_parse_list_keeps_sweep_order() {
        let methods = Method::parse_list("taaHigh, fxaa,none").unwrap();
        assert_eq!(methods, vec![Method::None, Method::Fxaa, Method::TaaHigh]);
    }

    #[test]
    fn test_in_sweep_order_drops_duplicates() {
        let methods = Method::in_sweep_order(&[Method::TaaHigh, Method::Fxaa, Method::Fxaa]);
        assert_eq!(methods, vec![Method::Fxaa, Method::TaaHigh]);
    }

    #[test]
    fn test_parse_list_rejects_unknown() {
        let err = Method::parse_list("fxaa,msaa8").unwrap_err();
        assert!(matches!(err, HarnessError::Argument(_)));
    }
}
