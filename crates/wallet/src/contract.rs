//! Verification contracts attached to wallet accounts.

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Type tag for a contract parameter, with its wire byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ParameterType {
    Signature = 0x00,
    Boolean = 0x01,
    Integer = 0x02,
    Hash160 = 0x03,
    Hash256 = 0x04,
    ByteArray = 0x05,
    PublicKey = 0x06,
    String = 0x07,
    Array = 0x10,
    InteropInterface = 0xf0,
    Void = 0xff,
}

/// A named, typed parameter of a verification contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// A verification contract: the script that authorizes spending from the
/// account, plus the parameters a signer must supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Hex-encoded verification script.
    pub script: String,
    pub parameters: Vec<Parameter>,
    pub deployed: bool,
}

impl Contract {
    /// Build a contract, rejecting an empty script or parameter list.
    pub fn new(
        script: impl Into<String>,
        parameters: Vec<Parameter>,
        deployed: bool,
    ) -> Result<Self, WalletError> {
        let script = script.into();
        if script.is_empty() {
            return Err(WalletError::EmptyScript);
        }
        if parameters.is_empty() {
            return Err(WalletError::NoParameters);
        }
        Ok(Self {
            script,
            parameters,
            deployed,
        })
    }

    /// The standard single-signature contract for a public key.
    pub fn single_signature(script: &[u8]) -> Result<Self, WalletError> {
        Self::new(
            hex::encode(script),
            vec![Parameter::new("signature", ParameterType::Signature)],
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_rejected() {
        let parameters = vec![Parameter::new("signature", ParameterType::Signature)];
        let result = Contract::new("", parameters, false);
        assert!(matches!(result, Err(WalletError::EmptyScript)));
    }

    #[test]
    fn test_empty_parameter_list_rejected() {
        let result = Contract::new("2102ac", vec![], false);
        assert!(matches!(result, Err(WalletError::NoParameters)));
    }

    #[test]
    fn test_single_signature_layout() {
        let contract = Contract::single_signature(&[0x21, 0x02, 0xac]).unwrap();
        assert_eq!(contract.script, "2102ac");
        assert_eq!(contract.parameters.len(), 1);
        assert_eq!(
            contract.parameters[0].parameter_type,
            ParameterType::Signature
        );
        assert!(!contract.deployed);
    }

    #[test]
    fn test_serde_roundtrip() {
        let contract = Contract::single_signature(&[0xab, 0xcd]).unwrap();
        let json = serde_json::to_string(&contract).unwrap();
        let back: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contract);
    }

    #[test]
    fn test_parameter_type_serializes_by_name() {
        let json = serde_json::to_string(&ParameterType::Signature).unwrap();
        assert_eq!(json, "\"Signature\"");
    }
}
