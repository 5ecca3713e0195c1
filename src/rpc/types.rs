//! Wire types for the calldata decoding service.

use serde::{Deserialize, Serialize};

/// Request body: `{"calldata": "0x..."}`
#[derive(Debug, Clone, Serialize)]
pub struct DecodeRequest<'a> {
    pub calldata: &'a str,
}

/// Decoded function call returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCall {
    pub function_name: String,
    pub raw_args: Vec<RawArg>,
}

/// One decoded argument; tuples and arrays nest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawArg {
    Scalar(String),
    List(Vec<RawArg>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_call_nested_args() {
        let json = r#"{"functionName":"swap","rawArgs":["1",["0xabc",["2","3"]]]}"#;
        let call: DecodedCall = serde_json::from_str(json).unwrap();

        assert_eq!(call.function_name, "swap");
        assert_eq!(
            call.raw_args,
            vec![
                RawArg::Scalar("1".to_string()),
                RawArg::List(vec![
                    RawArg::Scalar("0xabc".to_string()),
                    RawArg::List(vec![
                        RawArg::Scalar("2".to_string()),
                        RawArg::Scalar("3".to_string()),
                    ]),
                ]),
            ]
        );
    }

    #[test]
    fn test_decoded_call_missing_name_is_error() {
        let json = r#"{"rawArgs":[]}"#;
        assert!(serde_json::from_str::<DecodedCall>(json).is_err());
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_string(&DecodeRequest { calldata: "0x12345678" }).unwrap();
        assert_eq!(body, r#"{"calldata":"0x12345678"}"#);
    }
}
