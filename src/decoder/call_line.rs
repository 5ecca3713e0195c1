//! Recognise `<target>::<selector>(<params>)` call lines.
//!
//! Example: `[140320] 0x39BF2eFF94201cfAA471932655404F63315147a4::5a6bcfda(0000)`

use crate::utils::config::{CALL_SEPARATOR, SELECTOR_HEX_LEN};
use crate::utils::error::DecodeError;

/// A trace line that carries raw, undecoded calldata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallLine<'a> {
    /// Everything before `::` (gas and target address)
    pub target: &'a str,

    /// 4-byte selector as 8 hex characters
    pub selector: &'a str,

    /// Hex-encoded arguments between the parentheses
    pub params: &'a str,
}

impl<'a> CallLine<'a> {
    /// Split a node's content into its call parts
    ///
    /// # Errors
    /// * `DecodeError::NotACall` - no single `::`, or no parenthesised params
    /// * `DecodeError::InvalidSelector` - selector is not 8 hex characters
    pub fn parse(content: &'a str) -> Result<Self, DecodeError> {
        let mut segments = content.split(CALL_SEPARATOR);
        let (Some(target), Some(call), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(DecodeError::NotACall(content.to_string()));
        };

        let selector = call.split('(').next().unwrap_or(call);
        if !is_selector(selector) {
            return Err(DecodeError::InvalidSelector(selector.to_string()));
        }

        let params = call
            .find('(')
            .map(|open| &call[open + 1..])
            .and_then(|rest| rest.rfind(')').map(|close| &rest[..close]))
            .ok_or_else(|| DecodeError::NotACall(content.to_string()))?;

        Ok(Self {
            target,
            selector,
            params,
        })
    }

    /// `0x` + selector + params, the body sent to the decoder
    pub fn calldata(&self) -> String {
        format!("0x{}{}", self.selector, self.params)
    }

    /// Replace the raw call with an already formatted one
    pub fn with_call(&self, formatted_call: &str) -> String {
        format!("{}{}{}", self.target, CALL_SEPARATOR, formatted_call)
    }
}

fn is_selector(candidate: &str) -> bool {
    candidate.len() == SELECTOR_HEX_LEN && candidate.chars().all(|c| c.is_ascii_hexdigit())
}
