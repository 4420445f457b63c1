//! Relay payload sent to the backend authorize endpoint.

use serde::{Deserialize, Serialize};

use super::session::SessionId;
use crate::wallet::DataSignature;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub address: String,
    pub public_key: String,
    pub signature: String,
}

/// `{ "sessionId": .., "credentials": { "address", "publicKey", "signature" } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizePayload {
    pub session_id: String,
    pub credentials: Credentials,
}

impl AuthorizePayload {
    pub fn new(session: &SessionId, address: impl Into<String>, signed: DataSignature) -> Self {
        Self {
            session_id: session.as_str().to_string(),
            credentials: Credentials {
                address: address.into(),
                public_key: signed.key,
                signature: signed.signature,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_uses_camel_case() {
        let session = SessionId::new("sess-1").unwrap();
        let signed = DataSignature { key: "pub123".into(), signature: "sig456".into() };
        let payload = AuthorizePayload::new(&session, "addr1xyz", signed);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "sessionId": "sess-1",
                "credentials": {
                    "address": "addr1xyz",
                    "publicKey": "pub123",
                    "signature": "sig456"
                }
            })
        );
    }
}
