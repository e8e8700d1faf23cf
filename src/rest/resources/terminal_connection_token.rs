//! Terminal Connection Token resource implementation.
//!
//! A [`TerminalConnectionToken`] is a short-lived secret a point-of-sale
//! reader uses to connect. It can only be created.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::TerminalConnectionToken;
//!
//! let token = TerminalConnectionToken::create(&client, &Default::default()).await?;
//! reader.connect(&token.secret);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ListParams, ResourceOperation, ResourcePath, RestResource};

/// A secret for connecting a reader.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalConnectionToken {
    /// Always `"terminal.connection_token"`.
    pub object: String,

    /// The location the token is scoped to.
    pub location: Option<String>,

    /// The secret handed to the reader.
    pub secret: String,
}

impl RestResource for TerminalConnectionToken {
    type GetParams = ();
    type ListParams = ListParams;
    type CreateParams = TerminalConnectionTokenParams;

    const NAME: &'static str = "TerminalConnectionToken";
    const OBJECT: &'static str = "terminal.connection_token";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Create,
        &[],
        "terminal/connection_tokens",
    )];
}

/// Parameters for creating a connection token.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct TerminalConnectionTokenParams {
    /// Scope the token to readers at this location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_form_values;
    use crate::rest::get_path;

    #[test]
    fn test_connection_token_deserialization() {
        let token: TerminalConnectionToken = serde_json::from_str(
            r#"{"object": "terminal.connection_token", "secret": "pst_test_123", "location": null}"#,
        )
        .unwrap();

        assert_eq!(token.object, TerminalConnectionToken::OBJECT);
        assert_eq!(token.secret, "pst_test_123");
        assert!(token.location.is_none());
    }

    #[test]
    fn test_empty_params_send_no_body() {
        let form = to_form_values(&TerminalConnectionTokenParams::default()).unwrap();
        assert!(form.is_empty());

        let form = to_form_values(&TerminalConnectionTokenParams {
            location: Some("tml_123".to_string()),
        })
        .unwrap();
        assert_eq!(form.get("location"), Some("tml_123"));
    }

    #[test]
    fn test_create_is_the_only_path() {
        assert_eq!(TerminalConnectionToken::PATHS.len(), 1);
        let create = get_path(TerminalConnectionToken::PATHS, ResourceOperation::Create, &[]);
        assert_eq!(create.unwrap().template, "terminal/connection_tokens");
        assert!(get_path(TerminalConnectionToken::PATHS, ResourceOperation::Get, &["id"]).is_none());
    }
}
