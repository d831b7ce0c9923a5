//! Validation helpers for the REST contract types

use validator::Validate;

use crate::error::ContractError;
use crate::types::*;
use harmony_domain_types::Snowflake;

/// Validate a current-user modification body.
pub fn validate_modify_current_user(
    request: &ModifyCurrentUserRequest,
) -> Result<(), ContractError> {
    request.validate()?;
    Ok(())
}

/// Validate a webhook creation body.
pub fn validate_create_webhook(request: &CreateWebhookRequest) -> Result<(), ContractError> {
    request.validate()?;
    Ok(())
}

/// Validate a webhook modification body.
pub fn validate_modify_webhook(request: &ModifyWebhookRequest) -> Result<(), ContractError> {
    request.validate()?;
    if let Some(channel_id) = &request.channel_id {
        validate_snowflake(channel_id)?;
    }
    Ok(())
}

/// Validate a webhook execution body. The server rejects messages with
/// nothing to render, so an entirely empty body fails here too.
pub fn validate_execute_webhook(request: &ExecuteWebhookRequest) -> Result<(), ContractError> {
    request.validate()?;
    match &request.content {
        Some(content) if !content.is_empty() => Ok(()),
        _ => Err(ContractError::EmptyRequest(
            "execute webhook requires content",
        )),
    }
}

/// Reject values that cannot be snowflakes (empty or non-decimal strings).
pub fn validate_snowflake(id: &Snowflake) -> Result<(), ContractError> {
    if id.is_well_formed() {
        Ok(())
    } else {
        Err(ContractError::InvalidSnowflake(id.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_current_user_accepts_avatar_removal() {
        let request = ModifyCurrentUserRequest {
            username: Some("Mason".to_owned()),
            avatar: Some(None),
        };
        assert!(validate_modify_current_user(&request).is_ok());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"username":"Mason","avatar":null}"#
        );
    }

    #[test]
    fn modify_current_user_rejects_short_username() {
        let request = ModifyCurrentUserRequest {
            username: Some("x".to_owned()),
            avatar: None,
        };
        assert!(matches!(
            validate_modify_current_user(&request),
            Err(ContractError::Validation(_))
        ));
    }

    #[test]
    fn omitted_avatar_is_not_serialized() {
        let request = ModifyCurrentUserRequest {
            username: Some("Mason".to_owned()),
            avatar: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"username":"Mason"}"#
        );
    }

    #[test]
    fn create_webhook_name_limits() {
        let ok = CreateWebhookRequest {
            name: "captain hook".to_owned(),
            avatar: None,
        };
        assert!(validate_create_webhook(&ok).is_ok());

        let too_long = CreateWebhookRequest {
            name: "x".repeat(81),
            avatar: None,
        };
        assert!(validate_create_webhook(&too_long).is_err());

        let empty = CreateWebhookRequest {
            name: String::new(),
            avatar: None,
        };
        assert!(validate_create_webhook(&empty).is_err());
    }

    #[test]
    fn execute_webhook_requires_content() {
        let empty = ExecuteWebhookRequest::default();
        assert!(matches!(
            validate_execute_webhook(&empty),
            Err(ContractError::EmptyRequest(_))
        ));

        let ok = ExecuteWebhookRequest {
            content: Some("hello".to_owned()),
            ..Default::default()
        };
        assert!(validate_execute_webhook(&ok).is_ok());
    }

    #[test]
    fn modify_webhook_checks_channel_id_shape() {
        let request = ModifyWebhookRequest {
            channel_id: Some(Snowflake::from("not-a-snowflake")),
            ..Default::default()
        };
        assert!(matches!(
            validate_modify_webhook(&request),
            Err(ContractError::InvalidSnowflake(_))
        ));
    }
}
