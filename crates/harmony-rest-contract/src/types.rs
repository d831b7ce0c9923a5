//! Endpoint request/response shapes
//!
//! Each operation declares the exact body accepted and returned, annotated
//! with the logical HTTP verb and path it corresponds to. The annotations
//! are documentation only; routing and enforcement live in the transport
//! and on the server. Length/range constraints are `validator` annotations
//! mirroring the documented limits.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use harmony_domain_types::{Snowflake, User, Webhook};

/// `GET /users/@me` — returns the [`User`] the token is authorized as.
/// Scoped fields (`email`, `verified`) appear only with the right scopes.
///
/// `GET /users/{user.id}` — returns the requested [`User`] without any
/// scoped fields.
///
/// Both operations take no request body, so only the response alias is
/// declared here.
pub type GetUserResponse = User;

/// Request body for `PATCH /users/@me`. Returns the updated [`User`].
///
/// All fields are optional; omitted fields are left untouched. `avatar` is
/// additionally nullable — sending `null` removes the avatar, which is a
/// different request than not sending the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ModifyCurrentUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,
    /// Base64-encoded image data URI, or `null` to remove the avatar.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub avatar: Option<Option<String>>,
}

/// Request body for `POST /channels/{channel.id}/webhooks`. Returns the
/// created [`Webhook`], token included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CreateWebhookRequest {
    /// Default webhook name, 1-80 characters.
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: String,
    /// Base64-encoded image data URI for the default avatar.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub avatar: Option<Option<String>>,
}

/// `GET /channels/{channel.id}/webhooks` — returns every webhook of the
/// channel.
pub type GetChannelWebhooksResponse = Vec<Webhook>;

/// `GET /webhooks/{webhook.id}` — returns the requested [`Webhook`].
pub type GetWebhookResponse = Webhook;

/// Request body for `PATCH /webhooks/{webhook.id}`. Returns the updated
/// [`Webhook`]. `DELETE /webhooks/{webhook.id}` takes no body and returns
/// an empty response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ModifyWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: Option<String>,
    /// `null` removes the default avatar.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub avatar: Option<Option<String>>,
    /// Move the webhook to another channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
}

/// Request body for `POST /webhooks/{webhook.id}/{webhook.token}`.
///
/// At least `content` must be present; [`crate::validation::validate_execute_webhook`]
/// enforces that cross-field rule since it is not expressible per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ExecuteWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Content must be at most 2000 characters"))]
    pub content: Option<String>,
    /// Override of the webhook's default name for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Override of the webhook's default avatar for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}
