// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harmony REST API contract types and validation
//!
//! This crate defines the per-endpoint request/response schemas and the
//! numeric error taxonomy for the platform's HTTP API. It carries no
//! transport: an HTTP client issues the requests and parses responses into
//! these shapes; the server enforces the documented constraints. The
//! `validator` annotations here let callers fail obviously-invalid bodies
//! before spending a round trip.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;

/// Generate an OpenAPI schema for the contract types
#[cfg(feature = "utoipa")]
pub fn openapi_schema() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Harmony REST API"),
        paths(),
        components(schemas(
            harmony_domain_types::Snowflake,
            harmony_domain_types::PartialUser,
            harmony_domain_types::User,
            harmony_domain_types::PremiumType,
            harmony_domain_types::Webhook,
            harmony_domain_types::WebhookType,
            ModifyCurrentUserRequest,
            CreateWebhookRequest,
            ModifyWebhookRequest,
            ExecuteWebhookRequest,
            ApiErrorBody,
            JsonErrorCode
        ))
    )]
    struct ApiDoc;
    ApiDoc::openapi()
}
