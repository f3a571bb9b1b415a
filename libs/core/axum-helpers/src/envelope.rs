//! Response envelopes and the per-resource action contract.
//!
//! Every controller action answers with a fixed status pair taken from a static
//! table: one code for success, one for any failure. The failure kind is logged
//! but never selects the status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Success envelope: `{message, data?}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Error envelope: `{message, error}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub message: String,
    #[schema(value_type = Object)]
    pub error: serde_json::Value,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, error: impl Into<serde_json::Value>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Controller actions shared by every resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    GetAll,
    GetOne,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::GetAll,
        Action::GetOne,
        Action::Update,
        Action::Delete,
    ];

    /// `(success, failure)` status codes for this action.
    pub const fn status_codes(self) -> (StatusCode, StatusCode) {
        match self {
            Action::Create => (StatusCode::CREATED, StatusCode::BAD_REQUEST),
            Action::GetAll => (StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR),
            Action::GetOne => (StatusCode::OK, StatusCode::NOT_FOUND),
            Action::Update => (StatusCode::OK, StatusCode::BAD_REQUEST),
            Action::Delete => (StatusCode::OK, StatusCode::BAD_REQUEST),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::GetAll => "getAll",
            Action::GetOne => "getOne",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Status codes and messages for one `(resource, action)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContract {
    pub success: StatusCode,
    pub failure: StatusCode,
    pub success_message: &'static str,
    pub failure_message: &'static str,
}

/// `(success message, failure message)` for each action of a resource
#[derive(Debug, Clone, Copy)]
pub struct ResourceMessages {
    pub create: (&'static str, &'static str),
    pub get_all: (&'static str, &'static str),
    pub get_one: (&'static str, &'static str),
    pub update: (&'static str, &'static str),
    pub delete: (&'static str, &'static str),
}

/// The static action table of one resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceContract {
    pub resource: &'static str,
    create: ActionContract,
    get_all: ActionContract,
    get_one: ActionContract,
    update: ActionContract,
    delete: ActionContract,
}

const fn contract_for(action: Action, messages: (&'static str, &'static str)) -> ActionContract {
    let (success, failure) = action.status_codes();
    ActionContract {
        success,
        failure,
        success_message: messages.0,
        failure_message: messages.1,
    }
}

impl ResourceContract {
    /// Standard CRUD status codes with resource-specific messages.
    pub const fn standard(resource: &'static str, messages: ResourceMessages) -> Self {
        Self {
            resource,
            create: contract_for(Action::Create, messages.create),
            get_all: contract_for(Action::GetAll, messages.get_all),
            get_one: contract_for(Action::GetOne, messages.get_one),
            update: contract_for(Action::Update, messages.update),
            delete: contract_for(Action::Delete, messages.delete),
        }
    }

    pub const fn action(&self, action: Action) -> &ActionContract {
        match action {
            Action::Create => &self.create,
            Action::GetAll => &self.get_all,
            Action::GetOne => &self.get_one,
            Action::Update => &self.update,
            Action::Delete => &self.delete,
        }
    }

    pub fn success<T: Serialize>(&self, action: Action, data: Option<T>) -> Response {
        let contract = self.action(action);
        (
            contract.success,
            Json(ApiResponse::new(contract.success_message, data)),
        )
            .into_response()
    }

    /// Error envelope carrying the failure's display string.
    ///
    /// The `Debug` form (which names the error variant) goes to the log only.
    pub fn failure<E>(&self, action: Action, err: &E) -> Response
    where
        E: fmt::Display + fmt::Debug,
    {
        let contract = self.action(action);
        if contract.failure.is_server_error() {
            error!(resource = self.resource, %action, error = ?err, "Request failed");
        } else {
            warn!(resource = self.resource, %action, error = ?err, "Request failed");
        }

        ErrorEnvelope::new(contract.failure_message, err.to_string())
            .into_response_with(contract.failure)
    }

    /// Map a service result to its envelope and status.
    pub fn respond<T, E>(&self, action: Action, result: Result<T, E>) -> Response
    where
        T: Serialize,
        E: fmt::Display + fmt::Debug,
    {
        match result {
            Ok(data) => self.success(action, Some(data)),
            Err(err) => self.failure(action, &err),
        }
    }

    /// Like [`respond`](Self::respond) for actions whose success carries no data.
    pub fn respond_empty<E>(&self, action: Action, result: Result<(), E>) -> Response
    where
        E: fmt::Display + fmt::Debug,
    {
        match result {
            Ok(()) => self.success::<()>(action, None),
            Err(err) => self.failure(action, &err),
        }
    }
}
