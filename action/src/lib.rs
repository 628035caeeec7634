//! Adapter that turns an async remote call into lifecycle notifications.
//!
//! # Architecture
//!
//! Call sites that announce "operation begun", "operation succeeded with
//! data", and "operation failed" to a central hub all share the same shape.
//! This crate removes that boilerplate with one entry point:
//!
//! - [`make_action`] - validates that a transport collaborator was supplied
//!   and wraps it, together with a [`CallConfig`], into an [`Action`]
//! - [`Action::run`] - dispatches the start notification, invokes the
//!   collaborator exactly once with the configured argument list, and
//!   dispatches exactly one terminal notification once the call settles
//!
//! The dispatch hub is any `FnMut(Notification)` - a closure over an mpsc
//! sender works as well as a plain callback. The transport collaborator is
//! any `FnOnce(Vec<Value>)` returning a future of `Result<Value, E>`; the
//! adapter reads only the resolved value's nested payload path.
//!
//! # Sequencing
//!
//! | Moment | Notification |
//! |--------|--------------|
//! | before the call is issued | `{type: start_type}` |
//! | call resolved | `{type: success_type, <success_key>: <extracted>}` |
//! | call failed (any cause) | `{type: error_type, errorMsg: "error message here"}` |
//!
//! The start notification always precedes the call; exactly one terminal
//! notification follows settlement - never both, never zero, never out of
//! order. The adapter does not retry, time out, or cancel: a hung
//! collaborator leaves the terminal notification unsent.
//!
//! # Error Handling
//!
//! A missing collaborator is reported synchronously as
//! [`ActionError::MissingApiService`]; no notification is dispatched. Once an
//! [`Action`] exists, nothing escapes [`Action::run`] except through the
//! notification channel: failure reasons are logged via `tracing` and the
//! wire carries the fixed error message.
//!
//! ```
//! use beacon_action::{CallConfig, make_action};
//! use serde_json::{Value, json};
//!
//! let config = CallConfig::default().with_success_key("users");
//! let action = make_action(
//!     Some(|_args: Vec<Value>| async { Ok::<_, String>(json!({"data": {"payload": []}})) }),
//!     config,
//! )
//! .unwrap();
//! # let _ = action;
//! ```

pub mod path;

use std::fmt::Display;
use std::future::Future;

use serde_json::Value;

pub use beacon_types::{DEFAULT_ERROR_MESSAGE, Notification, Outcome};

/// Naming, extraction, and argument configuration for one adapted call.
///
/// Built fresh per invocation and consumed by it. Defaults match the
/// conventional three-phase names:
///
/// | Field | Default |
/// |-------|---------|
/// | `start_type` | `"start"` |
/// | `success_type` | `"success"` |
/// | `error_type` | `"error"` |
/// | `success_key` | `"data"` |
/// | `response_path` | `"data.payload"` |
/// | `args` | `[]` |
#[derive(Debug, Clone)]
pub struct CallConfig {
    start_type: String,
    success_type: String,
    error_type: String,
    success_key: String,
    response_path: String,
    args: Vec<Value>,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            start_type: "start".to_owned(),
            success_type: "success".to_owned(),
            error_type: "error".to_owned(),
            success_key: "data".to_owned(),
            response_path: "data.payload".to_owned(),
            args: Vec::new(),
        }
    }
}

impl CallConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification type dispatched before the call is issued.
    #[must_use]
    pub fn with_start_type(mut self, name: impl Into<String>) -> Self {
        self.start_type = name.into();
        self
    }

    /// Notification type dispatched when the call resolves.
    #[must_use]
    pub fn with_success_type(mut self, name: impl Into<String>) -> Self {
        self.success_type = name.into();
        self
    }

    /// Notification type dispatched when the call fails.
    #[must_use]
    pub fn with_error_type(mut self, name: impl Into<String>) -> Self {
        self.error_type = name.into();
        self
    }

    /// Field the extracted value is stored under in the success record.
    #[must_use]
    pub fn with_success_key(mut self, key: impl Into<String>) -> Self {
        self.success_key = key.into();
        self
    }

    /// Dotted path into the resolved response where the payload lives.
    #[must_use]
    pub fn with_response_path(mut self, path: impl Into<String>) -> Self {
        self.response_path = path.into();
        self
    }

    /// Ordered positional arguments forwarded to the collaborator.
    #[must_use]
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// No transport collaborator was supplied to [`make_action`].
    #[error("no api service is provided")]
    MissingApiService,
}

/// Validate the collaborator's presence and bundle it into an [`Action`].
///
/// Returns [`ActionError::MissingApiService`] when `api_call` is `None` -
/// synchronously, without dispatching anything.
pub fn make_action<C>(api_call: Option<C>, config: CallConfig) -> Result<Action<C>, ActionError> {
    let Some(call) = api_call else {
        return Err(ActionError::MissingApiService);
    };
    Ok(Action { call, config })
}

/// One adapted call, ready to be driven with a dispatch callback.
///
/// Invocations are independent: each action owns its collaborator, arguments,
/// and naming, so concurrent runs share no state.
#[derive(Debug)]
#[must_use = "an action dispatches nothing until it is run"]
pub struct Action<C> {
    call: C,
    config: CallConfig,
}

impl<C> Action<C> {
    /// Drive the call, announcing each lifecycle moment through `dispatch`.
    ///
    /// The start notification fires before the collaborator future is
    /// created. On resolution the value at the configured response path is
    /// extracted (missing path yields `null`) and dispatched under the
    /// success key; on failure the reason is logged and the fixed error
    /// notification is dispatched. Resolves to `()` after the terminal
    /// dispatch - the adapter never re-raises.
    pub async fn run<Fut, E, D>(self, mut dispatch: D)
    where
        C: FnOnce(Vec<Value>) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
        E: Display,
        D: FnMut(Notification),
    {
        let Self { call, config } = self;
        let CallConfig {
            start_type,
            success_type,
            error_type,
            success_key,
            response_path,
            args,
        } = config;

        tracing::debug!(start = %start_type, success = %success_type, error = %error_type, "adapted call starting");
        dispatch(Notification::start(start_type));

        match call(args).await {
            Ok(response) => {
                let value = path::lookup(&response, &response_path)
                    .cloned()
                    .unwrap_or(Value::Null);
                dispatch(Notification::success(success_type, success_key, value));
            }
            Err(error) => {
                tracing::warn!(%error, "adapted call failed");
                dispatch(Notification::error(error_type));
            }
        }
    }
}
