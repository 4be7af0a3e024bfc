/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::Value;

/// Read access to the `{ "ok": ..., "result": ... }` wrapper the API puts
/// around every response body.
pub trait Envelope {
    /// True unless `ok` is missing, `null` or `false`
    fn is_ok(&self) -> bool;

    /// The endpoint specific payload, if there is one
    fn result(&self) -> Option<&Value>;
}

impl Envelope for Value {
    fn is_ok(&self) -> bool {
        !matches!(self.get("ok"), None | Some(Value::Null) | Some(Value::Bool(false)))
    }

    fn result(&self) -> Option<&Value> {
        self.get("result")
    }
}
