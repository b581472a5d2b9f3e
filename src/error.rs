// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("user {0} not found")]
    UserNotFound(i64),

    /// A persisted amount column that does not parse as a decimal.
    #[error("invalid amount '{value}' in {table}")]
    InvalidAmount { table: &'static str, value: String },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error(transparent)]
    Store(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
