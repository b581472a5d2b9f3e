// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod category;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
