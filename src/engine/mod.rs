// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod balances;
pub mod budgets;
pub mod cards;
pub mod context;
pub mod goals;
pub mod spending;
pub mod summary;
pub mod window;
