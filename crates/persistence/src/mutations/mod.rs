// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations, one module per league table.
//!
//! Mutations write already-validated domain entities. Constraint
//! violations raised by the database surface as `PersistenceError`
//! variants; they are never retried.

pub mod games;
pub mod players;
pub mod statistics;
pub mod teams;
