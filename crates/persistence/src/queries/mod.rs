// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per league table.
//!
//! Every function is generated twice by `backend_fn!` (`_sqlite` and
//! `_mysql`); the `Persistence` adapter in `lib.rs` picks one per call.

pub mod games;
pub mod players;
pub mod statistics;
pub mod teams;
