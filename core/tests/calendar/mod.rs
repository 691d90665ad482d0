// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `Minical` facade and its view-state sessions.

mod events;
mod view_state;
