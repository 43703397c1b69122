// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Floret crates. See the `examples/` directory.
