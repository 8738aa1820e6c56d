// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod backup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod kubernetes;
pub mod patch;
pub mod schemas;

#[cfg(test)]
pub mod test_utils;
