//! Workspace-level integration test harness for the complexity primitives.
