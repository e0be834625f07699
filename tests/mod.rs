//! Workspace-level tests exercising the foundation crates together.

#[cfg(test)]
mod backends;
