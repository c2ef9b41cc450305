//! Business logic orchestration between the CLI and the validator.

pub mod submission;

#[cfg(test)]
mod test;
