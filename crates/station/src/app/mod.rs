pub(crate) mod bootstrap;
pub(crate) mod commands;
pub(crate) mod loop_runner;
pub(crate) mod sim;
