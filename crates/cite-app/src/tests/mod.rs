mod command_tests;
mod support;
