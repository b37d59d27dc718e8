pub mod email_builder;
