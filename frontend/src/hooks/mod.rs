pub mod use_scheduler;
