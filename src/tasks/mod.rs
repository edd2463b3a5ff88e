pub mod run_recrystallization;
